//! Species selection control
//!
//! Owns the target catalog, keeps the locally selected id and is the only
//! writer of the shared selection cell.

use crate::catalog::{Target, TargetCatalog, TargetId};
use crate::selection::{self, SelectionReader, SelectionWriter};

/// Why a selection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnknownTarget,
    TargetDisabled,
    /// The host disabled the whole control (e.g. a profiling job is running)
    ControlDisabled,
}

/// Result of [`SelectionControl::select_target`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Local and shared state now hold the requested id
    Accepted,
    /// The requested id was already active
    Unchanged,
    Rejected(RejectReason),
}

impl SelectOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Single-choice "Species" control
pub struct SelectionControl {
    catalog: TargetCatalog,
    selected: TargetId,
    writer: SelectionWriter,
    disabled: bool,
}

impl SelectionControl {
    /// Minimum width of the drop-down in points
    const MIN_WIDTH: f32 = 240.0;

    /// Create the control together with the shared selection cell, both
    /// seeded with the catalog default
    pub fn new(catalog: TargetCatalog) -> (Self, SelectionReader) {
        let selected = catalog.default_target().clone();
        let (writer, reader) = selection::channel(selected.clone());

        log::debug!("Species control initialized with {}", selected);

        (
            Self {
                catalog,
                selected,
                writer,
                disabled: false,
            },
            reader,
        )
    }

    /// Make `id` the active target if it is selectable and the control is enabled
    pub fn select_target(&mut self, id: &str) -> SelectOutcome {
        if self.disabled {
            log::debug!("Ignoring selection of {}: control disabled", id);
            return SelectOutcome::Rejected(RejectReason::ControlDisabled);
        }

        let Some(target) = self.catalog.get(id) else {
            log::debug!("Ignoring selection of unknown target {}", id);
            return SelectOutcome::Rejected(RejectReason::UnknownTarget);
        };

        if !target.is_selectable() {
            log::debug!("Ignoring selection of disabled target {}", id);
            return SelectOutcome::Rejected(RejectReason::TargetDisabled);
        }

        if self.selected == id {
            return SelectOutcome::Unchanged;
        }

        self.selected = target.id.clone();
        self.writer.publish(self.selected.clone());
        SelectOutcome::Accepted
    }

    /// Disable or re-enable all interaction; the selection is kept
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            log::debug!(
                "Species control {}",
                if disabled { "disabled" } else { "enabled" }
            );
        }
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Locally selected id (always equal to the shared value)
    pub fn selected(&self) -> &TargetId {
        &self.selected
    }

    pub fn selected_target(&self) -> Option<&Target> {
        self.catalog.get(self.selected.as_str())
    }

    pub fn catalog(&self) -> &TargetCatalog {
        &self.catalog
    }

    /// Another read handle on the shared selection
    pub fn reader(&self) -> SelectionReader {
        self.writer.reader()
    }

    /// Render the control. Returns the id accepted this frame, if any.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<TargetId> {
        self.render(ui).accepted
    }

    fn render(&mut self, ui: &mut egui::Ui) -> Rendered {
        let mut picked: Option<TargetId> = None;
        let mut rows = Vec::new();
        let selected_name = self
            .selected_target()
            .map(|t| t.display_name.as_str())
            .unwrap_or(self.selected.as_str())
            .to_string();

        let combo = ui
            .add_enabled_ui(!self.disabled, |ui| {
                ui.vertical(|ui| {
                    ui.label("Species *");
                    let combo = egui::ComboBox::from_id_salt("species_select")
                        .selected_text(egui::RichText::new(selected_name).italics())
                        .width(Self::MIN_WIDTH)
                        .show_ui(ui, |ui| {
                            for target in self.catalog.iter() {
                                let checked = self.selected == target.id;
                                let label = egui::RichText::new(&target.display_name).italics();
                                // Disabled organisms are listed but cannot be clicked
                                let response = ui
                                    .add_enabled_ui(target.is_selectable(), |ui| {
                                        ui.selectable_label(checked, label)
                                    })
                                    .inner;
                                if response.clicked() {
                                    picked = Some(target.id.clone());
                                }
                                rows.push((target.id.clone(), response.rect));
                            }
                        });
                    ui.small("Required");
                    combo.response.rect
                })
                .inner
            })
            .inner;

        let accepted = picked.filter(|id| self.select_target(id.as_str()).is_accepted());
        Rendered {
            accepted,
            combo,
            rows,
        }
    }
}

/// What one frame of [`SelectionControl::render`] laid out
#[cfg_attr(not(test), allow(dead_code))]
struct Rendered {
    accepted: Option<TargetId>,
    combo: egui::Rect,
    /// Popup rows, empty while the popup is closed
    rows: Vec<(TargetId, egui::Rect)>,
}
