//! Host application: wires the species control, the shared selection and the
//! information page into one egui frame

use crate::assets::{Assets, FigureStore};
use crate::catalog::TargetCatalog;
use crate::config::PortalConfig;
use crate::content::ContentRegistry;
use crate::selection::SelectionReader;
use crate::ui::{InfoPresenter, SelectOutcome, SelectionControl};
use anyhow::Result;
use std::rc::Rc;

/// Window and page title
pub const TITLE: &str = "cgMLST@Taiwan";

/// Portal front page
pub struct PortalApp {
    control: SelectionControl,
    selection: SelectionReader,
    presenter: InfoPresenter,
    figures: FigureStore,
    /// Host context flag: a profiling job is running
    busy: bool,
    show_host_controls: bool,
    /// Last selection revision that was logged
    seen_revision: u64,
}

impl PortalApp {
    /// Build the app from configuration
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let catalog = config.build_catalog()?;
        let registry = config.build_registry()?;

        let figures = match Assets::new(config.assets.dir.as_deref()) {
            Ok(assets) => FigureStore::new(Some(assets)),
            Err(e) => {
                log::warn!("Figures disabled: {:#}", e);
                FigureStore::empty()
            }
        };

        let mut app = Self::from_parts(catalog, registry, figures);
        app.show_host_controls = config.debug.show_host_controls;
        Ok(app)
    }

    pub fn from_parts(
        catalog: TargetCatalog,
        registry: ContentRegistry,
        figures: FigureStore,
    ) -> Self {
        let (control, selection) = SelectionControl::new(catalog);
        log::info!("Active species: {}", selection.active());

        Self {
            control,
            seen_revision: selection.revision(),
            selection,
            presenter: InfoPresenter::new(Rc::new(registry)),
            figures,
            busy: false,
            show_host_controls: false,
        }
    }

    /// Select a species programmatically (same rules as the drop-down)
    pub fn select(&mut self, id: &str) -> SelectOutcome {
        self.control.select_target(id)
    }

    /// Mark a profiling job as running; disables the species control
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.control.set_disabled(busy);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Read handle for analysis actions that need the active species
    pub fn selection(&self) -> SelectionReader {
        self.selection.clone()
    }

    pub fn presenter(&self) -> &InfoPresenter {
        &self.presenter
    }

    /// Draw one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("portal_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(TITLE);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                self.control.show(ui);

                if self.show_host_controls {
                    ui.add_space(16.0);
                    let mut busy = self.busy;
                    if ui.checkbox(&mut busy, "Profiling job running").changed() {
                        self.set_busy(busy);
                    }
                }
            });
            ui.add_space(6.0);
        });

        if self.selection.revision() != self.seen_revision {
            self.seen_revision = self.selection.revision();
            log::info!("Active species: {}", self.selection.active());
        }

        let active = self.selection.active();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.presenter.show(ui, active.as_str(), &mut self.figures);
                });
        });
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Open the portal window (native)
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native(config: &PortalConfig, app: PortalApp) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([
                config.ui.window_width as f32,
                config.ui.window_height as f32,
            ]),
        ..Default::default()
    };

    let theme = config.ui.theme;
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            theme.apply_to_ctx(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run portal: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RejectReason;

    fn app() -> PortalApp {
        PortalApp::from_parts(
            TargetCatalog::builtin(),
            ContentRegistry::builtin(),
            FigureStore::empty(),
        )
    }

    fn frame(app: &mut PortalApp, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
    }

    #[test]
    fn test_busy_disables_selection() {
        let mut app = app();
        app.set_busy(true);
        assert!(app.is_busy());
        assert_eq!(
            app.select("Salmonella_enterica"),
            SelectOutcome::Rejected(RejectReason::ControlDisabled)
        );

        app.set_busy(false);
        assert_eq!(app.select("Salmonella_enterica"), SelectOutcome::Accepted);
        assert_eq!(app.selection().active(), "Salmonella_enterica");
    }

    #[test]
    fn test_frames_track_selection() {
        let mut app = app();
        let ctx = egui::Context::default();

        frame(&mut app, &ctx);
        assert_eq!(app.seen_revision, 0);

        app.select("Salmonella_enterica");
        frame(&mut app, &ctx);
        assert_eq!(app.seen_revision, 1);

        app.show_host_controls = true;
        app.set_busy(true);
        frame(&mut app, &ctx);
        assert_eq!(app.selection().active(), "Salmonella_enterica");
    }

    #[test]
    fn test_new_from_default_config() {
        let app = PortalApp::new(&PortalConfig::default()).unwrap();
        assert_eq!(app.selection().active(), "Vibrio_cholerae");
        assert!(!app.is_busy());
    }
}
