//! Information page for the active target

use crate::assets::FigureStore;
use crate::content::{Block, ContentEntry, ContentRegistry, DescriptiveContent, Span, SpanStyle};
use egui::RichText;
use std::rc::Rc;

/// Renders the descriptive content registered for a target id
///
/// Output depends only on the id passed in. Ids without registered content
/// render nothing.
#[derive(Clone)]
pub struct InfoPresenter {
    registry: Rc<ContentRegistry>,
}

impl InfoPresenter {
    /// Share of the available width used by figures
    const FIGURE_WIDTH_FRACTION: f32 = 0.95;

    pub fn new(registry: Rc<ContentRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn content_for(&self, id: &str) -> ContentEntry<'_> {
        self.registry.lookup(id)
    }

    /// Plain-text page for `id`, empty when nothing is registered
    pub fn plain_text(&self, id: &str) -> String {
        match self.content_for(id) {
            ContentEntry::Registered(content) => content.to_plain_text(),
            ContentEntry::Absent => String::new(),
        }
    }

    /// Render the page for `id`. Returns false when there was nothing to show.
    pub fn show(&self, ui: &mut egui::Ui, id: &str, figures: &mut FigureStore) -> bool {
        match self.content_for(id) {
            ContentEntry::Registered(content) => {
                show_content(ui, content, figures);
                true
            }
            ContentEntry::Absent => false,
        }
    }
}

fn show_content(ui: &mut egui::Ui, content: &DescriptiveContent, figures: &mut FigureStore) {
    ui.heading(RichText::new(&content.title).italics());
    ui.add_space(8.0);

    for block in &content.blocks {
        match block {
            Block::Paragraph(spans) => show_spans(ui, spans),
            Block::Heading(text) => {
                ui.add_space(4.0);
                ui.label(RichText::new(text.to_uppercase()).strong().size(18.0));
            }
            Block::Figure { asset, caption } => {
                if let Some(texture) = figures.texture(ui.ctx(), asset) {
                    let width = ui.available_width() * InfoPresenter::FIGURE_WIDTH_FRACTION;
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Image::new(texture).max_width(width));
                    });
                }
                ui.vertical_centered(|ui| show_spans(ui, caption));
            }
            Block::Contacts { intro, emails } => {
                ui.label(intro);
                ui.horizontal_wrapped(|ui| {
                    for (i, email) in emails.iter().enumerate() {
                        if i > 0 {
                            ui.label("or");
                        }
                        ui.hyperlink_to(email, format!("mailto:{email}"));
                    }
                });
            }
        }
        ui.add_space(8.0);
    }
}

fn show_spans(ui: &mut egui::Ui, spans: &[Span]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            match span.style {
                SpanStyle::Plain => ui.label(&span.text),
                SpanStyle::Italic => ui.label(RichText::new(&span.text).italics()),
                SpanStyle::Email => ui.hyperlink_to(&span.text, format!("mailto:{}", span.text)),
            };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> InfoPresenter {
        InfoPresenter::new(Rc::new(ContentRegistry::builtin()))
    }

    fn render(presenter: &InfoPresenter, id: &str) -> bool {
        let ctx = egui::Context::default();
        let mut figures = FigureStore::empty();
        let mut shown = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                shown = presenter.show(ui, id, &mut figures);
            });
        });
        shown
    }

    #[test]
    fn test_registered_content_is_stable() {
        let presenter = presenter();
        let first = presenter.plain_text("Vibrio_cholerae");
        assert!(!first.is_empty());

        // Interleave other lookups and renders; output must not change
        presenter.plain_text("Salmonella_enterica");
        render(&presenter, "Campylobacter_jejuni");
        render(&presenter, "Vibrio_cholerae");
        assert_eq!(presenter.plain_text("Vibrio_cholerae"), first);
    }

    #[test]
    fn test_absent_content_renders_nothing() {
        let presenter = presenter();
        assert_eq!(presenter.plain_text("Salmonella_enterica"), "");
        assert_eq!(presenter.plain_text("not a target"), "");
        assert!(presenter.content_for("Listeria_monocytogenes").is_absent());
        assert!(!render(&presenter, "Salmonella_enterica"));
    }

    #[test]
    fn test_renders_vibrio_without_figures() {
        assert!(render(&presenter(), "Vibrio_cholerae"));
    }

    #[test]
    fn test_renders_email_spans() {
        let mut registry = ContentRegistry::new();
        registry.insert(
            "Salmonella_enterica".into(),
            DescriptiveContent {
                title: "Salmonella enterica".to_string(),
                blocks: vec![Block::Paragraph(vec![
                    Span::plain("Contact "),
                    Span::email("nipmcsc@gmail.com"),
                ])],
            },
        );
        let presenter = InfoPresenter::new(Rc::new(registry));
        assert!(render(&presenter, "Salmonella_enterica"));
        assert!(presenter
            .plain_text("Salmonella_enterica")
            .contains("Contact nipmcsc@gmail.com"));
    }
}
