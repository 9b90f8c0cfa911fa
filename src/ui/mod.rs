//! UI widgets: species control, information page and theming

pub mod info_presenter;
pub mod selection_control;
pub mod theme;

pub use info_presenter::InfoPresenter;
pub use selection_control::{RejectReason, SelectOutcome, SelectionControl};
pub use theme::ThemeVariant;
