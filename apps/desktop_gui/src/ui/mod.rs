//! UI layer: app shell, variant picker, and molecular-effects panel.

pub mod app;
pub mod effects;
pub mod picker;

pub use app::PharmaCodeApp;

use shared::domain::VariantName;

/// What a view asks the controller to do; views never mutate state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    SelectVariant(VariantName),
    ClearError,
}
