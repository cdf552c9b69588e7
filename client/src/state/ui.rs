//! App-wide presentation state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so the header can
//! own the theme toggle without reaching into any page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided via context from the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
