#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the add-bookmark dialog.
///
/// Plain boolean visibility; the dialog carries no bookmark data of its
/// own.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub modal_open: bool,
}
