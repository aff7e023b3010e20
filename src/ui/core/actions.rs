use crate::entities::EventDraft;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextEvent,
    PreviousEvent,
    GoBack,
    AddNew,

    // Event operations
    RequestDelete(usize),
    ConfirmDelete(usize),
    CreateEvent(EventDraft),
    ShowEventDetails(usize),

    // Re-pull the list from the data owner
    RefreshData,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    EventCreation,
    DeleteConfirmation { index: usize, title: String },
    Error(String),
    Info(String),
    Help,
    Logs,
}
