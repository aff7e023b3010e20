//! Constants used throughout the application
//!
//! This module centralizes UI text, sample data and layout values.

// Screen chrome
pub const APP_TITLE: &str = "🌠 Wish Calendar";
pub const NAV_BACK_LABEL: &str = "‹ Back";
pub const NAV_ADD_LABEL: &str = "+ Add";
pub const EMPTY_LIST_MESSAGE: &str = "No wishes yet. Press 'a' to add one.";
pub const PLACEHOLDER_TITLE: &str = "—";

// Success Messages
pub const SUCCESS_EVENT_CREATED: &str = "✅ Wish added";
pub const SUCCESS_EVENT_DELETED: &str = "✅ Wish deleted";

// Error Messages
pub const ERROR_EVENT_CREATE_FAILED: &str = "❌ Failed to add wish";
pub const ERROR_EVENT_DELETE_FAILED: &str = "❌ Failed to delete wish";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Sample wishes shown on first launch
pub const SAMPLE_EVENTS: &[(&str, &str, &str, &str)] = &[
    (
        "Fly to Maldives",
        "my wish is to have a great vacation on a coast",
        "Start date",
        "End Date",
    ),
    ("Learn guitar", "three chords and the truth", "", ""),
];

// UI Layout Constants
/// Height of the navigation bar, borders included
pub const NAV_BAR_HEIGHT: u16 = 3;
/// Minimum interval between ticks in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 16;
/// Maximum interval between ticks in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default interval between ticks in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
/// Longest title shown in the delete confirmation before truncation
pub const DELETE_PREVIEW_MAX_CHARS: usize = 40;
