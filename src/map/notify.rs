pub const NOT_FOUND_MESSAGE: &str = "Location not found. Please try a different search term.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error searching location. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Error,
}

/// A message the host must surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn not_found() -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn search_failed() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: SEARCH_ERROR_MESSAGE.to_string(),
        }
    }
}
