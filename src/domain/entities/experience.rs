use serde::{Deserialize, Serialize};
use validator::Validate;

/// One work or teaching engagement.
///
/// `when` is a free-form date range ("June 2021 - now"), not a parsed date:
/// the rendering layer displays it verbatim. `stack` order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExperienceEntry {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,

    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,

    #[validate(length(min = 1, message = "Date range cannot be empty"))]
    pub when: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    pub stack: Vec<String>,
}

impl ExperienceEntry {
    /// Stack entries are expected to be unique within an entry; returns the
    /// repeated names so the store can flag them without failing the load.
    pub fn repeated_stack_entries(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.stack
            .iter()
            .filter(|tool| !seen.insert(tool.as_str()))
            .map(String::as_str)
            .collect()
    }
}
