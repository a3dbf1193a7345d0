use serde::{Deserialize, Serialize};
use validator::Validate;

/// A spoken language with a self-rated fluency level.
///
/// `level` stays a free-form descriptor ("Native", "Working proficiency")
/// rather than a closed enum, matching what renderers display verbatim.
/// `name` must be unique across the `languages` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LanguageProficiency {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Flag cannot be empty"))]
    pub flag: String,

    #[validate(length(min = 1, message = "Level cannot be empty"))]
    pub level: String,
}
