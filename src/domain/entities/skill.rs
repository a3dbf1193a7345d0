use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named grouping of related tools and technologies.
///
/// `title` must be unique across the whole `skills` collection; `tools` may
/// be empty and its order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SkillCategory {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    pub tools: Vec<String>,
}
