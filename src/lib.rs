mod content;
mod domain;
pub mod errors;
pub mod store;

pub use domain::entities;
pub use domain::entities::{ExperienceEntry, LanguageProficiency, SkillCategory};
pub use store::{content, experiences, languages, skills, ContentRoot};
