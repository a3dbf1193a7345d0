pub mod experience;
pub mod language;
pub mod skill;

pub use experience::ExperienceEntry;
pub use language::LanguageProficiency;
pub use skill::SkillCategory;
