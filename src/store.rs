use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;
use validator::Validate;

use crate::entities::{ExperienceEntry, LanguageProficiency, SkillCategory};
use crate::errors::{missing_field, ContentError};

/// The complete résumé: three independent ordered collections under one
/// root. Collection order is the authored order and carries no further
/// semantics; renderers must not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRoot {
    pub experiences: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub languages: Vec<LanguageProficiency>,
}

impl ContentRoot {
    /// Validates and assembles a root value. Every required string field
    /// must be non-empty, skill category titles must be unique, and
    /// language names must be unique. Fails on the first violation; there
    /// is no meaningful partial result.
    pub fn new(
        experiences: Vec<ExperienceEntry>,
        skills: Vec<SkillCategory>,
        languages: Vec<LanguageProficiency>,
    ) -> Result<Self, ContentError> {
        for entry in &experiences {
            entry
                .validate()
                .map_err(|e| missing_field(format!("experience {:?}", entry.title), e))?;

            let repeated = entry.repeated_stack_entries();
            if !repeated.is_empty() {
                tracing::warn!(
                    "experience {:?} lists stack entries more than once: {}",
                    entry.title,
                    repeated.join(", ")
                );
            }
        }

        let mut titles = HashSet::new();
        for category in &skills {
            category
                .validate()
                .map_err(|e| missing_field(format!("skill category {:?}", category.title), e))?;

            if !titles.insert(category.title.as_str()) {
                return Err(ContentError::DuplicateKey {
                    collection: "skills",
                    key: category.title.clone(),
                });
            }
        }

        let mut names = HashSet::new();
        for language in &languages {
            language
                .validate()
                .map_err(|e| missing_field(format!("language {:?}", language.name), e))?;

            if !names.insert(language.name.as_str()) {
                return Err(ContentError::DuplicateKey {
                    collection: "languages",
                    key: language.name.clone(),
                });
            }
        }

        Ok(ContentRoot {
            experiences,
            skills,
            languages,
        })
    }

    /// Builds the authored résumé records and validates them. Deterministic:
    /// two loads return structurally equal values.
    pub fn load() -> Result<Self, ContentError> {
        let root = Self::new(
            crate::content::experiences(),
            crate::content::skills(),
            crate::content::languages(),
        )?;

        tracing::info!(
            "resume content loaded: {} experiences, {} skill categories, {} languages",
            root.experiences.len(),
            root.skills.len(),
            root.languages.len()
        );

        Ok(root)
    }
}

// Constructed on first access and never mutated afterwards, so it can be
// shared across concurrent readers without locking. The records are compiled
// in; a validation failure here is a fatal configuration error.
static CONTENT: Lazy<ContentRoot> = Lazy::new(|| match ContentRoot::load() {
    Ok(root) => root,
    Err(e) => panic!("resume content failed validation: {e}"),
});

/// Returns the complete, immutable content root.
pub fn content() -> &'static ContentRoot {
    &CONTENT
}

/// Work experience entries, most relevant first (not strictly chronological).
pub fn experiences() -> &'static [ExperienceEntry] {
    &CONTENT.experiences
}

/// Skill categories in display order.
pub fn skills() -> &'static [SkillCategory] {
    &CONTENT.skills
}

/// Spoken languages in display order.
pub fn languages() -> &'static [LanguageProficiency] {
    &CONTENT.languages
}
