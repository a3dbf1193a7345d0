use resume_content::entities::{ExperienceEntry, LanguageProficiency, SkillCategory};

pub fn experience(title: &str) -> ExperienceEntry {
    ExperienceEntry {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Paris, France".to_string(),
        when: "January 2020 - now".to_string(),
        description: "Did things.".to_string(),
        stack: vec!["Rust".to_string()],
    }
}

pub fn category(title: &str, tools: &[&str]) -> SkillCategory {
    SkillCategory {
        title: title.to_string(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn language(name: &str) -> LanguageProficiency {
    LanguageProficiency {
        name: name.to_string(),
        flag: "🇫🇷".to_string(),
        level: "Native".to_string(),
    }
}
