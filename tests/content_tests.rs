mod test_entries;

use std::collections::HashSet;

use test_entries::*;

use resume_content::errors::ContentError;
use resume_content::{content, experiences, languages, skills, ContentRoot};

#[test]
fn content_has_expected_collection_sizes() {
    let root = content();

    assert_eq!(root.experiences.len(), 6);
    assert_eq!(root.skills.len(), 8);
    assert_eq!(root.languages.len(), 4);
}

#[test]
fn first_experience_is_the_self_employed_role() {
    assert_eq!(experiences()[0].company, "[self-employed]");
}

#[test]
fn experiences_keep_their_declared_order() {
    let titles: Vec<&str> = experiences().iter().map(|e| e.title.as_str()).collect();

    assert_eq!(
        titles,
        [
            "Freelance software engineer",
            "Backend software engineer",
            "Fullstack developer",
            "Chief Operations Officer",
            "Web development fundamentals teacher",
            "IT teacher",
        ]
    );
}

#[test]
fn database_category_lists_tools_in_declared_order() {
    let database = skills()
        .iter()
        .find(|c| c.title == "Database")
        .expect("Database category missing");

    assert_eq!(database.tools, ["PostgreSQL", "MongoDB", "SQLite"]);
}

#[test]
fn french_is_listed_as_native() {
    let french = languages()
        .iter()
        .find(|l| l.name == "French")
        .expect("French missing");

    assert_eq!(french.level, "Native");
    assert_eq!(french.flag, "🇫🇷");
}

#[test]
fn every_required_field_is_non_empty() {
    let root = content();

    for e in &root.experiences {
        assert!(!e.title.is_empty());
        assert!(!e.company.is_empty());
        assert!(!e.location.is_empty());
        assert!(!e.when.is_empty());
        assert!(!e.description.is_empty());
        assert!(e.stack.iter().all(|tool| !tool.is_empty()));
    }
    for c in &root.skills {
        assert!(!c.title.is_empty());
        assert!(c.tools.iter().all(|tool| !tool.is_empty()));
    }
    for l in &root.languages {
        assert!(!l.name.is_empty());
        assert!(!l.flag.is_empty());
        assert!(!l.level.is_empty());
    }
}

#[test]
fn skill_titles_and_language_names_are_unique() {
    let titles: HashSet<&str> = skills().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles.len(), skills().len());

    let names: HashSet<&str> = languages().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names.len(), languages().len());
}

#[test]
fn repeated_access_returns_equal_values() {
    assert_eq!(content(), content());

    let first = ContentRoot::load().expect("load failed");
    let second = ContentRoot::load().expect("load failed");
    assert_eq!(first, second);
    assert_eq!(&first, content());
}

#[test]
fn duplicate_skill_category_title_is_rejected() {
    let result = ContentRoot::new(
        vec![],
        vec![
            category("DevOps", &["Docker"]),
            category("DevOps", &["Kubernetes"]),
        ],
        vec![],
    );

    assert_eq!(
        result.unwrap_err(),
        ContentError::DuplicateKey {
            collection: "skills",
            key: "DevOps".to_string(),
        }
    );
}

#[test]
fn duplicate_language_name_is_rejected() {
    let result = ContentRoot::new(
        vec![],
        vec![],
        vec![language("French"), language("French")],
    );

    assert_eq!(
        result.unwrap_err(),
        ContentError::DuplicateKey {
            collection: "languages",
            key: "French".to_string(),
        }
    );
}

#[test]
fn empty_experience_title_is_rejected() {
    let result = ContentRoot::new(vec![experience("")], vec![], vec![]);

    match result.unwrap_err() {
        ContentError::MissingField { entry, errors } => {
            assert!(entry.starts_with("experience"));
            assert_eq!(errors[0].field, "title");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn empty_language_flag_is_rejected() {
    let mut french = language("French");
    french.flag.clear();

    let result = ContentRoot::new(vec![], vec![], vec![french]);

    match result.unwrap_err() {
        ContentError::MissingField { entry, errors } => {
            assert_eq!(entry, "language \"French\"");
            assert_eq!(errors[0].field, "flag");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn root_serializes_with_exactly_three_named_fields() {
    let json = serde_json::to_value(content()).expect("serialization failed");
    let object = json.as_object().expect("root is not an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["experiences", "languages", "skills"]);

    let entry = &json["experiences"][0];
    for field in ["title", "company", "location", "when", "description", "stack"] {
        assert!(!entry[field].is_null(), "missing field {field}");
    }
}
