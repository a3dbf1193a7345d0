//! The authored résumé records. Edit here to update the résumé; the store
//! validates the collections on load.

use crate::entities::{ExperienceEntry, LanguageProficiency, SkillCategory};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Freelance software engineer".into(),
            company: "[self-employed]".into(),
            location: "Paris, France".into(),
            when: "June 2021 - now".into(),
            description: "Did frontend and backend development for SMBs.".into(),
            stack: owned(&["Golang", "TypeScript"]),
        },
        ExperienceEntry {
            title: "Backend software engineer".into(),
            company: "Canal+".into(),
            location: "Paris, France".into(),
            when: "March 2022 - October 2022".into(),
            description: "Built video streaming solutions (over DASH and HLS).".into(),
            stack: owned(&[
                "Golang",
                "Docker",
                "Kubernetes",
                "PostgreSQL",
                "MongoDB",
                "Bash",
                "CI/CD",
                "Gitlab CI",
                "Helm",
            ]),
        },
        ExperienceEntry {
            title: "Fullstack developer".into(),
            company: "Record Eye".into(),
            location: "Paris, France".into(),
            when: "February 2021 - now".into(),
            description: "Handled IT needs of an audiovisual production agency based in Paris."
                .into(),
            stack: owned(&[
                "SvelteKit",
                "Nuxt",
                "Typescript",
                "Google Cloud Storage",
                "CI/CD",
                "Vercel",
            ]),
        },
        ExperienceEntry {
            title: "Chief Operations Officer".into(),
            company: "Green Online".into(),
            location: "Amsterdam, Netherlands".into(),
            when: "September 2018 - May 2020".into(),
            description:
                "Managed the launch and operation of our website services in 8 European countries."
                    .into(),
            stack: owned(&["Ruby", "GCP"]),
        },
        ExperienceEntry {
            title: "Web development fundamentals teacher".into(),
            company: "Code Phenix / L'Ilot".into(),
            location: "Aubervilliers / Prison de Melun, France".into(),
            when: "January 2022 - now".into(),
            description: "Taught coding to (ex) prisoners.".into(),
            stack: owned(&["HTML", "CSS", "Accessibility (a11y)", "Technical SEO"]),
        },
        ExperienceEntry {
            title: "IT teacher".into(),
            company: "Mission Locale Rives de Seine".into(),
            location: "Rueil-Malmaison / Courbevoie, France".into(),
            when: "January 2022 - now".into(),
            description: "Initiated 16-25 years old to programming and computer science.".into(),
            stack: owned(&["HTML", "CSS", "JavaScript", "P5.js"]),
        },
    ]
}

pub(crate) fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Programming languages".into(),
            tools: owned(&["Golang", "JavaScript / Typescript"]),
        },
        SkillCategory {
            title: "Website development".into(),
            tools: owned(&[
                "HTML and A11y",
                "CSS",
                "Svelte (SvelteKit)",
                "Vue (Nuxt)",
                "React (Next)",
                "Technical SEO",
            ]),
        },
        SkillCategory {
            title: "DevOps".into(),
            tools: owned(&[
                "CI/CD",
                "Bash",
                "Ansible",
                "Gitlab CI / Github Actions",
                "Docker / Podman",
                "Kubernetes",
            ]),
        },
        SkillCategory {
            title: "Database".into(),
            tools: owned(&["PostgreSQL", "MongoDB", "SQLite"]),
        },
        SkillCategory {
            title: "CMS".into(),
            tools: owned(&["Wordpress", "Strapi", "Pocketbase"]),
        },
        SkillCategory {
            title: "Hosting".into(),
            tools: owned(&["GCP", "AWS", "Vercel", "Scaleway"]),
        },
        SkillCategory {
            title: "OS".into(),
            tools: owned(&["Linux", "OpenBSD"]),
        },
        SkillCategory {
            title: "Creative coding".into(),
            tools: owned(&["P5.js", "Three.js", "Sonic Pi"]),
        },
    ]
}

pub(crate) fn languages() -> Vec<LanguageProficiency> {
    vec![
        LanguageProficiency {
            name: "French".into(),
            flag: "🇫🇷".into(),
            level: "Native".into(),
        },
        LanguageProficiency {
            name: "English".into(),
            flag: "🇬🇧".into(),
            level: "Bilingual".into(),
        },
        LanguageProficiency {
            name: "Spanish".into(),
            flag: "🇪🇸".into(),
            level: "Working proficiency".into(),
        },
        LanguageProficiency {
            name: "Dutch".into(),
            flag: "🇳🇱".into(),
            level: "Basic understanding".into(),
        },
    ]
}
