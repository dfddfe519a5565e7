//! Table-driven resolution of project metadata
//!
//! Each text field is one row in `TEXT_FIELDS`: where it comes from in an
//! existing descriptor, how to ask for it, and how to validate the answer.
//! Seeded values are reported and never prompted for.

use super::{is_kebab_case, License, ProjectMetadata};
use crate::manifest::{ManifestSeed, Repository};
use anyhow::Result;

/// Interactive prompt backend.
///
/// `status` and `warn` carry the informational console lines the resolver
/// emits along the way; they are not part of the resolution contract.
pub trait Prompt {
    fn input(&mut self, field: &TextField) -> Result<String>;
    fn pick_license(&mut self, choices: &[License], initial: &License) -> Result<License>;
    fn status(&mut self, line: &str) -> Result<()>;
    fn warn(&mut self, line: &str) -> Result<()>;
}

/// One prompt-or-default text field
pub struct TextField {
    /// Label used when reporting a value that was already set
    pub label: &'static str,

    /// Question asked when the field is unset
    pub question: &'static str,

    /// Pre-filled answer, for fields with a conventional default
    pub placeholder: Option<&'static str>,

    /// Answer validation, applied by the prompt backend
    pub validate: fn(&str) -> Result<(), &'static str>,

    seed: fn(&ManifestSeed) -> Option<&String>,
    apply: fn(&mut ProjectMetadata, String),
}

fn require_kebab_case(value: &str) -> Result<(), &'static str> {
    if is_kebab_case(value) {
        Ok(())
    } else {
        Err("Use a non-empty kebab-case name, like my-extension")
    }
}

fn require_non_empty(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("A value is required")
    } else {
        Ok(())
    }
}

fn seed_name(seed: &ManifestSeed) -> Option<&String> {
    seed.name.as_ref()
}

fn seed_description(seed: &ManifestSeed) -> Option<&String> {
    seed.description.as_ref()
}

fn seed_publisher(seed: &ManifestSeed) -> Option<&String> {
    seed.publisher.as_ref()
}

fn apply_name(metadata: &mut ProjectMetadata, value: String) {
    metadata.name = value;
}

fn apply_description(metadata: &mut ProjectMetadata, value: String) {
    metadata.description = value;
}

fn apply_publisher(metadata: &mut ProjectMetadata, value: String) {
    metadata.publisher = value;
}

/// The prompt-or-default fields, in resolution order
pub const TEXT_FIELDS: &[TextField] = &[
    TextField {
        label: "Extension name",
        question: "What should the name of the extension be (kebab-case)?",
        placeholder: None,
        validate: require_kebab_case,
        seed: seed_name,
        apply: apply_name,
    },
    TextField {
        label: "Description",
        question: "What does this extension do?",
        placeholder: None,
        validate: require_non_empty,
        seed: seed_description,
        apply: apply_description,
    },
    TextField {
        label: "Publisher",
        question: "What is your Sourcegraph organization or username?",
        placeholder: Some("SOURCEGRAPH_ORG_OR_USERNAME"),
        validate: require_non_empty,
        seed: seed_publisher,
        apply: apply_publisher,
    },
];

/// Resolve complete project metadata from the descriptor seed, the
/// version-control remote, and the prompt backend.
///
/// `probe_remote` is only consulted when the seed carries no repository;
/// its failure degrades to an unset field with a warning, never an abort.
pub fn resolve<P, F>(seed: ManifestSeed, probe_remote: F, prompt: &mut P) -> Result<ProjectMetadata>
where
    P: Prompt + ?Sized,
    F: FnOnce() -> Option<Repository>,
{
    let mut resolved = ProjectMetadata {
        name: String::new(),
        description: String::new(),
        publisher: String::new(),
        license: License::DEFAULT,
        repository: None,
    };

    resolved.repository = match seed.repository.clone() {
        Some(repository) => {
            prompt.status(&format!(
                "Extension {} repository url is \"{}\"",
                repository.kind, repository.url
            ))?;
            Some(repository)
        }
        None => {
            let probed = probe_remote();
            if probed.is_none() {
                prompt.warn(
                    "Unable to set the \"repository\" field in package.json as a git remote \
                     was not found. You should set this manually before publishing your extension.",
                )?;
            }
            probed
        }
    };

    for field in TEXT_FIELDS {
        match (field.seed)(&seed) {
            Some(value) => {
                prompt.status(&format!("{} is \"{}\"", field.label, value))?;
                (field.apply)(&mut resolved, value.clone());
            }
            None => {
                let answer = prompt.input(field)?;
                (field.apply)(&mut resolved, answer);
            }
        }
    }

    resolved.license = match seed.license.as_deref() {
        Some(value) => {
            let license = License::parse(value);
            prompt.status(&format!("License is \"{license}\""))?;
            license
        }
        None => prompt.pick_license(&License::PROMPT_CHOICES, &License::DEFAULT)?,
    };

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedPrompt {
        answers: VecDeque<&'static str>,
        license_choice: Option<License>,
        questions: Vec<&'static str>,
        statuses: Vec<String>,
        warnings: Vec<String>,
        license_prompted: bool,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn input(&mut self, field: &TextField) -> Result<String> {
            self.questions.push(field.question);
            let answer = self.answers.pop_front().expect("prompted with no answer left");
            (field.validate)(answer).map_err(|message| anyhow::anyhow!(message))?;
            Ok(answer.to_string())
        }

        fn pick_license(&mut self, choices: &[License], initial: &License) -> Result<License> {
            self.license_prompted = true;
            assert_eq!(choices, &License::PROMPT_CHOICES);
            Ok(self.license_choice.clone().unwrap_or_else(|| initial.clone()))
        }

        fn status(&mut self, line: &str) -> Result<()> {
            self.statuses.push(line.to_string());
            Ok(())
        }

        fn warn(&mut self, line: &str) -> Result<()> {
            self.warnings.push(line.to_string());
            Ok(())
        }
    }

    fn seed_from(json: &str) -> ManifestSeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_seed_prompts_for_everything() {
        let mut prompt = ScriptedPrompt::answering(&["my-ext", "Shows hovers", "alice"]);
        let metadata = resolve(ManifestSeed::default(), || None, &mut prompt).unwrap();

        assert_eq!(metadata.name, "my-ext");
        assert_eq!(metadata.description, "Shows hovers");
        assert_eq!(metadata.publisher, "alice");
        assert_eq!(metadata.license, License::Mit);
        assert!(metadata.repository.is_none());
        assert!(prompt.license_prompted);
        assert_eq!(prompt.questions.len(), 3);
        // Remote lookup failed, so the user is told to set the field manually
        assert_eq!(prompt.warnings.len(), 1);
    }

    #[test]
    fn test_seeded_name_is_reported_not_prompted() {
        let seed = seed_from(r#"{"name": "foo"}"#);
        let mut prompt = ScriptedPrompt::answering(&["Shows hovers", "alice"]);
        let metadata = resolve(seed, || None, &mut prompt).unwrap();

        assert_eq!(metadata.name, "foo");
        assert!(prompt
            .statuses
            .iter()
            .any(|line| line == "Extension name is \"foo\""));
        assert!(!prompt
            .questions
            .iter()
            .any(|q| q.contains("name of the extension")));
    }

    #[test]
    fn test_seeded_repository_skips_remote_probe() {
        let seed = seed_from(
            r#"{"name": "foo", "description": "d", "publisher": "p", "license": "MIT",
                "repository": {"type": "git", "url": "https://github.com/alice/foo"}}"#,
        );
        let mut prompt = ScriptedPrompt::default();
        let metadata = resolve(seed, || panic!("probe must not run"), &mut prompt).unwrap();

        let repository = metadata.repository.unwrap();
        assert_eq!(repository.url, "https://github.com/alice/foo");
        assert!(prompt
            .statuses
            .iter()
            .any(|line| line.starts_with("Extension git repository url is")));
        assert!(prompt.warnings.is_empty());
        assert!(!prompt.license_prompted);
    }

    #[test]
    fn test_remote_probe_fills_repository_without_warning() {
        let mut prompt = ScriptedPrompt::answering(&["my-ext", "Shows hovers", "alice"]);
        let probed = Repository {
            kind: "git".to_string(),
            url: "https://github.com/alice/my-ext.git".to_string(),
            directory: None,
        };
        let probe_result = probed.clone();
        let metadata = resolve(ManifestSeed::default(), move || Some(probe_result), &mut prompt)
            .unwrap();

        assert_eq!(metadata.repository, Some(probed));
        assert!(prompt.warnings.is_empty());
    }

    #[test]
    fn test_seeded_license_outside_choices_is_kept() {
        let seed = seed_from(
            r#"{"name": "foo", "description": "d", "publisher": "p", "license": "Apache-2.0"}"#,
        );
        let mut prompt = ScriptedPrompt::default();
        let metadata = resolve(seed, || None, &mut prompt).unwrap();

        assert_eq!(metadata.license, License::Custom("Apache-2.0".to_string()));
        assert!(prompt
            .statuses
            .iter()
            .any(|line| line == "License is \"Apache-2.0\""));
        assert!(!prompt.license_prompted);
    }

    #[test]
    fn test_prompted_license_defaults_to_mit() {
        let mut prompt = ScriptedPrompt::answering(&["my-ext", "Shows hovers", "alice"]);
        let metadata = resolve(ManifestSeed::default(), || None, &mut prompt).unwrap();
        assert_eq!(metadata.license, License::Mit);
    }

    #[test]
    fn test_name_answer_is_validated() {
        let mut prompt = ScriptedPrompt::answering(&["Not Kebab"]);
        assert!(resolve(ManifestSeed::default(), || None, &mut prompt).is_err());
    }
}
