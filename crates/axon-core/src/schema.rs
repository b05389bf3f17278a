//! Question schemas for the metadata questionnaire.
//!
//! The prompt engine is schema-driven: the wizard hands it a list of
//! [`Question`]s plus a skip map of pre-filled answers, and gets back
//! the raw answers as a [`Metadata`](crate::options::Metadata) map.

/// Fixed mapping from profile-store keys to metadata field names.
///
/// Deliberately a static table, not a dispatch mechanism: the set of
/// profile-derived fields is small and closed.
pub const PROFILE_FIELDS: [(&str, &str); 2] =
    [("username", "author_name"), ("email", "author_email")];

/// How a question is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text input.
    Input,
    /// Single choice from a fixed list.
    List(Vec<String>),
}

/// One unit of the questionnaire schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Metadata field this question fills.
    pub name: String,
    /// Prompt text shown to the user.
    pub message: String,
    /// Default answer, offered as-is by the prompt engine.
    pub default: Option<String>,
    pub kind: QuestionKind,
}

impl Question {
    /// A free-text question.
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: None,
            kind: QuestionKind::Input,
        }
    }

    /// A single-choice question.
    pub fn list(
        name: impl Into<String>,
        message: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: None,
            kind: QuestionKind::List(choices),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// The base package-descriptor schema.
///
/// `licenses` and `templates` come from the generation engine and
/// become the choices of the corresponding questions. Template-specific
/// extra schemas are appended by the wizard before the flow runs.
pub fn base_schema(licenses: &[String], templates: &[String]) -> Vec<Question> {
    vec![
        Question::input("name", "package name"),
        Question::input("version", "version").with_default("0.1.0"),
        Question::input("description", "description"),
        Question::input("author_name", "author name"),
        Question::input("author_email", "author email"),
        Question::list("license", "license", licenses.to_vec()),
        Question::list("template", "template", templates.to_vec()),
    ]
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_schema_covers_descriptor_fields() {
        let schema = base_schema(&["MIT".into()], &["default".into()]);
        let names: Vec<&str> = schema.iter().map(|q| q.name.as_str()).collect();
        for field in [
            "name",
            "version",
            "description",
            "author_name",
            "author_email",
            "license",
            "template",
        ] {
            assert!(names.contains(&field), "missing question: {field}");
        }
    }

    #[test]
    fn license_question_uses_engine_choices() {
        let licenses = vec!["MIT".to_string(), "Apache-2.0".to_string()];
        let schema = base_schema(&licenses, &["default".into()]);
        let license = schema.iter().find(|q| q.name == "license").unwrap();
        assert_eq!(license.kind, QuestionKind::List(licenses));
    }

    #[test]
    fn version_has_a_default() {
        let schema = base_schema(&[], &[]);
        let version = schema.iter().find(|q| q.name == "version").unwrap();
        assert_eq!(version.default.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn profile_mapping_is_the_fixed_table() {
        assert_eq!(
            PROFILE_FIELDS,
            [("username", "author_name"), ("email", "author_email")]
        );
    }
}
