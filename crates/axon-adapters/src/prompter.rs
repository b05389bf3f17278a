//! Interactive prompt engine built on `dialoguer`.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use axon_core::{
    error::PromptError,
    options::Metadata,
    ports::Prompter,
    schema::{Question, QuestionKind},
};

/// Terminal prompt engine. Requires an interactive stdin; a closed or
/// redirected stdin surfaces as a [`PromptError`].
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, message: &str, choices: &[String]) -> Result<String, PromptError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .map_err(into_prompt_error)?;
        Ok(choices[index].clone())
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(into_prompt_error)
    }

    fn questionnaire(
        &self,
        questions: &[Question],
        prefilled: &Metadata,
    ) -> Result<Metadata, PromptError> {
        let (mut answers, remaining) = split_questions(questions, prefilled);

        for question in remaining {
            let value = match &question.kind {
                QuestionKind::Input => {
                    let mut input = Input::<String>::with_theme(&self.theme)
                        .with_prompt(&question.message)
                        .allow_empty(true);
                    if let Some(default) = &question.default {
                        input = input.default(default.clone());
                    }
                    input.interact_text().map_err(into_prompt_error)?
                }
                QuestionKind::List(choices) => self.select(&question.message, choices)?,
            };
            answers.insert(question.name.clone(), serde_json::Value::String(value));
        }

        Ok(answers)
    }
}

/// Seed the answers with prefilled fields and return the questions that
/// still need asking, in schema order.
fn split_questions<'a>(
    questions: &'a [Question],
    prefilled: &Metadata,
) -> (Metadata, Vec<&'a Question>) {
    let mut answers = Metadata::new();
    let mut remaining = Vec::new();

    for question in questions {
        match prefilled.get(&question.name) {
            Some(value) => {
                answers.insert(question.name.clone(), value.clone());
            }
            None => remaining.push(question),
        }
    }

    (answers, remaining)
}

fn into_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io) => PromptError::Io(io),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<Question> {
        vec![
            Question::input("name", "package name"),
            Question::input("author_name", "author name"),
            Question::list(
                "license",
                "license",
                vec!["MIT".to_string(), "ISC".to_string()],
            ),
        ]
    }

    #[test]
    fn prefilled_fields_are_not_asked() {
        let mut prefilled = Metadata::new();
        prefilled.insert(
            "author_name".to_string(),
            serde_json::Value::String("kael".to_string()),
        );

        let questions = schema();
        let (answers, remaining) = split_questions(&questions, &prefilled);

        assert_eq!(
            answers.get("author_name").and_then(|v| v.as_str()),
            Some("kael")
        );
        let remaining_names: Vec<&str> = remaining.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(remaining_names, vec!["name", "license"]);
    }

    #[test]
    fn without_prefills_everything_is_asked() {
        let questions = schema();
        let (answers, remaining) = split_questions(&questions, &Metadata::new());
        assert!(answers.is_empty());
        assert_eq!(remaining.len(), questions.len());
    }

    #[test]
    fn prefill_keys_outside_the_schema_are_dropped() {
        let mut prefilled = Metadata::new();
        prefilled.insert(
            "template".to_string(),
            serde_json::Value::String("default".to_string()),
        );

        // The schema here has no template question, so the prefill must
        // not leak into the answers.
        let questions = schema();
        let (answers, _) = split_questions(&questions, &prefilled);
        assert!(answers.is_empty());
    }
}
