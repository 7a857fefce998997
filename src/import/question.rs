use itertools::Itertools;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OptionDraft {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuestionDraft {
    pub title: String,
    pub sort_order: u32,
    pub options: Vec<OptionDraft>,
}

impl QuestionDraft {
    pub fn get_correct_option(&self) -> Option<&OptionDraft> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// Serializes questions back into the import grammar. Re-parsing the
/// output yields an equal sequence.
pub fn to_import_text(questions: &[QuestionDraft]) -> String {
    questions
        .iter()
        .map(|question| {
            let options = question.options.iter().map(|option| {
                if option.is_correct {
                    format!("A*: {}", option.text)
                } else {
                    format!("A: {}", option.text)
                }
            });
            std::iter::once(format!("Q: {}", question.title))
                .chain(options)
                .join("\n")
        })
        .join("\n\n")
}
