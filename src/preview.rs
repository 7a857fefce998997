use itertools::Itertools;

use crate::import::QuestionDraft;

/// Plain-text rendering of a parsed question set, with the correct
/// option marked. This is what the admin sees before committing an
/// import.
pub fn render(questions: &[QuestionDraft]) -> String {
    questions
        .iter()
        .map(|question| {
            let options = question.options.iter().map(|option| {
                let marker = if option.is_correct { "[x]" } else { "[ ]" };
                format!("  {} {}", marker, option.text)
            });
            std::iter::once(format!("{}. {}", question.sort_order, question.title))
                .chain(options)
                .join("\n")
        })
        .join("\n\n")
}
