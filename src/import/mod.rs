use anyhow::Context;
use std::fs;
use std::path::Path;

pub mod error;
pub mod question;

pub use error::ImportError;
pub use question::{to_import_text, OptionDraft, QuestionDraft};


/// A validated batch of questions read from an import file, ready for
/// a bulk-create submission.
#[derive(Debug)]
pub struct ImportSet {
    questions: Vec<QuestionDraft>,
}

impl ImportSet {
    pub fn open(source: &Path) -> anyhow::Result<ImportSet> {
        let text = fs::read_to_string(source)
            .with_context(|| format!("Could not read {}", source.display()))?;
        let set = Self::from_text(&text)?;
        Ok(set)
    }

    pub fn from_text(text: &str) -> Result<ImportSet, ImportError> {
        let questions = parse_questions(text)?;
        Ok(ImportSet { questions })
    }

    pub fn get_questions(&self) -> &[QuestionDraft] {
        &self.questions
    }
}

#[derive(Debug)]
struct OpenQuestion {
    title: String,
    line: usize,
    options: Vec<OptionDraft>,
}

impl OpenQuestion {
    fn finalize(self, sort_order: u32) -> Result<QuestionDraft, ImportError> {
        if self.title.is_empty() {
            return Err(ImportError::MissingTitle { line: self.line });
        }
        if self.options.len() < 2 {
            return Err(ImportError::InsufficientOptions {
                title: self.title,
                count: self.options.len(),
            });
        }
        let num_correct = self
            .options
            .iter()
            .filter(|option| option.is_correct)
            .count();
        match num_correct {
            1 => Ok(QuestionDraft {
                title: self.title,
                sort_order,
                options: self.options,
            }),
            0 => Err(ImportError::NoCorrectAnswer { title: self.title }),
            count => Err(ImportError::MultipleCorrectAnswers {
                title: self.title,
                count,
            }),
        }
    }
}

/// Parses the question import grammar: one question per paragraph, a
/// `Q:` title line followed by `A:`/`A*:` option lines, paragraphs
/// separated by blank lines. The first error aborts the whole parse.
///
/// Questions are numbered by their position in the file, a question
/// still open at end of input is finalized as if followed by a blank
/// line.
pub fn parse_questions(text: &str) -> Result<Vec<QuestionDraft>, ImportError> {
    let mut questions: Vec<QuestionDraft> = Vec::new();
    let mut open: Option<OpenQuestion> = None;

    for (index, raw_line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            if let Some(question) = open.take() {
                let sort_order = questions.len() as u32 + 1;
                questions.push(question.finalize(sort_order)?);
            }
            continue;
        }

        if let Some(title) = line.strip_prefix("Q:") {
            if open.is_some() {
                return Err(ImportError::MalformedSequence { line: line_number });
            }
            open = Some(OpenQuestion {
                title: title.trim().to_owned(),
                line: line_number,
                options: Vec::new(),
            });
            continue;
        }

        let option = if let Some(text) = line.strip_prefix("A*:") {
            Some((text.trim(), true))
        } else if let Some(text) = line.strip_prefix("A:") {
            Some((text.trim(), false))
        } else {
            None
        };

        match (option, open.as_mut()) {
            (Some(_), None) => {
                return Err(ImportError::OrphanOption { line: line_number });
            }
            (Some((text, _)), Some(_)) if text.is_empty() => {
                return Err(ImportError::InvalidLineFormat { line: line_number });
            }
            (Some((text, is_correct)), Some(question)) => {
                question.options.push(OptionDraft {
                    text: text.to_owned(),
                    is_correct,
                });
            }
            (None, _) => {
                return Err(ImportError::InvalidLineFormat { line: line_number });
            }
        }
    }

    if let Some(question) = open.take() {
        let sort_order = questions.len() as u32 + 1;
        questions.push(question.finalize(sort_order)?);
    }

    if questions.is_empty() {
        return Err(ImportError::EmptyImport);
    }

    Ok(questions)
}
