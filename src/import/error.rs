use thiserror::Error;

/// Everything that can go wrong while parsing an import file. All of
/// these abort the parse, and their messages are shown to the user
/// verbatim.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ImportError {
    #[error("Line {line}: unrecognized line, expected `Q:`, `A*:`, `A:` or a blank line")]
    InvalidLineFormat { line: usize },
    #[error("Line {line}: new question started before the previous one was closed (missing blank line between questions)")]
    MalformedSequence { line: usize },
    #[error("Line {line}: option found outside of a question block")]
    OrphanOption { line: usize },
    #[error("Line {line}: question has no title")]
    MissingTitle { line: usize },
    #[error("Question \"{title}\": at least 2 options are required, found {count}")]
    InsufficientOptions { title: String, count: usize },
    #[error("Question \"{title}\": no option is marked as correct")]
    NoCorrectAnswer { title: String },
    #[error("Question \"{title}\": {count} options are marked as correct, expected exactly 1")]
    MultipleCorrectAnswers { title: String, count: usize },
    #[error("No questions found in import file")]
    EmptyImport,
}
