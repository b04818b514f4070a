use thiserror::Error;

pub type Result<T> = std::result::Result<T, TestkitError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestkitError {
    /// A kind that needs extra addressing data was recorded without it.
    #[error("'{kind}' entities need a {annotation} annotation")]
    MissingAnnotation {
        kind: &'static str,
        annotation: &'static str,
    },
}
