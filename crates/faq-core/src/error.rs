use thiserror::Error;

/// Input rejected before any request is sent. Messages are shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields: the question is empty.")]
    MissingQuestion,
    #[error("Please fill in all fields: the answer is empty.")]
    MissingAnswer,
    #[error("Please fill in all fields: no category is selected.")]
    MissingCategory,
    #[error("Please enter a category name.")]
    EmptyCategoryName,
}

#[derive(Debug, Error)]
pub enum FaqError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("item store request failed: {0:#}")]
    Store(#[source] anyhow::Error),
}
