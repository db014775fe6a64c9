use hearthcore::error::BackendError;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication required")]
    Anonymous,
    #[error(transparent)]
    Backend(BackendError),
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        if err.is_not_found() {
            Error::NotFound
        } else if err.is_constraint_violation() {
            Error::Validation("referenced record does not exist".to_string())
        } else {
            Error::Backend(err)
        }
    }
}
