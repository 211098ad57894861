use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ParseIdError, QuestionError, QuizResultError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
