use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Caseload access denied: {0}")]
    CaseloadAccess(String),

    #[error("Video booking access denied: {0}")]
    VideoBookingAccess(String),

    #[error("Argument error: {0}")]
    Argument(String),
}

impl AppError {
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            AppError::CaseloadAccess(_) | AppError::VideoBookingAccess(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
