// ⚠️ Mailroom Errors
// Every failure the ledger or the menu loop can report

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailroomError {
    /// Menu input that is not an integer (re-prompted by the loop)
    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    /// Donation amount that does not parse as a number (re-prompted)
    #[error("invalid donation amount: {0:?}")]
    InvalidAmount(String),

    #[error("donation amount cannot be negative: {0}")]
    NegativeAmount(f64),

    #[error("donation amount must be a finite number")]
    NonFiniteAmount,

    /// Input stream closed while a prompt was waiting
    #[error("input closed before a response was entered")]
    UnexpectedEof,

    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

impl MailroomError {
    /// Errors the loop recovers from by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MailroomError::InvalidMenuChoice(_)
                | MailroomError::InvalidAmount(_)
                | MailroomError::NegativeAmount(_)
                | MailroomError::NonFiniteAmount
        )
    }
}

pub type MailroomResult<T> = std::result::Result<T, MailroomError>;
