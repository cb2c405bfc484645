use thiserror::Error;

/// Everything that can go wrong while building or rendering a bill. All
/// variants are recoverable: the caller reports them and keeps running.
#[derive(Debug, Error)]
pub enum BillError {
    #[error("item name must not be empty")]
    EmptyItemName,

    #[error("item quantity must be greater than zero")]
    InvalidQuantity,

    #[error("item price must be greater than zero")]
    InvalidPrice,

    #[error("customer name and phone number must be provided")]
    MissingCustomer,

    #[error("could not write receipt file: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf generation failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("print command `{command}` could not be started: {source}")]
    PrintUnavailable {
        command: String,
        source: std::io::Error,
    },

    #[error("print command `{command}` exited with {status}")]
    PrintFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}

impl BillError {
    /// Validation errors abort the triggering action without mutating state;
    /// the shell shows them as warnings rather than errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BillError::EmptyItemName
                | BillError::InvalidQuantity
                | BillError::InvalidPrice
                | BillError::MissingCustomer
        )
    }
}
