use thiserror::Error;

/// Conditions a calculator command reports back to its caller.
///
/// Malformed input is not represented here; commands ignore it and leave
/// the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A division by zero was attempted. The state has already been cleared.
    #[error("Cannot divide by zero")]
    DivideByZero,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}
