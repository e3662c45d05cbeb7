/// Failure conditions raised by the toolkit functions.
///
/// Every variant carries a fixed message so callers can match on the text
/// as well as the kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolkitError {
    /// An argument failed a type, shape or range precondition.
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The simulated lookup has no entry for the requested id.
    #[error("{0}")]
    NotFound(&'static str),
}
