// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PeriodRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PeriodRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PeriodRangeError>;

/// Domain-layer specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A bound was read from a range that contains no values.
    #[error("Range is empty: bounds are undefined")]
    EmptyRange,

    #[error("Invalid inclusivity '{spec}': expected one of [], [), (], ()")]
    InvalidInclusivity { spec: String },

    #[error("Malformed range '{input}': {reason}")]
    MalformedRange { input: String, reason: String },

    #[error("Invalid bound '{text}': {details}")]
    InvalidBound { text: String, details: String },

    #[error("Cannot parse timestamp: {input}")]
    InvalidTimestamp { input: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Failed to render output: {0}")]
    Render(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PeriodRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PeriodRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PeriodRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
