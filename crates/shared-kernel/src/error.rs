// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NumericRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NumericRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, NumericRangeError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The scanned sequence had no elements, so it has no extent.
    #[error("cannot compute the extent of an empty sequence")]
    EmptyInput,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised while reading numbers from an input source.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read '{source_name}': {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number '{token}' in '{source_name}' line {line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        token: String,
        reason: String,
    },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Configuration building failed: {0}")]
    InvalidConfig(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NumericRangeError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for PresentationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for NumericRangeError {
    fn from(err: serde_yaml::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl NumericRangeError {
    /// Walks through `Context` wrappers to the error that actually occurred.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::EmptyInput))
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NumericRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NumericRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NumericRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
