//! Error types for input validation, run control and export operations

use std::fmt;
use std::path::PathBuf;

/// Rejection reason for user supplied input
///
/// The `Display` output is the message shown next to the custom input
/// form, so it is phrased for end users rather than developers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No values were supplied
    Empty,

    /// A token could not be read as an integer
    NonNumeric {
        /// The offending token, trimmed
        token: String,
    },

    /// A value lies outside the accepted range
    OutOfRange {
        /// Parsed value
        value: i64,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// More values were supplied than a page can display
    TooManyElements {
        /// Number of values supplied
        count: usize,
        /// Maximum accepted number of values
        max: usize,
    },

    /// A search page was given values but no target
    MissingTarget,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter at least one number"),
            Self::NonNumeric { token } => {
                write!(f, "'{token}' is not a whole number")
            }
            Self::OutOfRange { value, min, max } => {
                write!(f, "{value} is out of range (allowed {min} to {max})")
            }
            Self::TooManyElements { count, max } => {
                write!(f, "Too many values: {count} given, at most {max} allowed")
            }
            Self::MissingTarget => write!(f, "Please enter a value to search for"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Main error type for all visualizer operations
#[derive(Debug)]
pub enum AlgoVizError {
    /// Custom input failed validation before a run could start
    Validation(ValidationError),

    /// Runner pre-conditions were not met
    ///
    /// Raised before the first step, never mid-run:
    /// - a search was started without a target
    /// - a sorted-input search received unsorted values
    /// - a traversal was started without a graph
    InvalidInput {
        /// Description of what is wrong with the input
        reason: String,
    },

    /// A control was used while the run state forbids it
    ControlRejected {
        /// Name of the control that was rejected
        control: &'static str,
        /// Run state at the time of rejection
        state: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgoVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => write!(f, "Invalid input: {error}"),
            Self::InvalidInput { reason } => write!(f, "Cannot start run: {reason}"),
            Self::ControlRejected { control, state } => {
                write!(f, "'{control}' is not available while {state}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgoVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(error) => Some(error),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualizer results
pub type Result<T> = std::result::Result<T, AlgoVizError>;

impl From<ValidationError> for AlgoVizError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgoVizError {
    AlgoVizError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> AlgoVizError {
    AlgoVizError::InvalidInput {
        reason: reason.to_string(),
    }
}
