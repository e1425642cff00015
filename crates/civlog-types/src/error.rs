use std::fmt;

/// A single cell that could not be turned into its canonical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Time cell not in `H:MM` form, or minutes outside 0..=59
    MalformedTime { column: &'static str, value: String },

    /// Date cell not in `D/M/YYYY` form
    MalformedDate { value: String },

    /// Numeric cell (landings, distance) that does not parse
    MalformedNumber { column: &'static str, value: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MalformedTime { column, value } => {
                write!(f, "malformed time in column '{}': {:?}", column, value)
            }
            FieldError::MalformedDate { value } => {
                write!(f, "malformed date (expected D/M/YYYY): {:?}", value)
            }
            FieldError::MalformedNumber { column, value } => {
                write!(f, "malformed number in column '{}': {:?}", column, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Why a structurally valid source row was rejected during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Row is shorter than the column map requires
    MissingColumn { column: &'static str, index: usize },

    /// A cell failed to convert
    Field(FieldError),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingColumn { column, index } => {
                write!(f, "missing column '{}' (index {})", column, index)
            }
            RowError::Field(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowError::Field(err) => Some(err),
            RowError::MissingColumn { .. } => None,
        }
    }
}

impl From<FieldError> for RowError {
    fn from(err: FieldError) -> Self {
        RowError::Field(err)
    }
}
