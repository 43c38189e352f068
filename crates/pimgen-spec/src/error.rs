//! Error types for configuration parsing and validation.

use thiserror::Error;

/// Errors that can occur while parsing a generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required top-level field is absent.
    #[error("missing required config field: {field}")]
    MissingField {
        /// Dotted path of the missing field (e.g. `type.mem`).
        field: String,
    },

    /// A required field is present but empty.
    #[error("config field is empty: {field}")]
    EmptyField {
        /// Dotted path of the empty field.
        field: String,
    },

    /// Memory type not in the supported identifier set.
    #[error("unknown memory type '{mem}' (supported: {supported})")]
    UnknownMemType {
        /// The rejected identifier.
        mem: String,
        /// Comma-separated supported identifiers.
        supported: String,
    },

    /// PIM type not in the supported identifier set.
    #[error("unknown PIM type '{pim}' (supported: {supported})")]
    UnknownPimType {
        /// The rejected identifier.
        pim: String,
        /// Comma-separated supported identifiers.
        supported: String,
    },

    /// Command matrix has fewer than a header row plus one command row.
    #[error("cmd_spec_matrix must have a header row and at least one command row (found {rows} rows)")]
    MatrixTooSmall {
        /// Total row count found, header included.
        rows: usize,
    },

    /// A data row's length does not match the header's.
    #[error("cmd_spec_matrix row {row} has {found} columns, header has {expected}")]
    RowShape {
        /// Zero-based row index into the matrix (header is row 0).
        row: usize,
        /// Header column count.
        expected: usize,
        /// This row's column count.
        found: usize,
    },

    /// The same command name appears in more than one row.
    #[error("duplicate command '{command}' in cmd_spec_matrix row {row}")]
    DuplicateCommand {
        /// The repeated command name.
        command: String,
        /// Zero-based index of the offending row.
        row: usize,
    },

    /// A matrix cell is not a scalar (string, integer, or boolean).
    #[error("cmd_spec_matrix row {row}, column {column}: expected a scalar value")]
    BadCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index within the row.
        column: usize,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
