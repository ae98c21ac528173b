//! Error types for sparse matrix operations

/// Why a matrix text document was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// First non-blank line is not `rows=<integer>`
    MissingRowsHeader,
    /// Second non-blank line is not `cols=<integer>`
    MissingColsHeader,
    /// Entry line is not a `(<int>, <int>, <int>)` triple
    InvalidEntry,
    /// The same position appears on more than one entry line
    DuplicateEntry,
}

impl core::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MalformedReason::MissingRowsHeader => "expected 'rows=<integer>'",
            MalformedReason::MissingColsHeader => "expected 'cols=<integer>'",
            MalformedReason::InvalidEntry => "expected '(<row>, <col>, <value>)'",
            MalformedReason::DuplicateEntry => "duplicate entry position",
        };
        write!(f, "{msg}")
    }
}

/// Which arithmetic operation rejected its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Negative row or column count
    InvalidDimension { rows: i64, cols: i64 },
    /// Position outside the declared matrix bounds
    IndexOutOfRange {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes are incompatible with the requested operation
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Text document failed to parse
    MalformedFile { line: usize, reason: MalformedReason },
    /// An intermediate or final value does not fit in `i64`
    ArithmeticOverflow { row: usize, col: usize },
}

/// Broad error classification, stable across variant payload changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidDimension,
    IndexOutOfRange,
    DimensionMismatch,
    FileNotFound,
    MalformedFile,
    IoError,
    ArithmeticOverflow,
}

impl MatrixError {
    /// Classification of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            MatrixError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            MatrixError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            MatrixError::MalformedFile { .. } => ErrorKind::MalformedFile,
            MatrixError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
        }
    }

    pub(crate) const fn malformed(line: usize, reason: MalformedReason) -> Self {
        MatrixError::MalformedFile { line, reason }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid matrix dimensions {rows}x{cols}")
            }
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Position ({row}, {col}) is out of bounds for matrix of size {rows}x{cols}"
            ),
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "Cannot {op} matrices with incompatible dimensions: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::MalformedFile { line, reason } => {
                write!(f, "Input file has wrong format at line {line}: {reason}")
            }
            MatrixError::ArithmeticOverflow { row, col } => {
                write!(f, "Integer overflow computing element ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
