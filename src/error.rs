/// Error returned when a routine's preconditions are violated.
///
/// Every routine validates its inputs at the call boundary and fails
/// synchronously, before touching any caller-visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A generated sequence was requested with length zero.
    ZeroLength,
    /// Proper divisors were requested for zero, which every integer divides.
    ZeroDividend,
    /// A selector entry was neither `FROM_FIRST` nor `FROM_SECOND`.
    UnknownSelector {
        /// Position of the offending entry in the selector.
        index: usize,
        /// The value found there.
        value: u8,
    },
    /// A selector demanded more elements than its source sequence holds.
    SourceExhausted {
        /// Which source ran dry (`FROM_FIRST` or `FROM_SECOND`).
        source: u8,
        /// Position in the selector where the demand occurred.
        index: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroLength => {
                write!(f, "requested sequence length must be at least 1")
            }
            Error::ZeroDividend => {
                write!(f, "proper divisors are only defined for positive integers")
            }
            Error::UnknownSelector { index, value } => {
                write!(f, "selector entry {} at index {} is not a known source", value, index)
            }
            Error::SourceExhausted { source, index } => {
                write!(f, "source {} exhausted at selector index {}", source, index)
            }
        }
    }
}

impl std::error::Error for Error {}
