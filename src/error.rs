use alloc::string::String;
use core::fmt;

/// The shape every decimal string must follow, quoted in parse errors.
const EXPECTED_SHAPE: &str = "[+|-]digits[.digits][(E|e)[+|-]digits]";

/// Error type for the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    ErrorString(String),
    /// The input did not match the decimal literal grammar.
    InvalidString { input: String, reason: String },
    DivisionByZero,
    /// A limb array produced by the division engine could not be folded back into 128 bits.
    /// This indicates a bug in the division engine rather than bad input.
    UnsupportedLimbCount(usize),
    ScaleDeltaOutOfRange { original_scale: i32, new_scale: i32 },
    /// Rescaling would have truncated a non-zero remainder or overflowed 128 bits.
    RescaleDataLoss {
        value: String,
        original_scale: i32,
        new_scale: i32,
    },
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input, division by zero or an internal invariant violation.
    InvalidArgument,
    /// The operation would have truncated or overflowed the value.
    DataLoss,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RescaleDataLoss { .. } => ErrorKind::DataLoss,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl<S> From<S> for Error
where
    S: Into<String>,
{
    #[inline]
    fn from(from: S) -> Self {
        Self::ErrorString(from.into())
    }
}

#[cold]
pub(crate) fn tail_invalid<T>(input: &str, reason: impl Into<String>) -> Result<T, Error> {
    Err(Error::InvalidString {
        input: input.into(),
        reason: reason.into(),
    })
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ErrorString(ref err) => f.pad(err),
            Self::InvalidString { ref input, ref reason } => write!(
                f,
                "Invalid decimal \"{}\": {}. Expected a value shaped like {}",
                input, reason, EXPECTED_SHAPE
            ),
            Self::DivisionByZero => f.pad("Division by 0 in Decimal128"),
            Self::UnsupportedLimbCount(count) => {
                write!(f, "Can't build Decimal128 from {} significant limbs", count)
            }
            Self::ScaleDeltaOutOfRange {
                original_scale,
                new_scale,
            } => write!(
                f,
                "Rescaling from scale {} to scale {} must change the scale by 1 to 38 digits",
                original_scale, new_scale
            ),
            Self::RescaleDataLoss {
                ref value,
                original_scale,
                new_scale,
            } => write!(
                f,
                "Rescaling decimal value {} from original scale of {} to new scale of {} would cause data loss",
                value, original_scale, new_scale
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn it_classifies_errors() {
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::from("bad radix").kind(), ErrorKind::InvalidArgument);
        let loss = Error::RescaleDataLoss {
            value: "1.01".into(),
            original_scale: 2,
            new_scale: 0,
        };
        assert_eq!(loss.kind(), ErrorKind::DataLoss);
    }

    #[test]
    fn it_names_the_input_in_parse_errors() {
        let err = tail_invalid::<()>("1.2.3", "Found non base ten digit character '.'").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"1.2.3\""), "{}", message);
        assert!(message.contains(EXPECTED_SHAPE), "{}", message);
    }
}
