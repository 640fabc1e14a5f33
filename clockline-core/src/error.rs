//! Console error type.

use crate::compat::{fmt, String};
use crate::transport::TransportError;

/// Everything a command handler can fail with.
///
/// None of these are fatal: the dispatcher prints the error and drops back
/// to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The bus transaction behind an RTC operation failed.
    Transport(TransportError),
    /// A parameter did not parse or was out of range.
    BadArgument(String),
    /// The command needs the RTC but no bus is attached.
    NoRtc,
    /// The command needs a platform time source but none was injected.
    NoTimeSource,
    /// The command needs reset capability but none was injected.
    NoSystemControl,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Transport(e) => write!(f, "{}", e),
            ConsoleError::BadArgument(msg) => write!(f, "invalid argument: {}", msg),
            ConsoleError::NoRtc => write!(f, "no RTC attached"),
            ConsoleError::NoTimeSource => write!(f, "no time source available"),
            ConsoleError::NoSystemControl => write!(f, "reset not supported on this platform"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConsoleError {}

impl From<TransportError> for ConsoleError {
    fn from(e: TransportError) -> Self {
        ConsoleError::Transport(e)
    }
}
