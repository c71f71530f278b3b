use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::str::Utf8Error;

#[derive(Debug)]
pub enum CheckerError {
    Spawn { program: String, source: io::Error },
    LogFile { path: String, source: io::Error },
    Resolve { host: String, source: Option<io::Error> },
    Io(io::Error),
    Decode { connection: usize, source: Utf8Error },
}

impl CheckerError {
    /// Whether the error is the run deadline expiring inside a socket call.
    pub fn is_timeout(&self) -> bool {
        match self {
            CheckerError::Io(err) => is_timeout(err),
            _ => false,
        }
    }
}

pub(crate) fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

impl Display for CheckerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckerError::Spawn { program, source } => {
                write!(f, "Could not start subject server \"{program}\": {source}")
            }
            CheckerError::LogFile { path, source } => {
                write!(f, "Could not create log file \"{path}\": {source}")
            }
            CheckerError::Resolve {
                host,
                source: Some(source),
            } => write!(f, "Could not resolve \"{host}\": {source}"),
            CheckerError::Resolve { host, source: None } => {
                write!(f, "\"{host}\" did not resolve to any address")
            }
            CheckerError::Io(err) => write!(f, "Socket error: {err}"),
            CheckerError::Decode { connection, source } => {
                write!(f, "Response on connection {connection} is not UTF-8: {source}")
            }
        }
    }
}

impl Error for CheckerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CheckerError::Spawn { source, .. } | CheckerError::LogFile { source, .. } => {
                Some(source)
            }
            CheckerError::Resolve { source, .. } => {
                source.as_ref().map(|err| err as &(dyn Error + 'static))
            }
            CheckerError::Io(err) => Some(err),
            CheckerError::Decode { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for CheckerError {
    fn from(err: io::Error) -> Self {
        CheckerError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
