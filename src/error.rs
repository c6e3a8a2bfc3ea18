use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    InvalidConfig(String),
    IndexOutOfRange { index: usize, len: usize },
    InvalidCharacter { column: usize, found: char },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for vector of length {}", index, len)
            }
            Error::InvalidCharacter { column, found } => {
                write!(f, "Invalid character {:?} at column {}", found, column)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use super::Error;

    #[test]
    fn io_error_has_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.source().is_some());
        assert_eq!(format!("{}", err), "denied");
    }

    #[test]
    fn display_messages() {
        let err = Error::IndexOutOfRange { index: 1024, len: 1024 };
        assert_eq!(format!("{}", err), "Index 1024 out of range for vector of length 1024");
        let err = Error::InvalidCharacter { column: 3, found: 'x' };
        assert_eq!(format!("{}", err), "Invalid character 'x' at column 3");
        assert!(err.source().is_none());
    }
}
