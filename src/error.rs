use std::error::Error;
use std::fmt;
use std::io;

use csv;

#[derive(Debug)]
pub enum SymmographyError {
    General(String),
    InvalidParameter(String),
    InvalidLayout(String),
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    Io(io::Error),
    Csv(csv::Error),
    Context {
        message: String,
        cause: Box<SymmographyError>,
    },
}

pub trait ResultExt<T> {
    /// Convert the error type to a SymmographyError, and add the context message around it.
    fn context(self, message: &str) -> Result<T, SymmographyError>;

    /// Like `context()` but take a closure containing a potentially costly
    /// operation that will only be executed if there was an error.
    fn with_context<F>(self, message_creator: F) -> Result<T, SymmographyError>
    where
        F: Fn() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    SymmographyError: From<E>,
{
    fn context(self, message: &str) -> Result<T, SymmographyError> {
        self.map_err(|err| SymmographyError::from(err).context(message))
    }

    fn with_context<F>(self, message_creator: F) -> Result<T, SymmographyError>
    where
        F: Fn() -> String,
    {
        self.context(&message_creator())
    }
}

impl SymmographyError {
    pub fn general(message: String) -> Self {
        SymmographyError::General(message)
    }

    pub fn invalid_parameter(message: String) -> Self {
        SymmographyError::InvalidParameter(message)
    }

    pub fn invalid_layout(message: String) -> Self {
        SymmographyError::InvalidLayout(message)
    }

    /// Wrap the error with a message providing more context about what went wrong.
    pub fn context(self, message: &str) -> Self {
        SymmographyError::Context {
            message: message.to_owned(),
            cause: Box::new(self),
        }
    }

    /// Like `context()` but take a closure containing a potentially costly
    /// operation that will only be executed if there was an error.
    pub fn with_context<T>(self, message_creator: T) -> Self
    where
        T: Fn() -> String,
    {
        self.context(&message_creator())
    }
}

impl Error for SymmographyError {
    fn cause(&self) -> Option<&dyn Error> {
        match self {
            SymmographyError::Context { ref cause, .. } => Some(cause),
            SymmographyError::Io(ref cause) => Some(cause),
            SymmographyError::Csv(ref cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<io::Error> for SymmographyError {
    fn from(io_err: io::Error) -> SymmographyError {
        SymmographyError::Io(io_err)
    }
}

impl From<csv::Error> for SymmographyError {
    fn from(csv_err: csv::Error) -> SymmographyError {
        SymmographyError::Csv(csv_err)
    }
}

impl fmt::Display for SymmographyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymmographyError::General(message) => write!(f, "{}", message),
            SymmographyError::InvalidParameter(message) => {
                write!(f, "Invalid parameter: {}", message)
            }
            SymmographyError::InvalidLayout(message) => {
                write!(f, "Invalid nail layout: {}", message)
            }
            SymmographyError::IndexOutOfRange { index, len } => write!(
                f,
                "A string references nail {}, but the layout only has {} nails.",
                index, len
            ),
            SymmographyError::Io(err) => write!(f, "Input/output error: {}", err),
            SymmographyError::Csv(err) => write!(f, "CSV file error: {}", err),
            SymmographyError::Context { message, cause } => {
                write!(f, "{}\n  caused by: {}", message, cause)
            }
        }
    }
}
