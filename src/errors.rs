use std::{
    error,
    io,
    fmt
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsingErrorKind {
    InsufficientData,
    TagNotFound
}

#[derive(Debug)]
pub enum ParsingError {
    BadData(ParsingErrorKind),
    IoError(io::Error)
}

impl ParsingError {
    pub fn kind(&self) -> Option<ParsingErrorKind> {
        match *self {
            ParsingError::BadData(kind) => Some(kind),
            ParsingError::IoError(_) => None
        }
    }
}

impl From<ParsingErrorKind> for ParsingError {
    fn from(err: ParsingErrorKind) -> ParsingError {
        ParsingError::BadData(err)
    }
}

impl From<io::Error> for ParsingError {
    fn from(err: io::Error) -> ParsingError {
        ParsingError::IoError(err)
    }
}

impl fmt::Display for ParsingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParsingErrorKind::InsufficientData => write!(f, "data too short to contain ID3v1 tag"),
            ParsingErrorKind::TagNotFound => write!(f, "no ID3v1 tag found")
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParsingError::BadData(ref kind) => fmt::Display::fmt(kind, f),
            ParsingError::IoError(ref err) => fmt::Display::fmt(err, f)
        }
    }
}

impl error::Error for ParsingError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ParsingError::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}
