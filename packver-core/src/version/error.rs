use crate::version::VersionField;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidArgumentError {
    field: VersionField,
    value: i32,
}

impl Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} version must be 0 to {}",
            self.field,
            self.field.max()
        )
    }
}

impl error::Error for InvalidArgumentError {}

impl InvalidArgumentError {
    pub fn new(field: VersionField, value: i32) -> Self {
        Self { field, value }
    }

    pub fn field(&self) -> VersionField {
        self.field
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    SegmentCount(usize),
    Segment {
        field: VersionField,
        source: ParseIntError,
    },
}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::SegmentCount(count) => write!(
                formatter,
                "expected 3 dot separated segments, found {}",
                count
            ),
            Self::Segment { field, source } => write!(
                formatter,
                "{} segment is not a decimal integer: {}",
                field, source
            ),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::SegmentCount(_) => None,
            Self::Segment { source, .. } => Some(source),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SemanticVersionError {
    InvalidArgument(InvalidArgumentError),
    Parse(ParseError),
}

impl Display for SemanticVersionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => Display::fmt(error, formatter),
            Self::Parse(error) => Display::fmt(error, formatter),
        }
    }
}

impl error::Error for SemanticVersionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::Parse(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SemanticVersionError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<ParseError> for SemanticVersionError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
