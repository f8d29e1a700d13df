use crate::version::InvalidArgumentError;
use std::fmt::{self, Display, Formatter};

////////////////////////////////////////////////////////////////////////////////////////////////////

pub const MAJOR_MASK: i32 = 0x7fff0000;
pub const MAJOR_SHIFT: u32 = 16;
pub const MAJOR_MAX: i32 = 32767;
pub const MINOR_MASK: i32 = 0x0000ff00;
pub const MINOR_SHIFT: u32 = 8;
pub const MINOR_MAX: i32 = 255;
pub const PATCH_MASK: i32 = 0x000000ff;
pub const PATCH_SHIFT: u32 = 0;
pub const PATCH_MAX: i32 = 255;

////////////////////////////////////////////////////////////////////////////////////////////////////

/// One of the three bit fields of a packed version.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
}

impl Display for VersionField {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Major => write!(formatter, "Major"),
            Self::Minor => write!(formatter, "Minor"),
            Self::Patch => write!(formatter, "Patch"),
        }
    }
}

impl VersionField {
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    pub const fn max(&self) -> i32 {
        match self {
            Self::Major => MAJOR_MAX,
            Self::Minor => MINOR_MAX,
            Self::Patch => PATCH_MAX,
        }
    }

    pub const fn mask(&self) -> i32 {
        match self {
            Self::Major => MAJOR_MASK,
            Self::Minor => MINOR_MASK,
            Self::Patch => PATCH_MASK,
        }
    }

    pub const fn shift(&self) -> u32 {
        match self {
            Self::Major => MAJOR_SHIFT,
            Self::Minor => MINOR_SHIFT,
            Self::Patch => PATCH_SHIFT,
        }
    }

    pub fn validate(&self, value: i32) -> Result<i32, InvalidArgumentError> {
        if value < 0 || value > self.max() {
            return Err(InvalidArgumentError::new(*self, value));
        }

        Ok(value)
    }

    /// Moves an already validated field value into its bit position.
    pub const fn pack(&self, value: i32) -> i32 {
        (value << self.shift()) & self.mask()
    }

    /// Extracts the field from any integer, ignoring bits outside the field.
    pub const fn unpack(&self, value: i32) -> i32 {
        (value & self.mask()) >> self.shift()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
