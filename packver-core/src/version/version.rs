use crate::version::value::parse_parts;
use crate::version::{to_value, InvalidArgumentError, SemanticVersionError, VersionField};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

////////////////////////////////////////////////////////////////////////////////////////////////////

/// An immutable `major.minor.patch` triple whose fields always fit the packed integer layout.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SemanticVersion {
    major: u16,
    minor: u8,
    patch: u8,
}

impl Display for SemanticVersion {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = SemanticVersionError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (major, minor, patch) = parse_parts(string)?;

        Ok(Self::from_parts(major, minor, patch)?)
    }
}

impl TryFrom<i32> for SemanticVersion {
    type Error = InvalidArgumentError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<SemanticVersion> for i32 {
    fn from(version: SemanticVersion) -> Self {
        version.to_value()
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(SemanticVersionVisitor)
    }
}

impl SemanticVersion {
    pub fn from_parts(major: i32, minor: i32, patch: i32) -> Result<Self, InvalidArgumentError> {
        let major = VersionField::Major.validate(major)?;
        let minor = VersionField::Minor.validate(minor)?;
        let patch = VersionField::Patch.validate(patch)?;

        // Validated above, the casts cannot truncate.
        Ok(Self {
            major: major as u16,
            minor: minor as u8,
            patch: patch as u8,
        })
    }

    /// Validating inverse of [`to_value`](Self::to_value). Values with the sign bit set are
    /// reported as a negative major version.
    pub fn from_value(value: i32) -> Result<Self, InvalidArgumentError> {
        if value < 0 {
            return Err(InvalidArgumentError::new(
                VersionField::Major,
                value >> VersionField::Major.shift(),
            ));
        }

        Self::from_parts(
            VersionField::Major.unpack(value),
            VersionField::Minor.unpack(value),
            VersionField::Patch.unpack(value),
        )
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    pub fn get(&self, field: VersionField) -> i32 {
        match field {
            VersionField::Major => self.major.into(),
            VersionField::Minor => self.minor.into(),
            VersionField::Patch => self.patch.into(),
        }
    }

    pub fn to_value(&self) -> i32 {
        VersionField::Major.pack(self.major.into())
            | VersionField::Minor.pack(self.minor.into())
            | VersionField::Patch.pack(self.patch.into())
    }

    /// Packs the version through the standalone validating path.
    pub fn try_to_value(&self) -> Result<i32, InvalidArgumentError> {
        to_value(
            self.get(VersionField::Major),
            self.get(VersionField::Minor),
            self.get(VersionField::Patch),
        )
    }

    /// Returns `true` if `self` advances exactly one field of `previous` by one, leaving the other
    /// fields untouched.
    pub fn is_compatible_with(&self, previous: &SemanticVersion) -> bool {
        let [major, minor, patch] =
            VersionField::ALL.map(|field| (self.get(field), previous.get(field)));
        let same = |(current, previous): (i32, i32)| current == previous;
        let next = |(current, previous): (i32, i32)| current == previous + 1;

        if same(major) && same(minor) && next(patch) {
            return true;
        }

        if same(major) && next(minor) && same(patch) {
            return true;
        }

        if next(major) && same(minor) && same(patch) {
            return true;
        }

        false
    }

    pub fn with_incremented(&self, field: VersionField) -> Result<Self, InvalidArgumentError> {
        let mut parts = VersionField::ALL.map(|part| self.get(part));

        match field {
            VersionField::Major => parts[0] += 1,
            VersionField::Minor => parts[1] += 1,
            VersionField::Patch => parts[2] += 1,
        }

        let [major, minor, patch] = parts;

        Self::from_parts(major, minor, patch)
    }

    pub fn with_incremented_major(&self) -> Result<Self, InvalidArgumentError> {
        self.with_incremented(VersionField::Major)
    }

    pub fn with_incremented_minor(&self) -> Result<Self, InvalidArgumentError> {
        self.with_incremented(VersionField::Minor)
    }

    pub fn with_incremented_patch(&self) -> Result<Self, InvalidArgumentError> {
        self.with_incremented(VersionField::Patch)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

struct SemanticVersionVisitor;

impl<'de> Visitor<'de> for SemanticVersionVisitor {
    type Value = SemanticVersion;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a version string of the form major.minor.patch")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        SemanticVersion::from_str(value).map_err(E::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;
    use crate::version::{to_string, ParseError};

    fn version(major: i32, minor: i32, patch: i32) -> SemanticVersion {
        SemanticVersion::from_parts(major, minor, patch).unwrap()
    }

    #[test]
    fn is_version_compatible() {
        let previous = version(1, 0, 0);

        assert!(version(2, 0, 0).is_compatible_with(&previous));
        assert!(version(1, 1, 0).is_compatible_with(&previous));
        assert!(version(1, 0, 1).is_compatible_with(&previous));
    }

    #[test]
    fn is_version_incompatible() {
        let previous = version(1, 0, 0);

        assert!(!version(3, 0, 0).is_compatible_with(&previous));
        assert!(!version(2, 1, 0).is_compatible_with(&previous));
        assert!(!version(1, 2, 0).is_compatible_with(&previous));
        assert!(!version(1, 1, 1).is_compatible_with(&previous));
        assert!(!version(1, 0, 2).is_compatible_with(&previous));
    }

    #[test]
    fn is_same_or_older_version_incompatible() {
        let previous = version(1, 1, 1);

        assert!(!previous.is_compatible_with(&previous));
        assert!(!version(1, 1, 0).is_compatible_with(&previous));
        assert!(!previous.is_compatible_with(&version(1, 1, 2)));
    }

    #[test]
    fn is_compatibility_check_at_maximum_not_overflowing() {
        let previous = version(32767, 255, 255);

        assert!(!version(0, 0, 0).is_compatible_with(&previous));
        assert!(version(32767, 255, 255).is_compatible_with(&version(32767, 255, 254)));
    }

    #[test]
    fn is_parsed_version_matching_packed_value() {
        let parsed = "1.2.3".parse::<SemanticVersion>().unwrap();

        assert_eq!(parsed.to_value(), to_value(1, 2, 3).unwrap());
        assert_eq!(parsed.to_string(), "1.2.3");
    }

    #[test]
    fn is_display_matching_unpacked_value() {
        for version in [version(0, 0, 0), version(129, 64, 55), version(32767, 255, 255)] {
            assert_eq!(version.to_string(), to_string(version.to_value()));
            assert_eq!(version.try_to_value(), Ok(version.to_value()));
        }
    }

    #[test]
    fn is_construction_bounds_checked() {
        assert_eq!(
            SemanticVersion::from_parts(32768, 0, 0).unwrap_err().to_string(),
            "Major version must be 0 to 32767"
        );
        assert_eq!(
            SemanticVersion::from_parts(0, 256, 0).unwrap_err().field(),
            VersionField::Minor
        );
        assert_eq!(
            SemanticVersion::from_parts(0, 0, -1).unwrap_err().field(),
            VersionField::Patch
        );
    }

    #[test]
    fn is_malformed_string_rejected() {
        assert_eq!(
            "1.2".parse::<SemanticVersion>(),
            Err(SemanticVersionError::Parse(ParseError::SegmentCount(2)))
        );
        assert!(matches!(
            "1.2.three".parse::<SemanticVersion>(),
            Err(SemanticVersionError::Parse(ParseError::Segment {
                field: VersionField::Patch,
                ..
            }))
        ));
        assert!(matches!(
            "0.0.256".parse::<SemanticVersion>(),
            Err(SemanticVersionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn is_incrementing_single_field() {
        let original = version(1, 2, 3);

        assert_eq!(original.with_incremented_major(), Ok(version(2, 2, 3)));
        assert_eq!(original.with_incremented_minor(), Ok(version(1, 3, 3)));
        assert_eq!(original.with_incremented_patch(), Ok(version(1, 2, 4)));
        assert_eq!(original, version(1, 2, 3));
    }

    #[test]
    fn is_incremented_version_compatible() {
        let original = version(4, 5, 6);

        for field in VersionField::ALL {
            assert!(original
                .with_incremented(field)
                .unwrap()
                .is_compatible_with(&original));
        }
    }

    #[test]
    fn is_incrementing_at_maximum_failing() {
        let maximum = version(32767, 255, 255);

        assert_eq!(
            maximum.with_incremented_major().unwrap_err().field(),
            VersionField::Major
        );
        assert_eq!(
            maximum.with_incremented_minor().unwrap_err().field(),
            VersionField::Minor
        );
        assert_eq!(
            maximum.with_incremented_patch().unwrap_err().value(),
            256
        );
    }

    #[test]
    fn is_value_conversion_reversible() {
        let original = version(129, 64, 55);

        assert_eq!(SemanticVersion::try_from(i32::from(original)), Ok(original));
        assert_eq!(SemanticVersion::from_value(0), Ok(SemanticVersion::default()));
    }

    #[test]
    fn is_negative_value_rejected() {
        let error = SemanticVersion::from_value(-1).unwrap_err();

        assert_eq!(error.field(), VersionField::Major);
        assert_eq!(error.value(), -1);
    }

    #[test]
    fn is_serialized_as_string() {
        let original = version(1, 2, 3);

        assert_eq!(serde_json::to_string(&original).unwrap(), "\"1.2.3\"");
        assert_eq!(
            serde_json::from_str::<SemanticVersion>("\"1.2.3\"").unwrap(),
            original
        );
    }

    #[test]
    fn is_invalid_string_not_deserialized() {
        assert!(serde_json::from_str::<SemanticVersion>("\"1.2\"").is_err());
        assert!(serde_json::from_str::<SemanticVersion>("\"1.2.256\"").is_err());
        assert!(serde_json::from_str::<SemanticVersion>("66051").is_err());
    }
}
