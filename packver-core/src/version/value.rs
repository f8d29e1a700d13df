use crate::version::{InvalidArgumentError, ParseError, SemanticVersionError, VersionField};

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Packs a version triple into a single integer. Every field is validated, so this is safe to call
/// without constructing a [`SemanticVersion`](crate::version::SemanticVersion) first.
pub fn to_value(major: i32, minor: i32, patch: i32) -> Result<i32, InvalidArgumentError> {
    let major = VersionField::Major.validate(major)?;
    let minor = VersionField::Minor.validate(minor)?;
    let patch = VersionField::Patch.validate(patch)?;

    Ok(VersionField::Major.pack(major)
        | VersionField::Minor.pack(minor)
        | VersionField::Patch.pack(patch))
}

pub fn to_value_from_str(version: &str) -> Result<i32, SemanticVersionError> {
    let (major, minor, patch) = parse_parts(version)?;

    Ok(to_value(major, minor, patch)?)
}

/// Formats a packed integer as `major.minor.patch`. No validation is performed.
pub fn to_string(value: i32) -> String {
    format!(
        "{}.{}.{}",
        VersionField::Major.unpack(value),
        VersionField::Minor.unpack(value),
        VersionField::Patch.unpack(value)
    )
}

pub(crate) fn parse_parts(version: &str) -> Result<(i32, i32, i32), ParseError> {
    let segments = version.split('.').collect::<Vec<_>>();

    let &[major, minor, patch] = segments.as_slice() else {
        return Err(ParseError::SegmentCount(segments.len()));
    };

    let parse = |field, segment: &str| {
        segment
            .parse::<i32>()
            .map_err(|source| ParseError::Segment { field, source })
    };

    Ok((
        parse(VersionField::Major, major)?,
        parse(VersionField::Minor, minor)?,
        parse(VersionField::Patch, patch)?,
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////
