//! Errors raised when parsing geometry debug strings.

use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("malformed {kind} string: {input:?}")]
    Parse { kind: &'static str, input: String },
    #[error("invalid number in {kind} string {input:?}: {source}")]
    InvalidNumber {
        kind: &'static str,
        input: String,
        source: ParseIntError,
    },
}

impl GeometryError {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Self::Parse {
            kind,
            input: input.to_string(),
        }
    }
}

/// Split `text` on `separator` and parse both halves as integers.
///
/// `input` is the full string handed to `from_str`, kept for error context.
pub(crate) fn parse_pair<T>(
    text: &str,
    separator: &str,
    kind: &'static str,
    input: &str,
) -> Result<(T, T), GeometryError>
where
    T: FromStr<Err = ParseIntError>,
{
    let (first, second) = text
        .split_once(separator)
        .ok_or_else(|| GeometryError::parse(kind, input))?;

    Ok((
        parse_number(first, kind, input)?,
        parse_number(second, kind, input)?,
    ))
}

pub(crate) fn parse_number<T>(text: &str, kind: &'static str, input: &str) -> Result<T, GeometryError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|source| GeometryError::InvalidNumber {
        kind,
        input: input.to_string(),
        source,
    })
}
