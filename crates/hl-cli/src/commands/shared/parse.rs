use std::str::FromStr;

use hl_core::errors::CoreError;

/// Parse a wire enum from user input. Case-insensitive; `-` and `_` are interchangeable.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag.
pub fn parse_optional<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}
