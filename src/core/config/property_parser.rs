use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{ProviderError, Result};

/// Read a raw string property, if present.
pub fn read_string(properties: &HashMap<String, String>, key: &str) -> Option<String> {
    properties.get(key).cloned()
}

/// Parse a typed property (bool, integers, ...).
///
/// Absent and empty values both yield `Ok(None)`. Anything that fails to parse
/// is reported as `BadConfig`, naming the offending key and provider.
pub fn parse_field<T>(
    properties: &HashMap<String, String>,
    key: &str,
    provider: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match properties.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| {
            ProviderError::bad_config(format!(
                "invalid value '{}' in the '{}' setting of {}: {}",
                raw, key, provider, e
            ))
        }),
    }
}
