use std::collections::HashMap;

/// Values starting with this marker are replaced by the named environment variable.
pub const ENV_PREFIX: &str = "$env:";

/// Resolve `$env:NAME` references against the process environment.
pub fn resolve_env(properties: &HashMap<String, String>) -> HashMap<String, String> {
    resolve_env_with(properties, |name| std::env::var(name).ok())
}

/// Resolve `$env:NAME` references with an injected lookup.
///
/// Returns a new map; the input is left untouched. A reference to a variable
/// the lookup does not know resolves to an empty string.
pub fn resolve_env_with<F>(properties: &HashMap<String, String>, lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    properties
        .iter()
        .map(|(key, value)| {
            let resolved = match value.strip_prefix(ENV_PREFIX) {
                Some(name) => lookup(name).unwrap_or_default(),
                None => value.clone(),
            };
            (key.clone(), resolved)
        })
        .collect()
}
