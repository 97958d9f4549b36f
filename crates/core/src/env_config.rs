//! Environment variable parsing with warn-level logging for invalid values.

/// Parse a variable obtained from `lookup` with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
///
/// `lookup` is usually [`std_lookup`]; tests pass a map-backed closure instead
/// of touching the process environment.
pub fn env_parse_with_default<T, F>(lookup: &F, var: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Parse a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
pub fn env_flag<F>(lookup: &F, var: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(v) = lookup(var) else {
        return default;
    };
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(var, value = %v, default, "invalid env flag value, using default");
            default
        },
    }
}

/// Reads a variable from the process environment, treating empty values as unset.
#[must_use]
pub fn std_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}
