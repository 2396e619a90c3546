use anyhow::Context;

/// Read a setting that has no sensible default
///
/// # Errors
///
/// - If `name` is unset or isn't valid Unicode
pub fn require_env(name: impl AsRef<str>) -> anyhow::Result<String> {
    let name = name.as_ref();
    std::env::var(name).with_context(|| format!("`{name}` must be set"))
}

/// Get an environment variable, falling back to `default` if it's not set
#[must_use]
pub fn env_or(name: impl AsRef<str>, default: &str) -> String {
    require_env(name).unwrap_or_else(|_| default.to_string())
}
