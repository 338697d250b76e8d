use std::path::Path;

use anyhow::Context;
use arena_core::User;

/// Read a user profile JSON file, as returned by `auth/profile`.
///
/// Both a bare user object and `{"user": …}` are accepted.
pub fn read_user(path: &Path) -> anyhow::Result<User> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let value = match value {
        serde_json::Value::Object(mut map) if map.contains_key("user") => {
            map.remove("user").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(value)
        .with_context(|| format!("{} is not a user profile", path.display()))
}
