use crate::domain::DomainError;

/// Reads a required setting, trimmed. Unset or blank values are a config error.
pub(crate) fn required_env(name: &str) -> Result<String, DomainError> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| DomainError::config(format!("{name} is not set")))
}
