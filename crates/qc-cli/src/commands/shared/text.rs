/// Trimmed value of a required text flag.
pub fn require_text<'a>(value: &'a str, flag: &str) -> anyhow::Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("--{flag} must not be empty");
    }
    Ok(trimmed)
}

/// `None` for an absent or blank optional text flag.
#[must_use]
pub fn optional_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
