use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
///
/// Hyphens are accepted in place of underscores (`in-progress`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse every value of a repeatable flag.
pub fn parse_all<T>(raw: &[String], field: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    raw.iter().map(|value| parse_enum(value, field)).collect()
}

#[cfg(test)]
mod tests {
    use qc_core::enums::{ActionStatus, Priority, RuleStatus};

    use super::{parse_all, parse_enum};

    #[test]
    fn parses_hyphenated_value() {
        let status: ActionStatus = parse_enum("in-progress", "status").expect("should parse");
        assert_eq!(status, ActionStatus::InProgress);
    }

    #[test]
    fn accepts_legacy_and_short_aliases() {
        let status: ActionStatus = parse_enum("no-error", "status").expect("should parse");
        assert_eq!(status, ActionStatus::NonError);
        let status: RuleStatus = parse_enum("NA", "status").expect("should parse");
        assert_eq!(status, RuleStatus::NotApplicable);
    }

    #[test]
    fn errors_on_invalid_value() {
        let err = parse_enum::<Priority>("p4", "priority").expect_err("should fail");
        assert!(err.to_string().contains("invalid priority 'p4'"));
    }

    #[test]
    fn parse_all_stops_at_first_bad_value() {
        let raw = vec!["pass".to_string(), "done".to_string()];
        let err = parse_all::<RuleStatus>(&raw, "status").expect_err("should fail");
        assert!(err.to_string().contains("'done'"));
    }
}
