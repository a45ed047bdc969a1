//! State law records extracted from the state data source.

use std::path::Path;

use leaselens_core::StateRecord;
use tracing::{debug, info, warn};

use crate::{
    ParserError, Result,
    source::{self, SourceError, Value},
};

/// Parse every record of the object bound to `binding` in `src`.
///
/// Each top-level property whose value is an object becomes one record, in
/// source order. Records without a non-empty `name` are skipped, as are records
/// whose slug is not a single path segment.
pub fn parse_state_records(
    src: &str,
    binding: &str,
) -> std::result::Result<Vec<StateRecord>, SourceError> {
    let root = source::parse_binding(src, binding)?;
    let Some(entries) = root.as_object() else {
        debug!(binding, "binding is not an object literal");
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|(key, value)| record_from_value(key, value))
        .collect())
}

/// Load state records from a source file.
///
/// A missing file yields zero records.
pub fn load_state_records(path: &Path, binding: &str) -> Result<Vec<StateRecord>> {
    if !path.exists() {
        debug!(path = %path.display(), "state data source not found");
        return Ok(Vec::new());
    }

    let src = std::fs::read_to_string(path)?;
    let records = parse_state_records(&src, binding).map_err(|source| ParserError::Source {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = records.len(), "loaded state records");
    Ok(records)
}

fn record_from_value(key: &str, value: &Value) -> Option<StateRecord> {
    value.as_object()?;

    let name = string_field(value, "name");
    if name.is_empty() {
        debug!(key, "skipping state record without a name");
        return None;
    }

    let slug = Some(string_field(value, "slug"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| key.to_string());

    let record = StateRecord {
        key: key.to_string(),
        name,
        slug,
        description: string_field(value, "description"),
        security_deposit_limit: string_field(value, "securityDepositLimit"),
        security_deposit_return: string_field(value, "securityDepositReturn"),
        rent_increase_notice: string_field(value, "rentIncreaseNotice"),
        entry_notice: string_field(value, "entryNotice"),
        key_statutes: string_list(value, "keyStatutes"),
        common_issues: string_list(value, "commonIssues"),
    };

    if !record.has_route_safe_slug() {
        warn!(key, slug = %record.slug, "skipping state record with an unsafe slug");
        return None;
    }
    Some(record)
}

fn string_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(record: &Value, field: &str) -> Vec<String> {
    record
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
export interface StateInfo {
  name: string;
  keyStatutes: string[];
}

export const stateData: Record<string, StateInfo> = {
  test: {
    name: "Test State",
    keyStatutes: ["A", "B"],
  },
  "new-york": {
    name: 'New York',
    slug: "new-york",
    description: "Rent stabilized units follow the RGB's orders.",
    securityDepositLimit: "1 month's rent",
    securityDepositReturn: "14 days",
    rentIncreaseNotice: "30, 60 or 90 days depending on tenancy length",
    entryNotice: "Reasonable notice",
    commonIssues: [
      "Deposit commingling",
      "Illegal fees",
    ],
    resources: [{ title: "HCR", url: "https://hcr.ny.gov" }],
  },
  unnamed: {
    slug: "unnamed",
    keyStatutes: ["ignored"],
  },
  placeholder: "not a record",
};
"#;

    #[test]
    fn test_extracts_name_and_ordered_arrays() {
        let records = parse_state_records(SOURCE, "stateData").unwrap();
        let test = &records[0];

        assert_eq!(test.name, "Test State");
        assert_eq!(test.key_statutes, vec!["A", "B"]);
        assert!(test.common_issues.is_empty());
    }

    #[test]
    fn test_slug_defaults_to_key() {
        let records = parse_state_records(SOURCE, "stateData").unwrap();
        assert_eq!(records[0].slug, "test");
        assert_eq!(records[1].slug, "new-york");
    }

    #[test]
    fn test_records_without_name_are_excluded() {
        let records = parse_state_records(SOURCE, "stateData").unwrap();
        let keys: Vec<_> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["test", "new-york"]);
    }

    #[test]
    fn test_all_text_fields() {
        let records = parse_state_records(SOURCE, "stateData").unwrap();
        let ny = &records[1];

        assert_eq!(ny.name, "New York");
        assert_eq!(ny.description, "Rent stabilized units follow the RGB's orders.");
        assert_eq!(ny.security_deposit_limit, "1 month's rent");
        assert_eq!(ny.security_deposit_return, "14 days");
        assert_eq!(
            ny.rent_increase_notice,
            "30, 60 or 90 days depending on tenancy length"
        );
        assert_eq!(ny.entry_notice, "Reasonable notice");
        assert_eq!(ny.common_issues, vec!["Deposit commingling", "Illegal fees"]);
    }

    #[test]
    fn test_records_with_unsafe_slugs_are_excluded() {
        let src = r#"const stateData = {
  ohio: { name: "Ohio", slug: "../../outside" },
  texas: { name: "Texas", slug: "tx/dallas" },
  "..": { name: "Dots" },
  utah: { name: "Utah" },
};"#;
        let records = parse_state_records(src, "stateData").unwrap();
        let slugs: Vec<_> = records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["utah"]);
    }

    #[test]
    fn test_non_object_binding_yields_nothing() {
        let records = parse_state_records("const stateData = [];", "stateData").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_state_records(&dir.path().join("stateData.ts"), "stateData").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stateData.ts");
        std::fs::write(&path, "const stateData = { texas: { name: \"Texas\" ").unwrap();

        let err = load_state_records(&path, "stateData").unwrap_err();
        assert!(err.to_string().contains("stateData.ts"));
        assert!(matches!(err, ParserError::Source { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stateData.ts");
        std::fs::write(&path, SOURCE).unwrap();

        let records = load_state_records(&path, "stateData").unwrap();
        assert_eq!(records.len(), 2);
    }
}
