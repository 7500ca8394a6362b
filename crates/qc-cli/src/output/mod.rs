use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

mod rows;
pub mod table;

pub use rows::TableRows;

/// Render a serializable response in the requested format.
///
/// Tables show an object as sorted key/value pairs and an array of objects as
/// one row per element.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(value_table(&serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Like [`output`], but tables use the response's own row layout.
pub fn output_rows<T: Serialize + TableRows>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => {
            let rows = value.rows();
            if rows.is_empty() {
                String::from("(no rows)")
            } else {
                table::render(T::HEADERS, &rows, options())
            }
        }
        _ => render(value, format)?,
    };
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn value_table(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect();
            rows.sort();
            table::render(&["key", "value"], &rows, options())
        }
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => array_table(items),
        scalar => table::render(&["value"], &[vec![cell(scalar)]], options()),
    }
}

fn array_table(items: &[Value]) -> String {
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return table::render(&["value"], &rows, options());
    }

    let mut headers: Vec<&str> = items
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|map| map.keys().map(String::as_str))
        .collect();
    headers.sort_unstable();
    headers.dedup();

    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    table::render(headers.as_slice(), &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        rule_no: u32,
        na_reason: Option<&'static str>,
    }

    fn example() -> Example {
        Example {
            id: "rule-4",
            rule_no: 4,
            na_reason: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "rule-4");
        assert_eq!(parsed["rule_no"], 4);
    }

    #[test]
    fn raw_render_is_single_line() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"rule_no\":4"));
    }

    #[test]
    fn object_table_lists_sorted_keys() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].starts_with("id"));
        assert!(lines[3].starts_with("na_reason"));
        assert!(lines[4].starts_with("rule_no"));
    }

    #[test]
    fn array_table_has_one_row_per_item() {
        let items = vec![example(), example()];
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().next().is_some_and(|line| line.contains("rule_no")));
    }

    #[test]
    fn empty_array_table() {
        let items: Vec<Example> = Vec::new();
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
