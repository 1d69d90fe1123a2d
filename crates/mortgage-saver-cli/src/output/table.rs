use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

/// Column order for amortization tables.
const SCHEDULE_COLUMNS: [&str; 5] = ["period", "payment", "principal", "interest", "balance"];

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_result_table(result, map),
            _ => println!("{}", field_table(map)),
        },
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    if let Some(Value::Array(rows)) = result.get("rows") {
        println!("{}", schedule_table(rows));
        let totals: Map<String, Value> = result
            .iter()
            .filter(|(k, _)| k.as_str() != "rows")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        println!("{}", field_table(&totals));
    } else {
        println!("{}", field_table(result));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                for (sub, v) in inner {
                    builder.push_record([format!("{key}.{sub}"), format_value(v)]);
                }
            }
            _ => builder.push_record([key.clone(), format_value(val)]),
        }
    }
    builder.build()
}

fn schedule_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS);
    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            SCHEDULE_COLUMNS
                .iter()
                .map(|c| row.get(*c).map(format_value).unwrap_or_default()),
        );
    }
    builder.build()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
