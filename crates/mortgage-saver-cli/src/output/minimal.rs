use serde_json::Value;

/// Fields worth printing on their own, most specific first.
const PRIORITY_KEYS: [&str; 4] = ["breakeven", "monthly_payment", "total_value", "comparison"];

/// Print just the headline figure of a result.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    return format_minimal(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, format_minimal(v)))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Array(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breakeven_wins_over_comparison() {
        let v = json!({
            "result": {
                "comparison": {"difference": "192.84"},
                "breakeven": {"months": "20.7", "years": "1.73"}
            }
        });
        assert_eq!(headline(&v), "months=20.7 years=1.73");
    }

    #[test]
    fn test_monthly_payment_headline() {
        let v = json!({"result": {"rate": "0.065", "monthly_payment": "1264.14"}});
        assert_eq!(headline(&v), "1264.14");
    }
}
