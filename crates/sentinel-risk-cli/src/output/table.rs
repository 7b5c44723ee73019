use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Assessment output gets a scalar summary table, sub-tables for risk
/// factors and alerts, the next-steps list, and the reasoning block.
/// Anything else falls back to a flat field/value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            print_scalar_fields(map);

            if let Some(Value::Array(factors)) = map.get("risk_factors") {
                if !factors.is_empty() {
                    println!("\nRisk factors:");
                    print_array_table(factors);
                }
            }
            if let Some(Value::Array(alerts)) = map.get("alerts") {
                if !alerts.is_empty() {
                    println!("\nAlerts:");
                    print_array_table(alerts);
                }
            }
            if let Some(Value::Array(steps)) = map.get("next_steps") {
                if !steps.is_empty() {
                    println!("\nNext steps:");
                    for step in steps {
                        if let Value::String(s) = step {
                            println!("  - {}", s);
                        }
                    }
                }
            }
            if let Some(Value::String(reasoning)) = map.get("reasoning") {
                println!("\n{}", reasoning);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

/// Scalar and short-list fields only; the structured fields get their
/// own sections.
fn print_scalar_fields(map: &serde_json::Map<String, Value>) {
    let skipped = ["risk_factors", "alerts", "next_steps", "reasoning"];

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if skipped.contains(&key.as_str()) {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("  {}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let parts: Vec<String> = arr.iter().map(format_value).collect();
            parts.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_value_flattens_arrays() {
        let value = json!(["entry:initial_screening", "decision:approve"]);
        assert_eq!(
            format_value(&value),
            "entry:initial_screening, decision:approve"
        );
    }
}
