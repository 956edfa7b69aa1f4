use serde_json::Value;

use crate::engine::core::OrderStatus;
use crate::engine::schema::fields::ProjectedRecord;
use crate::engine::schema::types::{TsValue, ValidatedRecord};

/// Validate a projected record and coerce each slot to its target type.
///
/// Checks run field by field in a fixed order (ts, name, qty, pricemode,
/// linetotal, status) and stop at the first failure, so an invalid row
/// surfaces exactly one issue message.
pub fn validate(projected: &ProjectedRecord) -> Result<ValidatedRecord, String> {
    let ts = coerce_ts(projected.ts.as_ref())?;
    let name = coerce_text(projected.name.as_ref(), "name")?;
    let qty = coerce_number(projected.qty.as_ref(), "qty")?;
    let pricemode = coerce_text(Some(&projected.pricemode), "pricemode")?;
    let linetotal = coerce_number(projected.linetotal.as_ref(), "linetotal")?;
    let status = coerce_status(projected.status.as_ref())?;

    Ok(ValidatedRecord {
        ts,
        name,
        qty,
        pricemode,
        linetotal,
        status,
    })
}

fn coerce_ts(value: Option<&Value>) -> Result<TsValue, String> {
    match value {
        None => Err("ts is required".to_string()),
        Some(Value::String(s)) => Ok(TsValue::Text(s.clone())),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(TsValue::Number)
            .ok_or_else(|| "ts must be a finite number".to_string()),
        Some(_) => Err("ts must be a string or number".to_string()),
    }
}

fn coerce_text(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value {
        None => Err(format!("{field} is required")),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(format!("{field} is required"))
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(_) => Err(format!("{field} must be a string")),
    }
}

/// Accept a number or a numeric string. Strings have grouping commas
/// stripped before parsing; the parsed value must be finite.
fn coerce_number(value: Option<&Value>, field: &str) -> Result<f64, String> {
    match value {
        None => Err(format!("{field} is required")),
        Some(Value::Number(n)) => {
            let parsed = n
                .as_f64()
                .ok_or_else(|| format!("{field} must be finite"))?;
            if parsed.is_finite() {
                Ok(parsed)
            } else {
                Err(format!("{field} must be finite"))
            }
        }
        Some(Value::String(raw)) => {
            let cleaned = raw.replace(',', "");
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                return Err(format!("{field} is required"));
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(parsed),
                _ => Err(format!("unable to parse number from \"{raw}\" for {field}")),
            }
        }
        Some(_) => Err(format!("{field} must be a number or numeric string")),
    }
}

/// Alias the raw token onto the status enum, failing closed: anything
/// outside the recognized token set is rejected, never silently coerced.
fn coerce_status(value: Option<&Value>) -> Result<OrderStatus, String> {
    match value {
        None => Err("status is required".to_string()),
        Some(Value::String(raw)) => OrderStatus::from_token(raw)
            .ok_or_else(|| format!("unrecognized status \"{}\"", raw.trim())),
        Some(_) => Err("status must be a string".to_string()),
    }
}
