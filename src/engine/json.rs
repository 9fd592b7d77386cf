//! JSON request decoding for UI callers.
//!
//! A UI layer sends one flat object per call: the operation tag, the raw
//! value, and the options of that operation side by side.
//!
//! ```json
//! { "op": "toParent", "value": "123456789", "decimals": 2, "group": true }
//! ```

use num_bigint::BigInt;
use serde_json::value::RawValue;
use serde_json::Value;

use super::AmountEngine;
use crate::config::{AmountRequest, Operation};
use crate::domain::{AmountInput, AmountOutput};
use crate::error::{AmountError, Result};
use crate::traits::AssetSource;

/// The `value` slot, read as its literal JSON text.
#[derive(serde::Deserialize)]
struct ValueSlot<'a> {
    #[serde(borrow, default)]
    value: Option<&'a RawValue>,
}

fn options_error(op: Operation, e: &serde_json::Error) -> AmountError {
    AmountError::Generic(format!("invalid {op} options: {e}"))
}

fn value_error(op: Operation, value: &str) -> AmountError {
    match op {
        Operation::ToBase => {
            AmountError::InvalidDecimal(format!("{value} is not a decimal amount"))
        }
        Operation::ToParent | Operation::Format => {
            AmountError::InvalidInteger(format!("{value} is not an integer amount"))
        }
    }
}

/// Decodes the `value` literal without going through `f64` for integers.
///
/// Integer literals of any length become [`AmountInput::Int`] or
/// [`AmountInput::Big`]; other numbers become [`AmountInput::Float`] and
/// strings [`AmountInput::Text`].
fn decode_value(op: Operation, raw: Option<&RawValue>) -> Result<AmountInput> {
    let Some(raw) = raw else {
        return Err(value_error(op, "null"));
    };
    let literal = raw.get();
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(v) = literal.parse::<i128>() {
            return Ok(AmountInput::Int(v));
        }
        return BigInt::parse_bytes(literal.as_bytes(), 10)
            .map(AmountInput::Big)
            .ok_or_else(|| value_error(op, literal));
    }
    match serde_json::from_str::<Value>(literal) {
        Ok(Value::String(text)) => Ok(AmountInput::Text(text)),
        Ok(Value::Number(n)) => n
            .as_f64()
            .map(AmountInput::Float)
            .ok_or_else(|| value_error(op, literal)),
        _ => Err(value_error(op, literal)),
    }
}

/// Decodes a JSON request object into an [`AmountRequest`].
///
/// # Errors
///
/// - [`AmountError::Generic`] if the text is not a JSON object, the `op`
///   tag is missing or unknown, or the options do not decode.
/// - [`AmountError::InvalidDecimal`] / [`AmountError::InvalidInteger`] if
///   `value` is missing or not a number or string.
pub fn decode_request(json: &str) -> Result<AmountRequest> {
    let raw: Value = serde_json::from_str(json)
        .map_err(|e| AmountError::Generic(format!("invalid request: {e}")))?;
    let op: Operation = raw
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| AmountError::Generic("request has no 'op' tag".to_owned()))?
        .parse()?;

    let slot: ValueSlot<'_> = serde_json::from_str(json)
        .map_err(|e| AmountError::Generic(format!("invalid request: {e}")))?;
    let value = decode_value(op, slot.value)?;

    Ok(match op {
        Operation::ToBase => AmountRequest::ToBase {
            value,
            options: serde_json::from_value(raw).map_err(|e| options_error(op, &e))?,
        },
        Operation::ToParent => AmountRequest::ToParent {
            value,
            options: serde_json::from_value(raw).map_err(|e| options_error(op, &e))?,
        },
        Operation::Format => AmountRequest::Format {
            value,
            options: serde_json::from_value(raw).map_err(|e| options_error(op, &e))?,
        },
    })
}

impl<A: AssetSource> AmountEngine<A> {
    /// Decodes and executes a JSON request object.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitscale::engine::AmountEngine;
    ///
    /// let engine: AmountEngine = AmountEngine::default();
    /// let out = engine
    ///     .execute_json(r#"{"op":"toParent","value":"123456789","decimals":2,"group":true}"#)
    ///     .expect("valid request");
    /// assert_eq!(out.as_text(), Some("1,234,567.89"));
    /// ```
    ///
    /// # Errors
    ///
    /// See [`decode_request`] and [`AmountEngine::execute`].
    pub fn execute_json(&self, json: &str) -> Result<AmountOutput> {
        self.execute(&decode_request(json)?)
    }
}
