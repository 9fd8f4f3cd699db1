//! Call/response boundary.
//!
//! External harnesses address operations by wire name with a JSON
//! object of named arguments, and read result slots back by slot
//! name. Argument decoding is strict: a missing key, a wrong JSON
//! type, a number the parameter type cannot represent, or non-ASCII
//! string content is an [`OpsError::InvalidArgument`] and leaves
//! every slot unchanged. Out-of-range indices and absent needles are
//! not errors — those cases have defined results in the operations
//! themselves.
//!
//! Wire names mirror the operation table: `setString`,
//! `setLowerCaseString`, `setUpperCaseString`, `setLength`,
//! `setCharAt`, `setStartsWith`, `setEndsWith`, `setIncludes`,
//! `setEquals`, `setIndexOf`, `setLastIndexOf`, `setSlice`,
//! `setSplit`. Slot names: `string`, `uint`, `bool`, `array`.

use serde_json::Value;

use crate::error::OpsError;
use crate::ops::StringOps;

/// Applies the operation named `operation` to `ops` with JSON-encoded
/// `inputs`.
///
/// All arguments are decoded before any slot is written, so a failed
/// call observably never ran.
pub fn invoke(ops: &mut StringOps, operation: &str, inputs: &Value) -> Result<(), OpsError> {
    match operation {
        "setString" => {
            let s = str_arg(operation, inputs, "s")?;
            ops.set_string(&s);
        }
        "setLowerCaseString" => {
            let s = str_arg(operation, inputs, "s")?;
            ops.set_lower_case_string(&s);
        }
        "setUpperCaseString" => {
            let s = str_arg(operation, inputs, "s")?;
            ops.set_upper_case_string(&s);
        }
        "setLength" => {
            let s = str_arg(operation, inputs, "s")?;
            ops.set_length(&s);
        }
        "setCharAt" => {
            let s = str_arg(operation, inputs, "s")?;
            let i = uint_arg(operation, inputs, "i")?;
            ops.set_char_at(&s, i);
        }
        "setStartsWith" => {
            let s = str_arg(operation, inputs, "s")?;
            let prefix = str_arg(operation, inputs, "prefix")?;
            ops.set_starts_with(&s, &prefix);
        }
        "setEndsWith" => {
            let s = str_arg(operation, inputs, "s")?;
            let suffix = str_arg(operation, inputs, "suffix")?;
            ops.set_ends_with(&s, &suffix);
        }
        "setIncludes" => {
            let s = str_arg(operation, inputs, "s")?;
            let needle = str_arg(operation, inputs, "needle")?;
            ops.set_includes(&s, &needle);
        }
        "setEquals" => {
            let s = str_arg(operation, inputs, "s")?;
            let other = str_arg(operation, inputs, "other")?;
            ops.set_equals(&s, &other);
        }
        "setIndexOf" => {
            let s = str_arg(operation, inputs, "s")?;
            let needle = str_arg(operation, inputs, "needle")?;
            ops.set_index_of(&s, &needle);
        }
        "setLastIndexOf" => {
            let s = str_arg(operation, inputs, "s")?;
            let needle = str_arg(operation, inputs, "needle")?;
            ops.set_last_index_of(&s, &needle);
        }
        "setSlice" => {
            let s = str_arg(operation, inputs, "s")?;
            let start = int_arg(operation, inputs, "start")?;
            let end = int_arg(operation, inputs, "end")?;
            ops.set_slice(&s, start, end);
        }
        "setSplit" => {
            let s = str_arg(operation, inputs, "s")?;
            let delimiter = str_arg(operation, inputs, "delimiter")?;
            ops.set_split(&s, &delimiter);
        }
        other => return Err(OpsError::UnknownOperation(other.to_string())),
    }
    Ok(())
}

/// Reads the current value of the named result slot.
///
/// `array` reads require an element `index`; an index past the end of
/// the current array is transport-level misuse and fails, unlike the
/// in-operation boundary cases.
pub fn read(ops: &StringOps, slot: &str, index: Option<usize>) -> Result<Value, OpsError> {
    match slot {
        "string" => Ok(Value::String(render_bytes(ops.string_result()))),
        "uint" => Ok(Value::from(ops.uint_result())),
        "bool" => Ok(Value::Bool(ops.bool_result())),
        "array" => {
            let i = index
                .ok_or_else(|| OpsError::invalid_argument("read", "array reads require an element index"))?;
            let elem = ops.array_result(i).ok_or_else(|| {
                OpsError::invalid_argument(
                    "read",
                    format!("array index {i} out of bounds (len {})", ops.array_len()),
                )
            })?;
            Ok(Value::String(render_bytes(elem)))
        }
        other => Err(OpsError::UnknownSlot(other.to_string())),
    }
}

/// Decodes a required ASCII string argument into its byte sequence.
fn str_arg(operation: &str, inputs: &Value, key: &str) -> Result<Vec<u8>, OpsError> {
    let raw = inputs.get(key).and_then(Value::as_str).ok_or_else(|| {
        OpsError::invalid_argument(operation, format!("missing or non-string argument '{key}'"))
    })?;
    if !raw.is_ascii() {
        return Err(OpsError::invalid_argument(
            operation,
            format!("argument '{key}' contains non-ASCII code points"),
        ));
    }
    Ok(raw.as_bytes().to_vec())
}

/// Decodes a required unsigned integer argument.
///
/// Fractional, negative, and out-of-range numbers are rejected, never
/// clamped.
fn uint_arg(operation: &str, inputs: &Value, key: &str) -> Result<u64, OpsError> {
    inputs.get(key).and_then(Value::as_u64).ok_or_else(|| {
        OpsError::invalid_argument(
            operation,
            format!("argument '{key}' is not a representable unsigned integer"),
        )
    })
}

/// Decodes a required signed integer argument (negative allowed).
fn int_arg(operation: &str, inputs: &Value, key: &str) -> Result<i64, OpsError> {
    inputs.get(key).and_then(Value::as_i64).ok_or_else(|| {
        OpsError::invalid_argument(
            operation,
            format!("argument '{key}' is not a representable integer"),
        )
    })
}

/// Renders a stored byte sequence back into a JSON string.
///
/// Slots only ever hold bytes that entered through [`str_arg`], so
/// this cannot lose information; the lossy conversion keeps the read
/// path total.
fn render_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoke_set_string_and_read() {
        let mut ops = StringOps::new();
        invoke(&mut ops, "setString", &json!({"s": "Hello World!"})).unwrap();
        let value = read(&ops, "string", None).unwrap();
        assert_eq!(value, json!("Hello World!"));
    }

    #[test]
    fn test_invoke_slice_negative_bounds() {
        let mut ops = StringOps::new();
        invoke(
            &mut ops,
            "setSlice",
            &json!({"s": "Hello World!", "start": 0, "end": -4}),
        )
        .unwrap();
        assert_eq!(read(&ops, "string", None).unwrap(), json!("Hello Wo"));
    }

    #[test]
    fn test_invoke_split_and_indexed_read() {
        let mut ops = StringOps::new();
        invoke(&mut ops, "setSplit", &json!({"s": "Hello World!", "delimiter": "o"})).unwrap();
        assert_eq!(read(&ops, "array", Some(0)).unwrap(), json!("Hell"));
        assert_eq!(read(&ops, "array", Some(2)).unwrap(), json!("rld!"));
        assert!(read(&ops, "array", Some(3)).is_err());
        assert!(read(&ops, "array", None).is_err());
    }

    #[test]
    fn test_invoke_unknown_operation() {
        let mut ops = StringOps::new();
        let err = invoke(&mut ops, "setReverse", &json!({})).unwrap_err();
        assert!(matches!(err, OpsError::UnknownOperation(_)));
    }

    #[test]
    fn test_read_unknown_slot() {
        let ops = StringOps::new();
        assert!(matches!(
            read(&ops, "float", None),
            Err(OpsError::UnknownSlot(_))
        ));
    }

    #[test]
    fn test_invoke_missing_argument() {
        let mut ops = StringOps::new();
        let err = invoke(&mut ops, "setCharAt", &json!({"s": "abc"})).unwrap_err();
        assert!(matches!(err, OpsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_invoke_fractional_index_rejected() {
        let mut ops = StringOps::new();
        let err = invoke(&mut ops, "setCharAt", &json!({"s": "abc", "i": 1.5})).unwrap_err();
        assert!(matches!(err, OpsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_invoke_negative_char_at_index_rejected() {
        let mut ops = StringOps::new();
        let err = invoke(&mut ops, "setCharAt", &json!({"s": "abc", "i": -1})).unwrap_err();
        assert!(matches!(err, OpsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_invoke_non_ascii_rejected() {
        let mut ops = StringOps::new();
        let err = invoke(&mut ops, "setString", &json!({"s": "héllo"})).unwrap_err();
        assert!(matches!(err, OpsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_failed_invoke_leaves_slots_unchanged() {
        let mut ops = StringOps::new();
        invoke(&mut ops, "setString", &json!({"s": "before"})).unwrap();
        invoke(&mut ops, "setLength", &json!({"s": "before"})).unwrap();

        // Second argument is malformed; the call must not run at all.
        let err = invoke(&mut ops, "setCharAt", &json!({"s": "after", "i": "zero"}));
        assert!(err.is_err());
        assert_eq!(read(&ops, "string", None).unwrap(), json!("before"));
        assert_eq!(read(&ops, "uint", None).unwrap(), json!(6));
    }

    #[test]
    fn test_not_found_sentinel_round_trips_as_u64_max() {
        let mut ops = StringOps::new();
        invoke(&mut ops, "setIndexOf", &json!({"s": "abc", "needle": "z"})).unwrap();
        assert_eq!(read(&ops, "uint", None).unwrap(), json!(u64::MAX));
    }
}
