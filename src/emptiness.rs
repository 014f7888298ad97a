use serde_json::Value;

/// Classifies a JSON value as empty or non-empty.
///
/// A value is empty when it is `null`, a string with no non-whitespace
/// content, an array with zero elements, or an object with zero keys.
/// Strings are trimmed before the length check: leading and trailing
/// Unicode whitespace (`char::is_whitespace`, as stripped by
/// [`str::trim`]) does not count as content. Booleans and numbers are
/// never empty; `false` and `0` are values, not absences.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
