//! Field helpers shared by every record kind.
//!
//! Records are free-form JSON objects. The only structure the domain
//! imposes is the `id` key, owned by the server.

use serde_json::{Map, Value};

/// Client-supplied record fields, in the order the client sent them.
pub type Fields = Map<String, Value>;

/// Key under which every record stores its identifier.
pub const ID_KEY: &str = "id";

/// Whether `value` counts as present for required-field checks.
///
/// `null`, `false`, `0`, `NaN` and the empty string are absent; everything
/// else, including empty arrays and objects, is present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Shallow-merge `patch` into `target`: keys in `patch` overwrite, other
/// keys are kept. The `id` key is never touched.
pub fn merge_fields(target: &mut Fields, patch: Fields) {
    for (key, value) in patch {
        if key == ID_KEY {
            continue;
        }
        target.insert(key, value);
    }
}

/// Drop any client-supplied `id` so the generated one wins.
#[must_use]
pub fn strip_id(mut fields: Fields) -> Fields {
    fields.shift_remove(ID_KEY);
    fields
}
