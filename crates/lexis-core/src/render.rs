//! Projection of analysis responses into view targets.
//!
//! Nothing here validates or rewrites server content. Values are written
//! as received; escaping is the job of whichever sink turns them into markup.

use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{KeywordListResponse, KeywordRow};
use crate::view::{KeywordTable, ResultField};

/// Write `response[result_field]` into `target`.
///
/// Returns `true` when the field was present and written. A missing or
/// non-string field leaves the target untouched.
pub fn project_scalar<F>(response: &Value, result_field: &str, target: &mut F) -> bool
where
    F: ResultField + ?Sized,
{
    match response.get(result_field) {
        Some(Value::String(value)) => {
            target.set_value(value);
            true
        }
        Some(other) => {
            warn!(field = result_field, kind = json_kind(other), "Result field is not a string");
            false
        }
        None => {
            debug!(field = result_field, "Result field missing from response");
            false
        }
    }
}

/// Append one row per entry of `response.keywords`, in received order.
///
/// Returns the number of rows appended.
pub fn project_keywords<K>(response: &Value, target: &mut K) -> usize
where
    K: KeywordTable + ?Sized,
{
    let list = match KeywordListResponse::deserialize_from(response) {
        Some(list) => list,
        None => return 0,
    };

    let count = list.keywords.len();
    for keyword in list.keywords {
        target.append_row(KeywordRow::from(keyword));
    }
    count
}

impl KeywordListResponse {
    fn deserialize_from(response: &Value) -> Option<Self> {
        match serde_json::from_value::<Self>(response.clone()) {
            Ok(list) => Some(list),
            Err(e) => {
                warn!(error = %e, "Keyword list has an unexpected shape");
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
