// API surface - one method per REST endpoint
//
// The four resource groups are siblings, not a pipeline: each method
// validates its arguments, composes a `/buckets/{bucket_id}/card_tables/...`
// path, and delegates to exactly one transport verb. Optional fields pass
// through verbatim; nothing is defaulted or schema-checked here.

mod card_tables;
mod cards;
mod columns;
mod steps;

use crate::error::Result;
use crate::transport::Payload;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Optional fields for create/update bodies, forwarded to the service as-is.
pub type Fields = Map<String, Value>;

/// Merge required fields over caller options into a request body.
pub(crate) fn body_with(required: &[(&str, Value)], options: Fields) -> Value {
    let mut body = options;
    for (name, value) in required {
        body.insert((*name).to_string(), value.clone());
    }
    Value::Object(body)
}

/// Decode a single-resource payload.
pub(crate) fn parse<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    Ok(serde_json::from_value(payload.body)?)
}

/// Turn caller query pairs into owned form for the transport.
pub(crate) fn owned_query(query: &[(&str, &str)]) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
