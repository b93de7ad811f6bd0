//! Snapshot flattening: mapping → ordered `Pair` sequence, floats only.

use super::common::{Pair, ParamMap};
use serde_json::Value;

/// Flattens a snapshot into pairs, in the snapshot's own order.
/// Only 64-bit float values are kept; integers, strings, booleans, nulls
/// and nested structures are dropped without error — the consuming
/// ProtoFlux graph on the client side only understands floats.
/// Called by: `WsReporter::send`
pub fn flatten(snapshot: &ParamMap) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for (param_name, param_value) in snapshot {
        if let Value::Number(number) = param_value
            && number.is_f64()
            && let Some(value) = number.as_f64()
        {
            pairs.push(Pair::new(param_name.clone(), value));
        }
    }
    pairs
}
