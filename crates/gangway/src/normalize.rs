//! The value-tree normalizer: converts a dynamically-typed host payload into
//! the canonical six-variant [`Value`] tree. Purely functional, stateless
//! across calls; each invocation owns its input snapshot and its output.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::host::HostValue;
use crate::value::{Path, Value};

/// Defensive cap on nesting depth. Real payloads sit far below this; a
/// payload that reaches it would otherwise risk exhausting the stack.
pub const MAX_DEPTH: usize = 128;

/// Normalize one host node into a [`Value`] tree.
///
/// Total over the supported host tags; a `Bytes` node anywhere in the tree
/// fails the whole conversion with the exact key/index path to it.
pub fn normalize(input: &HostValue) -> Result<Value> {
    let mut path = Path::root();
    normalize_at(input, &mut path, 0)
}

/// Normalize a map-rooted payload into its key/value form directly.
pub fn normalize_entries(entries: &[(String, HostValue)]) -> Result<BTreeMap<String, Value>> {
    let mut path = Path::root();
    let mut out = BTreeMap::new();
    normalize_map_into(entries, &mut out, &mut path, 0)?;
    Ok(out)
}

fn normalize_at(node: &HostValue, path: &mut Path, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded {
            path: path.clone(),
            limit: MAX_DEPTH,
        });
    }
    match node {
        HostValue::Null => Ok(Value::Null),
        HostValue::Bool(b) => Ok(Value::Bool(*b)),
        // All numerics collapse to double precision. Deliberate: downstream
        // consumers accept doubles only.
        HostValue::Int(i) => Ok(Value::Number(*i as f64)),
        HostValue::Double(d) => Ok(Value::Number(*d)),
        HostValue::String(s) => Ok(Value::String(s.clone())),
        HostValue::Map(entries) => {
            let mut out = BTreeMap::new();
            normalize_map_into(entries, &mut out, path, depth)?;
            Ok(Value::Map(out))
        }
        HostValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push_index(index);
                let normalized = normalize_at(item, path, depth + 1)?;
                path.pop();
                out.push(normalized);
            }
            Ok(Value::List(out))
        }
        HostValue::Bytes(_) => Err(Error::UnsupportedType {
            path: path.clone(),
            tag: node.tag(),
        }),
    }
}

fn normalize_map_into(
    entries: &[(String, HostValue)],
    out: &mut BTreeMap<String, Value>,
    path: &mut Path,
    depth: usize,
) -> Result<()> {
    for (key, child) in entries {
        path.push_key(key);
        let normalized = normalize_at(child, path, depth + 1)?;
        path.pop();
        // Duplicate keys: last write wins, matching host object semantics.
        out.insert(key.clone(), normalized);
    }
    Ok(())
}
