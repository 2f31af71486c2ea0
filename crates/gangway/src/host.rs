/// A value as the host runtime hands it across the bridge, before
/// normalization. The variants mirror the host's runtime type tags, including
/// the integer/double split and the one tag the bridge does not accept
/// (`Bytes` — host byte buffers have no SDK representation).
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    /// Ordered entry list. The host may deliver duplicate keys; the last
    /// occurrence wins when normalized.
    Map(Vec<(String, HostValue)>),
    Array(Vec<HostValue>),
    Bytes(Vec<u8>),
}

impl HostValue {
    /// Tag name used in diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Int(_) => "integer",
            HostValue::Double(_) => "double",
            HostValue::String(_) => "string",
            HostValue::Map(_) => "map",
            HostValue::Array(_) => "array",
            HostValue::Bytes(_) => "bytes",
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, HostValue::Map(_))
    }
}

/// Total conversion: every JSON document is a valid host payload. JSON
/// integers arrive as `Int`, floats as `Double`; JSON cannot produce `Bytes`.
#[cfg(feature = "json")]
impl From<serde_json::Value> for HostValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => HostValue::Null,
            serde_json::Value::Bool(b) => HostValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    HostValue::Int(i)
                } else {
                    // u64 beyond i64::MAX or a float; either way the host
                    // numeric model is double precision.
                    HostValue::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => HostValue::String(s),
            serde_json::Value::Array(items) => {
                HostValue::Array(items.into_iter().map(HostValue::from).collect())
            }
            serde_json::Value::Object(entries) => HostValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, HostValue::from(v)))
                    .collect(),
            ),
        }
    }
}
