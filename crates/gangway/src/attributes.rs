use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{Error, Result};
use crate::value::Value;

/// User-attribute schema accepted by the SDK's profile-update call.
///
/// Every recognized attribute is an explicit optional field; anything the
/// schema does not recognize lands in `custom`. Null values leave the
/// corresponding field unset rather than failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserAttributes {
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub language_override: Option<String>,
    pub signed_up_at: Option<DateTime<Utc>>,
    pub unsubscribed_from_emails: Option<bool>,
    pub custom: BTreeMap<String, Value>,
}

impl UserAttributes {
    /// Build attributes from a normalized map in one pass.
    ///
    /// - `custom_attributes` must be a sub-map; its entries merge into
    ///   `custom`.
    /// - `companies` is dropped with a warning, not an error. Existing
    ///   integrations depend on that exact behavior.
    /// - Any other unrecognized key is collected into `custom` with a
    ///   warning.
    pub fn from_map(map: &BTreeMap<String, Value>) -> Result<Self> {
        let mut attrs = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "email" => attrs.email = opt_string(key, value)?,
                "userId" => attrs.user_id = opt_string(key, value)?,
                "name" => attrs.name = opt_string(key, value)?,
                "phone" => attrs.phone = opt_string(key, value)?,
                "languageOverride" => attrs.language_override = opt_string(key, value)?,
                "signedUpAt" => attrs.signed_up_at = opt_timestamp(key, value)?,
                "unsubscribedFromEmails" => {
                    attrs.unsubscribed_from_emails = opt_bool(key, value)?
                }
                "custom_attributes" => match value {
                    Value::Map(entries) => {
                        attrs
                            .custom
                            .extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                    Value::Null => {}
                    other => return Err(type_mismatch(key, "map", other)),
                },
                "companies" => {
                    warn!("companies attribute is not supported; dropping it");
                }
                other => {
                    warn!(key = other, "unrecognized attribute key; keeping as custom attribute");
                    attrs.custom.insert(other.to_string(), value.clone());
                }
            }
        }
        Ok(attrs)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn opt_string(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Null => Ok(None),
        other => Err(type_mismatch(key, "string", other)),
    }
}

fn opt_bool(key: &str, value: &Value) -> Result<Option<bool>> {
    match value {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Null => Ok(None),
        other => Err(type_mismatch(key, "boolean", other)),
    }
}

/// `signedUpAt` arrives as epoch milliseconds (already forced to double by
/// the normalizer).
fn opt_timestamp(key: &str, value: &Value) -> Result<Option<DateTime<Utc>>> {
    match value {
        Value::Number(millis) => {
            let millis = *millis as i64;
            DateTime::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| {
                    Error::Precondition(format!("attribute `{key}` is out of range: {millis}"))
                })
        }
        Value::Null => Ok(None),
        other => Err(type_mismatch(key, "number", other)),
    }
}

fn type_mismatch(key: &str, expected: &str, got: &Value) -> Error {
    Error::Precondition(format!(
        "attribute `{key}` expects a {expected}, got {}",
        got.tag()
    ))
}
