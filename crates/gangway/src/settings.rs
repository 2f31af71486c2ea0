use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value::Value;

/// Credential/session record for booting the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootSettings {
    pub api_key: String,
    pub app_id: String,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub user_hash: Option<String>,
}

impl BootSettings {
    /// Extract boot settings from a normalized options map.
    ///
    /// `apiKey` and `appId` are required and must be non-empty strings; a
    /// missing, empty, or non-string credential is a precondition failure.
    /// The remaining keys are optional, with empty strings treated as absent.
    pub fn from_map(map: &BTreeMap<String, Value>) -> Result<Self> {
        let api_key = string_field(map, "apiKey");
        let app_id = string_field(map, "appId");
        let (Some(api_key), Some(app_id)) = (api_key, app_id) else {
            return Err(Error::Precondition("invalid apiKey or appId".to_string()));
        };
        Ok(Self {
            api_key,
            app_id,
            user_id: string_field(map, "userId"),
            email: string_field(map, "email"),
            user_hash: string_field(map, "userHash"),
        })
    }

    /// Whether the boot registers an identified user. Without a user id or
    /// email the SDK boots an anonymous visitor session.
    pub fn is_identified(&self) -> bool {
        self.user_id.is_some() || self.email.is_some()
    }
}

fn string_field(map: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
