//! The SDK seam and the delegating bridge.
//!
//! [`MessengerSdk`] is the contract the wrapped native SDK must satisfy; the
//! repository ships the seam only, never a real SDK. [`Bridge`] is the layer
//! the host runtime talks to: every operation normalizes its payload, checks
//! its preconditions, and makes exactly one call into the SDK.

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::attributes::UserAttributes;
use crate::error::{Error, Result};
use crate::host::HostValue;
use crate::normalize::normalize_entries;
use crate::settings::BootSettings;
use crate::value::Value;
use crate::visibility::Visibility;

/// Failure reported by the wrapped SDK, carrying its reason string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkError(String);

impl SdkError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SdkError {}

pub type SdkResult<T> = std::result::Result<T, SdkError>;

/// Contract the native customer-messaging SDK must satisfy. All methods are
/// synchronous; the SDK reports refusals (missing application context,
/// invalid credentials) as [`SdkError`] reason strings.
pub trait MessengerSdk {
    fn boot(&self, settings: &BootSettings) -> SdkResult<()>;
    fn shutdown(&self) -> SdkResult<()>;
    fn register_device_token(&self, token: &str) -> SdkResult<()>;
    fn update_user(&self, attributes: &UserAttributes) -> SdkResult<()>;
    fn log_event(&self, name: &str, metadata: Option<&BTreeMap<String, Value>>) -> SdkResult<()>;
    fn handle_push_message(&self) -> SdkResult<()>;
    fn display_messenger(&self) -> SdkResult<()>;
    fn hide_messenger(&self) -> SdkResult<()>;
    fn display_message_composer(&self, initial_message: Option<&str>) -> SdkResult<()>;
    fn set_user_hash(&self, user_hash: &str) -> SdkResult<()>;
    fn display_conversations_list(&self) -> SdkResult<()>;
    fn unread_conversation_count(&self) -> SdkResult<u32>;
    fn display_help_center(&self) -> SdkResult<()>;
    fn set_launcher_visibility(&self, visibility: Visibility) -> SdkResult<()>;
    fn set_in_app_message_visibility(&self, visibility: Visibility) -> SdkResult<()>;
    fn set_bottom_padding(&self, padding: i32) -> SdkResult<()>;
}

/// The delegating layer between the host runtime and the SDK.
///
/// Holds no state of its own beyond the SDK handle: no retries, no batching,
/// no caching. Each operation is a single pass-through with argument
/// normalization at the front and error mapping at the back.
pub struct Bridge<S: MessengerSdk> {
    sdk: S,
}

impl<S: MessengerSdk> Bridge<S> {
    pub fn new(sdk: S) -> Self {
        Self { sdk }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Boot a session from a host options map. Requires `apiKey` and
    /// `appId`; boots an identified user when `userId` or `email` is
    /// present, an anonymous visitor otherwise.
    pub fn boot(&self, options: &HostValue) -> Result<()> {
        let map = require_map(options)?;
        let settings = BootSettings::from_map(&map)?;
        self.sdk.boot(&settings).map_err(sdk_refusal)?;
        if settings.is_identified() {
            info!(app_id = %settings.app_id, "booted identified user");
        } else {
            info!(app_id = %settings.app_id, "booted anonymous user");
        }
        Ok(())
    }

    pub fn shutdown(&self) -> Result<()> {
        self.sdk.shutdown().map_err(sdk_refusal)?;
        info!("shutdown");
        Ok(())
    }

    pub fn register_device_token(&self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(Error::Precondition(
                "device token must not be empty".to_string(),
            ));
        }
        self.sdk.register_device_token(token).map_err(sdk_refusal)?;
        info!("registered device token");
        Ok(())
    }

    /// Update the user profile from a host attribute map.
    pub fn update_user(&self, attributes: &HostValue) -> Result<()> {
        let map = require_map(attributes)?;
        let attributes = UserAttributes::from_map(&map)?;
        self.sdk.update_user(&attributes).map_err(sdk_refusal)?;
        info!("updated user attributes");
        Ok(())
    }

    /// Log a named event, with an optional metadata map.
    pub fn log_event(&self, name: &str, metadata: Option<&HostValue>) -> Result<()> {
        match metadata {
            Some(payload) => {
                let map = require_map(payload)?;
                self.sdk.log_event(name, Some(&map)).map_err(sdk_refusal)?;
            }
            None => self.sdk.log_event(name, None).map_err(sdk_refusal)?,
        }
        info!(event = name, "logged event");
        Ok(())
    }

    pub fn handle_push_message(&self) -> Result<()> {
        self.sdk.handle_push_message().map_err(sdk_refusal)
    }

    pub fn display_messenger(&self) -> Result<()> {
        self.sdk.display_messenger().map_err(sdk_refusal)
    }

    pub fn hide_messenger(&self) -> Result<()> {
        self.sdk.hide_messenger().map_err(sdk_refusal)
    }

    pub fn display_message_composer(&self, initial_message: Option<&str>) -> Result<()> {
        self.sdk
            .display_message_composer(initial_message)
            .map_err(sdk_refusal)
    }

    pub fn set_user_hash(&self, user_hash: &str) -> Result<()> {
        self.sdk.set_user_hash(user_hash).map_err(sdk_refusal)
    }

    pub fn display_conversations_list(&self) -> Result<()> {
        self.sdk.display_conversations_list().map_err(sdk_refusal)
    }

    pub fn unread_conversation_count(&self) -> Result<u32> {
        self.sdk.unread_conversation_count().map_err(sdk_refusal)
    }

    pub fn display_help_center(&self) -> Result<()> {
        self.sdk.display_help_center().map_err(sdk_refusal)
    }

    /// Toggle launcher visibility. The host sends a string; anything other
    /// than a case-insensitive `VISIBLE` hides the launcher.
    pub fn set_launcher_visibility(&self, visibility: &str) -> Result<()> {
        let visibility = Visibility::parse(visibility);
        self.sdk
            .set_launcher_visibility(visibility)
            .map_err(sdk_refusal)?;
        info!(%visibility, "set launcher visibility");
        Ok(())
    }

    pub fn set_in_app_message_visibility(&self, visibility: &str) -> Result<()> {
        let visibility = Visibility::parse(visibility);
        self.sdk
            .set_in_app_message_visibility(visibility)
            .map_err(sdk_refusal)?;
        info!(%visibility, "set in-app message visibility");
        Ok(())
    }

    pub fn set_bottom_padding(&self, padding: i32) -> Result<()> {
        self.sdk.set_bottom_padding(padding).map_err(sdk_refusal)?;
        info!(padding, "set bottom padding");
        Ok(())
    }
}

fn require_map(payload: &HostValue) -> Result<BTreeMap<String, Value>> {
    match payload {
        HostValue::Map(entries) => normalize_entries(entries),
        other => Err(Error::Precondition(format!(
            "expected a map payload, got {}",
            other.tag()
        ))),
    }
}

fn sdk_refusal(e: SdkError) -> Error {
    Error::Precondition(e.0)
}
