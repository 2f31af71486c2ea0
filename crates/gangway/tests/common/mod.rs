#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use gangway::{
    BootSettings, MessengerSdk, SdkError, SdkResult, UserAttributes, Value, Visibility,
};

/// Every call the bridge can make into the SDK, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkCall {
    Boot(BootSettings),
    Shutdown,
    RegisterDeviceToken(String),
    UpdateUser(UserAttributes),
    LogEvent(String, Option<BTreeMap<String, Value>>),
    HandlePushMessage,
    DisplayMessenger,
    HideMessenger,
    DisplayMessageComposer(Option<String>),
    SetUserHash(String),
    DisplayConversationsList,
    UnreadConversationCount,
    DisplayHelpCenter,
    SetLauncherVisibility(Visibility),
    SetInAppMessageVisibility(Visibility),
    SetBottomPadding(i32),
}

/// Test double for the SDK seam: records every call, optionally refusing
/// all of them with a fixed reason.
#[derive(Default)]
pub struct RecordingSdk {
    calls: Mutex<Vec<SdkCall>>,
    refuse_with: Option<String>,
    unread: u32,
}

impl RecordingSdk {
    pub fn refusing(reason: &str) -> Self {
        Self {
            refuse_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with_unread(unread: u32) -> Self {
        Self {
            unread,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SdkCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SdkCall) -> SdkResult<()> {
        if let Some(reason) = &self.refuse_with {
            return Err(SdkError::new(reason.clone()));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl MessengerSdk for RecordingSdk {
    fn boot(&self, settings: &BootSettings) -> SdkResult<()> {
        self.record(SdkCall::Boot(settings.clone()))
    }

    fn shutdown(&self) -> SdkResult<()> {
        self.record(SdkCall::Shutdown)
    }

    fn register_device_token(&self, token: &str) -> SdkResult<()> {
        self.record(SdkCall::RegisterDeviceToken(token.to_string()))
    }

    fn update_user(&self, attributes: &UserAttributes) -> SdkResult<()> {
        self.record(SdkCall::UpdateUser(attributes.clone()))
    }

    fn log_event(&self, name: &str, metadata: Option<&BTreeMap<String, Value>>) -> SdkResult<()> {
        self.record(SdkCall::LogEvent(name.to_string(), metadata.cloned()))
    }

    fn handle_push_message(&self) -> SdkResult<()> {
        self.record(SdkCall::HandlePushMessage)
    }

    fn display_messenger(&self) -> SdkResult<()> {
        self.record(SdkCall::DisplayMessenger)
    }

    fn hide_messenger(&self) -> SdkResult<()> {
        self.record(SdkCall::HideMessenger)
    }

    fn display_message_composer(&self, initial_message: Option<&str>) -> SdkResult<()> {
        self.record(SdkCall::DisplayMessageComposer(
            initial_message.map(str::to_string),
        ))
    }

    fn set_user_hash(&self, user_hash: &str) -> SdkResult<()> {
        self.record(SdkCall::SetUserHash(user_hash.to_string()))
    }

    fn display_conversations_list(&self) -> SdkResult<()> {
        self.record(SdkCall::DisplayConversationsList)
    }

    fn unread_conversation_count(&self) -> SdkResult<u32> {
        self.record(SdkCall::UnreadConversationCount)?;
        Ok(self.unread)
    }

    fn display_help_center(&self) -> SdkResult<()> {
        self.record(SdkCall::DisplayHelpCenter)
    }

    fn set_launcher_visibility(&self, visibility: Visibility) -> SdkResult<()> {
        self.record(SdkCall::SetLauncherVisibility(visibility))
    }

    fn set_in_app_message_visibility(&self, visibility: Visibility) -> SdkResult<()> {
        self.record(SdkCall::SetInAppMessageVisibility(visibility))
    }

    fn set_bottom_padding(&self, padding: i32) -> SdkResult<()> {
        self.record(SdkCall::SetBottomPadding(padding))
    }
}
