#![cfg(feature = "json")]

mod common;

use serde_json::json;

use common::{RecordingSdk, SdkCall};
use gangway::{Bridge, Completion, Error, HostValue, Value, Visibility};

fn host(payload: serde_json::Value) -> HostValue {
    HostValue::from(payload)
}

#[test]
fn boot_identified_user() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.boot(&host(json!({
        "apiKey": "key",
        "appId": "app",
        "userId": "user-1",
        "userHash": "hash"
    })))?;

    let calls = bridge.sdk().calls();
    let SdkCall::Boot(settings) = &calls[0] else {
        panic!("expected a boot call, got {calls:?}");
    };
    assert_eq!(settings.api_key, "key");
    assert_eq!(settings.app_id, "app");
    assert_eq!(settings.user_id.as_deref(), Some("user-1"));
    assert_eq!(settings.user_hash.as_deref(), Some("hash"));
    assert!(settings.is_identified());
    Ok(())
}

#[test]
fn boot_anonymous_when_no_identity() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.boot(&host(json!({"apiKey": "key", "appId": "app"})))?;

    let SdkCall::Boot(settings) = &bridge.sdk().calls()[0] else {
        panic!("expected a boot call");
    };
    assert!(!settings.is_identified());
    Ok(())
}

#[test]
fn boot_requires_credentials() {
    let bridge = Bridge::new(RecordingSdk::default());
    for payload in [
        json!({"appId": "app"}),
        json!({"apiKey": "", "appId": "app"}),
        json!({"apiKey": "key"}),
        json!({"apiKey": 7, "appId": "app"}),
    ] {
        let err = bridge.boot(&host(payload)).unwrap_err();
        assert_eq!(err.to_string(), "precondition failed: invalid apiKey or appId");
    }
    assert!(bridge.sdk().calls().is_empty());
}

#[test]
fn boot_rejects_non_map_payload() {
    let bridge = Bridge::new(RecordingSdk::default());
    let err = bridge.boot(&host(json!(["not", "a", "map"]))).unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}

#[test]
fn update_user_passes_parsed_attributes() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.update_user(&host(json!({
        "name": "Robin",
        "custom_attributes": {"plan": "pro"}
    })))?;

    let SdkCall::UpdateUser(attrs) = &bridge.sdk().calls()[0] else {
        panic!("expected an update_user call");
    };
    assert_eq!(attrs.name.as_deref(), Some("Robin"));
    assert_eq!(
        attrs.custom.get("plan"),
        Some(&Value::String("pro".to_string()))
    );
    Ok(())
}

#[test]
fn update_user_propagates_normalizer_errors() {
    let bridge = Bridge::new(RecordingSdk::default());
    let err = bridge
        .update_user(&HostValue::Map(vec![(
            "avatar".to_string(),
            HostValue::Bytes(vec![1, 2, 3]),
        )]))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
    assert!(bridge.sdk().calls().is_empty());
}

#[test]
fn log_event_with_and_without_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.log_event("opened", None)?;
    bridge.log_event("purchased", Some(&host(json!({"sku": "x-1", "qty": 2}))))?;

    let calls = bridge.sdk().calls();
    assert_eq!(calls[0], SdkCall::LogEvent("opened".to_string(), None));
    let SdkCall::LogEvent(name, Some(meta)) = &calls[1] else {
        panic!("expected metadata on the second event");
    };
    assert_eq!(name, "purchased");
    assert_eq!(meta.get("qty"), Some(&Value::Number(2.0)));
    Ok(())
}

#[test]
fn register_device_token_rejects_empty() {
    let bridge = Bridge::new(RecordingSdk::default());
    assert!(bridge.register_device_token("").is_err());
    assert!(bridge.register_device_token("tok-1").is_ok());
    assert_eq!(
        bridge.sdk().calls(),
        vec![SdkCall::RegisterDeviceToken("tok-1".to_string())]
    );
}

#[test]
fn visibility_strings_parse_case_insensitively() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.set_launcher_visibility("visible")?;
    bridge.set_launcher_visibility("VISIBLE")?;
    bridge.set_launcher_visibility("gone")?;
    bridge.set_in_app_message_visibility("hidden")?;

    assert_eq!(
        bridge.sdk().calls(),
        vec![
            SdkCall::SetLauncherVisibility(Visibility::Visible),
            SdkCall::SetLauncherVisibility(Visibility::Visible),
            SdkCall::SetLauncherVisibility(Visibility::Hidden),
            SdkCall::SetInAppMessageVisibility(Visibility::Hidden),
        ]
    );
    Ok(())
}

#[test]
fn ui_operations_delegate_once_each() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::default());
    bridge.handle_push_message()?;
    bridge.display_messenger()?;
    bridge.hide_messenger()?;
    bridge.display_message_composer(None)?;
    bridge.display_message_composer(Some("hi there"))?;
    bridge.set_user_hash("h")?;
    bridge.display_conversations_list()?;
    bridge.display_help_center()?;
    bridge.set_bottom_padding(24)?;
    bridge.shutdown()?;

    assert_eq!(
        bridge.sdk().calls(),
        vec![
            SdkCall::HandlePushMessage,
            SdkCall::DisplayMessenger,
            SdkCall::HideMessenger,
            SdkCall::DisplayMessageComposer(None),
            SdkCall::DisplayMessageComposer(Some("hi there".to_string())),
            SdkCall::SetUserHash("h".to_string()),
            SdkCall::DisplayConversationsList,
            SdkCall::DisplayHelpCenter,
            SdkCall::SetBottomPadding(24),
            SdkCall::Shutdown,
        ]
    );
    Ok(())
}

#[test]
fn unread_count_returns_the_sdk_value() -> Result<(), Box<dyn std::error::Error>> {
    let bridge = Bridge::new(RecordingSdk::with_unread(5));
    assert_eq!(bridge.unread_conversation_count()?, 5);
    Ok(())
}

#[test]
fn sdk_refusal_surfaces_as_precondition() {
    let bridge = Bridge::new(RecordingSdk::refusing("no active application context"));
    let err = bridge.display_messenger().unwrap_err();
    assert_eq!(
        err.to_string(),
        "precondition failed: no active application context"
    );
}

#[test]
fn completion_contract_never_fills_both_slots() {
    let bridge = Bridge::new(RecordingSdk::refusing("invalid credentials"));

    let failure = Completion::from(bridge.shutdown());
    assert_eq!(failure.error.as_deref(), Some("precondition failed: invalid credentials"));
    assert_eq!(failure.result, None);

    let bridge = Bridge::new(RecordingSdk::with_unread(3));
    let count = bridge.unread_conversation_count().map(|n| Some(Value::Number(n as f64)));
    let success = Completion::from(count);
    assert_eq!(success.error, None);
    assert_eq!(success.result, Some(Value::Number(3.0)));
}

#[test]
fn completion_serializes_to_two_slots() {
    let success = Completion::ok(Some(Value::Number(3.0)));
    assert_eq!(
        serde_json::to_value(&success).unwrap(),
        json!({"error": null, "result": 3.0})
    );

    let failure = Completion::err("boom");
    assert_eq!(
        serde_json::to_value(&failure).unwrap(),
        json!({"error": "boom", "result": null})
    );
}
