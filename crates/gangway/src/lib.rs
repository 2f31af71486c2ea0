#![doc = include_str!("../README.md")]

pub mod attributes;
pub mod client;
pub mod completion;
pub mod error;
pub mod host;
pub mod normalize;
mod number;
pub mod settings;
pub mod value;
pub mod visibility;

pub use crate::attributes::UserAttributes;
pub use crate::client::{Bridge, MessengerSdk, SdkError, SdkResult};
pub use crate::completion::Completion;
pub use crate::error::{Error, Result};
pub use crate::host::HostValue;
pub use crate::normalize::{MAX_DEPTH, normalize, normalize_entries};
pub use crate::settings::BootSettings;
pub use crate::value::{Path, Segment, Value};
pub use crate::visibility::Visibility;

/// Normalize a JSON document as if it had arrived from the host runtime.
#[cfg(feature = "json")]
pub fn normalize_json(payload: serde_json::Value) -> Result<Value> {
    normalize(&HostValue::from(payload))
}
