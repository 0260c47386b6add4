//! Device call interface.
//!
//! The cooker is driven through two calls: invoking an action with a list of
//! parameters, and bulk-reading the mapped properties. Session handling,
//! encryption and discovery are left to the implementation.

use async_trait::async_trait;

use crate::data::PropertyValue;
use crate::error::Result;

/// A single action input or output parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionParameter {
    /// Parameter id.
    pub piid: u32,
    /// Parameter value.
    pub value: PropertyValue,
}

impl ActionParameter {
    /// Create a new parameter.
    pub fn new(piid: u32, value: impl Into<PropertyValue>) -> Self {
        Self {
            piid,
            value: value.into(),
        }
    }
}

/// Response to an action call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResponse {
    /// Result code; 0 means success.
    pub code: i64,
    /// Output parameters.
    pub out: Vec<ActionParameter>,
}

impl ActionResponse {
    /// Create a successful response with the given outputs.
    pub fn ok(out: Vec<ActionParameter>) -> Self {
        Self { code: 0, out }
    }

    /// Create a failed response.
    pub fn failed(code: i64) -> Self {
        Self {
            code,
            out: Vec::new(),
        }
    }

    /// Check if the action succeeded.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// A single property read result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyReading {
    /// Property name.
    pub did: String,
    /// Property value.
    pub value: PropertyValue,
    /// Read result code; 0 means the value is valid.
    pub code: i64,
}

impl PropertyReading {
    /// Create a valid reading.
    pub fn new(did: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            did: did.into(),
            value: value.into(),
            code: 0,
        }
    }

    /// Check if the reading carries a valid value.
    pub fn is_valid(&self) -> bool {
        self.code == 0
    }
}

/// Request/response interface to a cooker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CookerTransport: Send + Sync {
    /// Invoke an action on the device.
    async fn call_action(
        &self,
        action: &str,
        params: Vec<ActionParameter>,
    ) -> Result<ActionResponse>;

    /// Read all mapped properties.
    async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyReading>>;
}
