//! Cooker configuration.
//!
//! Action identifiers and call limits used when talking to the cooker.

use std::time::Duration;

/// Configuration for a [`Cooker`](crate::Cooker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookerConfig {
    /// Action that starts cooking a profile.
    pub start_action: String,
    /// Action that cancels the current cook cycle.
    pub cancel_action: String,
    /// Action that returns the temperature history.
    pub temperature_history_action: String,
    /// Parameter id carrying the serialized profile.
    pub profile_parameter_id: u32,
    /// Maximum time to wait for a single transport call.
    pub call_timeout: Duration,
}

impl CookerConfig {
    /// Default call timeout (10 seconds).
    pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a configuration with the WY3 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Set the parameter id carrying the serialized profile.
    pub fn with_profile_parameter_id(mut self, piid: u32) -> Self {
        self.profile_parameter_id = piid;
        self
    }
}

impl Default for CookerConfig {
    fn default() -> Self {
        Self {
            start_action: "custom:cooking-start".to_string(),
            cancel_action: "cooker:cancel-cooking".to_string(),
            temperature_history_action: "custom:get-temp-history".to_string(),
            profile_parameter_id: 10,
            call_timeout: Self::DEFAULT_CALL_TIMEOUT,
        }
    }
}
