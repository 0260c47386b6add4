//! Cooker struct and methods.
//!
//! Represents a single WY3 rice cooker reachable through a [`CookerTransport`].

use std::collections::HashMap;
use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::CookerConfig;
use crate::data::{CookerStatus, PropertyValue, TemperatureHistory};
use crate::error::{Error, Result};
use crate::protocol::{CookerProfile, ProfileOptions};
use crate::transport::{ActionParameter, ActionResponse, CookerTransport};
use crate::utils::{duration_to_minutes, minutes_until};

/// Caller-facing options for starting a cook cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartOptions {
    /// Cooking duration.
    pub duration: Option<Duration>,
    /// When cooking should start; `None` or a time in the past starts now.
    pub schedule_at: Option<DateTime<Utc>>,
    /// Keep warm once cooking has finished.
    pub auto_keep_warm: Option<bool>,
    /// Taste index (0 = soft, 1 = moderate, 2 = rigid).
    pub taste: Option<u8>,
}

impl StartOptions {
    /// Resolve to profile options relative to `now`.
    pub fn to_profile_options(&self, now: DateTime<Utc>) -> ProfileOptions {
        ProfileOptions {
            duration: self.duration.map(duration_to_minutes),
            schedule: self.schedule_at.and_then(|at| minutes_until(at, now)),
            auto_keep_warm: self.auto_keep_warm,
            taste: self.taste,
        }
    }
}

/// A WY3 rice cooker.
pub struct Cooker<T: CookerTransport> {
    /// Transport used for all device calls.
    transport: T,
    /// Action ids and limits.
    config: CookerConfig,
}

impl<T: CookerTransport> Cooker<T> {
    /// Create a cooker with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, CookerConfig::default())
    }

    /// Create a cooker with a custom configuration.
    pub fn with_config(transport: T, config: CookerConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CookerConfig {
        &self.config
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn with_timeout<R>(
        &self,
        action: &str,
        call: impl Future<Output = Result<R>>,
    ) -> Result<R> {
        tokio::time::timeout(self.config.call_timeout, call)
            .await
            .map_err(|_| Error::Timeout {
                action: action.to_string(),
            })?
    }

    async fn call_action(
        &self,
        action: &str,
        params: Vec<ActionParameter>,
    ) -> Result<ActionResponse> {
        debug!("Calling {} with {} parameters", action, params.len());
        self.with_timeout(action, self.transport.call_action(action, params))
            .await
    }

    // === Status ===

    /// Read the cooker status.
    ///
    /// Properties that failed to read are left out of the view. The latest
    /// temperature sample comes from a fresh temperature history request.
    pub async fn status(&self) -> Result<CookerStatus> {
        let readings = self
            .with_timeout(
                "get_properties_for_mapping",
                self.transport.get_properties_for_mapping(),
            )
            .await?;

        let properties: HashMap<String, PropertyValue> = readings
            .into_iter()
            .filter(|reading| reading.is_valid())
            .map(|reading| (reading.did, reading.value))
            .collect();

        debug!("Read {} valid properties", properties.len());

        let history = self.temperature_history().await?;

        Ok(CookerStatus::new(properties).with_temperature(history.last()))
    }

    // === Cooking ===

    /// Start cooking a profile.
    ///
    /// The cook duration is rounded down to whole minutes and the schedule
    /// is converted to minutes from now.
    pub async fn start(&self, profile: &str, options: StartOptions) -> Result<()> {
        self.start_profile(profile, options.to_profile_options(Utc::now()))
            .await
    }

    /// Start cooking a profile with options already in minutes.
    ///
    /// # Errors
    ///
    /// Returns profile errors before anything is sent, and
    /// [`Error::ActionFailed`] if the cooker rejects the profile.
    pub async fn start_profile(&self, profile: &str, options: ProfileOptions) -> Result<()> {
        let mut profile = CookerProfile::with_options(profile, options)?;
        let encoded = profile.to_hex();

        info!(
            "Starting menu {} for {} minutes",
            profile.menu_id(),
            profile.duration()
        );

        let action = self.config.start_action.as_str();
        let response = self
            .call_action(
                action,
                vec![ActionParameter::new(
                    self.config.profile_parameter_id,
                    encoded,
                )],
            )
            .await?;

        if !response.is_success() {
            return Err(Error::ActionFailed {
                action: action.to_string(),
                code: response.code,
            });
        }

        Ok(())
    }

    /// Stop cooking.
    ///
    /// A rejected cancel is logged rather than returned.
    pub async fn stop(&self) -> Result<()> {
        info!("Stopping cooking");

        let response = self
            .call_action(self.config.cancel_action.as_str(), Vec::new())
            .await?;

        if !response.is_success() {
            warn!("Failed to stop cooking (code {})", response.code);
        }

        Ok(())
    }

    // === Temperature history ===

    /// Retrieve the temperature history of the current cook cycle.
    ///
    /// Samples are only recorded while cooking, roughly six per minute.
    pub async fn temperature_history(&self) -> Result<TemperatureHistory> {
        let action = self.config.temperature_history_action.as_str();
        let response = self.call_action(action, Vec::new()).await?;

        if !response.is_success() {
            return Err(Error::ActionFailed {
                action: action.to_string(),
                code: response.code,
            });
        }

        let data = response
            .out
            .first()
            .and_then(|param| param.value.as_str())
            .ok_or_else(|| Error::InvalidData {
                context: format!("{} returned no history string", action),
            })?;

        let history = TemperatureHistory::from_hex(data);
        debug!("Temperature history has {} samples", history.len());

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockCookerTransport, PropertyReading};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const WHITE_RICE: &str = "0201000000000160001e0100000a00000000010100fc";

    fn history_response(data: &str) -> ActionResponse {
        ActionResponse::ok(vec![ActionParameter::new(1, data)])
    }

    #[tokio::test]
    async fn test_start_profile_sends_serialized_profile() {
        let mut expected = CookerProfile::parse(WHITE_RICE).unwrap();
        expected.set_duration(45);
        let expected_hex = expected.to_hex();

        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .withf(move |action, params| {
                action == "custom:cooking-start"
                    && *params == vec![ActionParameter::new(10, expected_hex.as_str())]
            })
            .times(1)
            .returning(|_, _| Ok(ActionResponse::ok(Vec::new())));

        let cooker = Cooker::new(transport);
        let options = ProfileOptions {
            duration: Some(45),
            ..Default::default()
        };
        tokio_test::assert_ok!(cooker.start_profile(WHITE_RICE, options).await);
    }

    #[tokio::test]
    async fn test_start_profile_failure_code() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .returning(|_, _| Ok(ActionResponse::failed(-1)));

        let cooker = Cooker::new(transport);
        let result = cooker
            .start_profile(WHITE_RICE, ProfileOptions::default())
            .await;
        assert!(matches!(result, Err(Error::ActionFailed { code: -1, .. })));
    }

    #[tokio::test]
    async fn test_start_profile_invalid_profile_sends_nothing() {
        let mut transport = MockCookerTransport::new();
        transport.expect_call_action().never();

        let cooker = Cooker::new(transport);
        let corrupted = format!("{}ffff", &WHITE_RICE[..40]);
        let result = cooker
            .start_profile(&corrupted, ProfileOptions::default())
            .await;
        assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
    }

    #[tokio::test]
    async fn test_stop_failure_is_not_an_error() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .withf(|action, params| action == "cooker:cancel-cooking" && params.is_empty())
            .times(1)
            .returning(|_, _| Ok(ActionResponse::failed(-4004)));

        let cooker = Cooker::new(transport);
        tokio_test::assert_ok!(cooker.stop().await);
    }

    #[tokio::test]
    async fn test_stop_transport_error_propagates() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .returning(|_, _| Err(Error::Transport("socket closed".to_string())));

        let cooker = Cooker::new(transport);
        assert!(matches!(cooker.stop().await, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_temperature_history() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .withf(|action, params| action == "custom:get-temp-history" && params.is_empty())
            .returning(|_, _| Ok(history_response("161515161c")));

        let cooker = Cooker::new(transport);
        let history = cooker.temperature_history().await.unwrap();
        assert_eq!(history.temperatures(), &[22, 21, 21, 22, 28]);
    }

    #[tokio::test]
    async fn test_temperature_history_failure_code() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .returning(|_, _| Ok(ActionResponse::failed(1)));

        let cooker = Cooker::new(transport);
        let result = cooker.temperature_history().await;
        assert!(matches!(result, Err(Error::ActionFailed { code: 1, .. })));
    }

    #[tokio::test]
    async fn test_temperature_history_missing_output() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_call_action()
            .returning(|_, _| Ok(ActionResponse::ok(Vec::new())));

        let cooker = Cooker::new(transport);
        let result = cooker.temperature_history().await;
        assert!(matches!(result, Err(Error::InvalidData { .. })));
    }

    #[tokio::test]
    async fn test_status() {
        let mut transport = MockCookerTransport::new();
        transport.expect_get_properties_for_mapping().returning(|| {
            Ok(vec![
                PropertyReading::new("status", PropertyValue::Int(2)),
                PropertyReading::new("fault", PropertyValue::Int(0)),
                PropertyReading::new("left-time", PropertyValue::Int(1200)),
                PropertyReading {
                    did: "menu-id".to_string(),
                    value: PropertyValue::Int(7),
                    code: -4001,
                },
            ])
        });
        transport
            .expect_call_action()
            .returning(|_, _| Ok(history_response("2f2e30")));

        let cooker = Cooker::new(transport);
        let status = cooker.status().await.unwrap();

        assert_eq!(status.mode(), crate::data::OperationMode::Running);
        assert_eq!(status.fault().unwrap(), "No Faults");
        assert_eq!(status.remaining(), Some(20));
        assert_eq!(status.menu(), None);
        assert_eq!(status.temperature(), Some(0x30));
    }

    #[tokio::test]
    async fn test_status_not_cooking() {
        let mut transport = MockCookerTransport::new();
        transport
            .expect_get_properties_for_mapping()
            .returning(|| Ok(vec![PropertyReading::new("status", PropertyValue::Int(1))]));
        transport
            .expect_call_action()
            .returning(|_, _| Ok(history_response(TemperatureHistory::NO_DATA)));

        let cooker = Cooker::new(transport);
        let status = cooker.status().await.unwrap();
        assert_eq!(status.temperature(), None);
    }

    /// Answers every call only after `delay`.
    struct SlowTransport {
        delay: std::time::Duration,
    }

    #[async_trait::async_trait]
    impl CookerTransport for SlowTransport {
        async fn call_action(
            &self,
            _action: &str,
            _params: Vec<ActionParameter>,
        ) -> Result<ActionResponse> {
            tokio::time::sleep(self.delay).await;
            Ok(history_response("161515"))
        }

        async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyReading>> {
            Ok(vec![PropertyReading::new("status", PropertyValue::Int(2))])
        }
    }

    fn slow_cooker() -> Cooker<SlowTransport> {
        let transport = SlowTransport {
            delay: std::time::Duration::from_millis(500),
        };
        let config = CookerConfig::new().with_call_timeout(std::time::Duration::from_millis(50));
        Cooker::with_config(transport, config)
    }

    #[tokio::test]
    async fn test_stop_times_out() {
        let cooker = slow_cooker();
        match cooker.stop().await {
            Err(Error::Timeout { action }) => assert_eq!(action, "cooker:cancel-cooking"),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status_times_out_on_history() {
        let cooker = slow_cooker();
        match cooker.status().await {
            Err(Error::Timeout { action }) => assert_eq!(action, "custom:get-temp-history"),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_call_within_timeout() {
        let transport = SlowTransport {
            delay: std::time::Duration::from_millis(10),
        };
        let config = CookerConfig::new().with_call_timeout(std::time::Duration::from_secs(5));
        let cooker = Cooker::with_config(transport, config);

        let history = cooker.temperature_history().await.unwrap();
        assert_eq!(history.temperatures(), &[0x16, 0x15, 0x15]);
    }

    #[test]
    fn test_start_options_to_profile_options() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        let options = StartOptions {
            duration: Some(Duration::seconds(50 * 60 + 30)),
            schedule_at: Some(now + Duration::hours(3)),
            auto_keep_warm: Some(true),
            taste: Some(0),
        };

        assert_eq!(
            options.to_profile_options(now),
            ProfileOptions {
                duration: Some(50),
                schedule: Some(180),
                auto_keep_warm: Some(true),
                taste: Some(0),
            }
        );
    }

    #[test]
    fn test_start_options_past_schedule() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        let options = StartOptions {
            schedule_at: Some(now - Duration::minutes(5)),
            ..Default::default()
        };
        assert_eq!(options.to_profile_options(now).schedule, None);
    }
}
