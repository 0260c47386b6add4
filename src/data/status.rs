//! Cooker status view.
//!
//! Wraps the property values read from the cooker with typed accessors.
//! Properties the device did not report resolve to `None`.

use std::collections::HashMap;
use std::fmt;

use super::mode::{fault_label, OperationMode};
use crate::error::{Error, Result};

/// A raw property value as reported by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    /// Boolean property.
    Bool(bool),
    /// Integer property.
    Int(i64),
    /// String property (profiles, histories, version strings).
    Str(String),
}

impl PropertyValue {
    /// Interpret the value as an integer.
    ///
    /// Booleans map to 0/1 and numeric strings are parsed. Used for the
    /// timing and id accessors; `mode` only accepts integer readings.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Bool(value) => Some(*value as i64),
            Self::Int(value) => Some(*value),
            Self::Str(value) => value.trim().parse().ok(),
        }
    }

    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Str(value) => f.write_str(value),
        }
    }
}

/// Typed view over the cooker's properties.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CookerStatus {
    /// Property values keyed by property name.
    properties: HashMap<String, PropertyValue>,
    /// Latest temperature sample in degrees Celsius.
    temperature: Option<u8>,
}

impl CookerStatus {
    /// Operation mode property.
    pub const STATUS: &'static str = "status";
    /// Fault code property.
    pub const FAULT: &'static str = "fault";
    /// Selected menu property.
    pub const MENU_ID: &'static str = "menu-id";
    /// Remaining cook time property, in seconds.
    pub const LEFT_TIME: &'static str = "left-time";
    /// Remaining delay before cooking property, in seconds.
    pub const PRE_LEFT_TIME: &'static str = "pre-left-time";
    /// Total cook time property, in seconds.
    pub const COOK_TOTAL_TIME: &'static str = "cook-total-time";
    /// Auto keep warm flag property.
    pub const AUTO_KEEPWARM_FLAG: &'static str = "auto-keepwarm-flag";
    /// Keep warm duration property.
    pub const KEEPWARM_TIME: &'static str = "keepwarm-time";
    /// Taste property.
    pub const TASTE: &'static str = "taste";
    /// Rice type property.
    pub const RICE_TYPE: &'static str = "rice-type";

    /// Create a status view over a property map.
    pub fn new(properties: HashMap<String, PropertyValue>) -> Self {
        Self {
            properties,
            temperature: None,
        }
    }

    /// Attach the latest temperature sample.
    pub fn with_temperature(mut self, temperature: Option<u8>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Get a raw property value.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Get all raw property values.
    pub fn properties(&self) -> &HashMap<String, PropertyValue> {
        &self.properties
    }

    fn int(&self, name: &str) -> Option<i64> {
        self.property(name).and_then(PropertyValue::as_i64)
    }

    fn minutes(&self, name: &str) -> Option<i64> {
        self.int(name).map(|seconds| seconds / 60)
    }

    /// Current operation mode.
    ///
    /// Only integer readings are mapped; anything else is `Unknown`.
    pub fn mode(&self) -> OperationMode {
        match self.property(Self::STATUS) {
            Some(PropertyValue::Int(code)) => OperationMode::from_raw(*code),
            _ => OperationMode::Unknown,
        }
    }

    /// Current fault label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingProperty`] if no fault code was reported and
    /// [`Error::UnknownFault`] if the code is not in the fault table.
    pub fn fault(&self) -> Result<&'static str> {
        let code = self.int(Self::FAULT).ok_or_else(|| Error::MissingProperty {
            name: Self::FAULT.to_string(),
        })?;
        fault_label(code)
    }

    /// Selected menu id.
    pub fn menu(&self) -> Option<i64> {
        self.int(Self::MENU_ID)
    }

    /// Remaining minutes of the cooking process.
    pub fn remaining(&self) -> Option<i64> {
        self.minutes(Self::LEFT_TIME)
    }

    /// Minutes to wait before a scheduled cook starts.
    pub fn cooking_delayed(&self) -> Option<i64> {
        self.minutes(Self::PRE_LEFT_TIME).filter(|delay| *delay >= 0)
    }

    /// Total duration of the cooking process in minutes.
    pub fn duration(&self) -> Option<i64> {
        self.minutes(Self::COOK_TOTAL_TIME)
    }

    /// Whether the cooker keeps warm after cooking.
    pub fn keep_warm(&self) -> bool {
        self.int(Self::AUTO_KEEPWARM_FLAG) == Some(1)
    }

    /// How long the cooker keeps warm after cooking.
    pub fn keep_warm_duration(&self) -> Option<i64> {
        self.int(Self::KEEPWARM_TIME)
    }

    /// Taste id.
    pub fn taste(&self) -> Option<i64> {
        self.int(Self::TASTE)
    }

    /// Rice id.
    pub fn rice(&self) -> Option<i64> {
        self.int(Self::RICE_TYPE)
    }

    /// Latest temperature sample in degrees Celsius.
    pub fn temperature(&self) -> Option<u8> {
        self.temperature
    }
}

fn display_option<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl fmt::Display for CookerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mode: {}", self.mode())?;
        match self.fault() {
            Ok(label) => writeln!(f, "Fault: {}", label)?,
            Err(e) => writeln!(f, "Fault: {}", e)?,
        }
        writeln!(f, "Menu: {}", display_option(self.menu()))?;
        writeln!(f, "Remaining: {}", display_option(self.remaining()))?;
        writeln!(
            f,
            "Cooking delayed: {}",
            display_option(self.cooking_delayed())
        )?;
        writeln!(f, "Duration: {}", display_option(self.duration()))?;
        writeln!(f, "Keep warm: {}", self.keep_warm())?;
        writeln!(f, "Rice: {}", display_option(self.rice()))?;
        writeln!(f, "Taste: {}", display_option(self.taste()))?;
        writeln!(f, "Temperature: {}", display_option(self.temperature()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_with(entries: &[(&str, PropertyValue)]) -> CookerStatus {
        CookerStatus::new(
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_mode() {
        let status = status_with(&[("status", PropertyValue::Int(2))]);
        assert_eq!(status.mode(), OperationMode::Running);
    }

    #[test]
    fn test_mode_unknown_code() {
        let status = status_with(&[("status", PropertyValue::Int(99))]);
        assert_eq!(status.mode(), OperationMode::Unknown);
    }

    #[test]
    fn test_mode_ignores_non_integer_values() {
        let status = status_with(&[("status", "2".into())]);
        assert_eq!(status.mode(), OperationMode::Unknown);

        let status = status_with(&[("status", true.into())]);
        assert_eq!(status.mode(), OperationMode::Unknown);
    }

    #[test]
    fn test_mode_missing() {
        assert_eq!(CookerStatus::default().mode(), OperationMode::Unknown);
    }

    #[test]
    fn test_fault() {
        let status = status_with(&[("fault", PropertyValue::Int(0))]);
        assert_eq!(status.fault().unwrap(), "No Faults");

        let status = status_with(&[("fault", PropertyValue::Int(11))]);
        assert_eq!(status.fault().unwrap(), "E12");
    }

    #[test]
    fn test_fault_unknown_and_missing() {
        let status = status_with(&[("fault", PropertyValue::Int(12))]);
        assert!(matches!(status.fault(), Err(Error::UnknownFault { code: 12 })));

        assert!(matches!(
            CookerStatus::default().fault(),
            Err(Error::MissingProperty { .. })
        ));
    }

    #[test]
    fn test_times_in_minutes() {
        let status = status_with(&[
            ("left-time", PropertyValue::Int(1799)),
            ("pre-left-time", PropertyValue::Int(3600)),
            ("cook-total-time", PropertyValue::Int(2700)),
        ]);
        assert_eq!(status.remaining(), Some(29));
        assert_eq!(status.cooking_delayed(), Some(60));
        assert_eq!(status.duration(), Some(45));
    }

    #[test]
    fn test_cooking_delayed_negative() {
        let status = status_with(&[("pre-left-time", PropertyValue::Int(-120))]);
        assert_eq!(status.cooking_delayed(), None);

        // Less than a minute rounds toward zero
        let status = status_with(&[("pre-left-time", PropertyValue::Int(-30))]);
        assert_eq!(status.cooking_delayed(), Some(0));
    }

    #[test]
    fn test_missing_properties_are_none() {
        let status = CookerStatus::default();
        assert_eq!(status.remaining(), None);
        assert_eq!(status.cooking_delayed(), None);
        assert_eq!(status.duration(), None);
        assert_eq!(status.menu(), None);
        assert_eq!(status.temperature(), None);
        assert!(!status.keep_warm());
    }

    #[test]
    fn test_keep_warm() {
        let status = status_with(&[("auto-keepwarm-flag", PropertyValue::Int(1))]);
        assert!(status.keep_warm());

        let status = status_with(&[("auto-keepwarm-flag", PropertyValue::Int(0))]);
        assert!(!status.keep_warm());

        let status = status_with(&[("auto-keepwarm-flag", true.into())]);
        assert!(status.keep_warm());
    }

    #[test]
    fn test_string_values_parse() {
        let status = status_with(&[
            ("menu-id", "12".into()),
            ("rice-type", PropertyValue::Int(3)),
        ]);
        assert_eq!(status.menu(), Some(12));
        assert_eq!(status.rice(), Some(3));
    }

    #[test]
    fn test_temperature() {
        let status = CookerStatus::default().with_temperature(Some(95));
        assert_eq!(status.temperature(), Some(95));
    }

    #[test]
    fn test_display() {
        let status = status_with(&[
            ("status", PropertyValue::Int(1)),
            ("fault", PropertyValue::Int(0)),
        ]);
        let text = status.to_string();
        assert!(text.contains("Mode: Idle"));
        assert!(text.contains("Fault: No Faults"));
        assert!(text.contains("Remaining: None"));
    }
}
