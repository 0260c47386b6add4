//! Temperature history data structures.
//!
//! The cooker records one temperature sample roughly every 10-15 seconds
//! while cooking and reports the whole series as a hex string, one byte
//! per sample in degrees Celsius.

use std::fmt;

/// Temperature history of the current cook cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureHistory {
    /// Samples in degrees Celsius, oldest first.
    samples: Vec<u8>,
}

impl TemperatureHistory {
    /// Value reported by the cooker when it is not cooking.
    pub const NO_DATA: &'static str = "0000";

    /// Decode a temperature history from the cooker's hex encoding.
    ///
    /// Both the [`Self::NO_DATA`] sentinel and malformed input (odd length
    /// or non-hex characters) produce an empty history.
    pub fn from_hex(data: &str) -> Self {
        if data == Self::NO_DATA || data.len() % 2 != 0 {
            return Self::default();
        }

        match hex::decode(data) {
            Ok(samples) => Self { samples },
            Err(e) => {
                tracing::debug!("Ignoring malformed temperature history: {}", e);
                Self::default()
            }
        }
    }

    /// Create a history from already decoded samples.
    pub fn from_samples(samples: Vec<u8>) -> Self {
        Self { samples }
    }

    /// Get all samples in degrees Celsius, oldest first.
    pub fn temperatures(&self) -> &[u8] {
        &self.samples
    }

    /// Get the most recent sample.
    pub fn last(&self) -> Option<u8> {
        self.samples.last().copied()
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Re-encode the samples as lowercase hex.
    pub fn raw(&self) -> String {
        hex::encode(&self.samples)
    }
}

impl fmt::Display for TemperatureHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.samples)
    }
}
