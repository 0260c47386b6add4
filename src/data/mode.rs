//! Operation mode and fault code definitions.

use std::fmt;

use crate::error::{Error, Result};

/// Cooker operation mode reported by the `status` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationMode {
    /// Waiting for a command.
    Idle,
    /// Cooking.
    Running,
    /// Waiting for a delayed start.
    Scheduled,
    /// Keeping food warm after cooking.
    AutoKeepWarm,
    /// The cooker is in an error state.
    Error,
    /// Firmware update in progress.
    Updating,
    /// Cooking finished.
    Finish,
    /// Code not known to this library.
    #[default]
    Unknown,
}

impl OperationMode {
    /// Create from raw status value.
    pub fn from_raw(value: i64) -> Self {
        match value {
            1 => Self::Idle,
            2 => Self::Running,
            3 => Self::Scheduled,
            4 => Self::AutoKeepWarm,
            5 => Self::Error,
            6 => Self::Updating,
            7 => Self::Finish,
            _ => Self::Unknown,
        }
    }

    /// Convert to raw status value, if the mode has one.
    pub fn to_raw(&self) -> Option<i64> {
        match self {
            Self::Idle => Some(1),
            Self::Running => Some(2),
            Self::Scheduled => Some(3),
            Self::AutoKeepWarm => Some(4),
            Self::Error => Some(5),
            Self::Updating => Some(6),
            Self::Finish => Some(7),
            Self::Unknown => None,
        }
    }

    /// Check if a cook cycle is in progress or pending.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Scheduled | Self::AutoKeepWarm)
    }

    /// Get a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Scheduled => "Scheduled",
            Self::AutoKeepWarm => "Auto Keep Warm",
            Self::Error => "Error",
            Self::Updating => "Updating",
            Self::Finish => "Finish",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fault labels indexed by fault code.
pub const COOKING_FAULTS: [&str; 12] = [
    "No Faults",
    "E02",
    "E03",
    "E04",
    "E05",
    "E06",
    "E07",
    "E08",
    "E09",
    "E10",
    "E11",
    "E12",
];

/// Look up the label for a fault code.
///
/// # Errors
///
/// Returns [`Error::UnknownFault`] for codes outside the table.
pub fn fault_label(code: i64) -> Result<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|index| COOKING_FAULTS.get(index))
        .copied()
        .ok_or(Error::UnknownFault { code })
}
