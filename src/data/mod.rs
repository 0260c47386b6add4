//! Data structures for cooker state.
//!
//! This module contains the types used to represent the cooker's
//! operation mode, fault codes, property status and temperature history.

pub mod mode;
pub mod status;
pub mod temperature_history;

pub use mode::{fault_label, OperationMode, COOKING_FAULTS};
pub use status::{CookerStatus, PropertyValue};
pub use temperature_history::TemperatureHistory;
