//! Error types for the chunmi-cooker crate.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The profile hex could not be decoded into a profile layout.
    #[error("Invalid profile: {reason}")]
    InvalidProfile {
        /// Description of what was wrong with the profile.
        reason: String,
    },

    /// The stored profile checksum does not match the payload.
    #[error("Profile checksum error: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch {
        /// The checksum computed over the payload.
        expected: u16,
        /// The checksum stored in the profile trailer.
        actual: u16,
    },

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// The name of the parameter.
        name: String,
        /// The invalid value that was provided.
        value: String,
    },

    /// The device reported a fault code outside the known table.
    #[error("Unknown fault code: {code}")]
    UnknownFault {
        /// The raw fault code.
        code: i64,
    },

    /// A property required for an exhaustive lookup was not reported.
    #[error("Missing property: {name}")]
    MissingProperty {
        /// The property name.
        name: String,
    },

    /// The device answered an action with a non-zero code.
    #[error("Action {action} failed with code {code}")]
    ActionFailed {
        /// The action identifier.
        action: String,
        /// The response code.
        code: i64,
    },

    /// Invalid data was received from the device.
    #[error("Invalid data received: {context}")]
    InvalidData {
        /// Description of what was invalid about the data.
        context: String,
    },

    /// A transport call did not complete in time.
    #[error("Timed out waiting for {action}")]
    Timeout {
        /// The call that timed out.
        action: String,
    },

    /// Error raised by the transport implementation.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
