//! # chunmi-cooker
//!
//! A Rust library for editing cooking profiles and decoding the status of
//! the Chunmi WY3 smart rice cooker.
//!
//! The cooker is started by sending it a binary cooking profile, hex
//! encoded, with a CRC-16/CCITT trailer. This library validates such
//! profiles, exposes their fields and capability flags, applies edits
//! within the limits the profile allows, and re-serializes them with a
//! fresh checksum.
//!
//! ## Features
//!
//! - **Profile Codec**: Parse, edit and serialize cooking profiles
//! - **Capability Gating**: Edits the profile does not support are ignored
//! - **Temperature History**: Decode the per-cycle temperature samples
//! - **Status View**: Typed access to mode, fault and timing properties
//! - **Cooker Facade**: Start, stop and poll a cooker over any transport
//!
//! ## Quick Start
//!
//! ```rust
//! use chunmi_cooker::{CookerProfile, Result};
//!
//! fn main() -> Result<()> {
//!     let mut profile =
//!         CookerProfile::parse("0201000000000160001e0100000a00000000010100fc")?;
//!
//!     profile.set_duration(45);
//!     profile.set_taste(2)?;
//!
//!     println!("Menu {} for {} minutes", profile.menu_id(), profile.duration());
//!     println!("Send: {}", profile.to_hex());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod config;
pub mod cooker;
pub mod data;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

// Re-exports for convenience
pub use config::CookerConfig;
pub use cooker::{Cooker, StartOptions};
pub use error::{Error, Result};
pub use protocol::{CookerProfile, MutationOutcome, ProfileAttributes, ProfileOptions};
pub use transport::{ActionParameter, ActionResponse, CookerTransport, PropertyReading};

// Re-export commonly used types from submodules
pub use data::{CookerStatus, OperationMode, PropertyValue, TemperatureHistory};
