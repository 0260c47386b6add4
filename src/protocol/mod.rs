//! Protocol module for parsing and constructing cooking profiles.
//!
//! This module contains the implementations for:
//! - Cooking profile parsing, editing and serialization
//! - CRC calculation

pub mod crc;
pub mod profile;

pub use crc::{append_crc, calculate_crc, verify_crc};
pub use profile::{CookerProfile, MutationOutcome, ProfileAttributes, ProfileOptions};
