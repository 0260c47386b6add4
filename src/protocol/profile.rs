//! Cooking profile codec.
//!
//! A cooking profile is the program the cooker runs when a cook cycle is
//! started. It travels as hex text wrapping a 22-byte structure: a 20-byte
//! payload followed by a big-endian CRC-16/CCITT trailer.
//!
//! Payload layout:
//! - Byte 0: Device type
//! - Byte 1: Sub-type
//! - Byte 2: Menu index
//! - Bytes 3-6: Menu identifier (uint32_t big-endian)
//! - Byte 7: Capability flags (bit 6: can schedule, bit 5: can set auto keep warm)
//! - Bytes 8-9: Duration (hours, minutes)
//! - Bytes 10-11: Max cook time (hours, minutes)
//! - Bytes 12-13: Min cook time (hours, minutes)
//! - Byte 14: Schedule hours (bit 7: schedule enabled, bits 0-6: hours)
//! - Byte 15: Schedule minutes (bit 7: auto keep warm, bits 0-6: minutes)
//! - Byte 16: Reserved
//! - Bytes 17-18: Rice type identifier (uint16_t big-endian)
//! - Byte 19: Taste (0 = soft, 1 = moderate, 2 = rigid)

use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::crc::{calculate_crc, verify_crc};

const PAYLOAD_SIZE: usize = 20;

const DEVICE_TYPE: usize = 0;
const SUB_TYPE: usize = 1;
const MENU_INDEX: usize = 2;
const MENU_ID: usize = 3;
const FLAGS: usize = 7;
const DURATION: usize = 8;
const COOK_TIME_MAX: usize = 10;
const COOK_TIME_MIN: usize = 12;
const SCHEDULE_HOURS: usize = 14;
const SCHEDULE_MINUTES: usize = 15;
const RICE_ID: usize = 17;
const TASTE: usize = 19;

/// Result of a capability-gated mutation.
///
/// Setters never fail when the profile lacks the capability for a field;
/// they leave the profile untouched and report [`MutationOutcome::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationOutcome {
    /// The field was written.
    Applied,
    /// The profile does not support this field; nothing changed.
    Unsupported,
}

impl MutationOutcome {
    /// Check if the mutation was written to the profile.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Optional adjustments applied while constructing a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileOptions {
    /// Cooking duration in minutes.
    pub duration: Option<u16>,
    /// Delay before cooking starts, in minutes.
    pub schedule: Option<u16>,
    /// Keep warm once cooking has finished.
    pub auto_keep_warm: Option<bool>,
    /// Taste index (0 = soft, 1 = moderate, 2 = rigid).
    pub taste: Option<u8>,
}

/// Snapshot of the user-facing state of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileAttributes {
    /// Menu identifier.
    pub menu_id: u32,
    /// Whether the profile supports a delayed start.
    pub can_schedule: bool,
    /// Whether the profile supports toggling auto keep warm.
    pub can_set_auto_keep_warm: bool,
    /// Whether the cooking duration is adjustable.
    pub can_set_duration: bool,
    /// Whether a rice type can be selected.
    pub can_choose_rice: bool,
    /// Whether the taste can be configured.
    pub can_configure_taste: bool,
    /// Minimum cook time in minutes.
    pub cook_time_min: u16,
    /// Maximum cook time in minutes.
    pub cook_time_max: u16,
    /// Cooking duration in minutes.
    pub duration: u16,
    /// Whether a delayed start is enabled.
    pub schedule_enabled: bool,
    /// Delay before cooking in minutes.
    pub schedule_duration: u16,
    /// Whether auto keep warm is enabled.
    pub auto_keep_warm: bool,
    /// Rice type identifier.
    pub rice_id: u16,
    /// Taste index.
    pub taste: u8,
}

/// An editable cooking profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookerProfile {
    /// Profile payload, excluding the checksum.
    payload: [u8; PAYLOAD_SIZE],
    /// Checksum trailer as last parsed or serialized.
    checksum: u16,
}

impl CookerProfile {
    /// Size of the profile payload in bytes.
    pub const PAYLOAD_LEN: usize = PAYLOAD_SIZE;
    /// Size of the checksum trailer in bytes.
    pub const CHECKSUM_LEN: usize = 2;
    /// Shortest input accepted before looking at the checksum.
    const MIN_SIZE: usize = 5;

    /// Flag bit: profile supports a delayed start.
    pub const FLAG_CAN_SCHEDULE: u8 = 0x40;
    /// Flag bit: profile supports auto keep warm.
    pub const FLAG_CAN_AUTO_KEEP_WARM: u8 = 0x20;

    /// Upper bound for a delayed start applied at construction (24 hours).
    pub const MAX_SCHEDULE_MINUTES: u16 = 1440;

    /// Menus that accept a rice type.
    const RICE_MENUS: [u32; 2] = [1, 2];
    /// Menu that accepts a taste setting.
    const TASTE_MENU: u32 = 1;

    const HIGH_BIT: u8 = 0x80;
    const LOW_BITS: u8 = 0x7F;

    /// Parse a profile from its hex representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfile`] if the text is not hex, decodes to
    /// fewer than 5 bytes, or does not carry a 20-byte payload, and
    /// [`Error::ChecksumMismatch`] if the trailer does not match the payload.
    pub fn parse(profile_hex: &str) -> Result<Self> {
        let bytes = hex::decode(profile_hex.trim()).map_err(|e| Error::InvalidProfile {
            reason: format!("not a hex string: {}", e),
        })?;

        debug!("CookerProfile::parse called with {} bytes", bytes.len());

        if bytes.len() < Self::MIN_SIZE {
            return Err(Error::InvalidProfile {
                reason: format!(
                    "{} bytes (need at least {})",
                    bytes.len(),
                    Self::MIN_SIZE
                ),
            });
        }

        let (payload, trailer) = bytes.split_at(bytes.len() - Self::CHECKSUM_LEN);
        let stored = u16::from_be_bytes([trailer[0], trailer[1]]);

        if !verify_crc(&bytes) {
            return Err(Error::ChecksumMismatch {
                expected: calculate_crc(payload),
                actual: stored,
            });
        }

        let payload: [u8; PAYLOAD_SIZE] =
            payload.try_into().map_err(|_| Error::InvalidProfile {
                reason: format!(
                    "payload is {} bytes (expected {})",
                    payload.len(),
                    Self::PAYLOAD_LEN
                ),
            })?;

        Ok(Self {
            payload,
            checksum: stored,
        })
    }

    /// Parse a profile and apply optional adjustments.
    ///
    /// The schedule is applied only when it is longer than the resulting
    /// cooking duration and no longer than [`Self::MAX_SCHEDULE_MINUTES`].
    /// Auto keep warm is only ever switched on here, never off.
    ///
    /// # Errors
    ///
    /// Everything [`Self::parse`] returns, plus [`Error::InvalidParameter`]
    /// for a taste outside 0..=2 on a taste-capable profile.
    pub fn with_options(profile_hex: &str, options: ProfileOptions) -> Result<Self> {
        let mut profile = Self::parse(profile_hex)?;

        if let Some(duration) = options.duration {
            profile.set_duration(duration);
        }

        if let Some(schedule) = options.schedule {
            if schedule > profile.duration() && schedule <= Self::MAX_SCHEDULE_MINUTES {
                profile.set_schedule_duration(schedule);
            }
        }

        if options.auto_keep_warm == Some(true) {
            profile.set_auto_keep_warm(true);
        }

        if let Some(taste) = options.taste {
            profile.set_taste(taste)?;
        }

        Ok(profile)
    }

    fn minutes_at(&self, offset: usize) -> u16 {
        self.payload[offset] as u16 * 60 + self.payload[offset + 1] as u16
    }

    fn store_minutes(&mut self, offset: usize, minutes: u16) {
        self.payload[offset] = (minutes / 60) as u8;
        self.payload[offset + 1] = (minutes % 60) as u8;
    }

    fn high_bit(&self, offset: usize) -> bool {
        self.payload[offset] & Self::HIGH_BIT != 0
    }

    fn set_high_bit(&mut self, offset: usize, enabled: bool) {
        if enabled {
            self.payload[offset] |= Self::HIGH_BIT;
        } else {
            self.payload[offset] &= Self::LOW_BITS;
        }
    }

    // === Identity ===

    /// Get the device type byte.
    pub fn device_type(&self) -> u8 {
        self.payload[DEVICE_TYPE]
    }

    /// Get the device sub-type byte.
    pub fn sub_type(&self) -> u8 {
        self.payload[SUB_TYPE]
    }

    /// Get the menu index.
    pub fn menu_index(&self) -> u8 {
        self.payload[MENU_INDEX]
    }

    /// Set the menu index.
    pub fn set_menu_index(&mut self, index: u8) {
        self.payload[MENU_INDEX] = index;
    }

    /// Get the menu identifier.
    pub fn menu_id(&self) -> u32 {
        u32::from_be_bytes([
            self.payload[MENU_ID],
            self.payload[MENU_ID + 1],
            self.payload[MENU_ID + 2],
            self.payload[MENU_ID + 3],
        ])
    }

    /// Get the maximum cook time in minutes.
    pub fn cook_time_max(&self) -> u16 {
        self.minutes_at(COOK_TIME_MAX)
    }

    /// Get the minimum cook time in minutes.
    pub fn cook_time_min(&self) -> u16 {
        self.minutes_at(COOK_TIME_MIN)
    }

    // === Capabilities ===

    /// Check if the profile supports a delayed start.
    pub fn can_schedule(&self) -> bool {
        self.payload[FLAGS] & Self::FLAG_CAN_SCHEDULE != 0
    }

    /// Check if the profile supports toggling auto keep warm.
    pub fn can_set_auto_keep_warm(&self) -> bool {
        self.payload[FLAGS] & Self::FLAG_CAN_AUTO_KEEP_WARM != 0
    }

    /// Check if the cooking duration is adjustable.
    pub fn can_set_duration(&self) -> bool {
        self.cook_time_max() > self.cook_time_min()
    }

    /// Check if a rice type can be selected.
    pub fn can_choose_rice(&self) -> bool {
        Self::RICE_MENUS.contains(&self.menu_id())
    }

    /// Check if the taste can be configured.
    pub fn can_configure_taste(&self) -> bool {
        self.menu_id() == Self::TASTE_MENU
    }

    // === Duration ===

    /// Get the cooking duration in minutes.
    pub fn duration(&self) -> u16 {
        self.minutes_at(DURATION)
    }

    /// Set the cooking duration in minutes.
    ///
    /// The value is clamped to the profile's min/max cook time.
    pub fn set_duration(&mut self, minutes: u16) -> MutationOutcome {
        if !self.can_set_duration() {
            return MutationOutcome::Unsupported;
        }

        let minutes = minutes.clamp(self.cook_time_min(), self.cook_time_max());
        self.store_minutes(DURATION, minutes);
        MutationOutcome::Applied
    }

    // === Schedule ===

    /// Check if the delayed start is enabled.
    pub fn schedule_enabled(&self) -> bool {
        self.high_bit(SCHEDULE_HOURS)
    }

    /// Enable or disable the delayed start.
    pub fn set_schedule_enabled(&mut self, enabled: bool) -> MutationOutcome {
        self.set_high_bit(SCHEDULE_HOURS, enabled);
        MutationOutcome::Applied
    }

    /// Get the delay before cooking in minutes.
    pub fn schedule_duration(&self) -> u16 {
        (self.payload[SCHEDULE_HOURS] & Self::LOW_BITS) as u16 * 60
            + (self.payload[SCHEDULE_MINUTES] & Self::LOW_BITS) as u16
    }

    /// Set the delay before cooking in minutes and enable the schedule.
    ///
    /// The auto keep warm flag sharing the minutes byte is preserved.
    pub fn set_schedule_duration(&mut self, minutes: u16) -> MutationOutcome {
        if !self.can_schedule() {
            return MutationOutcome::Unsupported;
        }

        let hours = (minutes / 60) as u8;
        let remainder = (minutes % 60) as u8;

        self.payload[SCHEDULE_HOURS] =
            (self.payload[SCHEDULE_HOURS] & Self::HIGH_BIT) | (hours & Self::LOW_BITS);
        self.payload[SCHEDULE_MINUTES] =
            (self.payload[SCHEDULE_MINUTES] & Self::HIGH_BIT) | remainder;

        self.set_schedule_enabled(true)
    }

    // === Keep warm ===

    /// Check if auto keep warm is enabled.
    pub fn auto_keep_warm(&self) -> bool {
        self.high_bit(SCHEDULE_MINUTES)
    }

    /// Enable or disable keeping warm after cooking.
    pub fn set_auto_keep_warm(&mut self, enabled: bool) -> MutationOutcome {
        if !self.can_set_auto_keep_warm() {
            return MutationOutcome::Unsupported;
        }

        self.set_high_bit(SCHEDULE_MINUTES, enabled);
        MutationOutcome::Applied
    }

    // === Rice and taste ===

    /// Get the rice type identifier.
    pub fn rice_id(&self) -> u16 {
        u16::from_be_bytes([self.payload[RICE_ID], self.payload[RICE_ID + 1]])
    }

    /// Set the rice type identifier.
    ///
    /// Identifiers that do not fit in 16 bits are stored as 0.
    pub fn set_rice_id(&mut self, rice_id: u32) -> MutationOutcome {
        if !self.can_choose_rice() {
            return MutationOutcome::Unsupported;
        }

        let rice_id = u16::try_from(rice_id).unwrap_or(0);
        self.payload[RICE_ID..RICE_ID + 2].copy_from_slice(&rice_id.to_be_bytes());
        MutationOutcome::Applied
    }

    /// Get the taste index.
    pub fn taste(&self) -> u8 {
        self.payload[TASTE]
    }

    /// Set the taste index (0 = soft, 1 = moderate, 2 = rigid).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the profile supports taste and
    /// `taste` is not 0, 1 or 2.
    pub fn set_taste(&mut self, taste: u8) -> Result<MutationOutcome> {
        if !self.can_configure_taste() {
            return Ok(MutationOutcome::Unsupported);
        }

        if taste > 2 {
            return Err(Error::InvalidParameter {
                name: "taste".to_string(),
                value: taste.to_string(),
            });
        }

        self.payload[TASTE] = taste;
        Ok(MutationOutcome::Applied)
    }

    // === Serialization ===

    /// Get the raw payload bytes.
    pub fn payload(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.payload
    }

    /// Get the checksum as last parsed or serialized.
    ///
    /// This is not refreshed by setters; use [`Self::to_hex`] before sending.
    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// Check if the stored checksum matches the current payload.
    pub fn is_valid(&self) -> bool {
        self.checksum == calculate_crc(&self.payload)
    }

    /// Recompute the checksum over the current payload.
    pub fn update_checksum(&mut self) {
        self.checksum = calculate_crc(&self.payload);
    }

    /// Serialize the profile to bytes with a freshly computed checksum.
    pub fn to_bytes(&mut self) -> Vec<u8> {
        self.update_checksum();

        let mut bytes = Vec::with_capacity(Self::PAYLOAD_LEN + Self::CHECKSUM_LEN);
        bytes.extend_from_slice(&self.payload);
        bytes.extend_from_slice(&self.checksum.to_be_bytes());

        // Checked in debug builds only; the trailer was computed just above
        debug_assert!(verify_crc(&bytes));
        bytes
    }

    /// Serialize the profile to lowercase hex with a freshly computed checksum.
    pub fn to_hex(&mut self) -> String {
        let encoded = hex::encode(self.to_bytes());
        debug!("Serialized profile: {}", encoded);
        encoded
    }

    /// Get a snapshot of the user-facing profile state.
    pub fn attributes(&self) -> ProfileAttributes {
        ProfileAttributes {
            menu_id: self.menu_id(),
            can_schedule: self.can_schedule(),
            can_set_auto_keep_warm: self.can_set_auto_keep_warm(),
            can_set_duration: self.can_set_duration(),
            can_choose_rice: self.can_choose_rice(),
            can_configure_taste: self.can_configure_taste(),
            cook_time_min: self.cook_time_min(),
            cook_time_max: self.cook_time_max(),
            duration: self.duration(),
            schedule_enabled: self.schedule_enabled(),
            schedule_duration: self.schedule_duration(),
            auto_keep_warm: self.auto_keep_warm(),
            rice_id: self.rice_id(),
            taste: self.taste(),
        }
    }
}

impl std::str::FromStr for CookerProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
