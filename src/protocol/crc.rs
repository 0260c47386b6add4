//! CRC calculation for cooking profiles.
//!
//! Uses CRC-16/CCITT with polynomial 0x1021, zero initial value, no final
//! XOR and no reflection (also known as CRC-16/XMODEM). The checksum is
//! appended to the profile payload most-significant byte first.

/// CRC-16/CCITT polynomial
const CRC_POLYNOMIAL: u16 = 0x1021;

/// Initial CRC value
const CRC_INITIAL: u16 = 0x0000;

/// Calculate CRC-16 for profile payload data.
///
/// # Arguments
///
/// * `data` - The data bytes to calculate CRC for
///
/// # Returns
///
/// The 16-bit CRC value
///
/// # Example
///
/// ```
/// use chunmi_cooker::protocol::calculate_crc;
///
/// assert_eq!(calculate_crc(b"123456789"), 0x31C3);
/// ```
pub fn calculate_crc(data: &[u8]) -> u16 {
    let mut crc = CRC_INITIAL;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC_POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

/// Verify that data with an appended big-endian CRC is valid.
///
/// Running the CRC over payload and trailer together yields zero exactly
/// when the trailer matches the payload.
///
/// # Arguments
///
/// * `data` - The data bytes including the CRC at the end
///
/// # Returns
///
/// `true` if the CRC is valid, `false` otherwise
pub fn verify_crc(data: &[u8]) -> bool {
    if data.len() < 2 {
        return false;
    }

    calculate_crc(data) == 0
}

/// Append CRC to data buffer.
///
/// Returns a new vector containing the original data followed by its CRC
/// in big-endian order.
pub fn append_crc(data: &[u8]) -> Vec<u8> {
    let crc = calculate_crc(data);
    let mut result = data.to_vec();
    result.extend_from_slice(&crc.to_be_bytes());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc_empty() {
        assert_eq!(calculate_crc(&[]), CRC_INITIAL);
    }

    #[test]
    fn test_crc_check_value() {
        // Standard check value for CRC-16/XMODEM
        assert_eq!(calculate_crc(b"123456789"), 0x31C3);
    }

    #[test]
    fn test_crc_different_data() {
        let data1 = [0x01, 0x02, 0x03];
        let data2 = [0x01, 0x02, 0x04];
        assert_ne!(calculate_crc(&data1), calculate_crc(&data2));
    }

    #[test]
    fn test_verify_crc_valid() {
        let with_crc = append_crc(b"123456789");
        assert_eq!(&with_crc[9..], &[0x31, 0xC3]);
        assert!(verify_crc(&with_crc));
    }

    #[test]
    fn test_verify_crc_invalid() {
        let data = [0x02, 0x01, 0x00, 0x00, 0x00];
        assert!(!verify_crc(&data));
    }

    #[test]
    fn test_verify_crc_byte_order() {
        // Little-endian trailer must not verify
        let mut data = b"123456789".to_vec();
        data.extend_from_slice(&0x31C3u16.to_le_bytes());
        assert!(!verify_crc(&data));
    }

    #[test]
    fn test_verify_crc_too_short() {
        assert!(!verify_crc(&[0x00]));
    }
}
