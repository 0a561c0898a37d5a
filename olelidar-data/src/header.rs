#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decoded packet header fields.
///
/// The sensor repeats its identity in every packet; the timestamp is the
/// number of microseconds elapsed since the top of the hour and is passed
/// through without interpretation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PacketHeader {
    pub version: [u8; 2],
    pub scale: u8,
    pub oem: [u8; 3],
    pub model: [u8; 12],
    pub code: [u8; 2],
    pub hardware_version: [u8; 2],
    pub firmware_version: [u8; 2],
    pub timestamp: u32,
    pub rpm: u16,
    pub flags: [u8; 2],
}
