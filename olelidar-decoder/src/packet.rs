use crate::constants::{BLOCKS_PER_PACKET, HEADER_SIZE, PACKET_MAGIC, PACKET_SIZE, POINT_SIZE};
use crate::error::OleiLidarError;
use crate::numeric::{to_string, to_u16, to_u32};
use olelidar_data::PacketHeader;

/// One decoded 8-byte measurement slot.
///
/// `distance2` is reserved for a future dual-return mode and is carried but
/// never consumed by the 2D decoder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RawPoint {
    /// Angular position in hundredths of a degree.
    pub(crate) azimuth: u16,
    /// Distance to an object in millimeters.
    pub(crate) distance: u16,
    /// Return strength in percent of a white target.
    pub(crate) reflectivity: u16,
    #[allow(dead_code)] // Reserved for a future dual-return mode
    pub(crate) distance2: u16,
}

/// Typed view over one fixed-size packet buffer.
///
/// The buffer must be exactly 1240 bytes: a 40 byte header followed by 150
/// blocks of one 8 byte point each. All field reads are bounds checked by
/// construction; the view never copies or mutates the buffer.
pub(crate) struct PacketView<'a> {
    buf: &'a [u8],
}

impl<'a> PacketView<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Result<PacketView<'a>, OleiLidarError> {
        if buf.len() != PACKET_SIZE {
            return Err(OleiLidarError::InvalidPacketLength(buf.len()));
        }
        if buf[0..4] != PACKET_MAGIC {
            return Err(OleiLidarError::InvalidMagicNumber(to_string(&buf[0..4])));
        }
        Ok(PacketView { buf })
    }

    pub(crate) fn header(&self) -> PacketHeader {
        let b = self.buf;
        PacketHeader {
            version: [b[4], b[5]],
            scale: b[6],
            oem: [b[7], b[8], b[9]],
            model: b[10..22].try_into().unwrap(),
            code: [b[22], b[23]],
            hardware_version: [b[24], b[25]],
            firmware_version: [b[26], b[27]],
            timestamp: to_u32(b[28], b[29], b[30], b[31]),
            rpm: to_u16(b[32], b[33]),
            flags: [b[34], b[35]],
        }
    }

    /// Point 0 of block `index`, `index < 150`.
    pub(crate) fn point(&self, index: usize) -> RawPoint {
        debug_assert!(index < BLOCKS_PER_PACKET);
        let at = HEADER_SIZE + index * POINT_SIZE;
        let p = &self.buf[at..at + POINT_SIZE];
        RawPoint {
            azimuth: to_u16(p[0], p[1]),
            distance: to_u16(p[2], p[3]),
            reflectivity: to_u16(p[4], p[5]),
            distance2: to_u16(p[6], p[7]),
        }
    }

    /// The decoder's revolution clock: the azimuth of block 0's point 0.
    pub(crate) fn leading_azimuth(&self) -> u16 {
        self.point(0).azimuth
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::constants::AZIMUTH_INVALID;

    /// Build a valid 1240 byte packet whose first blocks carry the given
    /// `(azimuth, distance, reflectivity)` triples. Remaining blocks are
    /// marked with the sensor's invalid-azimuth code so the decoder drops
    /// them.
    pub(crate) fn packet_with_points(points: &[(u16, u16, u16)]) -> Vec<u8> {
        assert!(points.len() <= BLOCKS_PER_PACKET);
        let mut buf = vec![0u8; PACKET_SIZE];
        buf[0..4].copy_from_slice(&PACKET_MAGIC);
        buf[4..6].copy_from_slice(&[2, 0]); // version
        buf[32..34].copy_from_slice(&600u16.to_le_bytes()); // rpm
        for index in 0..BLOCKS_PER_PACKET {
            let at = HEADER_SIZE + index * POINT_SIZE;
            let (azimuth, distance, reflectivity) = match points.get(index) {
                Some(&triple) => triple,
                None => (AZIMUTH_INVALID, 0, 0),
            };
            buf[at..at + 2].copy_from_slice(&azimuth.to_le_bytes());
            buf[at + 2..at + 4].copy_from_slice(&distance.to_le_bytes());
            buf[at + 4..at + 6].copy_from_slice(&reflectivity.to_le_bytes());
        }
        buf
    }
}
