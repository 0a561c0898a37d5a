pub(crate) const PACKET_MAGIC: [u8; 4] = *b"OLEI";
pub(crate) const HEADER_SIZE: usize = 40;
pub(crate) const BLOCKS_PER_PACKET: usize = 150;
pub(crate) const POINT_SIZE: usize = 8;
pub(crate) const PACKET_SIZE: usize = HEADER_SIZE + BLOCKS_PER_PACKET * POINT_SIZE;
// Azimuth values from 0xFF00 upwards mark an invalid reading
pub(crate) const AZIMUTH_INVALID: u16 = 0xFF00;
pub(crate) const PACKET_CHANNEL_BOUND: usize = 200;
pub(crate) const SCAN_CHANNEL_BOUND: usize = 10;
pub(crate) const CONTROL_CHANNEL_BOUND: usize = 10;
