use crate::constants::{AZIMUTH_INVALID, BLOCKS_PER_PACKET};
use crate::packet::PacketView;
use olelidar_data::ScanConfig;

/// Samples of one physical revolution as three parallel sequences.
/// The sequences always have equal length.
#[derive(Debug, Default)]
pub(crate) struct RevolutionBuffer {
    pub(crate) angles: Vec<u16>,
    pub(crate) ranges: Vec<u16>,
    pub(crate) intensities: Vec<u16>,
}

impl RevolutionBuffer {
    fn push(&mut self, angle: u16, range: u16, intensity: u16) {
        self.angles.push(angle);
        self.ranges.push(range);
        self.intensities.push(intensity);
    }

    pub(crate) fn len(&self) -> usize {
        self.ranges.len()
    }
}

/// Detects completed revolutions from the azimuth wraparound between
/// consecutive packets.
///
/// The sensor's azimuth counter increases monotonically within one physical
/// revolution and resets near zero exactly once per revolution, so a
/// non-increasing leading azimuth marks a new sweep without knowing the
/// sensor's sample rate in advance.
pub(crate) struct RevolutionAccumulator {
    azimuth_last: u16,
    azimuth_first: Option<u16>,
    buffer: RevolutionBuffer,
}

impl RevolutionAccumulator {
    pub(crate) fn new() -> Self {
        RevolutionAccumulator {
            azimuth_last: 0,
            azimuth_first: None,
            buffer: RevolutionBuffer::default(),
        }
    }

    /// Ingest one packet. Returns the finished revolution when this packet
    /// wrapped around to a new sweep; the wrapping packet's samples seed the
    /// next revolution.
    pub(crate) fn ingest(
        &mut self,
        packet: &PacketView,
        config: &ScanConfig,
    ) -> Option<RevolutionBuffer> {
        let azimuth_now = packet.leading_azimuth();
        let azimuth_first = *self.azimuth_first.get_or_insert(azimuth_now);

        if self.azimuth_last < azimuth_now {
            self.decode_and_fill(packet, config);
            self.azimuth_last = azimuth_now;
            return None;
        }
        self.azimuth_last = azimuth_now;

        // A mid-sweep start leaves no clean zero crossing to measure from;
        // absorb the first boundary and restart the startup gate here.
        if azimuth_first > config.warmup_azimuth {
            self.azimuth_first = Some(azimuth_now);
            return None;
        }

        let finished = std::mem::take(&mut self.buffer);
        self.decode_and_fill(packet, config);
        Some(finished)
    }

    fn decode_and_fill(&mut self, packet: &PacketView, config: &ScanConfig) {
        for index in 0..BLOCKS_PER_PACKET {
            let point = packet.point(index);
            // azimuth from 0xFF00 upwards is the sensor's invalid marker
            if point.azimuth >= AZIMUTH_INVALID {
                continue;
            }
            // beyond the configured maximum reads as "no return"
            let (range, intensity) = if point.distance > config.range_max_mm {
                (0, 0)
            } else {
                (point.distance, point.reflectivity)
            };
            self.buffer.push(point.azimuth, range, intensity);
        }
    }
}
