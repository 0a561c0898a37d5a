use crate::assembler::ScanAssembler;
use crate::error::OleiLidarError;
use crate::packet::PacketView;
use crate::revolution::RevolutionAccumulator;
use olelidar_data::{PacketHeader, ScanConfig, ScanFrame};
use tracing::info;

/// Packet-to-scan decoder state.
///
/// All mutable state of the decoding pipeline lives here and is driven by a
/// single caller; no packet ingestions are ever concurrent. A rejected
/// packet leaves the accumulator untouched, so decoding continues with the
/// next packet.
pub struct Decoder {
    config: ScanConfig,
    accumulator: RevolutionAccumulator,
    assembler: ScanAssembler,
}

impl Decoder {
    pub fn new(config: ScanConfig) -> Self {
        Decoder {
            config,
            accumulator: RevolutionAccumulator::new(),
            assembler: ScanAssembler::new(),
        }
    }

    /// Replace the configuration snapshot.
    /// Must only be called between packet ingestions.
    pub fn apply_config(&mut self, config: ScanConfig) {
        info!(
            frequency = config.frequency,
            route = config.route,
            angle_min_deg = config.angle_min_deg,
            angle_max_deg = config.angle_max_deg,
            range_min = config.range_min,
            range_max = config.range_max,
            "applying decoder configuration"
        );
        self.config = config;
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Ingest one raw packet buffer.
    ///
    /// Returns a completed scan frame when this packet closed a revolution
    /// that passes the validity gate, `Ok(None)` otherwise.
    pub fn process_packet(&mut self, buf: &[u8]) -> Result<Option<ScanFrame>, OleiLidarError> {
        let packet = PacketView::new(buf)?;
        match self.accumulator.ingest(&packet, &self.config) {
            Some(revolution) => self.assembler.assemble(revolution, &self.config),
            None => Ok(None),
        }
    }

    /// Decode only the header fields of a packet buffer.
    pub fn peek_header(buf: &[u8]) -> Result<PacketHeader, OleiLidarError> {
        PacketView::new(buf).map(|packet| packet.header())
    }
}
