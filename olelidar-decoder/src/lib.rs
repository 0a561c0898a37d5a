use std::sync::mpsc;

mod assembler;
mod constants;
mod decoder;
mod driver_threads;
mod error;
mod numeric;
mod packet;
mod resample;
mod revolution;
mod time;

use crate::constants::{CONTROL_CHANNEL_BOUND, PACKET_CHANNEL_BOUND, SCAN_CHANNEL_BOUND};
use crate::driver_threads::decode_packets;
use crossbeam_channel::bounded;
use olelidar_data::{ScanConfig, ScanFrame};

pub use crate::decoder::Decoder;
pub use crate::driver_threads::{join, DecoderThreads};
pub use crate::error::OleiLidarError;

/// Function to launch the decoding pipeline.
///
/// Returns the thread handle, the sender the packet transport feeds raw
/// 1240-byte buffers into, the receiver completed scan frames arrive on,
/// and a sender for configuration snapshots. Snapshots are applied between
/// packet ingestions, never mid-packet.
///
/// # Arguments
///
/// * `config` - Initial decoder configuration.
pub fn run_decoder(
    config: ScanConfig,
) -> (
    DecoderThreads,
    mpsc::SyncSender<Vec<u8>>,
    mpsc::Receiver<ScanFrame>,
    crossbeam_channel::Sender<ScanConfig>,
) {
    let (packet_tx, packet_rx) = mpsc::sync_channel::<Vec<u8>>(PACKET_CHANNEL_BOUND);
    let (scan_tx, scan_rx) = mpsc::sync_channel::<ScanFrame>(SCAN_CHANNEL_BOUND);
    let (config_tx, config_rx) = bounded(CONTROL_CHANNEL_BOUND);
    let (terminator_tx, terminator_rx) = bounded(CONTROL_CHANNEL_BOUND);

    let decoder = Decoder::new(config);
    let decoder_thread = Some(std::thread::spawn(move || {
        decode_packets(decoder, packet_rx, config_rx, terminator_rx, scan_tx);
    }));

    let decoder_threads = DecoderThreads {
        terminator_tx,
        decoder_thread,
    };

    (decoder_threads, packet_tx, scan_rx, config_tx)
}
