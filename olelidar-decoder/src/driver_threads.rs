use crate::decoder::Decoder;
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use olelidar_data::{ScanConfig, ScanFrame};
use std::sync::mpsc;
use std::thread::JoinHandle;
use tracing::warn;

/// Struct that contains the decoder thread.
pub struct DecoderThreads {
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) decoder_thread: Option<JoinHandle<()>>,
}

pub(crate) fn decode_packets(
    mut decoder: Decoder,
    packet_rx: mpsc::Receiver<Vec<u8>>,
    config_rx: Receiver<ScanConfig>,
    terminator_rx: Receiver<bool>,
    scan_tx: mpsc::SyncSender<ScanFrame>,
) {
    while !do_terminate(&terminator_rx) {
        // configuration snapshots apply only between packets
        if let Ok(config) = config_rx.try_recv() {
            decoder.apply_config(config);
        }

        let packet = match packet_rx.try_recv() {
            Ok(packet) => packet,
            Err(mpsc::TryRecvError::Empty) => {
                sleep_ms(1);
                continue;
            }
            Err(mpsc::TryRecvError::Disconnected) => return,
        };

        match decoder.process_packet(&packet) {
            Ok(Some(frame)) => {
                if scan_tx.send(frame).is_err() {
                    // the consumer went away
                    return;
                }
            }
            Ok(None) => (),
            Err(e) => warn!("{e}"),
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the decoder thread.
/// This function is automatically called when `decoder_threads` is dropped.
pub fn join(decoder_threads: &mut DecoderThreads) {
    // the thread may already have exited and closed its end
    let _ = decoder_threads.terminator_tx.send(true);

    if decoder_threads.decoder_thread.is_some() {
        let thread = decoder_threads.decoder_thread.take().unwrap();
        thread.join().unwrap();
    }
}

impl Drop for DecoderThreads {
    fn drop(&mut self) {
        join(self);
    }
}
