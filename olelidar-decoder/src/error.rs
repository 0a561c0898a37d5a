use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum OleiLidarError {
    InvalidPacketLength(usize),
    InvalidMagicNumber(String),
    InsufficientSamples(usize),
}

impl fmt::Display for OleiLidarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OleiLidarError::InvalidPacketLength(len) => write!(f, "A packet must be exactly 1240 bytes. Actually {} bytes.", len),
            OleiLidarError::InvalidMagicNumber(magic) => write!(f, "Packet magic must start with 4F 4C 45 49. Observed = {}.", magic),
            OleiLidarError::InsufficientSamples(n) => write!(f, "Resampling needs at least two samples on both sides. Observed = {}.", n),
        }
    }
}

impl Error for OleiLidarError {}
