#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decoder configuration snapshot.
///
/// The decoder reads a snapshot of these values at each frame emission.
/// Updates must be applied between packet ingestions, never mid-packet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Name of the sensor frame, carried into every emitted scan.
    pub frame_id: String,
    /// Rotation frequency of the sensor in Hz.
    pub frequency: f32,
    /// Target output sample count per revolution. The achievable count is
    /// dictated by how many samples the sensor actually produced in a
    /// sweep, so this value is currently overridden by the observed count.
    pub route: u16,
    /// Start angle of the output scan in degrees.
    pub angle_min_deg: f32,
    /// End angle of the output scan in degrees.
    pub angle_max_deg: f32,
    /// Minimum valid range in meters.
    pub range_min: f32,
    /// Maximum valid range in meters. Assembled ranges above this are
    /// clamped to exactly this value.
    pub range_max: f32,
    /// In-packet range filter in millimeters. Readings farther than this
    /// are treated as "no return" and zeroed during decoding.
    pub range_max_mm: u16,
    /// A revolution is only emitted when its first azimuth is below this
    /// raw value (hundredths of a degree). Empirically chosen upstream.
    pub valid_start_azimuth: u16,
    /// First-packet azimuths above this raw value (hundredths of a degree)
    /// mark a mid-sweep start; the first boundary after such a start is
    /// absorbed instead of emitted. Empirically chosen upstream.
    pub warmup_azimuth: u16,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            frame_id: "olelidar".to_string(),
            frequency: 10.0,
            route: 1440,
            angle_min_deg: 0.0,
            angle_max_deg: 360.0,
            range_min: 0.05,
            range_max: 30.0,
            range_max_mm: 30000,
            valid_start_azimuth: 2250,
            warmup_azimuth: 200,
        }
    }
}
