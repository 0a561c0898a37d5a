#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one revolution of decoded lidar data.
///
/// Ranges and intensities are ordered anticlockwise from `angle_min` to
/// `angle_max` in steps of `angle_increment` and always have equal length.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanFrame {
    /// Monotonically incrementing frame counter.
    pub seq: u32,
    /// Capture time in nanoseconds since the unix epoch.
    pub stamp_nanos: u64,
    /// Name of the sensor frame this scan is expressed in.
    pub frame_id: String,
    /// Start angle of the scan in radian.
    pub angle_min: f32,
    /// End angle of the scan in radian.
    pub angle_max: f32,
    /// Angular distance between consecutive readings in radian.
    pub angle_increment: f32,
    /// Time between consecutive readings in seconds.
    pub time_increment: f32,
    /// Duration of one full revolution in seconds.
    pub scan_time: f32,
    /// Minimum valid range in meters.
    pub range_min: f32,
    /// Maximum valid range in meters.
    pub range_max: f32,
    /// Distance to an object in meters, 0.0 where the sensor saw no return.
    pub ranges: Vec<f32>,
    /// Return strength of the laser pulse in percent of a white target.
    pub intensities: Vec<f32>,
}
