use crate::error::OleiLidarError;
use crate::numeric::degree_to_radian;
use crate::resample::resample;
use crate::revolution::RevolutionBuffer;
use crate::time::timestamp_nanos;
use olelidar_data::{ScanConfig, ScanFrame};
use tracing::debug;

/// Builds angle-ordered scan frames out of completed revolutions.
pub(crate) struct ScanAssembler {
    seq: u32,
}

impl ScanAssembler {
    pub(crate) fn new() -> Self {
        ScanAssembler { seq: 0 }
    }

    /// Resample and assemble one revolution into a scan frame.
    ///
    /// Returns `Ok(None)` when the validity gate rejects the sweep: a sweep
    /// whose first azimuth is not near true zero was assembled from a
    /// corrupted or incompletely detected boundary and is silently dropped.
    pub(crate) fn assemble(
        &mut self,
        revolution: RevolutionBuffer,
        config: &ScanConfig,
    ) -> Result<Option<ScanFrame>, OleiLidarError> {
        // The achievable angular resolution is dictated by how many samples
        // the sensor actually produced this sweep, not by the configured
        // target count.
        let route = revolution.len();
        let ranges = resample(&revolution.ranges, route)?;
        let intensities = resample(&revolution.intensities, route)?;

        let scan_time = 1.0 / config.frequency;
        let mut frame = ScanFrame {
            seq: self.seq,
            stamp_nanos: timestamp_nanos(),
            frame_id: config.frame_id.clone(),
            angle_min: degree_to_radian(config.angle_min_deg),
            angle_max: degree_to_radian(config.angle_max_deg),
            angle_increment: degree_to_radian(360.0 / route as f32),
            time_increment: scan_time / route as f32,
            scan_time,
            range_min: config.range_min,
            range_max: config.range_max,
            ranges: Vec::with_capacity(route),
            intensities: Vec::with_capacity(route),
        };
        self.seq = self.seq.wrapping_add(1);

        // The scan is published anticlockwise, so the sweep is reversed.
        for i in 0..route {
            let range_m = ranges[route - 1 - i] as f32 * 0.001;
            frame.ranges.push(range_m.min(config.range_max));
            frame.intensities.push(intensities[route - 1 - i] as f32);
        }

        if revolution.angles[0] >= config.valid_start_azimuth {
            debug!(
                first_azimuth = revolution.angles[0],
                "dropping sweep that did not start near zero azimuth"
            );
            return Ok(None);
        }
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revolution(samples: &[(u16, u16, u16)]) -> RevolutionBuffer {
        RevolutionBuffer {
            angles: samples.iter().map(|s| s.0).collect(),
            ranges: samples.iter().map(|s| s.1).collect(),
            intensities: samples.iter().map(|s| s.2).collect(),
        }
    }

    #[test]
    fn test_assemble_reverses_and_converts_to_meters() {
        let config = ScanConfig::default();
        let mut assembler = ScanAssembler::new();
        let frame = assembler
            .assemble(
                revolution(&[(0, 1000, 10), (100, 2000, 20), (200, 3000, 30)]),
                &config,
            )
            .unwrap()
            .unwrap();
        for (range, expected) in frame.ranges.iter().zip([3.0f32, 2.0, 1.0]) {
            assert!((range - expected).abs() < 1e-5);
        }
        assert_eq!(frame.intensities, vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_assemble_clamps_to_range_max() {
        let config = ScanConfig {
            range_max: 30.0,
            range_max_mm: 60000,
            ..ScanConfig::default()
        };
        let mut assembler = ScanAssembler::new();
        let frame = assembler
            .assemble(revolution(&[(0, 50000, 1), (100, 20000, 1)]), &config)
            .unwrap()
            .unwrap();
        // 50.0 m is reported as exactly the configured maximum
        assert!((frame.ranges[0] - 20.0).abs() < 1e-4);
        assert_eq!(frame.ranges[1], 30.0);
    }

    #[test]
    fn test_validity_gate() {
        let config = ScanConfig::default();
        let mut assembler = ScanAssembler::new();
        // 30.00 degrees: assembled from a bad boundary, dropped
        let gated = assembler
            .assemble(revolution(&[(3000, 1000, 1), (3100, 1000, 1)]), &config)
            .unwrap();
        assert!(gated.is_none());
        // 10.00 degrees: a whole revolution, emitted
        let emitted = assembler
            .assemble(revolution(&[(1000, 1000, 1), (1100, 1000, 1)]), &config)
            .unwrap();
        assert!(emitted.is_some());
    }

    #[test]
    fn test_sequence_increments_even_for_gated_frames() {
        let config = ScanConfig::default();
        let mut assembler = ScanAssembler::new();
        assert!(assembler
            .assemble(revolution(&[(3000, 1, 1), (3100, 1, 1)]), &config)
            .unwrap()
            .is_none());
        let frame = assembler
            .assemble(revolution(&[(0, 1, 1), (100, 1, 1)]), &config)
            .unwrap()
            .unwrap();
        assert_eq!(frame.seq, 1);
    }

    #[test]
    fn test_assemble_metadata() {
        let config = ScanConfig::default();
        let mut assembler = ScanAssembler::new();
        let samples: Vec<(u16, u16, u16)> = (0..150).map(|i| (i * 240, 1000, 5)).collect();
        let frame = assembler
            .assemble(revolution(&samples), &config)
            .unwrap()
            .unwrap();
        assert_eq!(frame.seq, 0);
        assert_eq!(frame.frame_id, "olelidar");
        assert_eq!(frame.ranges.len(), 150);
        assert_eq!(frame.intensities.len(), 150);
        assert_eq!(frame.angle_min, 0.0);
        assert!((frame.angle_max - 2.0 * std::f32::consts::PI).abs() < 1e-5);
        assert!((frame.angle_increment - degree_to_radian(360.0 / 150.0)).abs() < 1e-7);
        assert!((frame.scan_time - 0.1).abs() < 1e-7);
        assert!((frame.time_increment - 0.1 / 150.0).abs() < 1e-9);
        assert!(frame.stamp_nanos > 0);
    }

    #[test]
    fn test_assemble_rejects_short_revolutions() {
        let config = ScanConfig::default();
        let mut assembler = ScanAssembler::new();
        assert!(matches!(
            assembler.assemble(revolution(&[]), &config),
            Err(OleiLidarError::InsufficientSamples(0))
        ));
        assert!(matches!(
            assembler.assemble(revolution(&[(0, 1000, 1)]), &config),
            Err(OleiLidarError::InsufficientSamples(1))
        ));
    }
}
