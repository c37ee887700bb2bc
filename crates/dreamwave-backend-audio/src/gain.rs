//! Gain staging in dBFS and hard clipping.
//!
//! Gain is applied to f64 samples only. Quantization to 16-bit happens once
//! per sample, when a finished block is appended to a [`PcmBuffer`].
//!
//! [`PcmBuffer`]: crate::pcm::PcmBuffer

/// Converts a dBFS value to a linear multiplier, `10^(dB/20)`.
#[inline]
pub fn db_to_linear(dbfs: f64) -> f64 {
    10.0_f64.powf(dbfs / 20.0)
}

/// Multiplies every sample by the linear equivalent of `dbfs`.
pub fn apply_gain(buffer: &mut [f64], dbfs: f64) {
    GainStage::from_dbfs(dbfs).apply(buffer);
}

/// Hard-limits samples to `[-1, 1]` and returns how many were clipped.
pub fn clamp(buffer: &mut [f64]) -> usize {
    let mut clipped = 0;
    for sample in buffer.iter_mut() {
        if *sample > 1.0 {
            *sample = 1.0;
            clipped += 1;
        } else if *sample < -1.0 {
            *sample = -1.0;
            clipped += 1;
        }
    }
    clipped
}

/// A fixed gain, converted from dBFS once and applied per block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainStage {
    linear: f64,
}

impl GainStage {
    /// Creates a gain stage from a dBFS value.
    pub fn from_dbfs(dbfs: f64) -> Self {
        Self {
            linear: db_to_linear(dbfs),
        }
    }

    /// Linear multiplier.
    pub fn linear(&self) -> f64 {
        self.linear
    }

    /// Applies the gain in place.
    pub fn apply(&self, buffer: &mut [f64]) {
        if self.linear == 1.0 {
            return;
        }
        for sample in buffer.iter_mut() {
            *sample *= self.linear;
        }
    }
}

/// Accumulates clipped-sample counts across render blocks.
///
/// Clipping is a quality diagnostic, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipCounter {
    clipped: u64,
}

impl ClipCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps `block` and adds its clipped samples to the count.
    pub fn clamp(&mut self, block: &mut [f64]) -> usize {
        let clipped = clamp(block);
        self.clipped += clipped as u64;
        clipped
    }

    /// Total clipped samples so far.
    pub fn clipped(&self) -> u64 {
        self.clipped
    }

    /// Logs the total if anything clipped, and returns it.
    pub fn finish(self, context: &str) -> u64 {
        if self.clipped > 0 {
            tracing::warn!(
                clipped_samples = self.clipped,
                "{}: {} samples clipped to full scale",
                context,
                self.clipped
            );
        }
        self.clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_to_linear_reference_points() {
        assert_eq!(db_to_linear(0.0), 1.0);
        assert!((db_to_linear(-6.0) - 0.5012).abs() < 1e-3);
        assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-12);
        assert!((db_to_linear(6.0) - 1.9953).abs() < 1e-3);
    }

    #[test]
    fn test_apply_gain() {
        let mut buffer = vec![1.0, -0.5, 0.25];
        apply_gain(&mut buffer, -20.0);
        assert!((buffer[0] - 0.1).abs() < 1e-12);
        assert!((buffer[1] + 0.05).abs() < 1e-12);
        assert!((buffer[2] - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_unity_gain_leaves_samples_untouched() {
        let original = vec![0.123456789, -0.987654321];
        let mut buffer = original.clone();
        apply_gain(&mut buffer, 0.0);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_clamp_counts_clipped_samples() {
        let mut buffer = vec![0.5, 1.5, -1.0, -2.0, 1.0, 0.0];
        assert_eq!(clamp(&mut buffer), 2);
        assert_eq!(buffer, vec![0.5, 1.0, -1.0, -1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_clip_counter_accumulates_across_blocks() {
        let mut counter = ClipCounter::new();
        let mut a = vec![1.1, 0.0];
        let mut b = vec![-1.1, -3.0, 0.2];
        assert_eq!(counter.clamp(&mut a), 1);
        assert_eq!(counter.clamp(&mut b), 2);
        assert_eq!(counter.clipped(), 3);
        assert_eq!(counter.finish("test"), 3);
    }

    #[test]
    fn test_gain_stage_linear() {
        let stage = GainStage::from_dbfs(-6.0);
        assert!((stage.linear() - 0.501187).abs() < 1e-6);
    }
}
