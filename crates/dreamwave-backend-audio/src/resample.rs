//! Linear-interpolation resampling for speech tracks.
//!
//! Speech collaborators render at whatever rate suits them (16 or 24 kHz is
//! common); the mixer needs the render rate.

use crate::clock::sample_count;
use crate::error::AudioResult;
use crate::pcm::PcmBuffer;
use crate::wav::{dequantize, quantize};

/// Resamples `buffer` to `target_rate`, keeping its duration.
///
/// Returns a copy when the rates already match.
pub fn resample_linear(buffer: &PcmBuffer, target_rate: u32) -> AudioResult<PcmBuffer> {
    let src_rate = buffer.sample_rate();
    if src_rate == target_rate || buffer.is_empty() {
        return PcmBuffer::new(target_rate, buffer.channels(), buffer.samples().to_vec());
    }

    let channels = buffer.channels() as usize;
    let src_frames = buffer.frame_count();
    let out_frames = sample_count(buffer.duration_seconds(), target_rate)? as usize;
    let step = src_rate as f64 / target_rate as f64;

    let mut out = PcmBuffer::with_capacity(target_rate, buffer.channels(), out_frames)?;
    let mut frame = vec![0.0; channels];
    for i in 0..out_frames {
        let pos = i as f64 * step;
        let idx = (pos.floor() as usize).min(src_frames - 1);
        let frac = pos - idx as f64;
        let next = (idx + 1).min(src_frames - 1);
        let x0 = buffer.frame(idx);
        let x1 = buffer.frame(next);
        for c in 0..channels {
            let a = dequantize(x0[c]);
            let b = dequantize(x1[c]);
            frame[c] = a + (b - a) * frac;
        }
        out.push_block(&frame);
    }

    tracing::debug!(
        from = src_rate,
        to = target_rate,
        frames_in = src_frames,
        frames_out = out_frames,
        "resampled speech track"
    );
    Ok(out)
}
