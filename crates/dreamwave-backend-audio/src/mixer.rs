//! Two-track mixing: an externally supplied primary (speech) over a
//! synthetic secondary (masking).
//!
//! Alignment policy:
//! - The secondary covers the whole output; it is rendered (or read) for
//!   exactly `total_frames` frames, silent past its end.
//! - A shorter primary is centered with silence on both sides. When the
//!   padding is odd, the extra frame goes after the speech.
//! - A longer primary is truncated to `total_frames`, starting at frame 0.
//! - The primary is never looped.
//!
//! Each track gets its own gain; the sum is clamped once.

use crate::clock::frames_to_len;
use crate::error::{AudioError, AudioResult};
use crate::gain::{ClipCounter, GainStage};
use crate::pcm::PcmBuffer;
use crate::render::RenderOutput;
use crate::source::{PcmSource, SignalSource};
use crate::wav::dequantize;

/// Where the primary track lands in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Output frame at which the primary starts.
    pub offset: u64,
    /// Number of primary frames that are played.
    pub frames: u64,
}

impl Placement {
    /// Centers or truncates a primary of `primary_frames` in `total_frames`.
    pub fn center(primary_frames: u64, total_frames: u64) -> Self {
        if primary_frames >= total_frames {
            Self {
                offset: 0,
                frames: total_frames,
            }
        } else {
            Self {
                offset: (total_frames - primary_frames) / 2,
                frames: primary_frames,
            }
        }
    }

    /// Silence before the primary, in frames.
    pub fn lead_in(&self) -> u64 {
        self.offset
    }

    /// Silence after the primary, in frames.
    pub fn tail(&self, total_frames: u64) -> u64 {
        total_frames - self.offset - self.frames
    }
}

/// Mixes a primary buffer over a streamed secondary, block by block.
#[derive(Debug, Clone, Copy)]
pub struct TrackMixer {
    block_frames: usize,
}

impl TrackMixer {
    /// Creates a mixer working `block_frames` frames at a time.
    pub fn new(block_frames: usize) -> Self {
        Self {
            block_frames: block_frames.max(1),
        }
    }

    /// Mixes `primary` over `secondary` into `total_frames` frames.
    ///
    /// The output has the larger of the two channel counts; a mono track is
    /// copied to both channels of a stereo mix.
    pub fn render(
        &self,
        primary: &PcmBuffer,
        primary_gain_dbfs: f64,
        secondary: &mut dyn SignalSource,
        secondary_gain_dbfs: f64,
        total_frames: u64,
    ) -> AudioResult<RenderOutput> {
        if primary.sample_rate() != secondary.sample_rate() {
            return Err(AudioError::encoding(format!(
                "cannot mix {} Hz primary with {} Hz secondary",
                primary.sample_rate(),
                secondary.sample_rate()
            )));
        }

        let primary_ch = primary.channels() as usize;
        let secondary_ch = secondary.channels() as usize;
        let out_ch = primary_ch.max(secondary_ch);
        let frame_total = frames_to_len(total_frames, out_ch as u16)? / out_ch;
        let placement = Placement::center(primary.frame_count() as u64, total_frames);

        tracing::debug!(
            total_frames,
            primary_frames = primary.frame_count(),
            lead_in = placement.lead_in(),
            played = placement.frames,
            tail = placement.tail(total_frames),
            channels = out_ch,
            "mixing tracks"
        );

        let primary_gain = GainStage::from_dbfs(primary_gain_dbfs).linear();
        let secondary_gain = GainStage::from_dbfs(secondary_gain_dbfs).linear();
        let mut clips = ClipCounter::new();
        let mut pcm =
            PcmBuffer::with_capacity(primary.sample_rate(), out_ch as u16, frame_total)?;

        let mut secondary_block = vec![0.0; self.block_frames * secondary_ch];
        let mut out_block = vec![0.0; self.block_frames * out_ch];
        let primary_start = placement.offset as usize;
        let primary_end = primary_start + placement.frames as usize;

        let mut start = 0usize;
        while start < frame_total {
            let n = (frame_total - start).min(self.block_frames);
            let sec = &mut secondary_block[..n * secondary_ch];
            let out = &mut out_block[..n * out_ch];
            secondary.fill(sec);

            for (frame, dst) in out.chunks_exact_mut(out_ch).enumerate() {
                let src = &sec[frame * secondary_ch..(frame + 1) * secondary_ch];
                for (c, sample) in dst.iter_mut().enumerate() {
                    *sample = src[c.min(secondary_ch - 1)] * secondary_gain;
                }
            }

            // Overlap of this block with the primary's placement.
            let overlap_start = start.max(primary_start);
            let overlap_end = (start + n).min(primary_end);
            for out_frame in overlap_start..overlap_end {
                let src = primary.frame(out_frame - primary_start);
                let at = (out_frame - start) * out_ch;
                let dst = &mut out[at..at + out_ch];
                for (c, sample) in dst.iter_mut().enumerate() {
                    *sample += dequantize(src[c.min(primary_ch - 1)]) * primary_gain;
                }
            }

            clips.clamp(out);
            pcm.push_block(out);
            start += n;
        }

        Ok(RenderOutput {
            pcm,
            clipped_samples: clips.finish("mix"),
        })
    }
}

/// Mixes two PCM buffers into `total_sample_count` frames using one-second
/// blocks.
pub fn mix(
    primary: &PcmBuffer,
    primary_gain_dbfs: f64,
    secondary: &PcmBuffer,
    secondary_gain_dbfs: f64,
    total_sample_count: u64,
) -> AudioResult<PcmBuffer> {
    let mixer = TrackMixer::new(secondary.sample_rate() as usize);
    let mut source = PcmSource::new(secondary);
    Ok(mixer
        .render(
            primary,
            primary_gain_dbfs,
            &mut source,
            secondary_gain_dbfs,
            total_sample_count,
        )?
        .pcm)
}
