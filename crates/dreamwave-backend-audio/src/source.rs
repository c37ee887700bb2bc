//! Block-based signal sources.
//!
//! The renderers pull audio one block at a time so float intermediates never
//! outlive a block; only the quantized output accumulates.

use crate::pcm::PcmBuffer;
use crate::wav::dequantize;

/// A source of interleaved f64 frames.
pub trait SignalSource {
    /// Channels per frame.
    fn channels(&self) -> u16;

    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Fills `block` with the next frames. `block.len()` is always a multiple
    /// of [`channels`](Self::channels).
    fn fill(&mut self, block: &mut [f64]);
}

/// Plays back a PCM buffer as floats, then silence once it runs out.
#[derive(Debug, Clone)]
pub struct PcmSource<'a> {
    buffer: &'a PcmBuffer,
    position: usize,
}

impl<'a> PcmSource<'a> {
    /// Creates a source positioned at the first sample.
    pub fn new(buffer: &'a PcmBuffer) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }
}

impl SignalSource for PcmSource<'_> {
    fn channels(&self) -> u16 {
        self.buffer.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.buffer.sample_rate()
    }

    fn fill(&mut self, block: &mut [f64]) {
        let samples = self.buffer.samples();
        let available = samples.len().saturating_sub(self.position).min(block.len());
        for (out, &s) in block
            .iter_mut()
            .zip(&samples[self.position..self.position + available])
        {
            *out = dequantize(s);
        }
        block[available..].fill(0.0);
        self.position += available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_source_pads_with_silence() {
        let buffer = PcmBuffer::mono(44_100, vec![32767, -32767, 0]).unwrap();
        let mut source = PcmSource::new(&buffer);

        let mut block = vec![9.0; 2];
        source.fill(&mut block);
        assert_eq!(block, vec![1.0, -1.0]);

        let mut block = vec![9.0; 3];
        source.fill(&mut block);
        assert_eq!(block, vec![0.0, 0.0, 0.0]);

        let mut block = vec![9.0; 2];
        source.fill(&mut block);
        assert_eq!(block, vec![0.0, 0.0]);
    }
}
