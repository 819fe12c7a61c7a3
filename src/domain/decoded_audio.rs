use std::time::Duration;

const PCM16_SCALE: f32 = 32768.0;

/// De-interleaved float audio ready for playback. Lives for one playback only.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub sample_rate: u32,
    /// One buffer per channel, all of equal length.
    pub channels: Vec<Vec<f32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Pcm16Error {
    #[error("byte length {0} is not a whole number of 16-bit samples")]
    OddByteLength(usize),
    #[error("channel count must be at least 1")]
    NoChannels,
}

impl DecodedAudio {
    /// Reinterprets little-endian signed 16-bit PCM as float audio.
    ///
    /// Frame count is `samples / channel_count`; samples left over after the last
    /// whole frame are dropped.
    pub fn from_pcm16_le(
        bytes: &[u8],
        sample_rate: u32,
        channel_count: usize,
    ) -> Result<Self, Pcm16Error> {
        if channel_count == 0 {
            return Err(Pcm16Error::NoChannels);
        }
        if bytes.len() % 2 != 0 {
            return Err(Pcm16Error::OddByteLength(bytes.len()));
        }

        let samples: Vec<i16> = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let frame_count = samples.len() / channel_count;

        let channels = (0..channel_count)
            .map(|c| {
                (0..frame_count)
                    .map(|i| f32::from(samples[i * channel_count + c]) / PCM16_SCALE)
                    .collect()
            })
            .collect();

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn frame_count(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count() as f64 / f64::from(self.sample_rate))
    }

    /// Re-interleaves the channel buffers frame by frame.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frame_count();
        let mut out = Vec::with_capacity(frames * self.channel_count());
        for i in 0..frames {
            for channel in &self.channels {
                out.push(channel[i]);
            }
        }
        out
    }
}
