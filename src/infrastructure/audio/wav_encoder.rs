use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::domain::DecodedAudio;

pub const WAV_MIME_TYPE: &str = "audio/wav";

#[derive(Debug, thiserror::Error)]
pub enum WavEncodeError {
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),
    #[error("wav write failed: {0}")]
    Write(#[from] hound::Error),
}

/// Encodes decoded audio as a 32-bit float WAV container.
pub fn encode_wav(audio: &DecodedAudio) -> Result<Vec<u8>, WavEncodeError> {
    let channels = u16::try_from(audio.channel_count())
        .ok()
        .filter(|c| *c > 0)
        .ok_or(WavEncodeError::UnsupportedChannelCount(audio.channel_count()))?;

    let spec = WavSpec {
        channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(
        44 + audio.frame_count() * usize::from(channels) * 4,
    ));

    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for sample in audio.interleaved() {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    let bytes = cursor.into_inner();

    tracing::debug!(
        frames = audio.frame_count(),
        channels,
        sample_rate = audio.sample_rate,
        bytes = bytes.len(),
        "Encoded audio as WAV"
    );

    Ok(bytes)
}
