use std::io::Cursor;

use a11y_scan::domain::DecodedAudio;
use a11y_scan::infrastructure::audio::{WavEncodeError, encode_wav};

#[test]
fn given_mono_audio_when_encoding_then_writes_float_wav_with_same_samples() {
    let audio = DecodedAudio {
        sample_rate: 24_000,
        channels: vec![vec![0.0, 0.5, -0.5]],
    };

    let bytes = encode_wav(&audio).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    let samples: Vec<f32> = reader.samples::<f32>().map(Result::unwrap).collect();
    assert_eq!(samples, vec![0.0, 0.5, -0.5]);
}

#[test]
fn given_stereo_audio_when_encoding_then_interleaves_channels() {
    let audio = DecodedAudio {
        sample_rate: 24_000,
        channels: vec![vec![0.25, 0.75], vec![-0.25, -0.75]],
    };

    let bytes = encode_wav(&audio).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().channels, 2);
    let samples: Vec<f32> = reader.samples::<f32>().map(Result::unwrap).collect();
    assert_eq!(samples, vec![0.25, -0.25, 0.75, -0.75]);
}

#[test]
fn given_audio_without_channels_when_encoding_then_returns_unsupported_channel_count() {
    let audio = DecodedAudio {
        sample_rate: 24_000,
        channels: Vec::new(),
    };

    let result = encode_wav(&audio);

    assert!(matches!(
        result,
        Err(WavEncodeError::UnsupportedChannelCount(0))
    ));
}
