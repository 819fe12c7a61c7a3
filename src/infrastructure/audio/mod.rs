mod wav_encoder;

pub use wav_encoder::{WAV_MIME_TYPE, WavEncodeError, encode_wav};
