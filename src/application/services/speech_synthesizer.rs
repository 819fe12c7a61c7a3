use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{
    ApiKeySource, Content, GenerateContentRequest, GenerationConfig, GenerationTransport, Part,
    SpeechConfig,
};
use crate::domain::DecodedAudio;

use super::gateway_error::{GatewayError, UpstreamError};
use super::single_flight::SingleFlight;

/// Rate of the PCM returned by the speech model. Decoding at any other rate
/// plays back at the wrong pitch and speed.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
pub const SPEECH_CHANNEL_COUNT: usize = 1;

/// Turns a narration transcript into playable audio.
pub struct SpeechSynthesizer {
    transport: Arc<dyn GenerationTransport>,
    api_keys: Arc<dyn ApiKeySource>,
    model: String,
    voice_name: String,
    in_flight: SingleFlight,
}

impl SpeechSynthesizer {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash-preview-tts";
    pub const DEFAULT_VOICE: &'static str = "Kore";

    pub fn new(
        transport: Arc<dyn GenerationTransport>,
        api_keys: Arc<dyn ApiKeySource>,
        model: impl Into<String>,
        voice_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_keys,
            model: model.into(),
            voice_name: voice_name.into(),
            in_flight: SingleFlight::new(),
        }
    }

    pub fn voice_name(&self) -> &str {
        &self.voice_name
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_in_flight()
    }

    #[tracing::instrument(
        skip(self, text),
        fields(chars = text.chars().count(), voice = %self.voice_name)
    )]
    pub async fn synthesize_speech(&self, text: &str) -> Result<DecodedAudio, GatewayError> {
        let api_key = self.api_keys.api_key().ok_or_else(|| {
            tracing::error!("API key is missing, speech synthesis not attempted");
            GatewayError::Configuration("API key is missing".to_string())
        })?;

        let _flight = self
            .in_flight
            .try_begin()
            .ok_or(GatewayError::Busy("speech"))?;

        let body = build_speech_request(text, &self.voice_name);

        let response = self
            .transport
            .generate_content(&api_key, &self.model, &body)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Speech request failed");
                GatewayError::from(e)
            })?;

        let inline = response
            .first_inline_data()
            .filter(|inline| !inline.data.is_empty())
            .ok_or(UpstreamError::MissingAudio)?;

        if let Some(rate) = declared_rate(&inline.mime_type).filter(|r| *r != SPEECH_SAMPLE_RATE) {
            tracing::warn!(
                declared_rate = rate,
                decode_rate = SPEECH_SAMPLE_RATE,
                mime_type = %inline.mime_type,
                "Speech payload declares an unexpected sample rate"
            );
        }

        let audio = decode_speech_payload(&inline.data, SPEECH_CHANNEL_COUNT)?;

        tracing::info!(
            frames = audio.frame_count(),
            duration_ms = audio.duration().as_millis() as u64,
            "Speech synthesized"
        );

        Ok(audio)
    }
}

/// Shapes the outbound call: the text as the sole part, audio output, fixed voice.
pub fn build_speech_request(text: &str, voice_name: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part::text(text)],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig::prebuilt_voice(voice_name)),
            ..GenerationConfig::default()
        }),
    }
}

/// Base64 PCM16 payload to float audio at [`SPEECH_SAMPLE_RATE`].
pub fn decode_speech_payload(
    base64_audio: &str,
    channel_count: usize,
) -> Result<DecodedAudio, GatewayError> {
    let bytes = general_purpose::STANDARD
        .decode(base64_audio.trim())
        .map_err(|e| GatewayError::Decode(format!("base64: {e}")))?;

    DecodedAudio::from_pcm16_le(&bytes, SPEECH_SAMPLE_RATE, channel_count)
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

// e.g. "audio/L16;codec=pcm;rate=24000"
fn declared_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::declared_rate;

    #[test]
    fn reads_rate_parameter_from_pcm_mime_type() {
        assert_eq!(declared_rate("audio/L16;codec=pcm;rate=24000"), Some(24_000));
        assert_eq!(declared_rate("audio/L16; rate=16000"), Some(16_000));
        assert_eq!(declared_rate("audio/wav"), None);
    }
}
