mod helpers;

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};

use a11y_scan::application::ports::TransportError;
use a11y_scan::application::services::{
    GatewayError, SPEECH_SAMPLE_RATE, SpeechSynthesizer, UpstreamError, decode_speech_payload,
};
use a11y_scan::infrastructure::llm::MockGenerationTransport;

use helpers::{pcm16_le, synthesizer_with, synthesizer_without_key};

const PCM_MIME: &str = "audio/L16;codec=pcm;rate=24000";

fn scripted_audio(samples: &[i16]) -> Arc<MockGenerationTransport> {
    let transport = Arc::new(MockGenerationTransport::new());
    transport.push_inline_audio(PCM_MIME, &general_purpose::STANDARD.encode(pcm16_le(samples)));
    transport
}

#[tokio::test]
async fn given_transcript_when_synthesizing_then_sends_text_as_sole_part_with_audio_modality_and_voice() {
    let transport = scripted_audio(&[0, 1, 2]);
    let synthesizer = synthesizer_with(&transport);

    synthesizer.synthesize_speech("Welcome to the report.").await.unwrap();

    let (model, sent) = transport.requests().pop().unwrap();
    assert_eq!(model, SpeechSynthesizer::DEFAULT_MODEL);
    assert_eq!(sent.contents.len(), 1);
    assert_eq!(sent.contents[0].parts.len(), 1);
    assert_eq!(sent.contents[0].parts[0].as_text(), Some("Welcome to the report."));
    assert!(sent.system_instruction.is_none());

    let config = sent.generation_config.unwrap();
    assert_eq!(config.response_modalities, Some(vec!["AUDIO".to_string()]));
    assert_eq!(
        config
            .speech_config
            .unwrap()
            .voice_config
            .prebuilt_voice_config
            .voice_name,
        "Kore"
    );
    assert!(config.response_schema.is_none());
}

#[tokio::test]
async fn given_pcm_payload_when_synthesizing_then_returns_mono_audio_at_24khz() {
    let transport = scripted_audio(&[0, 16384, -16384, 32767]);
    let synthesizer = synthesizer_with(&transport);

    let audio = synthesizer.synthesize_speech("Hi").await.unwrap();

    assert_eq!(audio.sample_rate, SPEECH_SAMPLE_RATE);
    assert_eq!(audio.sample_rate, 24_000);
    assert_eq!(audio.channel_count(), 1);
    assert_eq!(audio.channels[0], vec![0.0, 0.5, -0.5, 32767.0 / 32768.0]);
}

#[tokio::test]
async fn given_missing_api_key_when_synthesizing_then_fails_with_configuration_error_and_no_call() {
    let transport = scripted_audio(&[0]);
    let synthesizer = synthesizer_without_key(&transport);

    let result = synthesizer.synthesize_speech("Hi").await;

    assert!(matches!(result, Err(GatewayError::Configuration(_))));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn given_response_without_audio_when_synthesizing_then_returns_missing_audio_upstream_error() {
    let transport = Arc::new(MockGenerationTransport::new());
    transport.push_text("I can only speak in text today.");
    let synthesizer = synthesizer_with(&transport);

    let result = synthesizer.synthesize_speech("Hi").await;

    assert!(matches!(
        result,
        Err(GatewayError::Upstream(UpstreamError::MissingAudio))
    ));
}

#[tokio::test]
async fn given_empty_inline_payload_when_synthesizing_then_returns_missing_audio_upstream_error() {
    let transport = Arc::new(MockGenerationTransport::new());
    transport.push_inline_audio(PCM_MIME, "");
    let synthesizer = synthesizer_with(&transport);

    let result = synthesizer.synthesize_speech("Hi").await;

    assert!(matches!(
        result,
        Err(GatewayError::Upstream(UpstreamError::MissingAudio))
    ));
}

#[tokio::test]
async fn given_invalid_base64_payload_when_synthesizing_then_returns_decode_error() {
    let transport = Arc::new(MockGenerationTransport::new());
    transport.push_inline_audio(PCM_MIME, "!!not base64!!");
    let synthesizer = synthesizer_with(&transport);

    let result = synthesizer.synthesize_speech("Hi").await;

    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[tokio::test]
async fn given_transport_failure_when_synthesizing_then_returns_upstream_error() {
    let transport = Arc::new(MockGenerationTransport::new());
    transport.push_response(Err(TransportError::RequestFailed(
        "connection refused".to_string(),
    )));
    let synthesizer = synthesizer_with(&transport);

    let result = synthesizer.synthesize_speech("Hi").await;

    assert!(matches!(
        result,
        Err(GatewayError::Upstream(UpstreamError::Transport(_)))
    ));
}

#[test]
fn given_odd_byte_count_when_decoding_payload_then_returns_decode_error() {
    let payload = general_purpose::STANDARD.encode([0u8, 1, 2]);

    let result = decode_speech_payload(&payload, 1);

    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[test]
fn given_two_channels_and_five_samples_when_decoding_payload_then_drops_trailing_sample() {
    let payload = general_purpose::STANDARD.encode(pcm16_le(&[0, 16384, -16384, 8192, 32767]));

    let audio = decode_speech_payload(&payload, 2).unwrap();

    assert_eq!(audio.frame_count(), 2);
    assert_eq!(audio.channels[0], vec![0.0, -0.5]);
    assert_eq!(audio.channels[1], vec![0.5, 0.25]);
}
