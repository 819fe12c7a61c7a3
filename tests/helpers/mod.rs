#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};

use a11y_scan::application::ports::GenerationTransport;
use a11y_scan::application::services::{ContentAnalysisGateway, SpeechSynthesizer};
use a11y_scan::infrastructure::llm::{MockGenerationTransport, StaticApiKeySource};

pub const TEST_API_KEY: &str = "test-key";

pub fn all_pass_result() -> Value {
    json!({
        "accessibility_score": "92%",
        "compliance_breakdown": [
            { "category": "Tagged Headings", "score": 95, "status": "Pass", "description": "Headings are nested correctly." },
            { "category": "Readability", "score": 88, "status": "Pass", "description": "Plain language throughout." },
            { "category": "Alt Text", "score": 100, "status": "Pass", "description": "No images present." },
            { "category": "Color Contrast", "score": 85, "status": "Pass", "description": "Contrast meets 4.5:1." }
        ],
        "issues_found": [],
        "fixed_accessible_version": "<nav aria-label=\"Table of contents\"><ul><li><a href=\"#main\">Main</a></li></ul></nav><p id=\"main\">Hello</p>",
        "simplified_version": "Hello",
        "audio_transcript": "Hello",
        "metadata": { "language": "en", "wcag_version": "2.1", "aoda_compliance": true }
    })
}

pub fn mixed_result() -> Value {
    json!({
        "accessibility_score": "47%",
        "compliance_breakdown": [
            { "category": "Tagged Headings", "score": 30, "status": "Fail", "description": "No heading hierarchy." },
            { "category": "Alt Text", "score": 90, "status": "Pass", "description": "Images described." },
            { "category": "Table Accessibility", "score": 20, "status": "Fail", "description": "Tables lack headers." }
        ],
        "issues_found": [
            { "issue": "Missing H1", "severity": "Critical", "location": "Page 1", "recommendation": "Add a single H1." },
            { "issue": "Table without th", "severity": "High", "location": "Page 2", "recommendation": "Use th with scope." },
            { "issue": "Long sentences", "severity": "Low", "location": "Section 3", "recommendation": "Shorten sentences." }
        ],
        "fixed_accessible_version": "<nav><ul><li><a href=\"#s1\">Intro</a></li></ul></nav><h1 id=\"s1\">Intro</h1>",
        "simplified_version": "# Intro\n\nShort text.",
        "audio_transcript": "Intro. Short text.",
        "metadata": { "language": "fr", "wcag_version": "2.1 AA", "aoda_compliance": false }
    })
}

fn shared(transport: &Arc<MockGenerationTransport>) -> Arc<dyn GenerationTransport> {
    let transport: Arc<dyn GenerationTransport> = transport.clone();
    transport
}

pub fn gateway_with(transport: &Arc<MockGenerationTransport>) -> ContentAnalysisGateway {
    ContentAnalysisGateway::new(
        shared(transport),
        Arc::new(StaticApiKeySource::new(TEST_API_KEY)),
        ContentAnalysisGateway::DEFAULT_MODEL,
    )
}

pub fn gateway_without_key(transport: &Arc<MockGenerationTransport>) -> ContentAnalysisGateway {
    ContentAnalysisGateway::new(
        shared(transport),
        Arc::new(StaticApiKeySource::missing()),
        ContentAnalysisGateway::DEFAULT_MODEL,
    )
}

pub fn synthesizer_with(transport: &Arc<MockGenerationTransport>) -> SpeechSynthesizer {
    SpeechSynthesizer::new(
        shared(transport),
        Arc::new(StaticApiKeySource::new(TEST_API_KEY)),
        SpeechSynthesizer::DEFAULT_MODEL,
        SpeechSynthesizer::DEFAULT_VOICE,
    )
}

pub fn synthesizer_without_key(transport: &Arc<MockGenerationTransport>) -> SpeechSynthesizer {
    SpeechSynthesizer::new(
        shared(transport),
        Arc::new(StaticApiKeySource::missing()),
        SpeechSynthesizer::DEFAULT_MODEL,
        SpeechSynthesizer::DEFAULT_VOICE,
    )
}

pub fn pcm16_le(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
