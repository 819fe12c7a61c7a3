use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use a11y_scan::application::ports::{ApiKeySource, GenerationTransport};
use a11y_scan::application::services::{ContentAnalysisGateway, SpeechSynthesizer};
use a11y_scan::infrastructure::llm::{EnvApiKeySource, GeminiTransport};
use a11y_scan::infrastructure::observability::{TracingConfig, init_tracing};
use a11y_scan::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    init_tracing(
        &TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.json_format,
            default_filter: settings.logging.level.clone(),
        },
        addr,
    );

    let transport: Arc<dyn GenerationTransport> = Arc::new(GeminiTransport::new(
        &settings.gemini.base_url,
        settings.gemini.timeout(),
    )?);
    let api_keys: Arc<dyn ApiKeySource> =
        Arc::new(EnvApiKeySource::new(settings.gemini.api_key_env.clone()));

    if api_keys.api_key().is_none() {
        tracing::warn!(
            var = %settings.gemini.api_key_env,
            "API key is not set; analysis and speech requests will fail until it is"
        );
    }

    let gateway = Arc::new(ContentAnalysisGateway::new(
        Arc::clone(&transport),
        Arc::clone(&api_keys),
        settings.gemini.analysis_model.clone(),
    ));
    let speech = Arc::new(SpeechSynthesizer::new(
        Arc::clone(&transport),
        Arc::clone(&api_keys),
        settings.gemini.speech_model.clone(),
        settings.gemini.voice_name.clone(),
    ));

    let state = AppState {
        gateway,
        speech,
        max_upload_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    tracing::info!(
        %addr,
        analysis_model = %settings.gemini.analysis_model,
        speech_model = %settings.gemini.speech_model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
