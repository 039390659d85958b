use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use elemnote::application::ports::{BlobStore, SessionStore};
use elemnote::application::services::{
    ArtifactSweeper, SpeechService, StudyAssistantService, TUTOR_PERSONA,
};
use elemnote::infrastructure::llm::GeminiClient;
use elemnote::infrastructure::observability::{TracingConfig, init_tracing};
use elemnote::infrastructure::session::InMemorySessionStore;
use elemnote::infrastructure::speech::SpeechSynthesizerFactory;
use elemnote::infrastructure::storage::LocalBlobStore;
use elemnote::infrastructure::text_processing::CompositeFileLoader;
use elemnote::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ))
    .context("failed to initialize tracing")?;

    let blob_store: Arc<dyn BlobStore> = Arc::new(
        LocalBlobStore::new(PathBuf::from(&settings.storage.local_path))
            .context("failed to open upload directory")?,
    );
    let session_store: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(settings.artifacts.max_artifacts));

    let synthesizer = SpeechSynthesizerFactory::create(&settings.speech)
        .context("failed to configure speech synthesis")?;
    let speech_service = Arc::new(SpeechService::new(
        synthesizer,
        Arc::clone(&blob_store),
        Arc::clone(&session_store),
    ));

    let llm_client = Arc::new(
        GeminiClient::new(
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            settings.llm.base_url.clone(),
            TUTOR_PERSONA,
            Duration::from_secs(settings.llm.timeout_secs),
        )
        .context("failed to build Gemini client")?,
    );
    tracing::info!(model = %llm_client.model(), "Gemini client ready");

    let assistant = Arc::new(StudyAssistantService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        llm_client,
        Arc::clone(&speech_service),
        Arc::clone(&session_store),
        Arc::clone(&blob_store),
    ));

    let sweeper = ArtifactSweeper::new(
        Arc::clone(&speech_service),
        Duration::from_secs(settings.artifacts.sweep_interval_secs),
        Duration::from_secs(settings.artifacts.ttl_secs),
    );
    tokio::spawn(sweeper.run());

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);

    let state = AppState {
        assistant,
        speech_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
