use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use content_insight::application::ports::FileLoader;
use content_insight::application::services::{IntakeService, LlmContentAnalyzer};
use content_insight::infrastructure::llm::OpenAiClient;
use content_insight::infrastructure::observability::{TracingConfig, init_tracing};
use content_insight::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, TesseractOcrAdapter,
};
use content_insight::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    if settings.llm.api_key.trim().is_empty() {
        tracing::warn!("No OpenAI API key configured; every upload will get the fallback analysis");
    }

    let pdf_loader: Arc<dyn FileLoader> = Arc::new(PdfAdapter::with_timeout(Duration::from_secs(
        settings.extraction.pdf.timeout_secs,
    )));
    let ocr_loader: Arc<dyn FileLoader> = Arc::new(TesseractOcrAdapter::new(
        &settings.extraction.ocr.tesseract_path,
        &settings.extraction.ocr.language,
        Duration::from_secs(settings.extraction.ocr.timeout_secs),
    ));
    let file_loader = Arc::new(CompositeFileLoader::new(pdf_loader, ocr_loader));

    let llm_client =
        Arc::new(OpenAiClient::from_settings(&settings.llm).context("failed to build LLM client")?);
    let analyzer = Arc::new(LlmContentAnalyzer::new(llm_client));

    let intake_service = Arc::new(IntakeService::new(file_loader, analyzer));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        intake_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
