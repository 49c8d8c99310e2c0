use delaycast::application::inference::adapter::InferenceAdapter;
use delaycast::application::inference::smartcore_scorer::SmartCoreScorer;
use delaycast::config::Config;
use delaycast::infrastructure::artifacts::FittedEncoder;
use delaycast::interfaces::app::PredictorApp;

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
        .init();

    info!("Initializing Delaycast...");

    // 2. Load Config
    let config = Config::from_env()?;

    // 3. Load Artifacts. A missing or incompatible artifact aborts here:
    // the form is never shown without a scorable model behind it.
    let encoder = FittedEncoder::load(&config.encoder_path())?;
    let scorer = SmartCoreScorer::load(&config.model_path())?;

    let adapter = InferenceAdapter::new(Arc::new(encoder), Arc::new(scorer));
    info!(
        "Artifacts ready: {} ({} feature columns)",
        adapter.model_name(),
        adapter.column_count()
    );

    // 4. Run UI (blocks main thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Delivery Delay Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Delivery Delay Predictor",
        native_options,
        Box::new(|_cc| Ok(Box::new(PredictorApp::new(adapter)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
