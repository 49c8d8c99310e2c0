use anyhow::{Result, bail};
use std::env;
use std::path::PathBuf;

/// Artifact locations. The defaults are the deployment contract (a fixed
/// `models/` directory next to the installation); the env overrides exist
/// for development setups only.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: PathBuf,
    pub encoder_file: String,
    pub model_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_dir = env::var("MODEL_DIR").unwrap_or_else(|_| "models".to_string());
        if model_dir.trim().is_empty() {
            bail!("MODEL_DIR must not be empty");
        }

        let encoder_file =
            env::var("ENCODER_FILE").unwrap_or_else(|_| "delay_encoder.json".to_string());
        let model_file = env::var("MODEL_FILE").unwrap_or_else(|_| "delay_model.json".to_string());

        Ok(Config {
            model_dir: PathBuf::from(model_dir),
            encoder_file,
            model_file,
        })
    }

    pub fn encoder_path(&self) -> PathBuf {
        self.model_dir.join(&self.encoder_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(&self.model_file)
    }
}
