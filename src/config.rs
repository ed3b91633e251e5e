use crate::environment::Arm;
use crate::policies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub num_rounds: u64,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentConfig {
    pub arms: Vec<Arm>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub simulation: SimulationConfig,
    pub environment: EnvironmentConfig,
    pub agents: Vec<PolicyType>,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}
