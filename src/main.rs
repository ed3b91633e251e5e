mod config;
mod environment;
mod errors;
mod policies;
mod report;
mod simulation;

use config::AppConfig;
use environment::Environment;
use errors::AppError;
use report::RunReport;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let num_rounds = config.simulation.num_rounds;
    let mut reports = Vec::with_capacity(config.agents.len());

    for agent_config in config.agents {
        // fresh environment per agent, same seed: identical reward streams,
        // no interference between runs
        let mut env = Environment::new(config.environment.arms.clone(), config.environment.seed)?;
        let mut policy = agent_config.into_policy(env.num_arms());

        info!(agent = policy.name(), num_rounds, "starting run");
        let results = simulation::run(policy.as_mut(), &mut env, num_rounds)?;

        reports.push(RunReport::new(
            policy.name(),
            num_rounds,
            policy.stats(),
            results,
        ));
    }

    report::log_summary(&reports);
    report::write_json(&reports, &config.output.path)?;
    info!(path = %config.output.path.display(), "report written");

    Ok(())
}
