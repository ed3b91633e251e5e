mod errors;
mod results;
mod runner;

pub use errors::SimulationError;
pub use results::{ResultSet, RoundRecord};
pub use runner::run;
