//! Local simulation harness for the oracle function units

mod config;
mod runner;

pub use config::{
    calculate_insurance_config, check_claim_config, FunctionSource, RequestConfig, Secrets,
};
pub use runner::{simulate, SimulationOutput};
