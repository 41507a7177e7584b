//! Local simulation CLI for the oracle function units
//!
//! Runs one of the two computation scripts against its request
//! configuration, prints the captured terminal output and the decoded
//! return value, and exits non-zero on an uncaught failure.
//!
//! Usage:
//!   cargo run -- insurance 300 10000 Delayed
//!   cargo run -- claim AF456 "Air France" "Charles de Gaulle Airport" \
//!       2025-01-05T19:00:00 "Toronto Pearson International Airport" \
//!       2025-01-05T22:30:00 --mode all-matches

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flightclaim_backend::{
    claim::ClaimOutputMode,
    codec::{decode_result, ReturnType},
    feed::HttpFlightFeed,
    insurance::InsuranceVariant,
    models::Config,
    simulator::{simulate, FunctionSource, RequestConfig, Secrets},
};

/// Local simulator for the flight-claim oracle functions
#[derive(Parser, Debug)]
#[command(name = "flightclaim")]
#[command(about = "Simulate the insurance-calculation and claim-check scripts locally")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the adjusted insurance value from delay and status
    Insurance {
        /// Delay in minutes, as the script receives it: a string
        delay: String,

        /// Base insurance value
        value: String,

        /// Flight status, e.g. Delayed or Cancelled
        status: String,

        /// Calculation behavior (delay-only is superseded, kept for
        /// reproducing old deployments)
        #[arg(long, value_enum, default_value_t = VariantArg::StatusAware)]
        variant: VariantArg,

        /// Return encoding: decimal string of the full value, or a
        /// truncated uint256
        #[arg(long, value_enum, default_value_t = EncodingArg::String)]
        encoding: EncodingArg,
    },

    /// Check claim eligibility against the external flight feed
    Claim {
        flight_number: String,
        airline: String,
        departure_airport: String,
        departure_datetime: String,
        arrival_airport: String,
        arrival_datetime: String,

        /// Output shape: every match as JSON, or the first match's delay
        #[arg(long, value_enum, default_value_t = ModeArg::AllMatches)]
        mode: ModeArg,

        /// Feed URL secret; normally supplied via the environment
        #[arg(long, env = "FLIGHT_DATA_URL", hide_env_values = true)]
        feed_url: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum VariantArg {
    StatusAware,
    DelayOnly,
}

impl From<VariantArg> for InsuranceVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::StatusAware => InsuranceVariant::StatusAware,
            VariantArg::DelayOnly => InsuranceVariant::DelayOnly,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum EncodingArg {
    String,
    Uint256,
}

impl From<EncodingArg> for ReturnType {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::String => ReturnType::String,
            EncodingArg::Uint256 => ReturnType::Uint256,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    AllMatches,
    FirstMatch,
}

impl From<ModeArg> for ClaimOutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::AllMatches => ClaimOutputMode::AllMatches,
            ModeArg::FirstMatch => ClaimOutputMode::FirstMatch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let request = match cli.command {
        Commands::Insurance {
            delay,
            value,
            status,
            variant,
            encoding,
        } => RequestConfig {
            source: FunctionSource::CalculateInsurance {
                variant: variant.into(),
            },
            args: vec![delay, value, status],
            secrets: Secrets::default(),
            expected_return_type: encoding.into(),
        },
        Commands::Claim {
            flight_number,
            airline,
            departure_airport,
            departure_datetime,
            arrival_airport,
            arrival_datetime,
            mode,
            feed_url,
        } => RequestConfig::for_claim(
            mode.into(),
            vec![
                flight_number,
                airline,
                departure_airport,
                departure_datetime,
                arrival_airport,
                arrival_datetime,
            ],
            Secrets {
                flight_data_url: feed_url.or(config.flight_data_url.clone()),
            },
        ),
    };

    let feed = HttpFlightFeed::new(Duration::from_secs(config.http_timeout_secs))?;
    let output = simulate(&request, &feed).await;

    for line in &output.captured_output {
        println!("{line}");
    }

    if let Some(bytes) = &output.response_bytes {
        if let Some(hexstring) = output.response_hexstring() {
            println!("Response bytes: {hexstring}");
        }
        let decoded = decode_result(bytes, request.expected_return_type)
            .context("failed to decode simulation response")?;
        println!("Response returned by script during local simulation: {decoded}");
    }

    if let Some(error) = &output.error_string {
        eprintln!("Error returned by simulated script:\n{error}");
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flightclaim_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
