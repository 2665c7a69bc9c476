use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sum_requester::{
    build_app, run_server, AppConfig, InputPair, RequesterConfig, StdoutDisplay, SumOutcome,
    SumRequester,
};

#[derive(Parser)]
#[command(name = "sum-requester", version, about = "Request sums from the calculate-sum service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the calculate-sum service
    Serve {
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
    /// Send two values to the service and print the sum
    Sum {
        num1: String,
        num2: String,
        #[arg(long, env = "SUM_SERVICE_URL")]
        url: Option<String>,
        #[arg(long, env = "SUM_TIMEOUT_MS")]
        timeout_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = AppConfig::from_env();

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                cfg = cfg.with_port(port);
            }
            match run_server(build_app(), cfg.port()).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!(error = %err, "sum service failed");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Sum {
            num1,
            num2,
            url,
            timeout_ms,
        } => {
            if let Some(url) = url {
                cfg = cfg.with_service_url(url);
            }
            if let Some(timeout_ms) = timeout_ms {
                cfg = cfg.with_timeout_ms(timeout_ms);
            }

            let requester = match SumRequester::new(&RequesterConfig::from(&cfg)) {
                Ok(requester) => requester,
                Err(err) => {
                    tracing::error!(error = %err, "invalid requester configuration");
                    return ExitCode::FAILURE;
                }
            };

            match requester
                .calculate_sum(&InputPair::new(num1, num2), &StdoutDisplay)
                .await
            {
                SumOutcome::Displayed(_) => ExitCode::SUCCESS,
                SumOutcome::Failed | SumOutcome::Discarded => ExitCode::FAILURE,
            }
        }
    }
}
