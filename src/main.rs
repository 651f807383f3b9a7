use airdrop_checker::{
    api,
    config::Settings,
    models::{NetworkEstimate, Provenance},
    scoring::EligibilityChecker,
    EligibilityReport,
};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "airdrop-checker")]
#[clap(about = "Estimate airdrop eligibility from on-chain and Farcaster activity", long_about = None)]
struct Cli {
    /// Load settings from this file instead of config/default and config/local
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single wallet address or Farcaster FID
    Check {
        /// Wallet address (0x...) or numeric FID
        input: String,

        /// Print the raw JSON response
        #[clap(long)]
        json: bool,
    },

    /// Start the API server
    Serve {
        /// Port to listen on (defaults to api.port)
        #[clap(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new().unwrap_or_else(|e| {
            eprintln!("Using default settings: {}", e);
            Settings::default()
        }),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let checker = EligibilityChecker::from_settings(&settings)?;

    match cli.command {
        Commands::Check { input, json } => {
            info!("Checking eligibility for {}", input);

            match checker.check(&input).await {
                Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Ok(report) => print_report(&report),
                Err(e) => {
                    error!("Eligibility check failed: {}", e);
                    println!("\n❌ {}", e.user_message());
                }
            }
        }

        Commands::Serve { port } => {
            let port = port.unwrap_or(settings.api.port);
            let addr: SocketAddr = format!("{}:{}", settings.api.host, port).parse()?;
            info!("Starting {} v{}", settings.app.name, settings.app.version);
            api::serve(Arc::new(checker), addr).await?;
        }
    }

    Ok(())
}

fn print_report(report: &EligibilityReport) {
    println!("\n=== Airdrop Eligibility ===");
    println!("Score: {}/200", report.score);
    println!("Eligibility: {}", report.eligibility.as_str());

    let onchain = &report.onchain;
    println!("\nOn-chain:");
    println!("  Transactions: {}", onchain.transaction_count);
    println!("  Active days: {}", onchain.active_day_count);
    if let Some(first) = onchain.first_activity {
        println!("  First activity: {}", first.format("%Y-%m-%d"));
    }
    if onchain.provenance == Provenance::Estimated {
        println!("  (Estimated: full history unavailable)");
    }

    let farcaster = &report.farcaster;
    if !farcaster.username.is_empty() {
        println!("\nFarcaster (@{}):", farcaster.username);
        println!("  Posts: {}", farcaster.post_count);
        println!("  Followers: {}", farcaster.follower_count);
        println!("  Pro badge: {}", if farcaster.pro_badge { "yes" } else { "no" });
    }

    println!("\nPotential airdrop:");
    print_estimate("$BASE", &report.airdrop_estimate.base);
    print_estimate("$FAR", &report.airdrop_estimate.farcaster);
    println!("\n{}", report.airdrop_estimate.disclaimer);
}

fn print_estimate(token: &str, estimate: &NetworkEstimate) {
    println!(
        "  {}: {} - {} tokens [{}, {} points, probability {}]",
        token,
        estimate.estimate_min,
        estimate.estimate_max,
        estimate.tier.label(),
        estimate.points,
        estimate.probability.as_str()
    );
}
