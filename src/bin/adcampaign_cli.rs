//! Ad Campaign CLI - JSON bridge over the core
//!
//! Commands: formats, build-ad, campaign
//! Outputs JSON to stdout, logs to stderr
//! Returns 1 on bad input, 2 on validation failure

use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use adcampaign_core::{
    build_ad, catalog, AdError, AdRecord, AdResult, Campaign, CampaignInput, ENGINE_VERSION,
};

#[derive(Parser)]
#[command(name = "adcampaign-cli", version = ENGINE_VERSION)]
#[command(about = "Ad Campaign CLI - validated creatives and campaigns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Append error messages to this file
    #[arg(short, long, global = true)]
    error_log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List ad formats and their subtypes
    Formats,

    /// Build a single ad
    BuildAd {
        /// JSON payload (AdRecord)
        #[arg(short, long)]
        payload: String,
    },

    /// Load a campaign, optionally edit it, and summarize
    Campaign {
        /// Path to a campaign JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// New campaign name
        #[arg(long)]
        rename: Option<String>,

        /// New subtype for the first ad
        #[arg(long)]
        subtype: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adcampaign_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Formats => print_json(&catalog()),
        Commands::BuildAd { payload } => AdRecord::from_json(&payload)
            .and_then(|record| build_ad(&record))
            .and_then(|ad| print_json(&ad)),
        Commands::Campaign { file, rename, subtype } => {
            run_campaign(&file, rename, subtype.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(path) = &cli.error_log {
                if let Err(log_err) = append_error(path, &e) {
                    tracing::error!(path = %path.display(), %log_err, "could not write error log");
                }
            }
            let output = serde_json::json!({
                "success": false,
                "error": e.to_string(),
            });
            println!("{}", output);
            if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run_campaign(file: &Path, rename: Option<String>, subtype: Option<&str>) -> AdResult<()> {
    let input = CampaignInput::load(file)?;
    let mut campaign = Campaign::from_input(&input)?;

    if let Some(name) = rename {
        campaign.set_name(name)?;
    }
    if let Some(subtype) = subtype {
        campaign.set_ad_subtype(0, subtype)?;
    }

    let summary = campaign.summarize();
    eprintln!("{summary}");
    print_json(&serde_json::json!({
        "success": true,
        "summary": summary,
        "campaign": campaign,
    }))
}

fn print_json<T: serde::Serialize>(value: &T) -> AdResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn append_error(path: &Path, error: &AdError) -> std::io::Result<()> {
    let mut log = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(log, "{error}")
}
