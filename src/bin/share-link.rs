//! CLI tool for building and checking Fundgrube share links.
//!
//! Works offline against the same configuration as the server, so links can be
//! generated for newsletters or printed notices without going through the API.
//!
//! # Usage
//!
//! ```bash
//! # Gate URL for a single target
//! cargo run --bin share-link -- gate --service whatsapp --url 'https://wa.me/?text=Hallo'
//!
//! # Sharing links for a found item (prompts for the title if omitted)
//! cargo run --bin share-link -- share --url https://fundgrube.example/fundstueck/42/
//!
//! # Check what the gate would do with a request
//! cargo run --bin share-link -- check --service facebook --url https://evil.example/
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_URL` (required): public base URL of the site
//! - `GATE_PATH`, `DISCLAIMER_ENABLED`: see the server configuration

use fundgrube_gate::application::services::{LinkBuilder, RedirectGate};
use fundgrube_gate::config;
use fundgrube_gate::domain::entities::{GateQuery, RedirectDecision, ServiceId};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for Fundgrube share links.
#[derive(Parser)]
#[command(name = "share-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the gate URL for a target
    Gate {
        /// Target URL on the service's domain
        #[arg(short, long)]
        url: String,

        /// Service: facebook, twitter or whatsapp
        #[arg(short, long)]
        service: ServiceId,

        /// Optional item title shown on the disclaimer page
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print sharing links for a found item
    Share {
        /// Item permalink
        #[arg(short, long)]
        url: String,

        /// Item title (prompted if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Print native links even if the disclaimer is enabled
        #[arg(long)]
        direct: bool,
    },

    /// Run a target through the gate validation
    Check {
        #[arg(short, long)]
        url: String,

        /// Service name as it would appear in the query string
        #[arg(short, long)]
        service: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Gate {
            url,
            service,
            title,
        } => {
            let builder = LinkBuilder::new(config.gate_base_url(), true);
            print_gate_url(&builder, &url, service, title.as_deref());
        }
        Commands::Share { url, title, direct } => {
            let title = match title {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Item title")
                    .allow_empty(true)
                    .interact_text()?,
            };
            let builder = LinkBuilder::new(
                config.gate_base_url(),
                config.disclaimer_enabled && !direct,
            );
            print_sharing_urls(&builder, &url, &title);
        }
        Commands::Check { url, service } => {
            check(&url, &service);
        }
    }

    Ok(())
}

fn print_gate_url(builder: &LinkBuilder, url: &str, service: ServiceId, title: Option<&str>) {
    if let RedirectDecision::Rejected(rejection) = RedirectGate::new().evaluate(GateQuery {
        url: url.to_string(),
        service: service.as_str().to_string(),
        title: None,
    }) {
        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("the gate will reject this target ({rejection})").yellow()
        );
    }

    println!("{}", builder.build_gate_url(url, service, title));
}

/// Prints one line per service.
///
/// # Output Format
///
/// ```text
/// Sharing links (via disclaimer)
///
///   facebook  https://fundgrube.example/fundgrube/redirect/?url=...
///   twitter   https://fundgrube.example/fundgrube/redirect/?url=...
///   whatsapp  https://fundgrube.example/fundgrube/redirect/?url=...
/// ```
fn print_sharing_urls(builder: &LinkBuilder, url: &str, title: &str) {
    let mode = if builder.disclaimer_enabled() {
        "via disclaimer".green()
    } else {
        "direct".yellow()
    };
    println!("{} ({})", "Sharing links".bright_blue().bold(), mode);
    println!();

    for (service, link) in builder.build_sharing_urls(url, title) {
        println!("  {:<9} {}", service.as_str().cyan(), link);
    }
    println!();
}

fn check(url: &str, service: &str) {
    let decision = RedirectGate::new().evaluate(GateQuery {
        url: url.to_string(),
        service: service.to_string(),
        title: None,
    });

    match decision {
        RedirectDecision::Accepted(request) => {
            let profile = request.service.profile();
            println!("{}", "ACCEPTED".green().bold());
            println!("  Service: {}", profile.name.cyan());
            println!("  Target:  {}", request.target_url);
        }
        RedirectDecision::Rejected(rejection) => {
            println!("{}", "REJECTED".red().bold());
            println!("  Reason:  {} ({})", rejection, rejection.as_str().bright_black());
            if let Ok(service) = service.parse::<ServiceId>() {
                println!(
                    "  Allowed: {}",
                    service.profile().allowed_hosts.join(", ").bright_black()
                );
            }
        }
    }
}
