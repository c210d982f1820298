//! CLI administration tool for the code camp service.
//!
//! Speakers have no update or delete endpoint, so registering them from the
//! command line is the usual way to seed a new database.
//!
//! # Usage
//!
//! ```bash
//! # Register a speaker (prompts for missing fields)
//! cargo run --bin camp-admin -- speaker add
//! cargo run --bin camp-admin -- speaker add --first-name Shawn --last-name Wildermuth -y
//!
//! # List speakers and camps
//! cargo run --bin camp-admin -- speaker list
//! cargo run --bin camp-admin -- camp list
//!
//! # Check database connection
//! cargo run --bin camp-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use code_camp::config::mask_connection_string;
use code_camp::domain::entities::NewSpeaker;
use code_camp::domain::repositories::{CampRepository, SpeakerRepository};
use code_camp::infrastructure::persistence::{PgCampRepository, PgSpeakerRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the code camp database.
#[derive(Parser)]
#[command(name = "camp-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage speakers
    Speaker {
        #[command(subcommand)]
        action: SpeakerAction,
    },

    /// Inspect camps
    Camp {
        #[command(subcommand)]
        action: CampAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum SpeakerAction {
    /// Register a new speaker
    Add {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        twitter: Option<String>,

        #[arg(long)]
        github: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all speakers
    List,
}

#[derive(Subcommand)]
enum CampAction {
    /// List all camps with their talk counts
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Speaker { action } => handle_speaker_action(action, &pool).await?,
        Commands::Camp { action } => handle_camp_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

async fn handle_speaker_action(action: SpeakerAction, pool: &PgPool) -> Result<()> {
    let repo = PgSpeakerRepository::new(Arc::new(pool.clone()));

    match action {
        SpeakerAction::Add {
            first_name,
            last_name,
            company,
            twitter,
            github,
            yes,
        } => {
            let new_speaker = NewSpeaker {
                first_name: prompt_if_missing(first_name, "First name")?,
                last_name: prompt_if_missing(last_name, "Last name")?,
                company,
                twitter,
                github,
                ..NewSpeaker::default()
            };
            add_speaker(&repo, new_speaker, yes).await?;
        }
        SpeakerAction::List => list_speakers(&repo).await?,
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Stores a speaker after showing it and asking for confirmation.
async fn add_speaker(
    repo: &PgSpeakerRepository,
    new_speaker: NewSpeaker,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Register speaker".bright_blue().bold());
    println!();
    println!(
        "  Name:    {} {}",
        new_speaker.first_name.cyan(),
        new_speaker.last_name.cyan()
    );
    if let Some(ref company) = new_speaker.company {
        println!("  Company: {}", company.bright_white());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this speaker?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let speaker = repo
        .insert_speaker(new_speaker)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create speaker: {}", e))?;

    println!(
        "{} {}",
        "Speaker created with id".green().bold(),
        speaker.id.to_string().bright_yellow().bold()
    );
    println!();
    println!("{}", "Reference it from a talk:".bright_white());
    println!("  \"speaker\": {{ \"speakerId\": {} }}", speaker.id);

    Ok(())
}

/// Lists speakers as a table.
///
/// ```text
///   ID  Name                           Company
///   ───────────────────────────────────────────────────────────────
///   1   Shawn Wildermuth               Wilder Minds
/// ```
async fn list_speakers(repo: &PgSpeakerRepository) -> Result<()> {
    println!("{}", "Speakers".bright_blue().bold());
    println!();

    let speakers = repo
        .list_speakers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list speakers: {}", e))?;

    if speakers.is_empty() {
        println!("{}", "  No speakers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<25}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Company".bright_white().bold()
    );
    println!("  {}", "─".repeat(63).bright_black());

    for speaker in &speakers {
        println!(
            "  {:<4} {:<30} {}",
            speaker.id.to_string().bright_black(),
            speaker.full_name().cyan(),
            speaker.company.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!(
        "  Total: {}",
        speakers.len().to_string().bright_white().bold()
    );

    Ok(())
}

async fn handle_camp_action(action: CampAction, pool: &PgPool) -> Result<()> {
    let repo = PgCampRepository::new(Arc::new(pool.clone()));

    match action {
        CampAction::List => {
            println!("{}", "Camps".bright_blue().bold());
            println!();

            let camps = repo
                .list_camps(true)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list camps: {}", e))?;

            if camps.is_empty() {
                println!("{}", "  No camps found".yellow());
                return Ok(());
            }

            println!(
                "  {:<15} {:<35} {:<12} {:<6}",
                "Moniker".bright_white().bold(),
                "Name".bright_white().bold(),
                "Date".bright_white().bold(),
                "Talks".bright_white().bold()
            );
            println!("  {}", "─".repeat(70).bright_black());

            for camp in &camps {
                println!(
                    "  {:<15} {:<35} {:<12} {}",
                    camp.moniker.cyan(),
                    camp.name,
                    camp.event_date.format("%Y-%m-%d").to_string().bright_black(),
                    camp.talks.len()
                );
            }

            println!();
            println!("  Total: {}", camps.len().to_string().bright_white().bold());
        }
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let camps: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM camps")
                .fetch_one(pool)
                .await?;
            let talks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talks")
                .fetch_one(pool)
                .await?;
            let speakers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM speakers")
                .fetch_one(pool)
                .await?;

            println!("  URL:        {}", mask_connection_string(database_url));
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Camps:      {}", camps.to_string().bright_green().bold());
            println!("  Talks:      {}", talks.to_string().bright_green().bold());
            println!("  Speakers:   {}", speakers.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
