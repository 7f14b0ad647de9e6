pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod matching;
pub mod outcome;
pub mod resolver;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use cli::Cli;

use crate::cache::SnapshotStore;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{MatchRequest, ResolvedPlayer, SharedDirectory};
use crate::services::ingestion::IngestionService;
use crate::services::server::ServerService;
use crate::services::{LookupService, MatchReport};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_ingest() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = IngestionService::new(&config)?;
        service.run().await.map(|_| ())
    })
}

pub fn handle_lookup(query: &str) -> Result<()> {
    let resolved = offline_lookup()?.player(query)?;
    print_player(&resolved);
    Ok(())
}

pub fn handle_history(query: &str) -> Result<()> {
    let target = offline_lookup()?.history(query)?;
    println!(
        "{} {} ({} division, index {})",
        "History target:".bold(),
        target.player_id,
        target.division,
        target.division_index
    );
    Ok(())
}

pub fn handle_match(team1: &[String], team2: &[String]) -> Result<()> {
    let request = MatchRequest {
        team1: team1.to_vec(),
        team2: team2.to_vec(),
    };
    let report = offline_lookup()?.compose_match(&request)?;
    print_match(&report);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn offline_lookup() -> Result<LookupService> {
    let config = AppConfig::new();
    let store = SnapshotStore::new(&config.storage.cache_dir)?;
    let directory = store.load_directory(config.storage.snapshot_key)?;
    Ok(LookupService::new(SharedDirectory::new(directory)))
}

fn print_player(resolved: &ResolvedPlayer) {
    let p = &resolved.record;
    println!("{} (#{} in {}, id {})", p.name.bold(), p.rank, p.division, p.player_id);
    println!("  RGX:    {} ({:+} in 90 days)", p.elo_rating.to_string().cyan(), p.trend_90_days);
    println!("  Games:  {}", p.games);
    println!("  Club:   {}", p.club.as_deref().unwrap_or("-"));
    println!("  City:   {}", p.city.as_deref().unwrap_or("-"));
    if p.pro_status {
        println!("  {}", "Pro".yellow());
    }
    if p.exists_in_both_divisions {
        println!("  {}", "Ranked in both divisions".dimmed());
    }
    match resolved.match_score {
        Some(score) if !resolved.exact_match => {
            println!("  {}", format!("Fuzzy match, score {}", score).yellow())
        }
        Some(_) => println!("  {}", "Exact name match".green()),
        None => println!("  {}", "Matched by id".green()),
    }
}

fn print_match(report: &MatchReport) {
    let team = |members: &[crate::domain::TeamMember]| {
        members
            .iter()
            .map(|m| m.resolved_name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    };

    println!("{} {} ({})", "Team 1:".bold(), team(&report.team1), report.team1_rating);
    println!("{} {} ({})", "Team 2:".bold(), team(&report.team2), report.team2_rating);
    if let Some(first) = report.outcomes.first() {
        println!("Expected score for team 1: {:.4}\n", first.e1);
    }

    for entry in &report.outcomes {
        let delta = format!("{:+.4}", entry.x1);
        let delta = if entry.x1 >= 0.0 { delta.green() } else { delta.red() };
        println!("  {:>10}  {}", delta, entry.description);
    }
}
