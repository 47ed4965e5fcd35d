//! Point d'entrée CLI pour foncier-query

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Requêtes foncières géolocalisées: DVF, DPE et parcelles cadastrales
#[derive(Parser)]
#[command(name = "foncier-query")]
#[command(author, version)]
#[command(about = "Composer des requêtes foncières géolocalisées et normaliser leurs résultats")]
#[command(
    long_about = "Outil de recherche foncière: conversion WGS84 <-> Lambert 93, normalisation d'emprises de carte, composition de paramètres de requête DVF/DPE/parcelles et normalisation défensive des réponses du backend."
)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::ToLambert { lat, lon } => cli::cmd_to_lambert(lat, lon)?,
        Commands::ToWgs84 { x, y } => cli::cmd_to_wgs84(x, y)?,
        Commands::Bbox { corner_a, corner_b } => cli::cmd_bbox(corner_a, corner_b)?,
        Commands::Params {
            dataset,
            corner_a,
            corner_b,
            filters,
        } => cli::cmd_params(dataset, corner_a, corner_b, &filters)?,
        Commands::Normalize {
            dataset,
            input,
            output,
        } => cli::cmd_normalize(dataset, &input, output.as_deref())?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
