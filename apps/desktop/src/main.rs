use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    settings::{load_settings, Settings, CONFIG_FILE_NAME},
    SolverApi,
};
use rand::{rngs::StdRng, SeedableRng};
use shared::{
    cube::{CubeState, INVALID_STATE_MESSAGE},
    notation::format_sequence,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rufix", about = "Validate, solve and scramble cube states from the terminal")]
struct Args {
    /// Settings file; defaults to ./rufix.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report colour counts, validity and the facelet string of a state file.
    Validate { state: PathBuf },
    /// Ask the solver service for a solution to a state file.
    Solve { state: PathBuf },
    /// Produce a scrambled state; falls back to a local shuffle if the service fails.
    Scramble {
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for the local shuffle, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = load_settings(self.config.as_deref(), &[PathBuf::from(CONFIG_FILE_NAME)])?;
        if let Some(server_url) = &self.server_url {
            settings.server_url = server_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.request_timeout_secs = timeout_secs;
        }
        Ok(settings)
    }
}

fn read_state(path: &Path) -> Result<CubeState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read cube state '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse cube state '{}'", path.display()))
}

fn validate(state: &CubeState) {
    let counts = state.color_counts();
    for (color, count) in counts.iter() {
        println!("{:<7} {count}", color.class_name());
    }
    println!("valid:  {}", state.is_valid_state());
    println!("solved: {}", state.is_solved());
    match state.to_facelet_string() {
        Ok(facelets) => println!("facelets: {facelets}"),
        Err(err) => println!("facelets: unavailable ({err})"),
    }
}

async fn solve(client: &dyn SolverApi, state: &CubeState) -> Result<()> {
    if !state.is_valid_state() {
        bail!(INVALID_STATE_MESSAGE);
    }
    let response = client.solve(state).await?;
    if response.solution.is_empty() {
        println!("Cube is already solved!");
    } else {
        println!("{}", format_sequence(&response.solution));
        println!("Number of moves: {}", response.moves);
    }
    Ok(())
}

async fn scramble(client: &dyn SolverApi, mut rng: StdRng) -> CubeState {
    match client.scramble().await {
        Ok(response) => tracing::info!(
            server_sequence = %format_sequence(&response.scramble),
            "scramble service answered; applying local shuffle"
        ),
        Err(err) => tracing::warn!("{err}; falling back to local shuffle"),
    }
    CubeState::shuffled(&mut rng)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match &args.command {
        Command::Validate { state } => validate(&read_state(state)?),
        Command::Solve { state } => {
            let state = read_state(state)?;
            let client = args.settings()?.build_client()?;
            solve(&client, &state).await?;
        }
        Command::Scramble { out, seed } => {
            let client = args.settings()?.build_client()?;
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };
            let state = scramble(&client, rng).await;
            let json = serde_json::to_string_pretty(&state)?;
            match out {
                Some(path) => fs::write(path, json)
                    .with_context(|| format!("failed to write '{}'", path.display()))?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
