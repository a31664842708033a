//! Wumpus hunter CLI.
//!
//! - `wumpus replay <script>` - feed a recorded percept script, print one action per line
//! - `wumpus interactive` - type percepts turn by turn
//! - `wumpus init` - write a default `.wumpus/config.yaml`

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wumpus_agent::AgentKind;
use wumpus_cli::script::load_script;
use wumpus_cli::{Ending, HunterConfig, Session};

#[derive(Parser)]
#[command(name = "wumpus")]
#[command(about = "Knowledge-based wumpus hunter", version)]
struct Cli {
    /// Config file (defaults to .wumpus/config.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cave side including the wall ring
    #[arg(long, global = true)]
    grid_size: Option<usize>,

    /// Which hunter to run (inference or random)
    #[arg(long, global = true)]
    agent: Option<AgentKind>,

    /// Seed for the random hunter
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the decision trace as JSON at the end
    #[arg(long, global = true)]
    trace: bool,

    /// Log the belief grid every turn (needs --verbose)
    #[arg(long, global = true)]
    render: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML or JSON list of percepts
    Replay {
        script: PathBuf,
    },

    /// Read percept words from stdin, one line per turn
    Interactive,

    /// Write a default configuration
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    match cli.command {
        Commands::Init { force } => {
            init_config(&cwd, force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Replay { ref script } => {
            let config = resolve_config(&cli, &cwd)?;
            let percepts = load_script(script)?;
            tracing::info!(script = %script.display(), turns = percepts.len(), "replaying");
            let mut session = Session::new(&config);
            let ending = session.replay(&percepts, &mut io::stdout().lock())?;
            finish(session, ending, &config)
        }
        Commands::Interactive => {
            let config = resolve_config(&cli, &cwd)?;
            let mut session = Session::new(&config);
            let ending = session.interactive(io::stdin().lock(), &mut io::stdout().lock())?;
            finish(session, ending, &config)
        }
    }
}

fn resolve_config(cli: &Cli, cwd: &Path) -> Result<HunterConfig> {
    let mut config = match &cli.config {
        Some(path) => HunterConfig::load(path)?,
        None => HunterConfig::load_from_dir(cwd)?,
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(agent) = cli.agent {
        config.agent = agent;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.trace |= cli.trace;
    config.render |= cli.render;

    config.validate()?;
    Ok(config)
}

fn finish(mut session: Session, ending: Ending, config: &HunterConfig) -> Result<ExitCode> {
    let code = match ending {
        Ending::Climbed => {
            tracing::info!(turns = session.turns(), "mission complete");
            ExitCode::SUCCESS
        }
        Ending::InputEnded => {
            tracing::info!(turns = session.turns(), "percepts ran out before the mission ended");
            ExitCode::SUCCESS
        }
        Ending::Exhausted => {
            eprintln!(
                "mission cannot proceed: knowledge exhausted after {} turns",
                session.turns()
            );
            ExitCode::from(2)
        }
    };

    if config.trace {
        let log = session.take_trace().unwrap_or_default();
        let json = serde_json::to_string_pretty(&log).context("Failed to serialize trace")?;
        println!("{json}");
    }

    Ok(code)
}

fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = HunterConfig::path_in(dir);
    if config_path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let yaml = HunterConfig::default().to_yaml()?;
    std::fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Initialized hunter config at {}", config_path.display());
    Ok(())
}
