use std::io;
use std::path::PathBuf;

use alm_cli::config::Config;
use alm_cli::graph;
use alm_cli::headless;
use alm_cli::screens::View;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// agile-life navigator -- walk the app's route table from the terminal.
#[derive(Parser)]
#[command(name = "alm", version, about)]
struct Cli {
    /// Config file (defaults to ~/.agile-life/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route template (default when no subcommand is given).
    Routes,

    /// Render the start screen.
    Start {
        /// Override the configured start route.
        #[arg(long)]
        route: Option<String>,
    },

    /// Open the start screen, then navigate once.
    Go {
        /// Route name, e.g. `sprintDetail`.
        route: String,
        /// Argument for parameterised routes.
        argument: Option<String>,
    },

    /// Read JSON commands from stdin and write JSON events to stdout.
    Headless,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let json_logs = cli.json_logs || cfg.general.json_logs;
    alm_telemetry::logging::init("alm", &cfg.general.log_level, json_logs);

    let policy = cfg.navigation.argument_policy;
    match cli.command {
        None | Some(Commands::Routes) => {
            let graph = graph::app_graph(&cfg.navigation.start_route)?;
            for template in graph.templates() {
                let marker = if template.name() == graph.start_route() { " (start)" } else { "" };
                println!("{template}{marker}");
            }
        }
        Some(Commands::Start { route }) => {
            let start = route.unwrap_or(cfg.navigation.start_route);
            let router = graph::app_router(&start, policy)?;
            print_view(router.render_current()?);
        }
        Some(Commands::Go { route, argument }) => {
            let mut router = graph::app_router(&cfg.navigation.start_route, policy)?;
            let view = router.navigate(&route, argument.as_deref())?;
            if let Some(entry) = router.current_entry() {
                println!("{}", serde_json::to_string(entry)?);
            }
            print_view(view);
        }
        Some(Commands::Headless) => {
            let mut router = graph::app_router(&cfg.navigation.start_route, policy)?;
            let stdin = io::stdin();
            headless::run(&mut router, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn print_view(view: Option<View>) {
    match view {
        Some(view) => print!("{}", view.to_text()),
        None => println!("(screen not built yet)"),
    }
}
