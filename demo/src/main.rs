//! waypoint-demo - press buttons through the three-flow demo
//!
//! ```text
//! waypoint-demo "Go to C" "Go to D" "Go to E"
//! waypoint-demo --config demo.toml --json "Go to B"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use waypoint::NavigatorConfig;
use waypoint_demo::AppSession;

/// Drive the demo navigation session from the command line
#[derive(Parser)]
#[command(name = "waypoint-demo")]
#[command(author, version, about = "Press buttons through the Waypoint three-flow demo")]
struct Cli {
    /// Navigator config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final session state as JSON instead of screen titles
    #[arg(long)]
    json: bool,

    /// Button labels to press, in order, on whatever screen is visible
    buttons: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    waypoint::observe::try_init_tracing(waypoint::observe::DEFAULT_FILTER, cli.json)?;

    let config = match &cli.config {
        Some(path) => NavigatorConfig::load(path)
            .with_context(|| format!("loading navigator config from {}", path.display()))?,
        None => NavigatorConfig::default(),
    };

    let session = AppSession::start(config).context("wiring demo flows")?;
    if !cli.json {
        println!("{}", session.visible().title());
    }

    for label in &cli.buttons {
        session.press(label)?;
        if !cli.json {
            println!("{}", session.visible().title());
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        let trail: Vec<&str> = session.screens().iter().map(|s| s.title()).collect();
        println!("stack: {}", trail.join(" > "));
    }

    Ok(())
}
