//! Run example:
//!
//! cargo run --release -- setup switchboard.yaml --output setup.h5
//!
//! Render frames of the snapshot files:
//!
//! cargo run --release -- frames switchboard.yaml EXP_NAME snapshots/*.h5
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use stratwave::plot::FrameRenderer;
use stratwave::switchboard::{Experiment, Switchboard};

/// Configure and post-process internal wave experiments
#[derive(Parser)]
#[command(name = "stratwave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Internal waves in a 2-D stratified Boussinesq fluid", long_about = None)]
struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive an experiment and write the setup of the solver
    Setup {
        /// Switchboard file
        switchboard: PathBuf,
        /// Setup file
        #[arg(short, long, default_value = "setup.h5")]
        output: PathBuf,
    },
    /// Render frames from snapshot files
    Frames {
        /// Switchboard file
        switchboard: PathBuf,
        /// Name of experiment
        name: String,
        /// Snapshot files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = "./frames")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> stratwave::Result<()> {
    match cli.command {
        Commands::Setup {
            switchboard,
            output,
        } => {
            let experiment = Experiment::from_switchboard(Switchboard::load(switchboard)?)?;
            experiment.log_summary();
            let problem = experiment.problem()?;
            if output.exists() {
                std::fs::remove_file(&output)?;
            }
            problem.write(&output.to_string_lossy())?;
        }
        Commands::Frames {
            switchboard,
            name,
            files,
            output,
        } => {
            let experiment = Experiment::from_switchboard(Switchboard::load(switchboard)?)?;
            let renderer = FrameRenderer::new(
                &name,
                &experiment.switchboard.plotting,
                &experiment.geometry,
            );
            renderer.render_all(&files, output)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
