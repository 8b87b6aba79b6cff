/// CFrame Terminal Shell
///
/// Runs host commands against a scene held in memory.
/// Usage:
///   - cframe-terminal                      interactive prompt
///   - cframe-terminal --batch < cmds.txt   read commands from stdin
///   - cframe-terminal -c "add-point 1 2 3" -c points
use anyhow::{bail, Context};
use cframe_core::{SceneConfig, SceneState};
use cframe_terminal::{Printer, Shell, Tone};
use clap::Parser;
use log::{info, LevelFilter};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cframe-terminal", version, about = "Coordinate frame shell")]
struct Args {
    /// JSON scene file providing the initial camera and points
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Run this command line; repeat for several. Skips the prompt.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Read commands from stdin without a prompt
    #[arg(long)]
    batch: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let scene = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?
            .into_scene(),
        None => SceneState::new(),
    };

    let mut shell = Shell::new(scene, !args.no_color);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in &args.commands {
        shell
            .execute_line(line, &mut out)
            .with_context(|| format!("command `{}` failed", line))?;
        if !shell.is_running() {
            return Ok(());
        }
    }

    if args.batch {
        let failures = shell.run(io::stdin().lock(), &mut out, &mut io::stderr(), false)?;
        if failures > 0 {
            bail!("{} command(s) failed", failures);
        }
    } else if args.commands.is_empty() {
        let printer = Printer::new(!args.no_color);
        printer.line(
            &mut out,
            Tone::Label,
            "CFrame shell | type `help` for commands, `quit` to leave",
        )?;
        shell.run(io::stdin().lock(), &mut out, &mut io::stderr(), true)?;
        writeln!(out)?;
    }

    info!("session ended with {} points", shell.scene().point_count());
    Ok(())
}
