use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use looplab::domain::{LessonKind, LessonTexts, LoopPart};
use looplab::lessons;
use looplab::session::{Presenter, RecordingPresenter, SharedWorkbench, Workbench};
use std::cell::RefCell;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::watch;

mod cli;
mod config;

use cli::{Cli, Commands, Fragments, TerminalPresenter};
use config::Config;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("looplab")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("looplab.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the config file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.unwrap_or("info")))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Run {
            lesson,
            fragments,
            json,
        } => handle_run_command(*lesson, fragments, *json, config),
        Commands::Step {
            lesson,
            fragments,
            auto,
        } => handle_step_command(*lesson, fragments, *auto, config),
        Commands::Explain { lesson, part } => handle_explain_command(*lesson, *part, config),
        Commands::Defaults { lesson } => handle_defaults_command(*lesson),
        Commands::Animate { lesson, delay_ms } => handle_animate_command(*lesson, *delay_ms, config),
    }
}

fn terminal(config: &Config) -> TerminalPresenter {
    TerminalPresenter::new(config.display.color, config.display.show_counter)
}

/// Apply `--file` and per-part overrides on top of the lesson defaults
fn apply_fragments<P: Presenter>(bench: &mut Workbench<P>, kind: LessonKind, fragments: &Fragments) -> Result<()> {
    if let Some(path) = &fragments.file {
        let content = fs::read_to_string(path).context(format!("Failed to read lesson file {}", path.display()))?;
        let texts: LessonTexts = serde_yaml::from_str(&content).context("Failed to parse lesson file")?;
        info!("Loaded {} fragments from {}", kind, path.display());
        bench.load(kind, texts);
    }
    for (part, text) in fragments.overrides() {
        bench.edit(kind, part, text);
    }
    Ok(())
}

fn handle_run_command(kind: LessonKind, fragments: &Fragments, json: bool, config: &Config) -> Result<()> {
    info!("Running lesson: {}", kind);

    if json {
        let mut bench = Workbench::new(RecordingPresenter::new());
        apply_fragments(&mut bench, kind, fragments)?;
        let result = bench.run(kind);
        let output = match &result {
            Ok(data) => serde_json::to_string_pretty(data)?,
            Err(err) => serde_json::to_string_pretty(&serde_json::json!({ "error": err.to_string() }))?,
        };
        println!("{}", output);
        result.context(format!("Failed to run {} lesson", kind))?;
        return Ok(());
    }

    let mut bench = Workbench::new(terminal(config));
    apply_fragments(&mut bench, kind, fragments)?;
    println!("{}", lessons::title(kind).bold());
    bench.run(kind).context(format!("Failed to run {} lesson", kind))?;
    Ok(())
}

fn handle_step_command(kind: LessonKind, fragments: &Fragments, auto: bool, config: &Config) -> Result<()> {
    info!("Stepping lesson: {} (auto: {})", kind, auto);

    let mut bench = Workbench::new(terminal(config));
    apply_fragments(&mut bench, kind, fragments)?;
    println!("{}", lessons::title(kind).bold());

    let total = bench.step(kind).context(format!("Failed to step {} lesson", kind))?;
    if !auto {
        println!("{}", format!("{} steps. Press Enter to advance.", total).dimmed());
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if auto {
            std::thread::sleep(Duration::from_millis(config.playback.auto_advance_ms));
        } else {
            match lines.next() {
                Some(line) => {
                    line.context("Failed to read from stdin")?;
                }
                None => break,
            }
        }
        let Some(frame) = bench.advance(kind) else {
            break;
        };
        bench.presenter().print_frame(&frame);
        if frame.is_last() {
            break;
        }
    }
    Ok(())
}

fn handle_explain_command(kind: LessonKind, part: LoopPart, config: &Config) -> Result<()> {
    info!("Explaining {} {}", kind, part);
    let mut bench = Workbench::new(terminal(config));
    let explanation = bench.select_part(kind, part);
    println!("{}", bench.texts(kind).get(part).cyan());
    println!("{}", explanation);
    Ok(())
}

fn handle_defaults_command(kind: LessonKind) -> Result<()> {
    let texts = lessons::default_texts(kind);
    println!("{}", lessons::title(kind).bold());
    for part in LoopPart::ALL {
        println!("{:>10}  {}", part.as_str().cyan(), texts.get(part));
    }
    Ok(())
}

fn handle_animate_command(kind: LessonKind, delay_ms: Option<u64>, config: &Config) -> Result<()> {
    let delay = Duration::from_millis(delay_ms.unwrap_or(config.animation.frame_delay_ms));
    info!("Animating {} with {:?} between frames", kind, delay);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let bench: SharedWorkbench<_> = Rc::new(RefCell::new(Workbench::new(terminal(config))));
        let (cancel_tx, cancel_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = cancel_tx.send(true);
            }
        });

        let Some(animation) = bench.borrow_mut().begin_animation(kind) else {
            println!("{}", "An animation is already running for this lesson.".yellow());
            return;
        };
        if !animation.play(Rc::clone(&bench), delay, cancel_rx).await {
            println!("{}", "Animation interrupted.".dimmed());
        }
    });
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
