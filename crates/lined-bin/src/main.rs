//! Lined entrypoint: batch front end over the editing engine.
//!
//! Loads a file (or the last session's file), applies replacements as
//! recorded operations, optionally walks the undo history, prints search
//! spans and writes the result.
use anyhow::{Context, Result, bail};
use clap::Parser;
use core_actions::{Action, ActionObserver, dispatch};
use core_config::{Config, load_from, session};
use core_state::EditorState;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "lined.log";

/// CLI arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "lined", version, about = "Line-oriented text editing engine")]
struct Args {
    /// File to edit. Defaults to the file recorded by the previous run.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `lined.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Print every occurrence of PAT as `row:start-end`.
    #[arg(long = "search", value_name = "PAT")]
    pub search: Option<String>,
    /// Replace every occurrence of FROM with TO. May be repeated.
    #[arg(long = "replace", num_args = 2, value_names = ["FROM", "TO"], action = clap::ArgAction::Append)]
    pub replace: Vec<String>,
    /// Undo this many operations after the replacements.
    #[arg(long = "undo", default_value_t = 0)]
    pub undo: usize,
    /// Redo this many operations after undoing.
    #[arg(long = "redo", default_value_t = 0)]
    pub redo: usize,
    /// Write the result here instead of back to PATH.
    #[arg(long = "output")]
    pub output: Option<PathBuf>,
    /// Session file remembering the last path (default `lined-session.toml`).
    #[arg(long = "session")]
    pub session: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Logs every dispatched action under `runtime.action`.
struct TraceObserver;

impl ActionObserver for TraceObserver {
    fn on_action(&self, action: &Action) {
        trace!(target: "runtime.action", ?action, "dispatch");
    }
}

/// What a batch run did, for logging and tests.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchReport {
    path: PathBuf,
    replacements: usize,
    undone: usize,
    redone: usize,
    spans: usize,
    saved_to: Option<PathBuf>,
}

fn build_state(config: &Config) -> EditorState {
    let (max_lines, max_cols) = config.viewport_size();
    EditorState::new()
        .with_viewport_size(max_lines, max_cols)
        .with_history_limit(config.history_limit())
}

fn resolve_path(args: &Args, session_file: &Path) -> Result<PathBuf> {
    if let Some(path) = &args.path {
        return Ok(path.clone());
    }
    match session::last_path(session_file) {
        Some(path) => {
            info!(target: "runtime", path = %path.display(), "resume_last_session");
            Ok(path)
        }
        None => bail!("no file given and no previous session"),
    }
}

fn run(args: &Args, config: &Config, out: &mut impl Write) -> Result<BatchReport> {
    let session_file = args.session.clone().unwrap_or_else(session::default_path);
    let path = resolve_path(args, &session_file)?;
    let observers: Vec<Box<dyn ActionObserver>> = vec![Box::new(TraceObserver)];
    let mut state = build_state(config);
    let mut report = BatchReport {
        path: path.clone(),
        ..BatchReport::default()
    };

    dispatch(Action::Open(path.clone()), &mut state, &observers)
        .with_context(|| format!("open {}", path.display()))?;
    let original = state.buffer().clone();

    for pair in args.replace.chunks_exact(2) {
        let (search, replace) = (pair[0].clone(), pair[1].clone());
        dispatch(
            Action::ReplaceAll {
                search: search.clone(),
                replace: replace.clone(),
            },
            &mut state,
            &observers,
        )
        .with_context(|| format!("replace {search:?} with {replace:?}"))?;
        report.replacements += 1;
    }

    for _ in 0..args.undo {
        if !dispatch(Action::Undo, &mut state, &observers)?.dirty {
            break;
        }
        report.undone += 1;
    }
    for _ in 0..args.redo {
        if !dispatch(Action::Redo, &mut state, &observers)?.dirty {
            break;
        }
        report.redone += 1;
    }

    if let Some(pattern) = &args.search {
        dispatch(Action::Search(pattern.clone()), &mut state, &observers)?;
        for span in state.matches() {
            writeln!(out, "{}:{}-{}", span.row, span.start, span.end)?;
        }
        report.spans = state.matches().len();
    }

    let target = match &args.output {
        Some(output) => Some(output.clone()),
        None if state.buffer() != &original => Some(path.clone()),
        None => None,
    };
    if let Some(target) = target {
        dispatch(Action::Write(Some(target.clone())), &mut state, &observers)
            .with_context(|| format!("write {}", target.display()))?;
        report.saved_to = Some(target);
    }

    if let Err(e) = session::store_last_path(&session_file, &path) {
        warn!(target: "runtime", error = %e, "session_store_failed");
    }
    Ok(report)
}

fn main() -> Result<()> {
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let config = load_from(args.config.clone())?;
    let stdout = std::io::stdout();
    let report = run(&args, &config, &mut stdout.lock())?;
    info!(
        target: "runtime",
        path = %report.path.display(),
        replacements = report.replacements,
        undone = report.undone,
        redone = report.redone,
        spans = report.spans,
        saved = report.saved_to.is_some(),
        "shutdown"
    );
    Ok(())
}
