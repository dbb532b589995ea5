//! # CLI Layer
//!
//! This module is **one possible UI client** for noted. It is the only place
//! that knows about terminal I/O, argument parsing and exit codes.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `AppContext::api()`: resolves the data file and opens the API on first use
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! With no subcommand the interactive menu in `menu.rs` takes over, reusing
//! the same `AppContext` for the whole session.

use super::menu::MenuSession;
use super::print::{print_compact_notes, print_config, print_full_notes, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use noted::api::{self, CmdResult, ConfigAction, NoteEdit, NotesApi};
use noted::config::NotedConfig;
use noted::error::Result;
use noted::store::fs::FileBackend;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_FILE_ENV: &str = "NOTED_FILE";

struct AppContext {
    cwd: PathBuf,
    file: Option<PathBuf>,
    api: Option<NotesApi<FileBackend>>,
}

impl AppContext {
    fn new(cli: &Cli) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            cwd,
            file: cli.file.clone(),
            api: None,
        }
    }

    /// The notes API, opening the data file the first time it is needed.
    fn api(&mut self) -> Result<&mut NotesApi<FileBackend>> {
        let api = match self.api.take() {
            Some(api) => api,
            None => self.open_api()?,
        };
        Ok(self.api.insert(api))
    }

    fn open_api(&self) -> Result<NotesApi<FileBackend>> {
        let config = NotedConfig::load(&self.cwd)?;
        let data_path = resolve_data_path(self.file.as_deref(), &config, &self.cwd);
        let backend = FileBackend::new(data_path).with_pretty(config.pretty);
        debug!(path = %backend.path().display(), "using data file");
        NotesApi::open(backend)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = AppContext::new(&cli);

    match cli.command {
        Some(Commands::Add { title, body }) => handle_add(&mut ctx, title, body.join(" ")),
        Some(Commands::List { compact }) => handle_list(&mut ctx, compact),
        Some(Commands::View { id }) => handle_view(&mut ctx, id),
        Some(Commands::Find { date }) => handle_find(&mut ctx, &date),
        Some(Commands::Edit { id, title, body }) => handle_edit(&mut ctx, id, title, body),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("noted=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// `--file`, then `NOTED_FILE`, then the configured `data-file`.
fn resolve_data_path(flag: Option<&Path>, config: &NotedConfig, cwd: &Path) -> PathBuf {
    if let Some(path) = flag {
        return cwd.join(path);
    }
    match std::env::var_os(DATA_FILE_ENV) {
        Some(path) if !path.is_empty() => cwd.join(path),
        _ => config.data_path(cwd),
    }
}

#[derive(Clone, Copy)]
enum Listing {
    Hidden,
    Full,
    Compact,
}

fn emit(result: &CmdResult, listing: Listing) -> Result<()> {
    let mut out = io::stdout().lock();
    match listing {
        Listing::Hidden => {}
        Listing::Full => print_full_notes(&mut out, &result.listed_notes)?,
        Listing::Compact => print_compact_notes(&mut out, &result.listed_notes)?,
    }
    if let Some(config) = &result.config {
        print_config(&mut out, config)?;
    }
    print_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: String, body: String) -> Result<()> {
    let result = ctx.api()?.add_note(title, body)?;
    emit(&result, Listing::Hidden)
}

fn handle_list(ctx: &mut AppContext, compact: bool) -> Result<()> {
    let result = ctx.api()?.list_notes()?;
    let listing = if compact {
        Listing::Compact
    } else {
        Listing::Full
    };
    emit(&result, listing)
}

fn handle_view(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api()?.view_note(id)?;
    emit(&result, Listing::Full)
}

fn handle_find(ctx: &mut AppContext, date: &str) -> Result<()> {
    let result = ctx.api()?.find_notes(date)?;
    emit(&result, Listing::Full)
}

fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    title: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let result = ctx.api()?.edit_note(id, &NoteEdit::new(title, body))?;
    emit(&result, Listing::Hidden)
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api()?.delete_note(id)?;
    emit(&result, Listing::Hidden)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api::config(&ctx.cwd, action)?;
    emit(&result, Listing::Hidden)
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuSession::new(ctx.api()?, stdin.lock(), stdout.lock()).run()
}
