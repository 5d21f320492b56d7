//! # CLI Dispatch
//!
//! Turns parsed arguments into API calls and prints the results. This is the
//! only place (together with `browse`) that writes to stdout.

use super::browse;
use super::render::{render_config, render_messages, render_note_list, render_notes};
use super::setup::{Cli, Commands, ModeArg};
use clap::Parser;
use notedeck::api::{CmdResult, ConfigAction, ShowOptions};
use notedeck::error::Result;
use notedeck::init::{config_dir, initialize, NoteContext};
use notedeck::model::ViewingMode;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);

    let ctx = initialize(&config_dir()?);

    match cli.command {
        Some(Commands::List { folder }) => handle_list(&ctx, folder),
        Some(Commands::Show {
            folder,
            mode,
            count,
            seed,
        }) => handle_show(&ctx, folder, mode, count, seed),
        Some(Commands::Browse { folder, mode }) => handle_browse(ctx, folder, mode),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_browse(ctx, None, None),
    }
}

fn print_result(output: &str, result: &CmdResult) {
    print!("{}", output);
    print!("{}", render_messages(&result.messages));
}

fn handle_list(ctx: &NoteContext, folder: PathBuf) -> Result<()> {
    let result = ctx.api.list_notes(&folder)?;
    print_result(&render_note_list(&result.listed_notes), &result);
    Ok(())
}

fn handle_show(
    ctx: &NoteContext,
    folder: PathBuf,
    mode: Option<ModeArg>,
    count: u32,
    seed: Option<u64>,
) -> Result<()> {
    let options = ShowOptions {
        mode: mode.map(ViewingMode::from),
        count: count as usize,
        seed,
    };
    let result = ctx.api.show_notes(&folder, options)?;
    print_result(&render_notes(&result.notes), &result);
    Ok(())
}

fn handle_browse(ctx: NoteContext, folder: Option<PathBuf>, mode: Option<ModeArg>) -> Result<()> {
    let mode = mode.map(ViewingMode::from).unwrap_or(ctx.config.mode);
    let loader = ctx.api.into_loader(None, Some(mode))?;
    browse::run(loader, folder, mode)
}

fn handle_config(ctx: &NoteContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.configure(action)?;
    let output = match (&result.config, result.messages.is_empty()) {
        (Some(config), true) => render_config(config),
        _ => String::new(),
    };
    print_result(&output, &result);
    Ok(())
}
