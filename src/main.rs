//! sitemode CLI - toggle a static site between maintenance page and live app
//!
//! Usage: sitemode <COMMAND>
//!
//! Commands:
//!   maintenance  Replace the published site with the maintenance page
//!   restore      Rebuild and redeploy the application
//!   status       Show which mode the publish directory is in

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use sitemode::config;
use sitemode::presentation::{Cli, ColorWhen, Commands};
use sitemode::SiteConfig;

mod commands;
mod ui;

use commands::Completion;
use ui::context::UiContext;
use ui::json::emit_event;
use ui::json::events::{CompleteEvent, StartEvent};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    if cli.color == Some(ColorWhen::Always) {
        // crossterm drops colour codes on its own when NO_COLOR is set
        crossterm::style::force_color_output(true);
    }
    let command = cli.command.name();
    let started = Instant::now();

    if ui.json {
        let mut start = StartEvent::new(command);
        if let Some(dry_run) = dry_run_flag(&cli.command) {
            start = start.with_dry_run(dry_run);
        }
        let _ = emit_event(&start);
    }

    let (exit_code, complete) = match run(&cli, &ui) {
        Ok(completion) => {
            let exit_code = effective_exit_code(&cli.command, completion);
            let event = if completion.is_success() {
                CompleteEvent::success(command)
            } else {
                CompleteEvent::failure(command, exit_code)
            };
            (exit_code, event.with_outcome(completion.outcome))
        }
        Err(err) => {
            ui::error::print_error(&err, command, &ui);
            (1, CompleteEvent::failure(command, 1).with_outcome("error"))
        }
    };

    if ui.json {
        let elapsed = started.elapsed().as_millis() as u64;
        let _ = emit_event(&complete.with_duration(elapsed));
    }

    ExitCode::from(exit_code as u8)
}

fn run(cli: &Cli, ui: &UiContext) -> Result<Completion> {
    let loaded = config::discover(&cli.project, cli.config.as_deref())?;
    ui::output::print_config_warnings(&loaded.warnings, ui);
    if ui.verbose > 0 && !ui.json {
        match &loaded.source {
            Some(path) => eprintln!("Using config {}", path.display()),
            None => eprintln!("Using built-in defaults"),
        }
    }

    let site = SiteConfig::new(&cli.project, loaded.config);

    match &cli.command {
        Commands::Maintenance { dry_run, deploy } => {
            commands::maintenance::cmd_maintenance(&site, ui, *dry_run, *deploy)
        }
        Commands::Restore { dry_run, soft_fail } => {
            commands::restore::cmd_restore(&site, ui, *dry_run, *soft_fail)
        }
        Commands::Status => commands::status::cmd_status(&site, ui),
    }
}

fn dry_run_flag(command: &Commands) -> Option<bool> {
    match command {
        Commands::Maintenance { dry_run, .. } | Commands::Restore { dry_run, .. } => Some(*dry_run),
        Commands::Status => None,
    }
}

fn soft_fail(command: &Commands) -> bool {
    matches!(command, Commands::Restore { soft_fail: true, .. })
}

/// `--soft-fail` keeps the legacy behaviour of exiting 0 after a failed restore
fn effective_exit_code(command: &Commands, completion: Completion) -> i32 {
    if soft_fail(command) {
        0
    } else {
        completion.exit_code
    }
}
