use anyhow::Result;

use sitemode::application::{DeployStatus, MaintenanceOptions, EXIT_DEPLOY_FAILED};
use sitemode::presentation::factory::create_maintenance_use_case;
use sitemode::SiteConfig;

use super::{child_stdio, event_sink, Completion};
use crate::ui::context::UiContext;
use crate::ui::views::maintenance::{render_maintenance_header, render_maintenance_result};

/// Execute the maintenance command
pub fn cmd_maintenance(
    site: &SiteConfig,
    ui: &UiContext,
    dry_run: bool,
    deploy: bool,
) -> Result<Completion> {
    let options = MaintenanceOptions::new()
        .with_dry_run(dry_run)
        .with_deploy(deploy)
        .with_stdio(child_stdio(ui));

    if !ui.json {
        print!(
            "{}",
            render_maintenance_header(site, dry_run, ui.color, ui.unicode)
        );
    }

    let use_case = create_maintenance_use_case(site);
    let sink = event_sink("maintenance", ui, dry_run);
    let result = use_case.execute(site, &options, sink.as_ref())?;

    if !ui.json {
        let summary = render_maintenance_result(&result, site, ui.color, ui.unicode);
        if result.is_success() {
            print!("{}", summary);
        } else {
            eprint!("{}", summary);
        }
    }

    Ok(match result.deploy {
        DeployStatus::Failed(_) => Completion {
            exit_code: EXIT_DEPLOY_FAILED,
            outcome: "deploy_failed",
        },
        _ => Completion::success(),
    })
}
