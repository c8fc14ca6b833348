use anyhow::Result;

use sitemode::application::RestoreOptions;
use sitemode::presentation::factory::create_restore_use_case;
use sitemode::SiteConfig;

use super::{child_stdio, event_sink, Completion};
use crate::ui::context::UiContext;
use crate::ui::views::restore::{
    render_restore_failure, render_restore_header, render_restore_success,
};

/// Execute the restore command.
///
/// Build and deploy failures are not errors here: they come back as a
/// [`Completion`] with exit status 3 or 4 so `main` can honour `--soft-fail`.
pub fn cmd_restore(
    site: &SiteConfig,
    ui: &UiContext,
    dry_run: bool,
    soft_fail: bool,
) -> Result<Completion> {
    let options = RestoreOptions::new()
        .with_dry_run(dry_run)
        .with_stdio(child_stdio(ui));

    if !ui.json {
        print!(
            "{}",
            render_restore_header(site, dry_run, ui.color, ui.unicode)
        );
    }

    let use_case = create_restore_use_case(site);
    let sink = event_sink("restore", ui, dry_run);
    let outcome = use_case.execute(site, &options, sink.as_ref());

    if !ui.json {
        if outcome.is_success() {
            print!("{}", render_restore_success(dry_run, ui.color, ui.unicode));
        } else {
            eprint!(
                "{}",
                render_restore_failure(&outcome, site, soft_fail, ui.color, ui.unicode)
            );
        }
    }

    Ok(Completion {
        exit_code: outcome.exit_code(),
        outcome: outcome.as_str(),
    })
}
