use anyhow::Result;

use sitemode::presentation::factory::create_status_use_case;
use sitemode::SiteConfig;

use super::Completion;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::StatusEvent};
use crate::ui::views::status::render_status;

/// Execute the status command (read-only)
pub fn cmd_status(site: &SiteConfig, ui: &UiContext) -> Result<Completion> {
    let report = create_status_use_case().execute(site)?;

    if ui.json {
        emit_event(&StatusEvent::from_report(&report))?;
    } else {
        print!(
            "{}",
            render_status(&report, ui.verbose, ui.color, ui.unicode)
        );
    }

    Ok(Completion::success())
}
