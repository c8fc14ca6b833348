//! Maintenance command UI views

use sitemode::application::{DeployStatus, MaintenanceResult};
use sitemode::SiteConfig;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_maintenance_header(
    site: &SiteConfig,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Maintenance Mode (Dry Run)"
    } else {
        "Maintenance Mode"
    };
    let mut header = CommandHeader::new(Icon::Maintenance, title);
    header.add("Page", site.document_path().display().to_string());
    header.add("Publish", site.publish_dir().display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Closing summary, including the next step the operator has to take
pub fn render_maintenance_result(
    result: &MaintenanceResult,
    site: &SiteConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("\n");
    let deploy = site.deploy_command();

    if result.dry_run {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("Dry run: nothing was written.").render(supports_color)
        ));
        if matches!(result.deploy, DeployStatus::Planned) {
            out.push_str(&format!("Would then run: {}\n", deploy));
        }
        return out;
    }

    out.push_str(&format!(
        "{} {} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Maintenance page is in place in").render(supports_color),
        result.publish_dir.display()
    ));

    match &result.deploy {
        DeployStatus::NotRequested | DeployStatus::Planned => {
            out.push_str("\nTo deploy maintenance mode, run:\n");
            out.push_str(&format!("  {}\n", deploy));
        }
        DeployStatus::Deployed => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success("Maintenance mode deployed.").render(supports_color)
            ));
        }
        DeployStatus::Failed(err) => {
            out.push_str(&format!(
                "{} {} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error("Deploy failed:").bold().render(supports_color),
                err
            ));
            out.push_str("The maintenance page is in place but not live. Retry with:\n");
            out.push_str(&format!("  {}\n", deploy));
        }
    }

    out
}
