//! Restore command UI views

use sitemode::{RestoreOutcome, SiteConfig};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_restore_header(
    site: &SiteConfig,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Restore Application (Dry Run)"
    } else {
        "Restore Application"
    };
    let mut header = CommandHeader::new(Icon::Restore, title);
    header.add("Build", site.build_command().to_string());
    header.add("Deploy", site.deploy_command().to_string());
    header.render(supports_color, supports_unicode)
}

/// Final line for a successful run
pub fn render_restore_success(
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if dry_run {
        return format!(
            "\n{}\n",
            ColoredText::dim("Dry run: nothing was executed.").render(supports_color)
        );
    }
    format!(
        "\n{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Application rebuilt and deployed. Maintenance mode is off.")
            .render(supports_color)
    )
}

/// Diagnostic plus manual recovery steps for a failed run
pub fn render_restore_failure(
    outcome: &RestoreOutcome,
    site: &SiteConfig,
    soft_fail: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (label, context) = match outcome {
        RestoreOutcome::Success => return String::new(),
        RestoreOutcome::BuildFailed { .. } => (
            "Build failed:",
            "The deploy step was skipped.".to_string(),
        ),
        RestoreOutcome::DeployFailed { .. } => (
            "Deploy failed:",
            format!(
                "The new build is in {} but the site may still show the maintenance page.",
                site.publish_dir().display()
            ),
        ),
    };

    let mut out = String::from("\n");
    out.push_str(&format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(label).bold().render(supports_color),
        outcome
            .error()
            .map(|e| e.to_string())
            .unwrap_or_default()
    ));
    out.push_str(&format!("{}\n", context));
    out.push_str("To restore the application manually, run:\n");
    out.push_str(&format!("  1. {}\n", site.build_command()));
    out.push_str(&format!("  2. {}\n", site.deploy_command()));

    if soft_fail {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("--soft-fail: exiting with status 0").render(supports_color)
        ));
    }
    out
}
