use sitemode::application::StatusReport;
use sitemode::SiteMode;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    report: &StatusReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Status, "Site Status");
    header.add("Publish", report.publish_dir.display().to_string());
    let mut out = header.render(supports_color, supports_unicode);

    let index = report.index_name.as_str();
    let (mode, description) = match report.mode {
        SiteMode::Maintenance => (
            ColoredText::warning("maintenance"),
            format!("{index} is the maintenance page"),
        ),
        SiteMode::Live => (
            ColoredText::success("live"),
            format!("{index} differs from the maintenance page"),
        ),
        SiteMode::Unpublished => (
            ColoredText::dim("unpublished"),
            format!("no {index} in the publish directory"),
        ),
        SiteMode::Unknown => (
            ColoredText::dim("unknown"),
            "maintenance page missing, cannot compare".to_string(),
        ),
    };
    out.push_str(&format!(
        "Mode: {} {}\n",
        mode.bold().render(supports_color),
        ColoredText::dim(format!("({description})")).render(supports_color)
    ));

    if verbose > 0 {
        let width = index.len().max("maintenance page".len());
        if let Some(hash) = &report.index_hash {
            out.push_str(&format!("  {:<width$} {}\n", index, hash));
        }
        if let Some(hash) = &report.maintenance_hash {
            out.push_str(&format!("  {:<width$} {}\n", "maintenance page", hash));
        }
    }

    for missing in &report.missing_sources {
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("Missing bundle file:").render(supports_color),
            missing.display()
        ));
    }

    out
}
