use std::path::Path;

use sitemode::domain::ports::FsError;
use sitemode::SiteModeError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Stable machine-readable code for an error
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<SiteModeError>() {
        Some(SiteModeError::SourceMissing { .. }) => "SOURCE_MISSING",
        Some(SiteModeError::Fs(_)) => "FS_ERROR",
        Some(SiteModeError::Config { .. }) => "CONFIG_INVALID",
        Some(SiteModeError::InvalidCommand { .. }) => "INVALID_COMMAND",
        Some(SiteModeError::Io(_)) => "IO_ERROR",
        None => "ERROR",
    }
}

/// Suggested fix, if we have one
pub fn error_help(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<SiteModeError>()? {
        SiteModeError::SourceMissing { path } => Some(format!(
            "Create {} or point [bundle] in sitemode.toml at an existing file.\n\
             The publish directory was not modified.",
            path.display()
        )),
        SiteModeError::Fs(FsError::PermissionDenied(path)) => Some(format!(
            "Check that the current user can write to {}.",
            path.display()
        )),
        SiteModeError::Config { .. } => {
            Some("Fix the config file or pass --config to use another one.".to_string())
        }
        SiteModeError::InvalidCommand { key, .. } => Some(format!(
            "Set [commands] {key} to a non-empty command line."
        )),
        _ => None,
    }
}

fn error_file(err: &anyhow::Error) -> Option<&Path> {
    match err.downcast_ref::<SiteModeError>()? {
        SiteModeError::SourceMissing { path } => Some(path),
        SiteModeError::Config { file, .. } => Some(file),
        SiteModeError::Fs(FsError::NotFound(path))
        | SiteModeError::Fs(FsError::PermissionDenied(path))
        | SiteModeError::Fs(FsError::Io { path, .. }) => Some(path),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).bold().render(supports_color)
    );
    if let Some(help) = error_help(err) {
        for line in help.lines() {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(line).render(supports_color)
            ));
        }
    }
    out
}

/// Report a fatal error on the right channel
pub fn print_error(err: &anyhow::Error, command: &str, ui: &UiContext) {
    if ui.json {
        let event = ErrorEvent::new(command, error_code(err), format!("{:#}", err))
            .with_help(error_help(err));
        let _ = emit_event(&event);
        return;
    }

    if ui.caps.is_github_actions {
        let file = error_file(err).map(|p| p.display().to_string());
        eprintln!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &format!("{:#}", err),
                file.as_deref(),
                None,
            )
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
