use sitemode::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Unknown-key warnings; always on stderr, even with `--json`
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, ui.color, ui.unicode));
        if ui.caps.is_github_actions {
            let file = w.file.display().to_string();
            eprintln!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("Unknown config key '{}'", w.key),
                    Some(&file),
                    w.line,
                )
            );
        }
    }
}

pub(crate) fn format_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let icon = Icon::Warning.colored(color, unicode);
    let mut out = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            w.key,
            w.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}\n",
            icon,
            w.key,
            w.file.display()
        ),
    };
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}
