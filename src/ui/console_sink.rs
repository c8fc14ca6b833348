//! Text-mode rendering of site events.

use std::io::Write;

use sitemode::domain::ports::{SiteEvent, SiteEventSink};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Prints one line per event to stdout
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbose: u8,
    dry_run: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool, unicode: bool, verbose: u8, dry_run: bool) -> Self {
        Self {
            color,
            unicode,
            verbose,
            dry_run,
        }
    }

    pub(crate) fn render(&self, event: &SiteEvent) -> Option<String> {
        let line = match event {
            SiteEvent::PublishDirReady { path, created } => {
                if *created {
                    let verb = if self.dry_run { "Would create" } else { "Created" };
                    format!(
                        "{} {} {}",
                        Icon::Success.colored(self.color, self.unicode),
                        verb,
                        path.display()
                    )
                } else if self.verbose > 0 {
                    format!(
                        "{} Publishing into {}",
                        Icon::Arrow.colored(self.color, self.unicode),
                        path.display()
                    )
                } else {
                    return None;
                }
            }

            SiteEvent::FilePublished {
                source,
                destination,
                hash,
            } => {
                let verb = if self.dry_run { "Would write" } else { "Wrote" };
                let mut line = format!(
                    "{} {} {}",
                    Icon::Success.colored(self.color, self.unicode),
                    verb,
                    destination.display()
                );
                if self.verbose > 0 {
                    line.push_str(
                        &ColoredText::dim(format!(
                            " (from {}, {})",
                            source.display(),
                            hash.short()
                        ))
                        .render(self.color),
                    );
                }
                line
            }

            SiteEvent::CommandPlanned {
                step,
                command,
                available,
            } => {
                let mut line = format!(
                    "{} Would run {}: {}",
                    Icon::Arrow.colored(self.color, self.unicode),
                    step,
                    command
                );
                if !available {
                    line.push_str(&format!(
                        " {}",
                        ColoredText::warning(format!("({} not found on PATH)", command.program()))
                            .render(self.color)
                    ));
                }
                line
            }

            SiteEvent::CommandStarted { step, command } => {
                let shown = if self.verbose > 0 {
                    format!("{:?}", command.argv())
                } else {
                    command.to_string()
                };
                format!(
                    "{} Running {}: {}",
                    Icon::Progress.colored(self.color, self.unicode),
                    step,
                    shown
                )
            }

            SiteEvent::CommandSucceeded { step } => format!(
                "{} {} finished",
                Icon::Success.colored(self.color, self.unicode),
                capitalize(step.as_str())
            ),

            // The outcome view reports the failure with recovery steps.
            SiteEvent::CommandFailed { .. } => return None,
        };
        Some(line)
    }
}

impl SiteEventSink for ConsoleEventSink {
    fn on_event(&self, event: SiteEvent) {
        if let Some(line) = self.render(&event) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
