//! Restore Use Case
//!
//! Runs the build command, then the deploy command. The first failure stops
//! the sequence; nothing is retried or rolled back.

use crate::config::SiteConfig;
use crate::domain::ports::{CommandRunner, SiteEvent, SiteEventSink};
use crate::domain::value_objects::Step;

use super::options::RestoreOptions;
use super::outcome::RestoreOutcome;

/// Restore use case - rebuild and redeploy the live application
pub struct RestoreUseCase<CR>
where
    CR: CommandRunner,
{
    runner: CR,
}

impl<CR> RestoreUseCase<CR>
where
    CR: CommandRunner,
{
    /// Create a new restore use case
    pub fn new(runner: CR) -> Self {
        Self { runner }
    }

    /// Execute build then deploy
    pub fn execute(
        &self,
        site: &SiteConfig,
        options: &RestoreOptions,
        events: &dyn SiteEventSink,
    ) -> RestoreOutcome {
        let steps = [
            (Step::Build, site.build_command()),
            (Step::Deploy, site.deploy_command()),
        ];

        for (step, command) in steps {
            if options.dry_run {
                events.on_event(SiteEvent::CommandPlanned {
                    step,
                    command: command.clone(),
                    available: self.runner.is_available(command.program()),
                });
                continue;
            }

            events.on_event(SiteEvent::CommandStarted {
                step,
                command: command.clone(),
            });

            if let Err(error) = self.runner.run(command, options.stdio) {
                events.on_event(SiteEvent::CommandFailed {
                    step,
                    error: error.to_string(),
                });
                return RestoreOutcome::failed(step, command.clone(), error);
            }

            events.on_event(SiteEvent::CommandSucceeded { step });
        }

        RestoreOutcome::Success
    }
}
