use anyhow::Result;

use crate::{
    assistant,
    cli::{Cli, Command},
    domain, infra,
    infra::system::{SystemOpener, ThreadPause},
    usecases::{
        self, bootstrap,
        chat_shell::run_chat_shell,
        guided_contact::{GuidedContact, GuidedContactOutcome},
        terminal::StdTerminal,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        assistant = assistant::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let mut terminal = StdTerminal;

    match cli.command_or_default() {
        Command::Chat => {
            let mut controller = bootstrap::compose_chat(&context)?;
            let summary = run_chat_shell(&mut terminal, &mut controller)?;
            tracing::info!(turns = summary.turns, "chat finished");
        }
        Command::Contact => {
            let outcome = GuidedContact::new(&context.config, &SystemOpener, &ThreadPause)
                .run(&mut terminal)?;
            match outcome {
                GuidedContactOutcome::Submitted { count } => {
                    tracing::info!(count, "contact flow finished");
                }
                GuidedContactOutcome::Cancelled => {
                    tracing::info!("contact flow cancelled");
                }
            }
        }
    }

    Ok(())
}
