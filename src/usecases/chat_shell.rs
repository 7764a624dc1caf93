use std::io;

use crate::{
    domain::{
        chat_message::{ChatMessage, Speaker},
        chat_session::TurnRejected,
    },
    usecases::{chat_turn::ChatController, contracts::AssistantBackend, terminal::Terminal},
};

const AI_DISCLAIMER: &str = "Esta é uma IA. As respostas são apenas informativas e não substituem uma consulta jurídica real.";
const PENDING_INDICATOR: &str = "Digitando...";
const EXIT_COMMAND: &str = "/sair";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatShellSummary {
    pub turns: usize,
}

/// Line-based chat loop. Ends on `/sair` or end of input.
pub fn run_chat_shell<B: AssistantBackend>(
    terminal: &mut dyn Terminal,
    controller: &mut ChatController<B>,
) -> io::Result<ChatShellSummary> {
    terminal.print_line("Assistente Jurídico IA")?;
    terminal.print_line(AI_DISCLAIMER)?;
    terminal.print_line(&format!("Digite {EXIT_COMMAND} para encerrar."))?;

    for message in controller.session().messages() {
        terminal.print_line(&render_message(message))?;
    }

    controller.ensure_session_context();

    let mut summary = ChatShellSummary::default();

    loop {
        let Some(line) = terminal.prompt_line("Você: ")? else {
            break;
        };

        if line.trim() == EXIT_COMMAND {
            break;
        }

        match controller.begin_turn(&line) {
            Ok(()) => {}
            Err(TurnRejected::EmptyText) => continue,
            Err(TurnRejected::AwaitingReply) => {
                terminal.print_line("Aguarde a resposta anterior.")?;
                continue;
            }
        }

        terminal.print_line(PENDING_INDICATOR)?;
        if controller.resolve_pending_turn().is_some() {
            summary.turns += 1;
        }

        if let Some(reply) = controller.session().last_message() {
            terminal.print_line(&render_message(reply))?;
        }
    }

    tracing::info!(turns = summary.turns, "chat shell closed");
    Ok(summary)
}

fn render_message(message: &ChatMessage) -> String {
    match (message.speaker, message.is_error) {
        (Speaker::User, _) => format!("Você: {}", message.text),
        (Speaker::Assistant, false) => format!("Assistente: {}", message.text),
        (Speaker::Assistant, true) => format!("Assistente [erro]: {}", message.text),
    }
}
