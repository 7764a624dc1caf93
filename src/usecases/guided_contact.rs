use std::io;

use crate::{
    domain::{
        contact_form::{ContactFormState, FormField},
        practice_area::{PracticeArea, AREA_PLACEHOLDER},
        submission::ContactForm,
    },
    infra::{
        config::AppConfig,
        contracts::{ExternalOpener, Pause},
    },
    usecases::{
        submit_contact::{submit_contact, SubmitContactError, SubmitContactReport},
        terminal::Terminal,
    },
};

/// Correction rounds allowed after the first validation failure.
const DEFAULT_CORRECTION_ROUNDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidedContactOutcome {
    /// At least one form was handed off.
    Submitted { count: usize },
    Cancelled,
}

pub struct GuidedContact<'a> {
    pub config: &'a AppConfig,
    pub opener: &'a dyn ExternalOpener,
    pub pause: &'a dyn Pause,
    pub correction_rounds: usize,
}

impl<'a> GuidedContact<'a> {
    pub fn new(config: &'a AppConfig, opener: &'a dyn ExternalOpener, pause: &'a dyn Pause) -> Self {
        Self {
            config,
            opener,
            pause,
            correction_rounds: DEFAULT_CORRECTION_ROUNDS,
        }
    }

    /// Collects a lead on the terminal and hands it off. Invalid fields are
    /// listed with their messages and only those fields are asked again.
    pub fn run(&self, terminal: &mut dyn Terminal) -> io::Result<GuidedContactOutcome> {
        let mut form = ContactForm::default();
        let mut submitted = 0;

        loop {
            terminal.print_line("Envie sua mensagem")?;
            terminal.print_line(
                "Ao enviar, você será redirecionado para o WhatsApp para confirmar a mensagem.",
            )?;

            if !self.collect(terminal, &mut form, &FormField::ALL)? {
                return finish(terminal, submitted);
            }

            let Some(report) = self.submit_with_corrections(terminal, &mut form)? else {
                return finish(terminal, submitted);
            };
            submitted += 1;

            terminal.print_line("Redirecionando para WhatsApp!")?;
            terminal.print_line(
                "Agradecemos seu contato. Você será redirecionado para concluir o envio da mensagem.",
            )?;
            if !report.opened {
                terminal.print_line(
                    "Não foi possível abrir o WhatsApp automaticamente. Use o link abaixo.",
                )?;
            }
            terminal.print_line(&format!("Link: {}", report.link))?;

            let again = terminal.prompt_line("Enviar nova mensagem? (s/N): ")?;
            if !matches!(again.as_deref().map(str::trim), Some("s" | "S" | "sim")) {
                return Ok(GuidedContactOutcome::Submitted { count: submitted });
            }
            form.reset_after_success();
        }
    }

    fn submit_with_corrections(
        &self,
        terminal: &mut dyn Terminal,
        form: &mut ContactForm,
    ) -> io::Result<Option<SubmitContactReport>> {
        for round in 0..=self.correction_rounds {
            terminal.print_line("Enviando para WhatsApp...")?;
            match submit_contact(
                form,
                &self.config.firm,
                &self.config.handoff,
                self.opener,
                self.pause,
            ) {
                Ok(report) => return Ok(Some(report)),
                Err(SubmitContactError::Invalid(_)) => {}
                Err(SubmitContactError::NotIdle(outcome)) => {
                    tracing::warn!(?outcome, "contact submission attempted while not idle");
                    return Ok(None);
                }
            }

            print_errors(terminal, form.state())?;
            if round == self.correction_rounds {
                break;
            }

            let fields: Vec<FormField> = form.state().errors().keys().copied().collect();
            if !self.collect(terminal, form, &fields)? {
                return Ok(None);
            }
        }

        terminal.print_line("Muitas tentativas inválidas. Tente novamente mais tarde.")?;
        Ok(None)
    }

    /// Prompts each field in turn. Returns false on end of input.
    fn collect(
        &self,
        terminal: &mut dyn Terminal,
        form: &mut ContactForm,
        fields: &[FormField],
    ) -> io::Result<bool> {
        for field in fields {
            let value = match field {
                FormField::Area => prompt_area(terminal)?,
                other => terminal.prompt_line(&format!("{}: ", other.label()))?,
            };

            let Some(value) = value else {
                return Ok(false);
            };
            form.update_field(*field, value);
        }

        Ok(true)
    }
}

fn prompt_area(terminal: &mut dyn Terminal) -> io::Result<Option<String>> {
    terminal.print_line(&format!("{}:", FormField::Area.label()))?;
    for (index, area) in PracticeArea::ALL.iter().enumerate() {
        terminal.print_line(&format!("  {}) {}", index + 1, area.label()))?;
    }

    let answer = terminal.prompt_line(&format!("{AREA_PLACEHOLDER} (1-{}): ", PracticeArea::ALL.len()))?;
    Ok(answer.map(|value| resolve_area_choice(&value)))
}

/// Maps a menu number to its label; anything else is passed through for
/// validation to judge.
fn resolve_area_choice(value: &str) -> String {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| PracticeArea::ALL.get(index))
        .map(|area| area.label().to_owned())
        .unwrap_or_else(|| value.to_owned())
}

fn print_errors(terminal: &mut dyn Terminal, state: &ContactFormState) -> io::Result<()> {
    for field in FormField::ALL {
        if let Some(error) = state.error(field) {
            terminal.print_line(&format!("{}: {}", field.label(), error))?;
        }
    }
    Ok(())
}

fn finish(terminal: &mut dyn Terminal, submitted: usize) -> io::Result<GuidedContactOutcome> {
    terminal.print_line("Envio cancelado.")?;
    Ok(if submitted == 0 {
        GuidedContactOutcome::Cancelled
    } else {
        GuidedContactOutcome::Submitted { count: submitted }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        infra::stubs::{RecordingOpener, RecordingPause},
        test_support::ScriptedTerminal,
    };

    const VALID: [&str; 5] = [
        "João Silva",
        "(11) 98888-7777",
        "a@b.com",
        "4",
        "Preciso de ajuda com um contrato.",
    ];

    fn run(inputs: Vec<Option<&str>>) -> (GuidedContactOutcome, ScriptedTerminal, RecordingOpener) {
        let config = AppConfig::default();
        let opener = RecordingOpener::default();
        let pause = RecordingPause::default();
        let mut terminal = ScriptedTerminal::new(inputs);

        let outcome = GuidedContact::new(&config, &opener, &pause)
            .run(&mut terminal)
            .expect("terminal io should not fail");

        (outcome, terminal, opener)
    }

    #[test]
    fn resolves_menu_numbers_to_area_labels() {
        assert_eq!(resolve_area_choice("4"), "Direito Civil");
        assert_eq!(resolve_area_choice(" 1 "), "Direito de Família");
        assert_eq!(resolve_area_choice("0"), "0");
        assert_eq!(resolve_area_choice("7"), "7");
        assert_eq!(resolve_area_choice("Outros"), "Outros");
    }

    #[test]
    fn happy_path_opens_link_once() {
        let mut inputs: Vec<Option<&str>> = VALID.iter().copied().map(Some).collect();
        inputs.push(Some("n"));

        let (outcome, terminal, opener) = run(inputs);

        assert_eq!(outcome, GuidedContactOutcome::Submitted { count: 1 });
        assert_eq!(opener.opened.borrow().len(), 1);
        assert!(opener.opened.borrow()[0].contains("Direito%20Civil"));
        assert!(terminal.printed("Redirecionando para WhatsApp!"));
    }

    #[test]
    fn reprompts_only_invalid_fields() {
        let inputs = vec![
            Some("Jo"),
            Some("(11) 98888-7777"),
            Some("x"),
            Some("4"),
            Some("Preciso de ajuda com um contrato."),
            Some("João Silva"),
            Some("a@b.com"),
            None,
        ];

        let (outcome, terminal, opener) = run(inputs);

        assert_eq!(outcome, GuidedContactOutcome::Submitted { count: 1 });
        assert!(terminal.printed("Nome Completo: Nome deve ter pelo menos 3 caracteres."));
        assert!(terminal.printed("Email: Formato de email inválido."));
        assert!(!terminal.printed("Telefone: "));
        let reprompts = &terminal.prompts[5..7];
        assert_eq!(reprompts, ["Nome Completo: ", "Email: "]);
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn eof_during_first_form_cancels_without_opening() {
        let (outcome, terminal, opener) = run(vec![Some("João Silva"), None]);

        assert_eq!(outcome, GuidedContactOutcome::Cancelled);
        assert!(opener.opened.borrow().is_empty());
        assert!(terminal.printed("Envio cancelado."));
    }

    #[test]
    fn gives_up_after_correction_rounds() {
        let mut inputs: Vec<Option<&str>> = vec![
            Some("João Silva"),
            Some("123"),
            Some("a@b.com"),
            Some("4"),
            Some("Preciso de ajuda com um contrato."),
        ];
        inputs.extend(std::iter::repeat(Some("123")).take(DEFAULT_CORRECTION_ROUNDS));

        let (outcome, terminal, opener) = run(inputs);

        assert_eq!(outcome, GuidedContactOutcome::Cancelled);
        assert!(terminal.printed("Muitas tentativas inválidas"));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn can_send_a_second_message_after_reset() {
        let mut inputs: Vec<Option<&str>> = VALID.iter().copied().map(Some).collect();
        inputs.push(Some("s"));
        inputs.extend(VALID.iter().copied().map(Some));
        inputs.push(Some("n"));

        let (outcome, _terminal, opener) = run(inputs);

        assert_eq!(outcome, GuidedContactOutcome::Submitted { count: 2 });
        assert_eq!(opener.opened.borrow().len(), 2);
    }
}
