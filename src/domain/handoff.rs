//! Message payload and link for handing a lead off to the messaging app.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::contact_form::{ContactFormState, FormField};

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffPayload {
    text: String,
}

impl HandoffPayload {
    pub fn from_form(firm_name: &str, form: &ContactFormState) -> Self {
        let text = format!(
            "*Nova Solicitação de Contato - {firm_name}*\n\
             \n\
             *Nome:* {name}\n\
             *Telefone:* {phone}\n\
             *Email:* {email}\n\
             *Área:* {area}\n\
             \n\
             *Mensagem:*\n\
             {message}",
            name = form.value(FormField::Name),
            phone = form.value(FormField::Phone),
            email = form.value(FormField::Email),
            area = form.value(FormField::Area),
            message = form.value(FormField::Message),
        );

        Self { text }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Builds `<base_url>?text=<encoded payload>`.
    pub fn link(&self, base_url: &str) -> String {
        format!(
            "{}?text={}",
            base_url.trim_end_matches('?'),
            utf8_percent_encode(&self.text, COMPONENT)
        )
    }
}
