use crate::usecases::contracts::SessionConfig;

/// Builds the system instruction that fixes the assistant's persona for `firm_name`.
pub fn system_instruction(firm_name: &str) -> String {
    format!(
        "Você é um assistente virtual inteligente para o escritório de advocacia \"{firm_name}\".\n\
         \n\
         Suas diretrizes são:\n\
         1. Responda a perguntas gerais sobre direito brasileiro de forma educada, profissional e concisa.\n\
         2. IMPORTANTE: Sempre inclua um aviso de que você é uma IA e que suas respostas não constituem aconselhamento jurídico oficial.\n\
         3. Se o usuário perguntar sobre casos específicos ou pedir conselhos detalhados, recomende que agendem uma consulta com nossos advogados humanos através do formulário de contato.\n\
         4. Mantenha um tom formal, empático e seguro.\n\
         5. As áreas de atuação do escritório são: Direito Civil, Direito de Família, Direito Trabalhista e Direito Penal."
    )
}

pub fn session_config(firm_name: &str) -> SessionConfig {
    SessionConfig {
        system_instruction: system_instruction(firm_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_names_firm_and_ai_disclosure() {
        let instruction = system_instruction("Costa Advogados");

        assert!(instruction.contains("\"Costa Advogados\""));
        assert!(instruction.contains("você é uma IA"));
        assert!(instruction.contains("formulário de contato"));
    }
}
