/// Label shown by the area selector before the user picks anything.
pub const AREA_PLACEHOLDER: &str = "Selecione uma área";

/// Practice areas a lead can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeArea {
    Family,
    Criminal,
    Labor,
    Civil,
    Business,
    Other,
}

impl PracticeArea {
    pub const ALL: [PracticeArea; 6] = [
        PracticeArea::Family,
        PracticeArea::Criminal,
        PracticeArea::Labor,
        PracticeArea::Civil,
        PracticeArea::Business,
        PracticeArea::Other,
    ];

    /// Returns the label used in the selector and in the hand-off payload.
    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Direito de Família",
            Self::Criminal => "Direito Penal",
            Self::Labor => "Direito Trabalhista",
            Self::Civil => "Direito Civil",
            Self::Business => "Direito Empresarial",
            Self::Other => "Outros",
        }
    }

    /// Resolves a selector value back to an area.
    ///
    /// Matching is exact on the label (surrounding whitespace ignored). The
    /// placeholder and free text never resolve.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|area| area.label() == value)
    }
}
