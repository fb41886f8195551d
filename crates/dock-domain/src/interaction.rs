use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Clasificación de la interacción receptor-ligando que el usuario elige en
/// el formulario del protocolo. Determina el código `-t` del mapa
/// electrostático; para `Unknown` el flag se omite por completo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionType {
    EnzymeSubstrate,
    AntigenAntibody,
    #[default]
    Unknown,
}

impl InteractionType {
    /// Etiquetas literales del formulario, en el orden original.
    pub const CHOICES: [&'static str; 3] = ["Enzyme-Substrate", "Antigen-Antibody", "Unknown"];

    /// Código que consume frodockgrid (`-t E` / `-t A`). `None` significa
    /// que el flag no se emite.
    pub fn code(self) -> Option<&'static str> {
        match self {
            InteractionType::EnzymeSubstrate => Some("E"),
            InteractionType::AntigenAntibody => Some("A"),
            InteractionType::Unknown => None,
        }
    }

    /// Etiqueta del formulario.
    pub fn label(self) -> &'static str {
        match self {
            InteractionType::EnzymeSubstrate => "Enzyme-Substrate",
            InteractionType::AntigenAntibody => "Antigen-Antibody",
            InteractionType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InteractionType {
    type Err = DomainError;

    // Acepta la etiqueta del formulario o su variante en minúsculas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enzyme-substrate" => Ok(InteractionType::EnzymeSubstrate),
            "antigen-antibody" => Ok(InteractionType::AntigenAntibody),
            "unknown" => Ok(InteractionType::Unknown),
            other => Err(DomainError::Validation(format!(
                "tipo de interacción desconocido: {other} (opciones: {})",
                Self::CHOICES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_form_order() {
        assert_eq!(InteractionType::EnzymeSubstrate.code(), Some("E"));
        assert_eq!(InteractionType::AntigenAntibody.code(), Some("A"));
        assert_eq!(InteractionType::Unknown.code(), None);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(InteractionType::default(), InteractionType::Unknown);
    }

    #[test]
    fn parses_form_labels() {
        assert_eq!("Antigen-Antibody".parse::<InteractionType>().unwrap(),
                   InteractionType::AntigenAntibody);
        assert_eq!("unknown".parse::<InteractionType>().unwrap(), InteractionType::Unknown);
        assert!("covalent".parse::<InteractionType>().is_err());
    }
}
