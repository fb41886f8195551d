use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{DomainError, InteractionType, StructureFile};

/// Unidad de trabajo completa de un protocolo de docking: las dos estructuras
/// de entrada, el tipo de interacción y el directorio de trabajo donde quedan
/// todos los artefactos intermedios. Inmutable durante la ejecución.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockingJob {
    receptor: StructureFile,
    ligand: StructureFile,
    interaction: InteractionType,
    workdir: PathBuf,
}

impl DockingJob {
    /// Valida y construye el trabajo. El directorio de trabajo debe existir;
    /// crearlo es responsabilidad del invocador (el host crea uno por
    /// ejecución de protocolo).
    pub fn new(receptor: StructureFile,
               ligand: StructureFile,
               interaction: InteractionType,
               workdir: impl Into<PathBuf>)
               -> Result<Self, DomainError> {
        let workdir: PathBuf = workdir.into();
        if !workdir.is_dir() {
            return Err(DomainError::Input(format!("directorio de trabajo inexistente: {}",
                                                  workdir.display())));
        }
        // Bases iguales harían que los artefactos derivados del receptor y
        // del ligando se pisaran dentro del mismo directorio de trabajo.
        if receptor.stem() == ligand.stem() {
            return Err(DomainError::Validation(format!(
                "receptor y ligando comparten la base de nombre '{}'",
                receptor.stem()
            )));
        }
        Ok(Self { receptor, ligand, interaction, workdir })
    }

    pub fn receptor(&self) -> &StructureFile {
        &self.receptor
    }

    pub fn ligand(&self) -> &StructureFile {
        &self.ligand
    }

    pub fn interaction(&self) -> InteractionType {
        self.interaction
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}
