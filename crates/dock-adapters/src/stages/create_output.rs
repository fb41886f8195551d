//! Registro de la salida del protocolo (etapa 4).
//!
//! Placeholder explícito: el registro de las poses agrupadas como resultado
//! estructurado hacia el host todavía no está implementado. La etapa existe
//! igual para que el contrato del pipeline quede completo: deja constancia
//! en el log y pasa el artefacto sin tocar.

use tracing::warn;

use dock_core::PipelineError;

use crate::artifacts::ClusteredPosesArtifact;

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOutputStage;

impl CreateOutputStage {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, clustered: ClusteredPosesArtifact) -> Result<ClusteredPosesArtifact, PipelineError> {
        warn!(clustered_poses = %clustered.clust_file.display(),
              "structured output registration is not implemented yet; clustered poses remain on disk");
        Ok(clustered)
    }
}
