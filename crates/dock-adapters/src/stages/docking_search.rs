//! Búsqueda de docking (etapa 2).
//!
//! Consume los mapas pre-computados y las estructuras anotadas con ASA y
//! produce el archivo de poses puntuadas. La tabla de scoring SOAP se
//! resuelve a través del locator, igual que cualquier binario.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use dock_core::PipelineError;
use dock_domain::{DockingJob, DOCK_FILE_NAME};

use crate::artifacts::{PotentialMapsArtifact, ScoredPosesArtifact};
use crate::tools::{search_command, ProcessRunner, Tool, ToolError, ToolInstallations};

const STAGE_ID: &str = "docking_search";

#[derive(Debug)]
pub struct DockingSearchStage {
    workdir: PathBuf,
    installations: ToolInstallations,
    runner: Arc<dyn ProcessRunner>,
}

impl DockingSearchStage {
    pub fn new(job: &DockingJob, installations: ToolInstallations, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { workdir: job.workdir().to_path_buf(),
               installations,
               runner }
    }

    pub fn run(&self, maps: &PotentialMapsArtifact) -> Result<ScoredPosesArtifact, PipelineError> {
        info!("executing docking search step");

        // Los artefactos consumidos vienen como referencias explícitas de la
        // etapa anterior, pero los archivos en sí viven en disco: se
        // verifica que sigan ahí antes de lanzar el proceso.
        for file in [&maps.receptor_asa,
                     &maps.ligand_asa,
                     &maps.receptor_vdw,
                     &maps.receptor_electrostatic,
                     &maps.receptor_desolvation,
                     &maps.ligand_desolvation]
        {
            if !file.is_file() {
                return Err(ToolError::Input { path: file.clone() }.into_stage_error(STAGE_ID, None));
            }
        }

        let frodock = self.installations
                          .locate(Tool::Frodock)
                          .map_err(|e| e.into_stage_error(STAGE_ID, None))?;
        let soap = self.installations
                       .locate(Tool::Soap)
                       .map_err(|e| e.into_stage_error(STAGE_ID, None))?;

        let output = self.workdir.join(DOCK_FILE_NAME);
        let cmd = search_command(&frodock, maps, &soap.program, &output);
        self.runner
            .run(&cmd)
            .map_err(|e| e.into_stage_error(STAGE_ID, Some(&cmd)))?;

        Ok(ScoredPosesArtifact { dock_file: output })
    }
}
