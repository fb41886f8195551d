//! Generación de mapas de potencial (etapa 1).
//!
//! Todos los mapas necesarios se pre-computan con frodockgrid. Aunque los
//! mapas de vdw y electrostático podrían calcularse al vuelo durante la
//! búsqueda, generarlos antes permite visualizarlos y verificar que son
//! consistentes con la estructura original. La pre-computación de los mapas
//! de desolvatación de receptor y ligando es siempre obligatoria.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use dock_core::PipelineError;
use dock_domain::{asa_file_name, map_file_name, DockingJob, InteractionType, MapKind, StructureFile};

use crate::artifacts::PotentialMapsArtifact;
use crate::tools::{grid_command, ProcessRunner, Tool, ToolInstallations};

const STAGE_ID: &str = "map_generation";

#[derive(Debug)]
pub struct MapGenerationStage {
    receptor: StructureFile,
    ligand: StructureFile,
    interaction: InteractionType,
    workdir: PathBuf,
    installations: ToolInstallations,
    runner: Arc<dyn ProcessRunner>,
}

impl MapGenerationStage {
    pub fn new(job: &DockingJob, installations: ToolInstallations, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { receptor: job.receptor().clone(),
               ligand: job.ligand().clone(),
               interaction: job.interaction(),
               workdir: job.workdir().to_path_buf(),
               installations,
               runner }
    }

    pub fn run(&self) -> Result<PotentialMapsArtifact, PipelineError> {
        let grid = self.installations
                       .locate(Tool::Frodockgrid)
                       .map_err(|e| e.into_stage_error(STAGE_ID, None))?;

        let plan: [(&StructureFile, MapKind, &str); 4] =
            [(&self.receptor, MapKind::Vdw, "receptor vdw potential map"),
             (&self.receptor, MapKind::Electrostatic, "receptor electrostatic potential map"),
             (&self.receptor, MapKind::Desolvation, "receptor desolvation potential map"),
             (&self.ligand, MapKind::Desolvation, "ligand desolvation potential map")];

        for (structure, kind, label) in plan {
            info!("creation of the {label}");
            let cmd = grid_command(&grid, structure, &self.workdir, kind, self.interaction);
            self.runner
                .run(&cmd)
                .map_err(|e| e.into_stage_error(STAGE_ID, Some(&cmd)))?;
        }

        // frodockgrid deja las estructuras anotadas con ASA junto a los
        // archivos de entrada; se reubican al directorio de trabajo para que
        // la búsqueda las encuentre con el resto de los artefactos.
        let receptor_asa = self.relocate_asa(&self.receptor)?;
        let ligand_asa = self.relocate_asa(&self.ligand)?;

        Ok(PotentialMapsArtifact {
            receptor_vdw: self.workdir.join(map_file_name(self.receptor.stem(), MapKind::Vdw)),
            receptor_electrostatic:
                self.workdir.join(map_file_name(self.receptor.stem(), MapKind::Electrostatic)),
            receptor_desolvation:
                self.workdir.join(map_file_name(self.receptor.stem(), MapKind::Desolvation)),
            ligand_desolvation: self.workdir.join(map_file_name(self.ligand.stem(), MapKind::Desolvation)),
            receptor_asa,
            ligand_asa,
        })
    }

    fn relocate_asa(&self, structure: &StructureFile) -> Result<PathBuf, PipelineError> {
        let name = asa_file_name(structure.stem());
        let produced = structure.parent().join(&name);
        let destination = self.workdir.join(&name);
        if produced != destination {
            fs::rename(&produced, &destination).map_err(|e| PipelineError::Execution {
                stage: STAGE_ID.to_string(),
                detail: format!("relocating {}: {e}", produced.display()),
            })?;
        }
        Ok(destination)
    }
}
