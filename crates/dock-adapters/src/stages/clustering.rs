//! Clustering de poses (etapa 3).
//!
//! Agrupa las poses puntuadas y retiene representantes, acotado por la
//! cantidad máxima de clusters y el corte de distancia fijos del protocolo.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use dock_core::PipelineError;
use dock_domain::{DockingJob, StructureFile, CLUST_FILE_NAME};

use crate::artifacts::{ClusteredPosesArtifact, ScoredPosesArtifact};
use crate::tools::{cluster_command, ProcessRunner, Tool, ToolError, ToolInstallations};

const STAGE_ID: &str = "clustering";

#[derive(Debug)]
pub struct ClusteringStage {
    ligand: StructureFile,
    workdir: PathBuf,
    installations: ToolInstallations,
    runner: Arc<dyn ProcessRunner>,
}

impl ClusteringStage {
    pub fn new(job: &DockingJob, installations: ToolInstallations, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { ligand: job.ligand().clone(),
               workdir: job.workdir().to_path_buf(),
               installations,
               runner }
    }

    pub fn run(&self, poses: &ScoredPosesArtifact) -> Result<ClusteredPosesArtifact, PipelineError> {
        info!("executing clustering step");

        if !poses.dock_file.is_file() {
            return Err(ToolError::Input { path: poses.dock_file.clone() }
                .into_stage_error(STAGE_ID, None));
        }

        let tool = self.installations
                       .locate(Tool::Frodockcluster)
                       .map_err(|e| e.into_stage_error(STAGE_ID, None))?;

        let output = self.workdir.join(CLUST_FILE_NAME);
        let cmd = cluster_command(&tool, &poses.dock_file, &self.ligand, &output);
        self.runner
            .run(&cmd)
            .map_err(|e| e.into_stage_error(STAGE_ID, Some(&cmd)))?;

        Ok(ClusteredPosesArtifact { clust_file: output })
    }
}
