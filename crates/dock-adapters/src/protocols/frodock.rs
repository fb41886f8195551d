//! Protocolo de docking proteína-proteína con la herramienta FRODOCK.
//!
//! Inserta la secuencia fija de etapas en el orquestador:
//! [map_generation, docking_search, clustering, create_output].
//! Cada etapa consume el artefacto que devuelve la anterior; el resultado
//! del pipeline es directamente el artefacto de poses agrupadas.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use dock_core::{Pipeline, PipelineError};
use dock_domain::DockingJob;

use crate::stages::{ClusteringStage, CreateOutputStage, DockingSearchStage, MapGenerationStage};
use crate::tools::{ProcessRunner, ToolInstallations};

pub struct FrodockProtocol {
    job: DockingJob,
}

/// Resultado de una corrida completa del protocolo.
#[derive(Debug, Clone)]
pub struct FrodockOutcome {
    pub clustered_poses: PathBuf,
}

impl FrodockProtocol {
    pub fn new(job: DockingJob) -> Self {
        Self { job }
    }

    pub fn job(&self) -> &DockingJob {
        &self.job
    }

    /// Corre el pipeline completo hasta terminar o hasta la primera etapa
    /// fallida. No hay reintentos: el error de la etapa se propaga tal cual
    /// (con nombre de etapa y línea de comando en el detalle).
    pub fn run(&self,
               installations: &ToolInstallations,
               runner: Arc<dyn ProcessRunner>)
               -> Result<FrodockOutcome, PipelineError> {
        info!(receptor = %self.job.receptor(),
              ligand = %self.job.ligand(),
              interaction = %self.job.interaction(),
              "starting frodock protocol");

        let maps = MapGenerationStage::new(&self.job, installations.clone(), runner.clone());
        let search = DockingSearchStage::new(&self.job, installations.clone(), runner.clone());
        let cluster = ClusteringStage::new(&self.job, installations.clone(), runner);
        let output = CreateOutputStage::new();

        let clustered = Pipeline::start("map_generation", move || maps.run())
            .then("docking_search", move |maps| search.run(&maps))
            .then("clustering", move |poses| cluster.run(&poses))
            .then("create_output", move |clustered| output.run(clustered))
            .run()?;

        info!(clustered_poses = %clustered.clust_file.display(), "frodock protocol finished");
        Ok(FrodockOutcome { clustered_poses: clustered.clust_file })
    }
}
