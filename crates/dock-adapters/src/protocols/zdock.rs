//! Protocolo de docking proteína-proteína con la herramienta ZDOCK.
//!
//! Declara el mismo formulario de entradas que el protocolo de FRODOCK pero
//! todavía no inserta ninguna etapa: correrlo valida las entradas y termina
//! sin efectos. Se conserva así en lugar de omitirlo para que la superficie
//! del plugin quede completa.

use tracing::warn;

use dock_core::PipelineError;
use dock_domain::DockingJob;

pub struct ZdockProtocol {
    job: DockingJob,
}

impl ZdockProtocol {
    pub fn new(job: DockingJob) -> Self {
        Self { job }
    }

    pub fn job(&self) -> &DockingJob {
        &self.job
    }

    pub fn run(&self) -> Result<(), PipelineError> {
        warn!(receptor = %self.job.receptor(),
              ligand = %self.job.ligand(),
              "the zdock protocol declares no stages yet; inputs were validated and nothing was executed");
        Ok(())
    }
}
