//! Protocolo de re-scoring de poses con la herramienta ZRANK.
//!
//! Igual que el protocolo de ZDOCK: el formulario existe, las etapas no.

use tracing::warn;

use dock_core::PipelineError;
use dock_domain::DockingJob;

pub struct ZrankProtocol {
    job: DockingJob,
}

impl ZrankProtocol {
    pub fn new(job: DockingJob) -> Self {
        Self { job }
    }

    pub fn job(&self) -> &DockingJob {
        &self.job
    }

    pub fn run(&self) -> Result<(), PipelineError> {
        warn!(receptor = %self.job.receptor(),
              ligand = %self.job.ligand(),
              "the zrank protocol declares no stages yet; inputs were validated and nothing was executed");
        Ok(())
    }
}
