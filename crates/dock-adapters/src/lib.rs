//! dock-adapters: Capa de adaptación Dominio ↔ Core para el pipeline de
//! docking.
//!
//! Este crate provee:
//! - Artefactos tipados que encadenan las etapas (rutas de mapas, poses).
//! - La localización de instalaciones de herramientas externas y el armado
//!   del entorno de proceso (binary locator).
//! - Constructores puros de comandos externos para frodockgrid / frodock /
//!   frodockcluster.
//! - El runner síncrono de procesos y su seam `ProcessRunner` para stubs.
//! - Las cuatro etapas del pipeline FRODOCK y los protocolos expuestos al
//!   host (frodock, zdock, zrank).
//!
//! Los archivos en sí quedan en el directorio de trabajo, que es el único
//! estado compartido entre etapas; los artefactos sólo transportan las
//! rutas.

pub mod artifacts;
pub mod protocols;
pub mod stages;
pub mod tools;

pub use artifacts::{ClusteredPosesArtifact, PotentialMapsArtifact, ScoredPosesArtifact};
pub use protocols::{FrodockOutcome, FrodockProtocol, ZdockProtocol, ZrankProtocol};
pub use tools::{ExternalCommand, ProcessOutput, ProcessRunner, ResolvedTool, SystemRunner, Tool,
                ToolConfig, ToolError, ToolInstallations};
