//! Etapas concretas del pipeline FRODOCK.
//!
//! El pipeline es una línea recta de cuatro etapas:
//! generación de mapas → búsqueda de docking → clustering → salida.
//! Cada etapa devuelve como artefacto tipado las rutas de lo que escribió;
//! la siguiente las consume como referencias explícitas. El protocolo las
//! encadena con `dock_core::Pipeline`.

pub mod clustering;
pub mod create_output;
pub mod docking_search;
pub mod map_generation;

pub use clustering::ClusteringStage;
pub use create_output::CreateOutputStage;
pub use docking_search::DockingSearchStage;
pub use map_generation::MapGenerationStage;
