//! Artefactos tipados que fluyen entre las etapas del pipeline.
//!
//! Cada etapa devuelve las rutas de lo que escribió como referencias
//! explícitas para la siguiente, en lugar de que cada etapa re-derive los
//! nombres por convención. Los nombres en disco siguen siendo los que los
//! binarios externos esperan; el artefacto sólo los transporta.

use std::path::PathBuf;

/// Salida de la generación de mapas: los cuatro mapas de potencial más las
/// estructuras anotadas con ASA ya reubicadas en el directorio de trabajo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMapsArtifact {
    pub receptor_vdw: PathBuf,
    pub receptor_electrostatic: PathBuf,
    pub receptor_desolvation: PathBuf,
    pub ligand_desolvation: PathBuf,
    pub receptor_asa: PathBuf,
    pub ligand_asa: PathBuf,
}

/// Archivo de poses puntuadas que produce la búsqueda (dock.dat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPosesArtifact {
    pub dock_file: PathBuf,
}

/// Archivo de poses agrupadas que produce el clustering (clust_dock.dat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteredPosesArtifact {
    pub clust_file: PathBuf,
}
