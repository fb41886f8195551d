//! Convenciones de nombres de artefactos derivados.
//!
//! Cada nombre es función pura de (base del archivo de entrada, clase de
//! artefacto). Los binarios externos no imponen estos nombres: lo único que
//! importa es que el constructor de comandos los derive siempre igual, de modo
//! que la etapa N+1 encuentre lo que la etapa N escribió.

use serde::{Deserialize, Serialize};

/// Archivo de poses puntuadas que produce la búsqueda de docking.
pub const DOCK_FILE_NAME: &str = "dock.dat";

/// Archivo de poses agrupadas que produce el clustering.
pub const CLUST_FILE_NAME: &str = "clust_dock.dat";

/// Clase de mapa de potencial que genera frodockgrid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapKind {
    Vdw,
    Electrostatic,
    Desolvation,
}

impl MapKind {
    /// Sufijo del archivo `.ccp4` generado.
    pub fn suffix(self) -> &'static str {
        match self {
            MapKind::Vdw => "_W.ccp4",
            MapKind::Electrostatic => "_E.ccp4",
            MapKind::Desolvation => "_DS.ccp4",
        }
    }

    /// Valor del flag `-m` de frodockgrid. El mapa de vdw es el modo por
    /// defecto del binario y no lleva flag.
    pub fn mode(self) -> Option<u8> {
        match self {
            MapKind::Vdw => None,
            MapKind::Electrostatic => Some(1),
            MapKind::Desolvation => Some(3),
        }
    }
}

/// Nombre del mapa de potencial derivado de una estructura.
pub fn map_file_name(stem: &str, kind: MapKind) -> String {
    format!("{stem}{}", kind.suffix())
}

/// Nombre de la estructura anotada con área accesible al solvente que
/// frodockgrid deja junto al archivo de entrada.
pub fn asa_file_name(stem: &str) -> String {
    format!("{stem}_ASA.pdb")
}
