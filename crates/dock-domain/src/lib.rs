//! dock-domain: Modelo de dominio del acoplamiento proteína-proteína.
//!
//! Este crate define los tipos de entrada de un trabajo de docking
//! (estructuras, tipo de interacción, directorio de trabajo) y las
//! convenciones de nombres de los artefactos derivados que producen los
//! binarios externos. No contiene lógica de docking: todo el cálculo vive en
//! los ejecutables de FRODOCK/ZDOCK/ZRANK.

pub mod errors;
pub mod interaction;
pub mod job;
pub mod naming;
pub mod structure;

pub use errors::DomainError;
pub use interaction::InteractionType;
pub use job::DockingJob;
pub use naming::{asa_file_name, map_file_name, MapKind, CLUST_FILE_NAME, DOCK_FILE_NAME};
pub use structure::StructureFile;
