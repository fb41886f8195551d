//! Errores del pipeline.
//!
//! Tres clases, según el momento en que se detectan:
//! - `Configuration`: la raíz de instalación o el binario no existen; se
//!   detecta al resolver, antes de lanzar ningún proceso.
//! - `Input`: un archivo referenciado falta o no es legible; se detecta al
//!   armar el trabajo o antes de invocar la herramienta que lo consume.
//! - `Execution`: el proceso externo terminó mal; lleva el nombre de la
//!   etapa y el detalle (línea de comando, stderr capturado).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("input: {0}")]
    Input(String),
    #[error("stage '{stage}' execution failed: {detail}")]
    Execution { stage: String, detail: String },
}
