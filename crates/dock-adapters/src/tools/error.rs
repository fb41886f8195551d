use std::path::PathBuf;
use thiserror::Error;

use dock_core::PipelineError;

use super::ExternalCommand;

/// Taxonomía de errores al tratar con las herramientas externas.
///
/// - `Configuration`: la raíz de instalación o el binario no existen. Se
///   detecta al resolver, antes de lanzar ningún proceso.
/// - `Input`: un archivo referenciado no existe o no es legible.
/// - `Execution`: el proceso externo terminó con estado distinto de cero (o
///   no pudo lanzarse); incluye el stderr capturado.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("tool '{tool}' is not installed: {reason}")]
    Configuration { tool: &'static str, reason: String },

    #[error("input file missing or unreadable: {}", path.display())]
    Input { path: PathBuf },

    #[error("'{program}' exited with status {status:?}: {stderr}")]
    Execution {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl ToolError {
    /// Convierte al error del pipeline, anotando la etapa que estaba
    /// corriendo y, si se conoce, la línea de comando completa para
    /// diagnóstico.
    pub fn into_stage_error(self, stage: &str, command: Option<&ExternalCommand>) -> PipelineError {
        match &self {
            ToolError::Configuration { .. } => PipelineError::Configuration(self.to_string()),
            ToolError::Input { .. } => PipelineError::Input(self.to_string()),
            ToolError::Execution { .. } => {
                let detail = match command {
                    Some(cmd) => format!("{self} [command: {}]", cmd.rendered()),
                    None => self.to_string(),
                };
                PipelineError::Execution { stage: stage.to_string(), detail }
            }
        }
    }
}
