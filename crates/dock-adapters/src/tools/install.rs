//! Localización de binarios y armado del entorno de proceso.
//!
//! Cada nombre lógico de herramienta se resuelve contra la raíz configurada
//! de su familia. La resolución falla temprano con un error de configuración
//! claro cuando la raíz o el binario no existen, en vez de diferir el
//! problema al primer intento de ejecución.

use std::path::{Path, PathBuf};

use super::{ToolConfig, ToolError};

/// Nombre lógico de cada herramienta invocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Frodockgrid,
    Frodock,
    Frodockcluster,
    Zdock,
    Zrank,
    /// Tabla de scoring SOAP que consume la búsqueda (se resuelve como un
    /// binario más, igual que en la instalación de frodock).
    Soap,
}

impl Tool {
    /// Nombre del archivo dentro de la instalación.
    pub fn program_name(self) -> &'static str {
        match self {
            Tool::Frodockgrid => "frodockgrid",
            Tool::Frodock => "frodock",
            Tool::Frodockcluster => "frodockcluster",
            Tool::Zdock => "zdock",
            Tool::Zrank => "zrank",
            Tool::Soap => "soap",
        }
    }
}

/// Herramienta ya resuelta: ruta del programa más su raíz de instalación
/// (necesaria para armar PATH / LD_LIBRARY_PATH).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub program: PathBuf,
    pub home: PathBuf,
}

impl ResolvedTool {
    /// Variables de entorno para el proceso hijo: la instalación activa y su
    /// `lib/` van al frente del path de ejecución y de búsqueda de
    /// bibliotecas.
    pub fn environment(&self) -> Vec<(String, String)> {
        let home = self.home.display().to_string();
        let lib = self.home.join("lib").display().to_string();
        vec![prepended("PATH", &home), prepended("LD_LIBRARY_PATH", &format!("{lib}:{home}"))]
    }
}

fn prepended(var: &str, prefix: &str) -> (String, String) {
    let value = match std::env::var(var) {
        Ok(current) if !current.is_empty() => format!("{prefix}:{current}"),
        _ => prefix.to_string(),
    };
    (var.to_string(), value)
}

/// Resuelve nombres lógicos de herramientas a rutas de binarios instalados.
#[derive(Debug, Clone)]
pub struct ToolInstallations {
    config: ToolConfig,
}

impl ToolInstallations {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ToolConfig::from_env())
    }

    fn home_for(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Frodockgrid | Tool::Frodock | Tool::Frodockcluster | Tool::Soap => {
                &self.config.frodock_home
            }
            Tool::Zdock => &self.config.zdock_home,
            Tool::Zrank => &self.config.zrank_home,
        }
    }

    /// Devuelve la ruta configurada del binario. frodockgrid vive bajo
    /// `bin/` dentro de su distribución; el resto de las herramientas están
    /// en la raíz de la suya.
    pub fn locate(&self, tool: Tool) -> Result<ResolvedTool, ToolError> {
        let home = self.home_for(tool);
        if !home.is_dir() {
            return Err(ToolError::Configuration { tool: tool.program_name(),
                                                  reason: format!("installation root {} does not exist",
                                                                  home.display()) });
        }
        let program = match tool {
            Tool::Frodockgrid => home.join("bin").join(tool.program_name()),
            _ => home.join(tool.program_name()),
        };
        if !program.is_file() {
            return Err(ToolError::Configuration { tool: tool.program_name(),
                                                  reason: format!("binary {} not found", program.display()) });
        }
        Ok(ResolvedTool { program, home: home.to_path_buf() })
    }
}
