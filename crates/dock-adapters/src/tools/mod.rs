//! Herramientas externas: configuración, localización, comandos y ejecución.

pub mod command;
pub mod config;
pub mod error;
pub mod install;
pub mod runner;

pub use command::{cluster_command, grid_command, search_command, ExternalCommand,
                  CLUSTER_DISTANCE_CUTOFF, MAX_CLUSTER_COUNT, SEARCH_THRESHOLD};
pub use config::ToolConfig;
pub use error::ToolError;
pub use install::{ResolvedTool, Tool, ToolInstallations};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
