//! Ejecución síncrona de comandos externos.
//!
//! El trait `ProcessRunner` es la costura para stubs en tests: las etapas
//! reciben el runner por referencia compartida y nunca construyen procesos
//! directamente. `SystemRunner` es la implementación real sobre
//! `std::process::Command`: bloquea hasta la terminación, captura stdout y
//! stderr, y convierte un estado de salida distinto de cero en
//! `ToolError::Execution` (el estado nunca se descarta).

use std::fmt;
use std::process::Command;

use tracing::{debug, info};

use super::{ExternalCommand, ToolError};

/// Salida cruda de un proceso que terminó con estado cero.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

pub trait ProcessRunner: fmt::Debug + Send + Sync {
    fn run(&self, command: &ExternalCommand) -> Result<ProcessOutput, ToolError>;
}

/// Runner real: proceso hijo síncrono con el entorno de la herramienta.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> Result<ProcessOutput, ToolError> {
        info!(command = %command.rendered(), "running external command");

        let program = command.program.display().to_string();
        let output = Command::new(&command.program)
            .args(&command.args)
            .envs(command.env.iter().cloned())
            .output()
            .map_err(|e| ToolError::Execution { program: program.clone(),
                                                status: None,
                                                stderr: format!("failed to spawn: {e}") })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !stdout.is_empty() {
            debug!(%program, "external command stdout:\n{stdout}");
        }

        match output.status.code() {
            Some(0) => Ok(ProcessOutput { status: 0, stdout, stderr }),
            Some(code) => Err(ToolError::Execution { program,
                                                     status: Some(code),
                                                     stderr }),
            None => Err(ToolError::Execution { program,
                                               status: None,
                                               stderr: format!("terminated by signal; stderr: {stderr}") }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_yields_captured_output() {
        let cmd = ExternalCommand::new("/bin/sh", vec!["-c".to_string(), "echo hola".to_string()]);
        let out = SystemRunner.run(&cmd).expect("sh should succeed");
        assert_eq!(out.status, 0);
        assert_eq!(out.stdout.trim(), "hola");
    }

    #[test]
    fn non_zero_exit_becomes_an_execution_error() {
        let cmd = ExternalCommand::new("/bin/sh",
                                       vec!["-c".to_string(), "echo fallo >&2; exit 3".to_string()]);
        let err = SystemRunner.run(&cmd).unwrap_err();
        match err {
            ToolError::Execution { status, stderr, .. } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr.trim(), "fallo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unspawnable_program_is_an_execution_error() {
        let cmd = ExternalCommand::new("/no/such/binary", vec![]);
        let err = SystemRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ToolError::Execution { status: None, .. }));
    }
}
