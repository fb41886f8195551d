//! Tests de integración del binario main-dock.
//!
//! Ejecutan el binario real vía CARGO_BIN_EXE para cubrir la superficie de
//! línea de comandos: ayuda, validación temprana de entradas y el protocolo
//! sin etapas (zrank), que no necesita herramientas instaladas.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn main_dock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_main-dock"))
}

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn create_structure(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, "ATOM      1  N   MET A   1\n").expect("write structure");
    path
}

#[test]
fn help_lists_the_three_protocols() {
    let output = main_dock().arg("--help").output().expect("run main-dock");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("frodock"));
    assert!(text.contains("zdock"));
    assert!(text.contains("zrank"));
}

#[test]
fn missing_receptor_fails_before_running_anything() {
    let temp = create_temp_dir();
    let ligand = create_structure(&temp, "ligand.pdb");

    let output = main_dock().args(["frodock",
                                   "--receptor",
                                   temp.path().join("absent.pdb").to_str().unwrap(),
                                   "--ligand",
                                   ligand.to_str().unwrap(),
                                   "--workdir",
                                   temp.path().join("run").to_str().unwrap()])
                            .output()
                            .expect("run main-dock");
    assert!(!output.status.success());
}

#[test]
fn invalid_interaction_type_is_rejected_by_the_parser() {
    let temp = create_temp_dir();
    let receptor = create_structure(&temp, "receptor.pdb");
    let ligand = create_structure(&temp, "ligand.pdb");

    let output = main_dock().args(["frodock",
                                   "--receptor",
                                   receptor.to_str().unwrap(),
                                   "--ligand",
                                   ligand.to_str().unwrap(),
                                   "--interaction-type",
                                   "covalent",
                                   "--workdir",
                                   temp.path().join("run").to_str().unwrap()])
                            .output()
                            .expect("run main-dock");
    assert!(!output.status.success());
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("interaction"), "clap should name the offending option: {text}");
}

#[test]
fn zrank_protocol_completes_without_tools() {
    let temp = create_temp_dir();
    let receptor = create_structure(&temp, "receptor.pdb");
    let ligand = create_structure(&temp, "ligand.pdb");

    let output = main_dock().args(["zrank",
                                   "--receptor",
                                   receptor.to_str().unwrap(),
                                   "--ligand",
                                   ligand.to_str().unwrap(),
                                   "--workdir",
                                   temp.path().join("run").to_str().unwrap()])
                            .output()
                            .expect("run main-dock");
    assert!(output.status.success());
}
