//! Constructores puros de comandos externos.
//!
//! Función pura de (clase de etapa, parámetros estructurados) a
//! `ExternalCommand`. Las derivaciones de nombres de salida reproducen
//! exactamente la convención que consumen los binarios de FRODOCK; cada
//! comando se construye fresco por invocación y nunca se cachea.

use std::path::{Path, PathBuf};

use dock_domain::{map_file_name, InteractionType, MapKind, StructureFile};

use super::ResolvedTool;
use crate::artifacts::PotentialMapsArtifact;

/// Umbral fijo `--th` de la búsqueda de docking.
pub const SEARCH_THRESHOLD: &str = "10";

/// Cantidad máxima de clusters `--nc` del clustering.
pub const MAX_CLUSTER_COUNT: &str = "100";

/// Corte de distancia `-d` del clustering.
pub const CLUSTER_DISTANCE_CUTOFF: &str = "5.0";

/// Invocación de proceso externo: programa + lista ordenada de argumentos +
/// overrides de entorno. Inmutable una vez construida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self { program: program.into(),
               args,
               env: Vec::new() }
    }

    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = env;
        self
    }

    /// Línea de comando legible para logs y contexto de errores.
    pub fn rendered(&self) -> String {
        let mut line = self.program.display().to_string();
        for a in &self.args {
            line.push(' ');
            line.push_str(a);
        }
        line
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Comando frodockgrid para un mapa de potencial:
/// `<input> -o <workdir>/<stem><sufijo>[ -m <modo>][ -t <código>]`.
/// El flag `-t` sólo aplica al mapa electrostático y se omite cuando el tipo
/// de interacción es Unknown.
pub fn grid_command(grid: &ResolvedTool,
                    structure: &StructureFile,
                    workdir: &Path,
                    kind: MapKind,
                    interaction: InteractionType)
                    -> ExternalCommand {
    let output = workdir.join(map_file_name(structure.stem(), kind));
    let mut args = vec![path_str(structure.path()), "-o".to_string(), path_str(&output)];
    if let Some(mode) = kind.mode() {
        args.push("-m".to_string());
        args.push(mode.to_string());
    }
    if matches!(kind, MapKind::Electrostatic) {
        if let Some(code) = interaction.code() {
            args.push("-t".to_string());
            args.push(code.to_string());
        }
    }
    ExternalCommand::new(grid.program.clone(), args).with_env(grid.environment())
}

/// Comando frodock de búsqueda:
/// `<recASA> <ligASA> -w <vdw> -e <ele> --th 10 -d <recDS>,<ligDS> -s <soap>
/// -o <salida>`.
pub fn search_command(frodock: &ResolvedTool,
                      maps: &PotentialMapsArtifact,
                      soap: &Path,
                      output: &Path)
                      -> ExternalCommand {
    let args = vec![path_str(&maps.receptor_asa),
                    path_str(&maps.ligand_asa),
                    "-w".to_string(),
                    path_str(&maps.receptor_vdw),
                    "-e".to_string(),
                    path_str(&maps.receptor_electrostatic),
                    "--th".to_string(),
                    SEARCH_THRESHOLD.to_string(),
                    "-d".to_string(),
                    format!("{},{}",
                            maps.receptor_desolvation.display(),
                            maps.ligand_desolvation.display()),
                    "-s".to_string(),
                    path_str(soap),
                    "-o".to_string(),
                    path_str(output)];
    ExternalCommand::new(frodock.program.clone(), args).with_env(frodock.environment())
}

/// Comando frodockcluster:
/// `<dock.dat> <ligando> --nc 100 -d 5.0 -o <salida>`.
pub fn cluster_command(cluster: &ResolvedTool,
                       dock_file: &Path,
                       ligand: &StructureFile,
                       output: &Path)
                       -> ExternalCommand {
    let args = vec![path_str(dock_file),
                    path_str(ligand.path()),
                    "--nc".to_string(),
                    MAX_CLUSTER_COUNT.to_string(),
                    "-d".to_string(),
                    CLUSTER_DISTANCE_CUTOFF.to_string(),
                    "-o".to_string(),
                    path_str(output)];
    ExternalCommand::new(cluster.program.clone(), args).with_env(cluster.environment())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn structure(dir: &Path, name: &str) -> StructureFile {
        let path = dir.join(name);
        fs::write(&path, "ATOM").expect("write");
        StructureFile::new(path).expect("structure")
    }

    fn grid_tool() -> ResolvedTool {
        ResolvedTool { program: PathBuf::from("/opt/frodock3-3.12/bin/frodockgrid"),
                       home: PathBuf::from("/opt/frodock3-3.12") }
    }

    #[test]
    fn vdw_map_has_no_extra_flags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rec = structure(dir.path(), "recA.pdb");
        let work = dir.path().join("work");

        let cmd = grid_command(&grid_tool(), &rec, &work, MapKind::Vdw, InteractionType::Unknown);
        assert_eq!(cmd.args,
                   vec![rec.path().display().to_string(),
                        "-o".to_string(),
                        work.join("recA_W.ccp4").display().to_string()]);
    }

    #[test]
    fn electrostatic_map_carries_mode_and_interaction_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rec = structure(dir.path(), "recA.pdb");
        let work = dir.path().join("work");

        for (interaction, code) in [(InteractionType::EnzymeSubstrate, "E"),
                                    (InteractionType::AntigenAntibody, "A")] {
            let cmd = grid_command(&grid_tool(), &rec, &work, MapKind::Electrostatic, interaction);
            assert_eq!(cmd.args,
                       vec![rec.path().display().to_string(),
                            "-o".to_string(),
                            work.join("recA_E.ccp4").display().to_string(),
                            "-m".to_string(),
                            "1".to_string(),
                            "-t".to_string(),
                            code.to_string()]);
        }
    }

    #[test]
    fn unknown_interaction_omits_the_type_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rec = structure(dir.path(), "recA.pdb");
        let work = dir.path().join("work");

        let cmd = grid_command(&grid_tool(), &rec, &work, MapKind::Electrostatic, InteractionType::Unknown);
        assert_eq!(cmd.args,
                   vec![rec.path().display().to_string(),
                        "-o".to_string(),
                        work.join("recA_E.ccp4").display().to_string(),
                        "-m".to_string(),
                        "1".to_string()]);
        assert!(!cmd.args.iter().any(|a| a == "-t"));
    }

    #[test]
    fn desolvation_map_uses_mode_three() {
        let dir = tempfile::tempdir().expect("tempdir");
        let lig = structure(dir.path(), "ligand.pdb");
        let work = dir.path().join("work");

        let cmd = grid_command(&grid_tool(), &lig, &work, MapKind::Desolvation, InteractionType::AntigenAntibody);
        assert_eq!(cmd.args,
                   vec![lig.path().display().to_string(),
                        "-o".to_string(),
                        work.join("ligand_DS.ccp4").display().to_string(),
                        "-m".to_string(),
                        "3".to_string()]);
    }

    #[test]
    fn search_command_matches_the_expected_shape() {
        let frodock = ResolvedTool { program: PathBuf::from("/opt/frodock3-3.12/frodock"),
                                     home: PathBuf::from("/opt/frodock3-3.12") };
        let maps = PotentialMapsArtifact { receptor_vdw: PathBuf::from("/w/receptor_W.ccp4"),
                                           receptor_electrostatic: PathBuf::from("/w/receptor_E.ccp4"),
                                           receptor_desolvation: PathBuf::from("/w/receptor_DS.ccp4"),
                                           ligand_desolvation: PathBuf::from("/w/ligand_DS.ccp4"),
                                           receptor_asa: PathBuf::from("/w/receptor_ASA.pdb"),
                                           ligand_asa: PathBuf::from("/w/ligand_ASA.pdb") };

        let cmd = search_command(&frodock,
                                 &maps,
                                 Path::new("/opt/frodock3-3.12/soap"),
                                 Path::new("/w/dock.dat"));
        assert_eq!(cmd.args,
                   vec!["/w/receptor_ASA.pdb",
                        "/w/ligand_ASA.pdb",
                        "-w",
                        "/w/receptor_W.ccp4",
                        "-e",
                        "/w/receptor_E.ccp4",
                        "--th",
                        "10",
                        "-d",
                        "/w/receptor_DS.ccp4,/w/ligand_DS.ccp4",
                        "-s",
                        "/opt/frodock3-3.12/soap",
                        "-o",
                        "/w/dock.dat"]);
    }

    #[test]
    fn cluster_command_uses_fixed_limits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let lig = structure(dir.path(), "ligand.pdb");
        let tool = ResolvedTool { program: PathBuf::from("/opt/frodock3-3.12/frodockcluster"),
                                  home: PathBuf::from("/opt/frodock3-3.12") };

        let cmd = cluster_command(&tool, Path::new("/w/dock.dat"), &lig, Path::new("/w/clust_dock.dat"));
        assert_eq!(cmd.args,
                   vec!["/w/dock.dat".to_string(),
                        lig.path().display().to_string(),
                        "--nc".to_string(),
                        "100".to_string(),
                        "-d".to_string(),
                        "5.0".to_string(),
                        "-o".to_string(),
                        "/w/clust_dock.dat".to_string()]);
    }

    #[test]
    fn commands_are_rebuilt_identically() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rec = structure(dir.path(), "recA.pdb");
        let work = dir.path().join("work");

        let a = grid_command(&grid_tool(), &rec, &work, MapKind::Vdw, InteractionType::Unknown);
        let b = grid_command(&grid_tool(), &rec, &work, MapKind::Vdw, InteractionType::Unknown);
        assert_eq!(a, b);
    }
}
