//! main-dock: punto de entrada de los protocolos de docking.
//!
//! Un subcomando por protocolo (frodock / zdock / zrank). El binario arma el
//! trabajo validando las entradas, resuelve las instalaciones de
//! herramientas desde el entorno y corre el protocolo; imprime la ruta del
//! archivo de poses agrupadas en stdout para que el host la consuma.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use dock_adapters::{FrodockProtocol, SystemRunner, ToolInstallations, ZdockProtocol, ZrankProtocol};
use dock_domain::{DockingJob, InteractionType, StructureFile};

#[derive(Parser, Debug)]
#[command(name = "main-dock",
          about = "Protein-protein docking pipelines wrapping FRODOCK / ZDOCK / ZRANK",
          version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Docking proteína-proteína con FRODOCK (mapas, búsqueda y clustering)
    Frodock {
        /// Archivo pdb del receptor
        #[arg(long)]
        receptor: PathBuf,

        /// Archivo pdb del ligando
        #[arg(long)]
        ligand: PathBuf,

        /// Tipo de interacción (enzyme-substrate | antigen-antibody | unknown)
        #[arg(long, default_value = "unknown")]
        interaction_type: InteractionType,

        /// Directorio de trabajo donde quedan todos los artefactos
        #[arg(long)]
        workdir: PathBuf,
    },

    /// Docking proteína-proteína con ZDOCK (aún sin etapas)
    Zdock {
        #[arg(long)]
        receptor: PathBuf,
        #[arg(long)]
        ligand: PathBuf,
        #[arg(long)]
        workdir: PathBuf,
    },

    /// Re-scoring de poses con ZRANK (aún sin etapas)
    Zrank {
        #[arg(long)]
        receptor: PathBuf,
        #[arg(long)]
        ligand: PathBuf,
        #[arg(long)]
        workdir: PathBuf,
    },
}

fn build_job(receptor: &PathBuf,
             ligand: &PathBuf,
             interaction: InteractionType,
             workdir: &PathBuf)
             -> Result<DockingJob, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(workdir)?;
    let receptor = StructureFile::new(receptor)?;
    let ligand = StructureFile::new(ligand)?;
    Ok(DockingJob::new(receptor, ligand, interaction, workdir)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let installations = ToolInstallations::from_env();
    let runner = Arc::new(SystemRunner);

    match cli.command {
        Commands::Frodock { receptor, ligand, interaction_type, workdir } => {
            let job = build_job(&receptor, &ligand, interaction_type, &workdir)?;
            let outcome = FrodockProtocol::new(job).run(&installations, runner)?;
            println!("{}", outcome.clustered_poses.display());
        }
        Commands::Zdock { receptor, ligand, workdir } => {
            let job = build_job(&receptor, &ligand, InteractionType::default(), &workdir)?;
            ZdockProtocol::new(job).run()?;
        }
        Commands::Zrank { receptor, ligand, workdir } => {
            let job = build_job(&receptor, &ligand, InteractionType::default(), &workdir)?;
            ZrankProtocol::new(job).run()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("docking run failed: {e}");
            ExitCode::FAILURE
        }
    }
}
