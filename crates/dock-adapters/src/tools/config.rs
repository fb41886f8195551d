//! Carga de configuración de instalaciones desde variables de entorno.
//! Usa convención `FRODOCK_HOME` / `ZDOCK_HOME` / `ZRANK_HOME`, con defaults
//! bajo `DOCKING_EM_ROOT` que reproducen los nombres de paquete originales
//! (frodock3-3.12, zdock-3.0.2; zrank se distribuye dentro de zdock-2.0).

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Raíces de instalación de cada familia de herramientas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub frodock_home: PathBuf,
    pub zdock_home: PathBuf,
    pub zrank_home: PathBuf,
}

impl ToolConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let em_root = env::var("DOCKING_EM_ROOT").unwrap_or_else(|_| "software/em".to_string());
        let home = |var: &str, default: &str| {
            env::var(var).map(PathBuf::from)
                         .unwrap_or_else(|_| Path::new(&em_root).join(default))
        };
        Self { frodock_home: home("FRODOCK_HOME", "frodock3-3.12"),
               zdock_home: home("ZDOCK_HOME", "zdock-3.0.2"),
               zrank_home: home("ZRANK_HOME", "zdock-2.0") }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
