use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::DomainError;

/// Referencia validada a un archivo de estructura de entrada (receptor o
/// ligando). El `stem` es la semilla de todos los nombres derivados: los
/// binarios de FRODOCK generan sus salidas como `<stem><sufijo>`, cortando el
/// nombre en el PRIMER punto (no el último), y aquí se reproduce esa misma
/// convención para que las rutas construidas coincidan con los archivos que
/// las herramientas realmente escriben.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureFile {
    path: PathBuf,
    stem: String,
}

impl StructureFile {
    /// Crea la referencia validando que el archivo exista y sea regular.
    /// Falla temprano (al construir el trabajo) en lugar de dejar que un
    /// proceso externo descubra la ruta rota a mitad del pipeline.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .map_err(|e| DomainError::Input(format!("estructura no legible {}: {e}", path.display())))?;
        if !path.is_file() {
            return Err(DomainError::Input(format!("no es un archivo regular: {}", path.display())));
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::Input(format!("nombre de archivo inválido: {}", path.display())))?;
        let stem = name.split('.').next().unwrap_or(name).to_string();
        if stem.is_empty() {
            return Err(DomainError::Validation(format!("nombre sin base utilizable: {name}")));
        }
        Ok(Self { path, stem })
    }

    /// Ruta absoluta del archivo.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base del nombre (porción anterior al primer punto).
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Directorio que contiene el archivo. Siempre existe porque la ruta es
    /// absoluta y canónica.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("/"))
    }
}

impl fmt::Display for StructureFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn stem_cuts_at_first_dot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("receptor.v2.pdb");
        fs::write(&path, "ATOM").expect("write");

        let s = StructureFile::new(&path).expect("structure");
        assert_eq!(s.stem(), "receptor");
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = StructureFile::new("/no/such/receptor.pdb").unwrap_err();
        assert!(matches!(err, DomainError::Input(_)));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = StructureFile::new(dir.path()).unwrap_err();
        assert!(matches!(err, DomainError::Input(_)));
    }
}
