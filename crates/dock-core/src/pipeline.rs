//! Cadena secuencial de etapas nombradas.
//!
//! `Pipeline` acumula etapas en el orden declarado y las ejecuta una vez
//! cada una al llamar `run`. La primera etapa no recibe argumentos; cada
//! etapa siguiente recibe el resultado tipado de la anterior (referencias
//! explícitas, no convención de archivos). No hay reintentos ni saltos: el
//! primer `Err` corta la cadena y las etapas posteriores nunca se invocan.

use tracing::info;

use crate::errors::PipelineError;

pub struct Pipeline<'a, Out> {
    names: Vec<&'static str>,
    chain: Box<dyn FnOnce() -> Result<Out, PipelineError> + 'a>,
}

impl<'a, Out: 'a> Pipeline<'a, Out> {
    /// Declara la primera etapa (sin argumentos).
    pub fn start<F>(name: &'static str, stage: F) -> Self
        where F: FnOnce() -> Result<Out, PipelineError> + 'a
    {
        Pipeline { names: vec![name],
                   chain: Box::new(move || {
                              info!("running stage '{name}'");
                              stage()
                          }) }
    }

    /// Encadena la siguiente etapa, que consume el resultado de la anterior.
    pub fn then<Next: 'a, F>(self, name: &'static str, stage: F) -> Pipeline<'a, Next>
        where F: FnOnce(Out) -> Result<Next, PipelineError> + 'a
    {
        let prev = self.chain;
        let mut names = self.names;
        names.push(name);
        Pipeline { names,
                   chain: Box::new(move || {
                              let input = prev()?;
                              info!("running stage '{name}'");
                              stage(input)
                          }) }
    }

    /// Nombres de las etapas, en el orden en que correrán.
    pub fn stage_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Ejecuta la cadena completa y devuelve el resultado de la última
    /// etapa.
    pub fn run(self) -> Result<Out, PipelineError> {
        (self.chain)()
    }
}
