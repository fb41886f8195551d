//! dock-core: Orquestador secuencial de etapas.
//!
//! Corre pipelines en línea recta (sin ramas, sin ciclos, sin reintentos):
//! una lista ordenada de etapas nombradas que se ejecutan una vez cada una,
//! en el orden declarado, de forma síncrona. Cada etapa devuelve su resultado
//! tipado, que pasa explícitamente como entrada a la siguiente; el primer
//! fallo corta la cadena y se propaga tal cual.

pub mod errors;
pub mod pipeline;

pub use errors::PipelineError;
pub use pipeline::Pipeline;
