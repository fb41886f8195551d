//! Protocolos expuestos al host: cada uno declara sus entradas y la
//! secuencia fija de etapas que inserta en el motor.

pub mod frodock;
pub mod zdock;
pub mod zrank;

pub use frodock::{FrodockOutcome, FrodockProtocol};
pub use zdock::ZdockProtocol;
pub use zrank::ZrankProtocol;
