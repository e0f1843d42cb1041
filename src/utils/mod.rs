//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, extractores
//! de requests y generación de identificadores.

pub mod errors;
pub mod extract;
pub mod ids;
pub mod numbers;
