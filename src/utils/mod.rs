//! Utilitários puros usados pelo pipeline de requisições

pub mod case;
pub mod merge;

pub use case::{snake_case_keys, to_snake_case};
pub use merge::merge;
