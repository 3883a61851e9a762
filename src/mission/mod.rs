//! # Mission Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `runner`: Orchestratore principale
//! - `task`: Worker per singoli file
//! - `path_resolver`: Logica di calcolo path centralizzata
//! - `report`: Riepilogo finale da incollare nel post

pub mod path_resolver;
pub mod report;
pub mod runner;
pub mod task;

pub use path_resolver::PathResolver;
pub use report::MissionReport;
pub use runner::MissionRunner;
pub use task::TaskProcessor;
