//! # Web Gallery Forge Library
//!
//! Converte una cartella di foto e clip in asset ottimizzati per il web e
//! genera il markup HTML della galleria più il path della copertina per il post.
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom
//! - `file_manager`: Discovery dei file sorgente e classificazione per estensione
//! - `image_processor`: Resize e ricompressione JPEG delle foto
//! - `video_processor`: Compressione video con ffmpeg
//! - `engine`: Invocazione e verifica del binario ffmpeg
//! - `markup`: Frammenti HTML
//! - `gallery`: Accumulo markup e contatori
//! - `cover`: Scelta della copertina
//! - `mission`: Orchestratore del processo e report finale
//! - `progress`: Spinner durante la compressione video
//!
//! ## Utilizzo:
//! ```ignore
//! use web_gallery_forge::{Config, MissionRunner};
//!
//! let config = Config {
//!     source_dir: "photos".into(),
//!     output_dir: "assets/img/trip".into(),
//!     ..Default::default()
//! };
//! let report = MissionRunner::new(config)?.run().await?;
//! println!("{}", report);
//! ```

pub mod config;
pub mod cover;
pub mod engine;
pub mod error;
pub mod file_manager;
pub mod gallery;
pub mod image_processor;
pub mod markup;
pub mod mission;
pub mod progress;
pub mod video_processor;

pub use config::Config;
pub use error::MediaError;
pub use mission::{MissionReport, MissionRunner};
