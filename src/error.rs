//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore dell'applicazione.
//!
//! ## Categorie di errori:
//! - `MissingDependency`: motore video (ffmpeg) assente, fatale prima di ogni elaborazione
//! - `Decode`: immagine sorgente illeggibile o corrotta
//! - `Encode`: errore di resize, conversione colore o scrittura JPEG
//! - `Transcode`: ffmpeg non avviabile o terminato con exit status non zero
//! - `Io`: errori di I/O generici
//! - `Validation`: parametri di configurazione non validi
//!
//! Gli errori per singolo file vengono catturati da `mission::runner` e loggati,
//! solo `MissingDependency` interrompe l'intera esecuzione.
//!
//! ## Esempio:
//! ```ignore
//! if !engine.probe().await {
//!     return Err(MediaError::MissingDependency("ffmpeg".to_string()).into());
//! }
//! ```

use std::path::PathBuf;

/// Custom error types for gallery processing
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    #[error("Dependency missing: {0}")]
    MissingDependency(String),

    #[error("Cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot encode image {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("FFmpeg error on {path}: {reason}")]
    Transcode { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Validation(String),
}

impl MediaError {
    /// True for the fatal precondition that aborts the whole run
    pub fn is_precondition(&self) -> bool {
        matches!(self, MediaError::MissingDependency(_))
    }
}
