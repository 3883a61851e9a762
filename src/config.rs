//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di conversione
//! - Fornisce validazione dei parametri di input
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! ## Parametri di configurazione:
//! - `image_width`: Larghezza target foto (default: 1600)
//! - `jpeg_quality`: Qualità JPEG (1-100, default: 80)
//! - `video_width`: Larghezza target video, deve essere pari (default: 1280)
//! - `video_max_duration`: Secondi massimi per clip (default: 10)
//! - `video_crf`: CRF video (0-51, default: 28, più alto = file più piccolo)
//! - `video_preset` / `video_codec`: preset e codec ffmpeg (default: "faster", "libx264")
//! - `cover_marker`: sottostringa che marca la copertina (default: "portada")
//!
//! La configurazione viene passata per valore ad ogni componente, nessuno stato globale.
//!
//! ## Esempio:
//! ```ignore
//! let config = Config {
//!     source_dir: "photos".into(),
//!     output_dir: "assets/img/trip".into(),
//!     image_width: 1200,
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use crate::error::MediaError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a gallery conversion run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder with the original photos and clips (read non-recursively)
    pub source_dir: PathBuf,
    /// Folder receiving the converted assets
    pub output_dir: PathBuf,
    /// Prefix for paths embedded in the markup (derived from `output_dir` when unset)
    pub web_base: Option<String>,
    /// Target photo width in pixels
    pub image_width: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Target video width in pixels
    pub video_width: u32,
    /// Clips are cut to this many seconds
    pub video_max_duration: u32,
    /// Video CRF value (0-51, higher = smaller file)
    pub video_crf: u8,
    /// Encoder speed/quality preset
    pub video_preset: String,
    /// Target video codec
    pub video_codec: String,
    /// Container extension every clip is normalized to
    pub video_extension: String,
    /// Explicit ffmpeg binary, otherwise looked up on PATH
    pub ffmpeg_path: Option<PathBuf>,
    /// Case-insensitive substring flagging the cover photo
    pub cover_marker: String,
    /// CSS class of the gallery wrapper
    pub gallery_class: String,
    /// Front matter key printed next to the cover path
    pub front_matter_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            web_base: None,
            image_width: 1600,
            jpeg_quality: 80,
            video_width: 1280,
            video_max_duration: 10,
            video_crf: 28,
            video_preset: "faster".to_string(),
            video_codec: "libx264".to_string(),
            video_extension: "mp4".to_string(),
            ffmpeg_path: None,
            cover_marker: "portada".to_string(),
            gallery_class: "galeria-dinamica".to_string(),
            front_matter_key: "miniatura".to_string(),
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(MediaError::Validation(msg.to_string()).into()) };

        if self.source_dir.as_os_str().is_empty() {
            return invalid("Source directory must be set");
        }

        if self.output_dir.as_os_str().is_empty() {
            return invalid("Output directory must be set");
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return invalid("JPEG quality must be between 1 and 100");
        }

        if self.image_width == 0 {
            return invalid("Image width must be greater than 0");
        }

        if self.video_width == 0 || self.video_width % 2 != 0 {
            return invalid("Video width must be a positive even number");
        }

        if self.video_max_duration == 0 {
            return invalid("Video duration limit must be greater than 0");
        }

        if self.video_crf > 51 {
            return invalid("Video CRF must be between 0 and 51");
        }

        if self.video_preset.trim().is_empty()
            || self.video_codec.trim().is_empty()
            || self.video_extension.trim().is_empty()
        {
            return invalid("Video preset, codec and extension must not be empty");
        }

        if self.cover_marker.is_empty() {
            return invalid("Cover marker must not be empty");
        }

        Ok(())
    }

    /// Web prefix under which every converted asset is published.
    ///
    /// Falls back to `/` followed by the output directory with `/` separators.
    pub fn resolved_web_base(&self) -> String {
        match self.web_base {
            Some(ref base) => base.trim_end_matches('/').to_string(),
            None => web_base_from_dir(&self.output_dir),
        }
    }

    /// Load configuration from file
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

fn web_base_from_dir(dir: &Path) -> String {
    let raw = dir.to_string_lossy().replace('\\', "/");
    let mut trimmed = raw.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    let trimmed = trimmed.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid() -> Config {
        Config {
            source_dir: PathBuf::from("in"),
            output_dir: PathBuf::from("assets/img/trip"),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid();
        assert!(config.validate().is_ok());

        config.jpeg_quality = 0;
        assert!(config.validate().is_err());

        config.jpeg_quality = 80;
        config.video_crf = 52;
        assert!(config.validate().is_err());

        config.video_crf = 28;
        config.video_width = 1279;
        assert!(config.validate().is_err());

        config.video_width = 1280;
        config.video_max_duration = 0;
        assert!(config.validate().is_err());

        config.video_max_duration = 10;
        config.source_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.image_width, 1600);
        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.video_width, 1280);
        assert_eq!(config.video_max_duration, 10);
        assert_eq!(config.video_crf, 28);
        assert_eq!(config.video_preset, "faster");
        assert_eq!(config.video_codec, "libx264");
        assert_eq!(config.cover_marker, "portada");
    }

    #[test]
    fn test_web_base_derivation() {
        let mut config = valid();
        assert_eq!(config.resolved_web_base(), "/assets/img/trip");

        config.output_dir = PathBuf::from("./assets/img/trip/");
        assert_eq!(config.resolved_web_base(), "/assets/img/trip");

        config.web_base = Some("/media/trip/".to_string());
        assert_eq!(config.resolved_web_base(), "/media/trip");
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original_config = Config {
            image_width: 1200,
            jpeg_quality: 85,
            video_crf: 30,
            video_preset: "slow".to_string(),
            ..valid()
        };

        original_config.save_to_file(&config_path).await.unwrap();
        let loaded_config = Config::from_file(&config_path).await.unwrap();

        assert_eq!(loaded_config, original_config);
    }

    #[tokio::test]
    async fn test_partial_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        tokio::fs::write(&config_path, r#"{ "jpeg_quality": 70 }"#).await.unwrap();

        let loaded = Config::from_file(&config_path).await.unwrap();
        assert_eq!(loaded.jpeg_quality, 70);
        assert_eq!(loaded.image_width, 1600);
    }
}
