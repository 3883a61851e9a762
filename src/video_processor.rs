//! # Video Processing Module
//!
//! Questo modulo converte le clip in video leggeri per il web tramite ffmpeg.
//!
//! ## Responsabilità:
//! - Costruzione degli argomenti ffmpeg (`FfmpegArgs`), centralizzati e testabili
//!   senza lanciare processi
//! - Invocazione del motore, una volta per clip
//! - Normalizzazione del contenitore di output (default `.mp4`, qualunque sia l'originale)
//!
//! ## Pipeline di compressione:
//! - Taglio ai primi `video_max_duration` secondi (`-t`)
//! - Resize a `video_width` con altezza pari calcolata da ffmpeg (`scale=W:-2`)
//! - Rimozione completa dell'audio (`-an`), voluto per ridurre il peso
//! - Codec video configurabile (default libx264), CRF e preset fissi
//! - Sovrascrittura sempre attiva (`-y`), log di ffmpeg limitato agli errori
//!
//! ## Controllo qualità (CRF):
//! - 18-23: Alta qualità
//! - 24-28: Buona qualità (default 28, bilanciato per il web)
//! - 29-35: File piccoli
//!
//! ## Esempio:
//! ```ignore
//! let processor = VideoProcessor::new(&config, CodecEngine::from_config(&config));
//! let asset = processor.optimize(&source, &output_path, &web_path).await?;
//! ```

use crate::config::Config;
use crate::engine::CodecEngine;
use crate::file_manager::SourceAsset;
use crate::gallery::{AssetKind, ProcessedAsset};
use crate::markup;
use crate::progress::ProgressManager;
use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Fixed ffmpeg argument set for one clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_duration: u32,
    pub width: u32,
    pub codec: String,
    pub crf: u8,
    pub preset: String,
}

impl FfmpegArgs {
    pub fn new(config: &Config, input: &Path, output: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            max_duration: config.video_max_duration,
            width: config.video_width,
            codec: config.video_codec.clone(),
            crf: config.video_crf,
            preset: config.video_preset.clone(),
        }
    }

    /// `-2` lets ffmpeg pick a height that keeps the ratio and stays even
    pub fn scale_filter(&self) -> String {
        format!("scale={}:-2", self.width)
    }

    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-y", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(self.input.clone().into_os_string());
        args.extend(
            [
                "-t".to_string(),
                self.max_duration.to_string(),
                "-vf".to_string(),
                self.scale_filter(),
                "-c:v".to_string(),
                self.codec.clone(),
                "-an".to_string(),
                "-crf".to_string(),
                self.crf.to_string(),
                "-preset".to_string(),
                self.preset.clone(),
            ]
            .into_iter()
            .map(OsString::from),
        );
        args.push(self.output.clone().into_os_string());
        args
    }
}

/// Handles video compression
pub struct VideoProcessor {
    config: Config,
    engine: CodecEngine,
}

impl VideoProcessor {
    pub fn new(config: &Config, engine: CodecEngine) -> Self {
        Self {
            config: config.clone(),
            engine,
        }
    }

    /// Compress one clip and return the gallery entry for it
    pub async fn optimize(&self, source: &SourceAsset, output_path: &Path, web_path: &str) -> Result<ProcessedAsset> {
        let args = FfmpegArgs::new(&self.config, &source.path, output_path);
        debug!("{} {:?}", self.engine.program().display(), args.to_args());

        let spinner = ProgressManager::spinner(&format!("🎬 Compressing {}...", source.name));
        let start_time = Instant::now();
        let result = self.engine.run(&args.to_args(), &source.path).await;
        spinner.finish_and_clear();
        result?;

        debug!("{} compressed in {:.1}s", source.name, start_time.elapsed().as_secs_f64());

        Ok(ProcessedAsset {
            kind: AssetKind::Video,
            source_name: source.name.clone(),
            output_path: output_path.to_path_buf(),
            web_path: web_path.to_string(),
            markup: markup::video_tag(web_path).into_string(),
        })
    }
}
