//! # Web Gallery Forge - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Costruzione della configurazione (file JSON opzionale + override da CLI)
//! - Avvio del `MissionRunner` e stampa del report su stdout
//!
//! ## Exit status:
//! - `0`: run completato, anche se alcuni file sono falliti
//! - `1`: configurazione non valida o cartella sorgente illeggibile
//! - `2`: ffmpeg non disponibile, nessun file elaborato
//!
//! ## Esempio di utilizzo:
//! ```bash
//! gallery-forge /mnt/d/photos/trip assets/img/viajes/trip --quality 85 --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use web_gallery_forge::{Config, MediaError, MissionRunner};

/// Exit status when the video engine is missing
const MISSING_ENGINE_EXIT_CODE: i32 = 2;
/// Exit status `anyhow` produces when `main` returns an error
const FATAL_EXIT_CODE: i32 = 1;

/// Process exit status for an error that ended the run
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MediaError>() {
        Some(media) if media.is_precondition() => MISSING_ENGINE_EXIT_CODE,
        _ => FATAL_EXIT_CODE,
    }
}

#[derive(Parser)]
#[command(name = "gallery-forge")]
#[command(about = "Convert a folder of photos and clips into web-ready assets and gallery markup")]
struct Args {
    /// Directory containing the original photos and clips
    source_dir: PathBuf,

    /// Directory receiving the converted files (created if missing)
    output_dir: PathBuf,

    /// JSON configuration file (CLI flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix used for paths in the generated markup
    #[arg(long)]
    web_base: Option<String>,

    /// Photo width in pixels
    #[arg(long)]
    image_width: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Video width in pixels (even)
    #[arg(long)]
    video_width: Option<u32>,

    /// Maximum clip length in seconds
    #[arg(long)]
    max_duration: Option<u32>,

    /// Video CRF value (0-51, higher = smaller file)
    #[arg(short, long)]
    crf: Option<u8>,

    /// ffmpeg encoding preset
    #[arg(long)]
    preset: Option<String>,

    /// Path to the ffmpeg binary
    #[arg(long)]
    ffmpeg: Option<PathBuf>,

    /// Substring marking the cover photo
    #[arg(long)]
    cover_marker: Option<String>,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        config.source_dir = self.source_dir;
        config.output_dir = self.output_dir;
        if let Some(web_base) = self.web_base {
            config.web_base = Some(web_base);
        }
        if let Some(width) = self.image_width {
            config.image_width = width;
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if let Some(width) = self.video_width {
            config.video_width = width;
        }
        if let Some(duration) = self.max_duration {
            config.video_max_duration = duration;
        }
        if let Some(crf) = self.crf {
            config.video_crf = crf;
        }
        if let Some(preset) = self.preset {
            config.video_preset = preset;
        }
        if let Some(ffmpeg) = self.ffmpeg {
            config.ffmpeg_path = Some(ffmpeg);
        }
        if let Some(marker) = self.cover_marker {
            config.cover_marker = marker;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base = match args.config {
        Some(ref path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    let dump_config = args.dump_config.take();
    let config = args.apply(base);
    config.validate()?;

    if let Some(path) = dump_config {
        config.save_to_file(&path).await?;
        info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let runner = MissionRunner::new(config)?;
    match runner.run().await {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => match exit_code(&e) {
            MISSING_ENGINE_EXIT_CODE => {
                error!("❌ {:#}", e);
                std::process::exit(MISSING_ENGINE_EXIT_CODE);
            }
            _ => Err(e),
        },
    }
}
