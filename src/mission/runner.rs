//! # Mission Runner
//!
//! Orchestratore principale: un solo passaggio, sequenziale, sui file della cartella sorgente.
//!
//! ## Flusso:
//! 1. Verifica che ffmpeg sia disponibile (fatale se manca, nessun file toccato)
//! 2. Crea la cartella di output se non esiste
//! 3. Elenca i file sorgente, ordinati per nome
//! 4. Converte ogni file; gli errori del singolo file vengono loggati e non fermano il run
//! 5. Costruisce il `MissionReport`

use crate::{
    config::Config,
    cover::CoverSelector,
    engine::CodecEngine,
    file_manager::FileManager,
    gallery::{AssetKind, GalleryBuilder},
    mission::{report::MissionReport, task::TaskProcessor},
};
use anyhow::Result;
use tracing::{debug, error, info};

/// Runs one conversion pass over the source folder
pub struct MissionRunner {
    config: Config,
    engine: CodecEngine,
}

impl MissionRunner {
    pub fn new(config: Config) -> Result<Self> {
        let engine = CodecEngine::from_config(&config);
        Self::with_engine(config, engine)
    }

    /// Use an explicit engine instead of the configured one
    pub fn with_engine(config: Config, engine: CodecEngine) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    pub async fn run(&self) -> Result<MissionReport> {
        self.engine.require().await?;

        if FileManager::ensure_dir(&self.config.output_dir).await? {
            info!("Created output directory: {}", self.config.output_dir.display());
        }

        let assets = FileManager::list_source_assets(&self.config.source_dir)?;
        info!(
            "--- 🚀 Processing {} files from {} (photos + clips up to {}s) ---",
            assets.len(),
            self.config.source_dir.display(),
            self.config.video_max_duration
        );

        let task = TaskProcessor::new(&self.config, self.engine.clone());
        let mut gallery = GalleryBuilder::new(self.config.gallery_class.as_str());
        let mut cover = CoverSelector::new(&self.config.cover_marker);
        let mut failed = 0;
        let mut skipped = 0;

        for asset in &assets {
            match task.process(asset).await {
                Ok(Some(processed)) => {
                    match processed.kind {
                        AssetKind::Image => {
                            info!("[PHOTO] {} -> optimized", asset.name);
                            cover.observe(&processed.source_name, &processed.web_path);
                        }
                        AssetKind::Video => info!("[VIDEO] {} -> compressed", asset.name),
                    }
                    gallery.push(&processed);
                }
                Ok(None) => {
                    debug!("[SKIP] {}", asset.name);
                    skipped += 1;
                }
                Err(e) => {
                    error!("[ERROR] {}: {:#}", asset.name, e);
                    failed += 1;
                }
            }
        }

        Ok(MissionReport {
            images: gallery.image_count(),
            videos: gallery.video_count(),
            failed,
            skipped,
            cover: cover.select().unwrap_or_default(),
            markup: gallery.render(),
            front_matter_key: self.config.front_matter_key.clone(),
        })
    }
}
