//! # Task Module
//!
//! Worker per la conversione di un singolo file: sceglie il processore in base
//! al tipo e calcola i path tramite `PathResolver`.

use crate::{
    config::Config,
    engine::CodecEngine,
    file_manager::{MediaKind, SourceAsset},
    gallery::ProcessedAsset,
    image_processor::ImageProcessor,
    mission::path_resolver::PathResolver,
    video_processor::VideoProcessor,
};
use anyhow::Result;

/// Converts single assets
pub struct TaskProcessor {
    image_processor: ImageProcessor,
    video_processor: VideoProcessor,
    paths: PathResolver,
}

impl TaskProcessor {
    pub fn new(config: &Config, engine: CodecEngine) -> Self {
        Self {
            image_processor: ImageProcessor::new(config),
            video_processor: VideoProcessor::new(config, engine),
            paths: PathResolver::new(config),
        }
    }

    /// Convert `asset`; `Ok(None)` for files that are neither photo nor clip
    pub async fn process(&self, asset: &SourceAsset) -> Result<Option<ProcessedAsset>> {
        let kind = asset.kind();
        if kind == MediaKind::Skip {
            return Ok(None);
        }

        let file_name = self.paths.output_file_name(asset);
        let output_path = self.paths.output_path(&file_name);
        let web_path = self.paths.web_path(&file_name);

        let processed = match kind {
            MediaKind::Image => self.image_processor.optimize(asset, &output_path, &web_path)?,
            MediaKind::Video => self.video_processor.optimize(asset, &output_path, &web_path).await?,
            MediaKind::Skip => return Ok(None),
        };

        Ok(Some(processed))
    }
}
