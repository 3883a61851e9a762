//! # Gallery Builder Module
//!
//! Accumula i frammenti HTML prodotti per ogni asset convertito, nell'ordine
//! di elaborazione, e tiene i contatori di foto e video.
//!
//! Solo le conversioni riuscite arrivano qui: un file fallito non contribuisce
//! né ai contatori né al markup.

use crate::markup;
use std::path::PathBuf;

/// Kind of a successfully converted asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

/// Result of converting one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedAsset {
    pub kind: AssetKind,
    /// Original file name
    pub source_name: String,
    pub output_path: PathBuf,
    pub web_path: String,
    pub markup: String,
}

/// Accumulates markup and counters in processing order
#[derive(Debug)]
pub struct GalleryBuilder {
    class: String,
    fragments: String,
    images: usize,
    videos: usize,
}

impl GalleryBuilder {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fragments: String::new(),
            images: 0,
            videos: 0,
        }
    }

    pub fn push(&mut self, asset: &ProcessedAsset) {
        self.fragments.push_str(&asset.markup);
        match asset.kind {
            AssetKind::Image => self.images += 1,
            AssetKind::Video => self.videos += 1,
        }
    }

    pub fn image_count(&self) -> usize {
        self.images
    }

    pub fn video_count(&self) -> usize {
        self.videos
    }

    /// The whole block, wrapped in the gallery container
    pub fn render(&self) -> String {
        markup::gallery_block(&self.class, &self.fragments).into_string()
    }
}
