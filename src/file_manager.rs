//! # File Management Module
//!
//! Questo modulo gestisce la discovery dei file sorgente e la loro classificazione.
//!
//! ## Responsabilità:
//! - Elenca la cartella sorgente (non ricorsiva), escludendo i file nascosti
//! - Ordina i file per nome, una sola volta, prima dell'elaborazione
//! - Determina il tipo di file (immagine, video o da saltare) dall'estensione
//!
//! ## Formati supportati:
//! - **Immagini**: JPG, JPEG, PNG, WebP
//! - **Video**: MP4, MOV, WebM, M4V
//!
//! ## Esempio:
//! ```ignore
//! for asset in FileManager::list_source_assets(&source_dir)? {
//!     match asset.kind() {
//!         MediaKind::Image => { /* ... */ }
//!         MediaKind::Video => { /* ... */ }
//!         MediaKind::Skip => {}
//!     }
//! }
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// What a source file will be turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Skip,
}

impl MediaKind {
    /// Classify a file name by its (case-insensitive) extension
    pub fn classify(file_name: &str) -> Self {
        let ext = match Path::new(file_name).extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => return MediaKind::Skip,
        };

        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "webp" => MediaKind::Image,
            "mp4" | "mov" | "webm" | "m4v" => MediaKind::Video,
            _ => MediaKind::Skip,
        }
    }
}

/// One entry of the source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    pub name: String,
    pub extension: String,
    pub path: PathBuf,
}

impl SourceAsset {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self { name, extension, path }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(&self.name)
    }

    /// File name without its extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Manages file discovery
pub struct FileManager;

impl FileManager {
    /// List the non-hidden files directly inside `source_dir`, sorted by name
    pub fn list_source_assets(source_dir: &Path) -> Result<Vec<SourceAsset>> {
        let source_dir = source_dir
            .canonicalize()
            .with_context(|| format!("Cannot read source directory {}", source_dir.display()))?;

        let mut assets = Vec::new();
        for entry in WalkDir::new(&source_dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", source_dir.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || Self::is_hidden(&entry.file_name().to_string_lossy()) {
                continue;
            }
            assets.push(SourceAsset::new(entry.into_path()));
        }

        assets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(assets)
    }

    pub fn is_hidden(file_name: &str) -> bool {
        file_name.starts_with('.')
    }

    /// Create the destination folder if it does not exist yet
    pub async fn ensure_dir(dir: &Path) -> Result<bool> {
        if tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false) {
            return Ok(false);
        }
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(MediaKind::classify("a.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::classify("a.JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::classify("a.Png"), MediaKind::Image);
        assert_eq!(MediaKind::classify("a.webp"), MediaKind::Image);
        assert_eq!(MediaKind::classify("clip.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::classify("clip.m4v"), MediaKind::Video);
        assert_eq!(MediaKind::classify("clip.webm"), MediaKind::Video);
        assert_eq!(MediaKind::classify("notes.txt"), MediaKind::Skip);
        assert_eq!(MediaKind::classify("README"), MediaKind::Skip);
        assert_eq!(MediaKind::classify("archive.jpg.zip"), MediaKind::Skip);
    }

    #[test]
    fn test_listing_is_sorted_and_skips_hidden() {
        let dir = TempDir::new().unwrap();
        for name in ["c.jpg", "a.mp4", ".hidden.jpg", "b.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("d.jpg"), b"x").unwrap();

        let assets = FileManager::list_source_assets(dir.path()).unwrap();
        let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "b.txt", "c.jpg"]);
        assert_eq!(assets[0].extension, "mp4");
        assert_eq!(assets[0].stem(), "a");
    }

    #[test]
    fn test_missing_source_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(FileManager::list_source_assets(&dir.path().join("nope")).is_err());
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_once() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("assets").join("img");
        assert!(FileManager::ensure_dir(&out).await.unwrap());
        assert!(!FileManager::ensure_dir(&out).await.unwrap());
        assert!(out.is_dir());
    }
}
