//! # Path Resolution Module
//!
//! Centralizza il calcolo dei path di output e dei path web.
//! Le foto mantengono il nome originale, i video prendono l'estensione normalizzata.

use crate::config::Config;
use crate::file_manager::{MediaKind, SourceAsset};
use std::path::PathBuf;

/// Computes where an asset is written and how the markup refers to it
#[derive(Debug, Clone)]
pub struct PathResolver {
    output_dir: PathBuf,
    web_base: String,
    video_extension: String,
}

impl PathResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            web_base: config.resolved_web_base(),
            video_extension: config.video_extension.trim_start_matches('.').to_string(),
        }
    }

    /// Name of the converted file inside the output directory
    pub fn output_file_name(&self, asset: &SourceAsset) -> String {
        match asset.kind() {
            MediaKind::Video => format!("{}.{}", asset.stem(), self.video_extension),
            MediaKind::Image | MediaKind::Skip => asset.name.clone(),
        }
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn web_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.web_base, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn resolver() -> PathResolver {
        PathResolver::new(&Config {
            source_dir: PathBuf::from("/mnt/photos"),
            output_dir: PathBuf::from("assets/img/viajes/armenia"),
            ..Default::default()
        })
    }

    fn asset(name: &str) -> SourceAsset {
        SourceAsset::new(Path::new("/mnt/photos").join(name))
    }

    #[test]
    fn test_images_keep_their_name() {
        let r = resolver();
        let name = r.output_file_name(&asset("IMG_01.PNG"));
        assert_eq!(name, "IMG_01.PNG");
        assert_eq!(r.output_path(&name), Path::new("assets/img/viajes/armenia/IMG_01.PNG"));
        assert_eq!(r.web_path(&name), "/assets/img/viajes/armenia/IMG_01.PNG");
    }

    #[test]
    fn test_videos_are_normalized_to_mp4() {
        let r = resolver();
        for name in ["clip.MOV", "clip.webm", "clip.m4v", "clip.mp4"] {
            let out = r.output_file_name(&asset(name));
            assert_eq!(out, "clip.mp4");
            assert_eq!(r.web_path(&out), "/assets/img/viajes/armenia/clip.mp4");
        }
    }

    #[test]
    fn test_explicit_web_base() {
        let r = PathResolver::new(&Config {
            output_dir: PathBuf::from("/srv/site/assets/img"),
            web_base: Some("/assets/img/".to_string()),
            ..Default::default()
        });
        assert_eq!(r.web_path("a.jpg"), "/assets/img/a.jpg");
        assert_eq!(r.output_path("a.jpg"), Path::new("/srv/site/assets/img/a.jpg"));
    }
}
