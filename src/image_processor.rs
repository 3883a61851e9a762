//! # Image Processing Module
//!
//! Questo modulo converte le foto in JPEG pronti per il web, interamente in-process
//! con il crate `image`.
//!
//! ## Pipeline di conversione
//!
//! 1. **Decodifica**: formato riconosciuto dal contenuto (magic bytes), con
//!    fallback sull'estensione
//! 2. **Calcolo dimensioni**: larghezza forzata a `image_width`, altezza
//!    `round(h * W / w)`; le foto più piccole vengono ingrandite
//! 3. **Resize**: filtro Lanczos3
//! 4. **Colore**: canale alpha e palette vengono scartati (conversione a RGB,
//!    nessun compositing); le foto in scala di grigi restano a un canale
//! 5. **Encoding**: JPEG alla qualità configurata con tabelle di Huffman ottimizzate
//!    (`jpeg-encoder`), sovrascrivendo sempre l'output
//!
//! Prima del resize la dimensione di destinazione viene confrontata con il limite
//! di allocazione di `image` e con il massimo del formato JPEG (65535 px per lato):
//! una foto stretta e altissima fallisce da sola invece di esaurire la memoria.
//!
//! ## Formati Supportati
//!
//! | Formato | Input | Output |
//! |---------|-------|--------|
//! | JPEG    | ✅    | JPEG   |
//! | PNG     | ✅    | JPEG   |
//! | WebP    | ✅    | JPEG   |
//!
//! Il nome del file di output resta quello originale: solo i video cambiano estensione.
//!
//! ## Error Handling
//!
//! - File illeggibile o corrotto: `MediaError::Decode`
//! - Dimensioni di destinazione eccessive, errore di conversione o scrittura: `MediaError::Encode`
//!
//! Buffer e file handle vivono solo dentro `optimize`, quindi vengono rilasciati
//! anche quando la conversione fallisce a metà.
//!
//! ## Esempio
//!
//! ```ignore
//! let processor = ImageProcessor::new(&config);
//! let asset = processor.optimize(&source, &output_path, &web_path)?;
//! ```

use crate::config::Config;
use crate::error::MediaError;
use crate::file_manager::SourceAsset;
use crate::gallery::{AssetKind, ProcessedAsset};
use crate::markup;
use anyhow::Result;
use image::imageops::FilterType;
use image::io::{Limits, Reader as ImageReader};
use image::{DynamicImage, GenericImageView};
use jpeg_encoder::{ColorType as JpegColor, Encoder as JpegEncoder, EncodingError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Converts photos to resized, recompressed JPEGs
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    /// Output width in pixels
    width: u32,
    /// JPEG quality (1-100)
    quality: u8,
}

impl ImageProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.image_width,
            quality: config.jpeg_quality,
        }
    }

    /// Convert one photo and return the gallery entry for it
    pub fn optimize(&self, source: &SourceAsset, output_path: &Path, web_path: &str) -> Result<ProcessedAsset> {
        let (width, height) = self.transcode(&source.path, output_path)?;
        debug!("{} -> {}x{} at {}", source.name, width, height, output_path.display());

        Ok(ProcessedAsset {
            kind: AssetKind::Image,
            source_name: source.name.clone(),
            output_path: output_path.to_path_buf(),
            web_path: web_path.to_string(),
            markup: markup::image_tag(web_path, &source.name).into_string(),
        })
    }

    /// Decode, resize, flatten and encode `input` into `output`.
    ///
    /// Returns the dimensions of the written image.
    pub fn transcode(&self, input: &Path, output: &Path) -> Result<(u32, u32)> {
        let img = decode(input)?;

        let (src_width, src_height) = img.dimensions();
        if src_width == 0 || src_height == 0 {
            return Err(MediaError::Encode {
                path: input.to_path_buf(),
                reason: "image has no pixels".to_string(),
            }
            .into());
        }

        let target_height = target_height(src_width, src_height, self.width);
        check_target_size(input, self.width, target_height, img.color().bytes_per_pixel())?;
        let resized = img.resize_exact(self.width, target_height, FilterType::Lanczos3);
        drop(img);

        let flat = flatten(resized);
        self.write_jpeg(&flat, output)?;

        Ok(flat.dimensions())
    }

    fn write_jpeg(&self, img: &DynamicImage, output: &Path) -> Result<()> {
        let encode_error = |reason: String| MediaError::Encode {
            path: output.to_path_buf(),
            reason,
        };

        let file = File::create(output).map_err(|e| encode_error(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        encode_jpeg(&mut writer, img, self.quality, true).map_err(|e| encode_error(e.to_string()))?;
        writer.flush().map_err(|e| encode_error(e.to_string()))?;
        Ok(())
    }
}

/// Encode an RGB8 or L8 buffer as baseline JPEG
fn encode_jpeg<W: Write>(writer: W, img: &DynamicImage, quality: u8, optimized: bool) -> Result<(), EncodingError> {
    let color = match img {
        DynamicImage::ImageLuma8(_) => JpegColor::Luma,
        _ => JpegColor::Rgb,
    };
    let mut encoder = JpegEncoder::new(writer, quality);
    encoder.set_optimized_huffman_tables(optimized);
    // check_target_size keeps both sides within u16
    encoder.encode(img.as_bytes(), img.width() as u16, img.height() as u16, color)
}

fn decode(input: &Path) -> Result<DynamicImage> {
    let decode_error = |source: image::ImageError| MediaError::Decode {
        path: input.to_path_buf(),
        source,
    };

    let img = ImageReader::open(input)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;
    Ok(img)
}

/// Height that keeps the aspect ratio once the width becomes `target_width`
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = (height as f64 * target_width as f64 / width as f64).round();
    scaled.max(1.0) as u32
}

/// Reject resize targets JPEG cannot hold or that would blow the allocation limit.
///
/// `bytes_per_pixel` is the decoded layout, which is what the resampler works in.
fn check_target_size(input: &Path, width: u32, height: u32, bytes_per_pixel: u8) -> Result<()> {
    let too_large = |reason: String| -> Result<()> {
        Err(MediaError::Encode {
            path: input.to_path_buf(),
            reason,
        }
        .into())
    };

    let max_side = u16::MAX as u32;
    if width > max_side || height > max_side {
        return too_large(format!("target size {}x{} exceeds the JPEG limit of {} px", width, height, max_side));
    }

    let bytes = width as u64 * height as u64 * bytes_per_pixel.max(3) as u64;
    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    if bytes > max_alloc {
        return too_large(format!("target size {}x{} needs {} bytes, limit is {}", width, height, bytes, max_alloc));
    }
    Ok(())
}

/// Drop alpha and palette so the result is always JPEG-encodable.
///
/// Alpha is discarded, not composited over a background.
fn flatten(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
