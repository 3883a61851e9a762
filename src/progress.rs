//! # Progress Module
//!
//! Feedback visivo con `indicatif` mentre ffmpeg lavora.
//!
//! ## Visual feedback:
//! ```text
//! ⠋ 🎬 Compressing clip.mov... [00:00:04]
//! ```
//!
//! La barra scrive su stderr e resta nascosta quando stderr non è un terminale,
//! quindi non sporca il report su stdout né l'output dei test.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages progress reporting
pub struct ProgressManager;

impl ProgressManager {
    /// Create a spinner for indeterminate progress
    pub fn spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();

        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed_precise}]") {
            spinner.set_style(style);
        }

        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        spinner
    }
}
