//! # Codec Engine
//!
//! Wrapper attorno al binario ffmpeg.
//!
//! ## Responsabilità:
//! - Risolve il comando (path configurato oppure nome di default per la piattaforma)
//! - `probe()`: invocazione senza effetti collaterali (`-version`) per verificarne la presenza
//! - `run()`: invocazione reale, bloccante fino alla terminazione del processo
//!
//! Nessun timeout: un ffmpeg bloccato blocca l'intera esecuzione.

use crate::config::Config;
use crate::error::MediaError;
use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Handle on the external ffmpeg binary
#[derive(Debug, Clone)]
pub struct CodecEngine {
    program: PathBuf,
}

impl CodecEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Engine from the configured path, or the platform default name looked up on PATH
    pub fn from_config(config: &Config) -> Self {
        match config.ffmpeg_path {
            Some(ref path) => Self::new(path),
            None => Self::new(Self::default_command()),
        }
    }

    fn default_command() -> &'static str {
        if cfg!(windows) {
            "ffmpeg.exe"
        } else {
            "ffmpeg"
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Check that the engine can be started and answers `-version`
    pub async fn probe(&self) -> bool {
        let result = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match result {
            Ok(status) => {
                debug!("{} -version exited with {}", self.program.display(), status);
                status.success()
            }
            Err(e) => {
                debug!("{} could not be started: {}", self.program.display(), e);
                false
            }
        }
    }

    /// Fail with `MissingDependency` unless the probe succeeds
    pub async fn require(&self) -> Result<()> {
        if self.probe().await {
            Ok(())
        } else {
            Err(MediaError::MissingDependency(format!(
                "{} is required for video processing (install ffmpeg or pass --ffmpeg)",
                self.program.display()
            ))
            .into())
        }
    }

    /// Run the engine with `args`; `subject` names the asset in error messages
    pub async fn run(&self, args: &[OsString], subject: &Path) -> Result<()> {
        let transcode_error = |reason: String| MediaError::Transcode {
            path: subject.to_path_buf(),
            reason,
        };

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| transcode_error(format!("failed to execute {}: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, stderr)
            };
            return Err(transcode_error(reason).into());
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_missing_binary() {
        let engine = CodecEngine::new("/nonexistent/bin/ffmpeg-not-here");
        assert!(!engine.probe().await);

        let err = engine.require().await.unwrap_err();
        let media = err.downcast_ref::<MediaError>().unwrap();
        assert!(media.is_precondition());
    }

    #[tokio::test]
    async fn test_probe_requires_success_status() {
        assert!(CodecEngine::new("true").probe().await);
        assert!(!CodecEngine::new("false").probe().await);
    }

    #[tokio::test]
    async fn test_run_non_zero_exit_is_transcode_error() {
        let err = CodecEngine::new("false")
            .run(&[OsString::from("-i"), OsString::from("x.mov")], Path::new("x.mov"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MediaError>(),
            Some(MediaError::Transcode { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_unstartable_engine_is_transcode_error() {
        let err = CodecEngine::new("/nonexistent/bin/ffmpeg-not-here")
            .run(&[], Path::new("x.mov"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            ffmpeg_path: Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg")),
            ..Default::default()
        };
        assert_eq!(CodecEngine::from_config(&config).program(), Path::new("/opt/ffmpeg/bin/ffmpeg"));
        assert!(CodecEngine::from_config(&Config::default())
            .program()
            .to_string_lossy()
            .starts_with("ffmpeg"));
    }
}
