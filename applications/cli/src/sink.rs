//! Audio sink for terminals without audio output.
//!
//! Records what a real player would do and logs each transition.

use async_trait::async_trait;
use nature_core::{AudioSink, CoreError, Result};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingSink {
    loaded: Option<String>,
    playing: bool,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the loaded stream
    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[async_trait]
impl AudioSink for LoggingSink {
    async fn load(&mut self, url: &str, looping: bool) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CoreError::audio(format!("Unsupported stream URL: {}", url)));
        }
        info!(url = %url, looping, "Stream loaded");
        self.loaded = Some(url.to_string());
        self.playing = true;
        Ok(())
    }

    async fn play(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(CoreError::audio("Nothing loaded"));
        }
        info!("Playback resumed");
        self.playing = true;
        Ok(())
    }

    async fn pause(&mut self) -> Result<()> {
        info!("Playback paused");
        self.playing = false;
        Ok(())
    }

    async fn unload(&mut self) -> Result<()> {
        if let Some(url) = self.loaded.take() {
            info!(url = %url, "Stream released");
        }
        self.playing = false;
        Ok(())
    }
}
