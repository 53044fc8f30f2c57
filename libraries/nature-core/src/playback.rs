//! Single-track player session
//!
//! Wraps an [`AudioSink`] with the play/pause state and the elapsed-time
//! counter shown by the player. Sounds always loop; the counter only advances
//! while playing.

use crate::error::{CoreError, Result};
use crate::traits::AudioSink;
use tracing::{debug, error};

const PLAY_FAILED: &str = "Failed to play sound. Please try again.";
const PLAYBACK_ERROR: &str = "There was an error playing this sound.";

/// Player state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Nothing loaded yet
    #[default]
    Idle,
    Playing,
    Paused,
    /// Loading or playback failed; the message is user-facing
    Failed(String),
}

/// Player session for one sound
pub struct PlayerSession<S: AudioSink> {
    sink: S,
    state: PlayerState,
    stream_url: Option<String>,
    loaded: bool,
    elapsed_secs: u64,
    timer_running: bool,
}

impl<S: AudioSink> PlayerSession<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: PlayerState::Idle,
            stream_url: None,
            loaded: false,
            elapsed_secs: 0,
            timer_running: false,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// Seconds played so far
    pub fn elapsed(&self) -> u64 {
        self.elapsed_secs
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn stream_url(&self) -> Option<&str> {
        self.stream_url.as_deref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Load `url` (looping) and start playing.
    ///
    /// Any previously loaded sound is released first.
    pub async fn start(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        if self.loaded {
            self.sink.unload().await?;
            self.loaded = false;
        }
        self.stream_url = Some(url.clone());

        debug!(url = %url, "Loading sound");
        match self.sink.load(&url, true).await {
            Ok(()) => {
                self.loaded = true;
                self.state = PlayerState::Playing;
                self.timer_running = true;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error playing sound");
                self.fail(PLAY_FAILED);
                Err(e)
            }
        }
    }

    /// Play/pause button.
    ///
    /// Pauses when playing, resumes when paused, and (re)loads the known
    /// stream when nothing is loaded.
    pub async fn toggle(&mut self) -> Result<()> {
        if self.loaded {
            if self.is_playing() {
                self.sink.pause().await?;
                self.state = PlayerState::Paused;
                self.timer_running = false;
            } else {
                self.sink.play().await?;
                self.state = PlayerState::Playing;
                self.timer_running = true;
            }
            return Ok(());
        }

        match self.stream_url.clone() {
            Some(url) => self.start(url).await,
            None => Err(CoreError::audio("No sound to play")),
        }
    }

    /// One second of wall-clock time has passed
    pub fn tick(&mut self) {
        if self.timer_running {
            self.elapsed_secs += 1;
        }
    }

    /// Status report from the sink (e.g. interrupted by the OS)
    pub fn on_status(&mut self, is_playing: bool) {
        if !self.loaded || self.is_playing() == is_playing {
            return;
        }
        self.state = if is_playing {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        };
        self.timer_running = is_playing;
    }

    /// Playback error reported by the sink
    pub fn on_error(&mut self, message: &str) {
        error!(error = %message, "Playback error");
        self.fail(PLAYBACK_ERROR);
    }

    /// Release the sound and reset the timer
    pub async fn stop(&mut self) -> Result<()> {
        if self.loaded {
            self.sink.unload().await?;
            self.loaded = false;
        }
        self.state = PlayerState::Idle;
        self.timer_running = false;
        self.elapsed_secs = 0;
        Ok(())
    }

    fn fail(&mut self, message: &str) {
        self.state = PlayerState::Failed(message.to_string());
        self.timer_running = false;
    }
}

/// Format seconds as `HH:MM:SS`.
///
/// Hours are not wrapped at 24.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
