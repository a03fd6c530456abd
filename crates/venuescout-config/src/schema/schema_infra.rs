//! Browser configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Chrome instance used as the render engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Remote debugging port. An already running Chrome on this port is reused.
    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default = "default_true")]
    pub headless: bool,

    /// Chrome executable; auto-detected when unset.
    #[serde(default)]
    pub chrome_path: Option<String>,

    /// Profile directory passed as `--user-data-dir`.
    #[serde(default)]
    pub profile_dir: Option<String>,

    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Upper bound for a single DevTools command round trip.
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
}

fn default_debug_port() -> u16 {
    9222
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    1800
}

fn default_command_timeout_ms() -> u64 {
    30_000
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: default_debug_port(),
            headless: default_true(),
            chrome_path: None,
            profile_dir: None,
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            command_timeout_ms: default_command_timeout_ms(),
        }
    }
}

impl BrowserConfig {
    /// DevTools HTTP endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.debug_port)
    }

    /// Profile directory with `~` expanded, falling back to a temp location.
    pub fn resolved_profile_dir(&self) -> PathBuf {
        match &self.profile_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).as_ref()),
            None => std::env::temp_dir().join("venuescout-chrome-profile"),
        }
    }

    pub fn resolved_chrome_path(&self) -> Option<PathBuf> {
        self.chrome_path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}
