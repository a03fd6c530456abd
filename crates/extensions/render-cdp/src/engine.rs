//! Chrome lifecycle and the `RenderEngine` implementation.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use venuescout_config::BrowserConfig;
use venuescout_protocols::{NavOptions, PageHandle, RenderEngine, RenderError};

use crate::cdp::{fetch_version, CdpClient, CdpError};
use crate::page::CdpPage;

const LAUNCH_POLL_INTERVAL: Duration = Duration::from_millis(200);
const LAUNCH_ATTEMPTS: u32 = 30;

/// Chrome-backed render engine. Connects (and if needed launches) lazily.
pub struct ChromeEngine {
    config: BrowserConfig,
    client: Mutex<Option<Arc<CdpClient>>>,
    /// Chrome process handle, if we launched it.
    chrome_process: Mutex<Option<Child>>,
}

impl ChromeEngine {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
            chrome_process: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Find a Chrome executable in the usual install locations.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        let paths: &[&str] = &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        ];

        #[cfg(target_os = "linux")]
        let paths: &[&str] = &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ];

        #[cfg(target_os = "windows")]
        let paths: &[&str] = &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        let paths: &[&str] = &[];

        paths.iter().map(|p| PathBuf::from(*p)).find(|p| p.exists())
    }

    /// Configured executable, else auto-detected.
    fn chrome_binary(&self) -> Result<PathBuf, CdpError> {
        self.config
            .resolved_chrome_path()
            .or_else(Self::find_chrome)
            .ok_or(CdpError::ChromeNotFound)
    }

    async fn is_chrome_running(&self) -> bool {
        fetch_version(&self.config.endpoint()).await.is_ok()
    }

    /// Launch Chrome with remote debugging enabled.
    async fn launch_chrome(&self) -> Result<Child, CdpError> {
        let chrome_path = self.chrome_binary()?;
        let profile_dir = self.config.resolved_profile_dir();

        if let Err(e) = std::fs::create_dir_all(&profile_dir) {
            warn!("Failed to create profile directory: {}", e);
        }

        info!(
            chrome = %chrome_path.display(),
            profile = %profile_dir.display(),
            "Launching Chrome"
        );

        let mut cmd = Command::new(&chrome_path);
        cmd.arg(format!("--remote-debugging-port={}", self.config.debug_port))
            .arg(format!("--user-data-dir={}", profile_dir.display()))
            .arg(format!(
                "--window-size={},{}",
                self.config.viewport_width, self.config.viewport_height
            ))
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-background-networking")
            .arg("--disable-sync")
            .arg("--disable-translate")
            .arg("--metrics-recording-only")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        if self.config.headless {
            cmd.arg("--headless=new");
        }

        let child = cmd
            .spawn()
            .map_err(|e| CdpError::LaunchFailed(format!("{}: {}", chrome_path.display(), e)))?;

        info!("Chrome launched with PID: {:?}", child.id());
        Ok(child)
    }

    /// Connected client, launching Chrome on first use when nothing is listening.
    async fn client(&self) -> Result<Arc<CdpClient>, CdpError> {
        let mut slot = self.client.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        if self.is_chrome_running().await {
            info!("Chrome already running on port {}", self.config.debug_port);
        } else {
            info!("Chrome not running on port {}, launching...", self.config.debug_port);
            let child = self.launch_chrome().await?;
            *self.chrome_process.lock().await = Some(child);

            let mut ready = false;
            for _ in 0..LAUNCH_ATTEMPTS {
                tokio::time::sleep(LAUNCH_POLL_INTERVAL).await;
                if self.is_chrome_running().await {
                    ready = true;
                    break;
                }
            }
            if !ready {
                return Err(CdpError::LaunchFailed(
                    "Chrome failed to start within timeout".to_string(),
                ));
            }
        }

        let timeout = Duration::from_millis(self.config.command_timeout_ms);
        let client = Arc::new(CdpClient::connect(&self.config.endpoint(), timeout).await?);
        info!("Connected to Chrome at {}", self.config.endpoint());
        *slot = Some(client.clone());
        Ok(client)
    }
}

#[async_trait]
impl RenderEngine for ChromeEngine {
    async fn open(&self, url: &str, nav: &NavOptions) -> Result<Box<dyn PageHandle>, RenderError> {
        let client = self.client().await?;
        let context_id = client.create_context().await?;

        let session = match client.open_session(&context_id).await {
            Ok(session) => session,
            Err(e) => {
                if let Err(dispose) = client.dispose_context(&context_id).await {
                    debug!(error = %dispose, "Failed to dispose browser context");
                }
                return Err(e.into());
            }
        };

        let page = CdpPage::new(url, session, context_id, client);
        let viewport = (self.config.viewport_width, self.config.viewport_height);
        if let Err(e) = page.load(viewport, nav).await {
            if let Err(close) = page.close().await {
                debug!(url, error = %close, "Failed to close page after navigation error");
            }
            return Err(e.into());
        }

        Ok(Box::new(page))
    }

    async fn shutdown(&self) -> Result<(), RenderError> {
        let had_client = self.client.lock().await.take().is_some();
        if let Some(mut child) = self.chrome_process.lock().await.take() {
            info!("Shutting down Chrome...");
            if let Err(e) = child.kill().await {
                warn!("Failed to kill Chrome: {}", e);
            }
        } else if had_client {
            info!("Browser connection closed");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
