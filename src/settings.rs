use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = ".showcase";
const SETTINGS_FILE: &str = "setting.json";

const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
}

fn default_auth_base_url() -> String {
    DEFAULT_AUTH_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_base_url: default_auth_base_url(),
        }
    }
}

impl Settings {
    /// Reads `.showcase/setting.json` from `std::env::current_dir()`.
    /// Returns defaults if the file is missing or malformed; the
    /// `SHOWCASE_AUTH_URL` env var overrides the file either way.
    pub fn load() -> Self {
        let mut settings = Self::load_from(std::env::current_dir().ok());
        if let Ok(url) = std::env::var("SHOWCASE_AUTH_URL") {
            settings.auth_base_url = url;
        }
        settings
    }

    fn load_from(cwd: Option<PathBuf>) -> Self {
        let Some(cwd) = cwd else {
            return Self::default();
        };
        let path = cwd.join(SETTINGS_DIR).join(SETTINGS_FILE);
        Self::read_file(&path).unwrap_or_default()
    }

    fn read_file(path: &Path) -> Option<Self> {
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Write settings to a specific directory.
    pub fn save_to(&self, dir: &Path) -> std::io::Result<()> {
        let settings_dir = dir.join(SETTINGS_DIR);
        fs::create_dir_all(&settings_dir)?;

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(settings_dir.join(SETTINGS_FILE), json.as_bytes())
    }
}
