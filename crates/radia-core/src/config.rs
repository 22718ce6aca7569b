use crate::color::Rgb;
use crate::models::{CanvasSize, Variant};
use crate::palette::Palette;
use crate::session::Session;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["radia.yml", "radia.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct RadiaConfigHandle {
    pub config: RadiaConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl RadiaConfigHandle {
    fn with_config(config: RadiaConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RadiaConfig {
    pub defaults: RadiaDefaults,
}

impl RadiaConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Default session values applied at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RadiaDefaults {
    /// Starting color for the first palette slot
    pub color1: Rgb,
    /// Starting color for the second palette slot
    pub color2: Rgb,
    /// Starting color for the third palette slot
    pub color3: Rgb,
    /// Starting color for the fifth palette slot
    pub color5: Rgb,
    /// Layout variant selected at startup
    pub variant: Variant,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Initial interior stop offset in percent
    pub stop_position: f32,
}

impl RadiaDefaults {
    pub(crate) fn sanitize(&mut self) {
        let fallback = CanvasSize::default();
        if self.width == 0 {
            self.width = fallback.width;
        }
        if self.height == 0 {
            self.height = fallback.height;
        }
        if !self.stop_position.is_finite() {
            self.stop_position = 0.0;
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.color1, self.color2, self.color3, self.color5)
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Build a fresh session seeded from these defaults.
    pub fn session(&self) -> Session {
        Session {
            palette: self.palette(),
            variant: self.variant,
            size: self.size(),
            stop_position: self.stop_position,
            ..Session::new()
        }
    }
}

impl Default for RadiaDefaults {
    fn default() -> Self {
        let palette = Palette::default();
        let size = CanvasSize::default();
        Self {
            color1: palette.color1,
            color2: palette.color2,
            color3: palette.color3,
            color5: palette.color5,
            variant: Variant::default(),
            width: size.width,
            height: size.height,
            stop_position: 0.0,
        }
    }
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_radia_config(custom_path: Option<&Path>) -> RadiaConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<RadiaConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize();
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return RadiaConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse radia config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read radia config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No radia config found; using built-in defaults.".to_string());
    RadiaConfigHandle::with_config(RadiaConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("RADIA_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join(name));
            candidates.push(cwd.join("config").join(name));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(config_dir.join("radia").join(name));
        }
    }

    candidates
}

static RADIA_CONFIG_HANDLE: OnceLock<RadiaConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global radia configuration (loaded once per process).
pub fn radia_config_handle() -> &'static RadiaConfigHandle {
    RADIA_CONFIG_HANDLE.get_or_init(|| load_radia_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = radia_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[radia] Loaded config from {}", source.display());
        } else {
            eprintln!("[radia] Using built-in defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[radia] Config warning: {}", warning);
        }
    });
}
