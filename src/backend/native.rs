//! Backend over a dynamically loaded SEUIF97 shared library.

use std::env;
use std::path::Path;
use std::sync::Once;

use super::{CorrelationBackend, InputPair};
use crate::error::{If97Error, Result};
use crate::properties::Property;
use crate::sys::Seuif97Library;

/// Drives the native SEUIF97 library instead of the built-in pure-Rust
/// formulation.
///
/// The library directory is discovered via the `SEUIF97_PATH`
/// environment variable (with `.env` support) or a short list of
/// conventional install locations.  All seven entry points are resolved
/// at construction; a missing library or symbol fails here, never at
/// evaluation time.
#[derive(Debug)]
pub struct NativeBackend {
    lib: Seuif97Library,
}

impl NativeBackend {
    /// Discover the library directory and load the library from it.
    pub fn new() -> Result<Self> {
        Self::load_dotenv();
        let dir = Self::find_seuif97_path()?;
        Self::from_dir(Path::new(&dir))
    }

    /// Load the library from an explicit directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            return Err(If97Error::LibraryNotFound(format!(
                "{} (directory does not exist)",
                dir.display()
            )));
        }
        let lib = Seuif97Library::load_from_dir(dir)
            .map_err(|e| If97Error::LibraryNotFound(e.to_string()))?;
        Ok(Self { lib })
    }

    // ── .env loading (once) ─────────────────────────────────────────

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            if dotenvy::dotenv().is_ok() {
                return;
            }
            if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
                let p = std::path::PathBuf::from(dir).join(".env");
                if p.exists() {
                    let _ = dotenvy::from_path(&p);
                    return;
                }
            }
            if let Ok(exe) = env::current_exe() {
                if let Some(dir) = exe.parent() {
                    let p = dir.join(".env");
                    if p.exists() {
                        let _ = dotenvy::from_path(&p);
                    }
                }
            }
        });
    }

    // ── Path discovery ──────────────────────────────────────────────

    fn find_seuif97_path() -> Result<String> {
        let mut tried = Vec::<String>::new();

        if let Ok(path) = env::var("SEUIF97_PATH") {
            if Path::new(&path).exists() {
                return Ok(path);
            }
            tried.push(format!("SEUIF97_PATH={path} (directory does not exist)"));
        }

        #[cfg(target_os = "windows")]
        let standard_paths = [r"C:\seuif97", r"C:\Program Files\seuif97"];
        #[cfg(target_os = "linux")]
        let standard_paths = ["/opt/seuif97", "/usr/local/lib/seuif97"];
        #[cfg(target_os = "macos")]
        let standard_paths = ["/opt/seuif97", "/usr/local/lib/seuif97"];

        for path in standard_paths {
            if Path::new(path).exists() {
                return Ok(path.to_string());
            }
            tried.push(format!("{path} (not found)"));
        }

        Err(If97Error::LibraryNotFound(format!(
            "SEUIF97 directory not found. Tried:\n  - {}\n\
             Set SEUIF97_PATH to the directory containing the SEUIF97 shared library.",
            tried.join("\n  - ")
        )))
    }
}

impl CorrelationBackend for NativeBackend {
    fn evaluate(&self, pair: InputPair, param1: f64, param2: f64, property: Property) -> f64 {
        let pid = property.backend_id();
        match pair {
            InputPair::PressureTemperature => self.lib.pt(param1, param2, pid),
            InputPair::PressureVolume => self.lib.pv(param1, param2, pid),
            InputPair::TemperatureVolume => self.lib.tv(param1, param2, pid),
            InputPair::TemperatureQuality => self.lib.tx(param1, param2, pid),
            InputPair::PressureQuality => self.lib.px(param1, param2, pid),
            InputPair::PressureEnthalpy => self.lib.ph(param1, param2, pid),
            InputPair::TemperatureEnthalpy => self.lib.th(param1, param2, pid),
        }
    }
}
