//! Low-level loading of the SEUIF97 shared library.
//!
//! This module dynamically loads the SEUIF97 DLL/so at runtime via
//! [`libloading`] and pre-resolves the seven input-pair entry points for
//! zero-overhead calls.

use std::os::raw::{c_double, c_int};
use std::path::Path;

use libloading::Library;

// ── Error type ──────────────────────────────────────────────────────
#[derive(Debug)]
pub enum Seuif97SysError {
    /// The DLL/so could not be found or loaded.
    LibraryLoadFailed(String),
    /// A required symbol was not found in the library.
    SymbolNotFound(String),
}

impl std::fmt::Display for Seuif97SysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LibraryLoadFailed(msg) => write!(f, "SEUIF97 library load failed: {msg}"),
            Self::SymbolNotFound(sym) => {
                write!(f, "Symbol not found in SEUIF97 library: {sym}")
            }
        }
    }
}

impl std::error::Error for Seuif97SysError {}

// ── Function pointer type ───────────────────────────────────────────

/// Every SEUIF97 input-pair entry point shares one signature:
/// `seupt(param1, param2, property_id) -> value`.
type FnPair = unsafe extern "C" fn(c_double, c_double, c_int) -> c_double;

// ── Dynamic library wrapper ─────────────────────────────────────────

/// Holds a dynamically-loaded SEUIF97 shared library with **pre-resolved
/// function pointers**.
///
/// All symbols are resolved once at construction time.  If any required
/// symbol is missing the constructor returns an error instead of
/// panicking later.
#[derive(Debug)]
pub struct Seuif97Library {
    /// The underlying library handle.  Must stay alive to keep the
    /// library loaded and the function pointers valid.
    _lib: Library,

    fn_pt: FnPair,
    fn_ph: FnPair,
    fn_pv: FnPair,
    fn_tv: FnPair,
    fn_th: FnPair,
    fn_px: FnPair,
    fn_tx: FnPair,
}

impl Seuif97Library {
    // ── Symbol resolution ───────────────────────────────────────────

    /// Resolve a single pair entry point.  Returns `Err(SymbolNotFound)`
    /// if the symbol is absent.
    fn resolve(lib: &Library, name: &[u8]) -> Result<FnPair, Seuif97SysError> {
        // SAFETY: every SEUIF97 pair entry point carries the FnPair
        // signature (two doubles and a property id in, double out).
        let sym: libloading::Symbol<FnPair> = unsafe { lib.get(name) }.map_err(|_| {
            // Strip trailing \0 for display.
            let display =
                String::from_utf8_lossy(&name[..name.len().saturating_sub(1)]).to_string();
            Seuif97SysError::SymbolNotFound(display)
        })?;
        Ok(*sym)
    }

    /// Resolve **all** required symbols from an already-loaded library.
    /// Fails on the first missing symbol.
    fn resolve_all(lib: Library) -> Result<Self, Seuif97SysError> {
        Ok(Self {
            fn_pt: Self::resolve(&lib, b"seupt\0")?,
            fn_ph: Self::resolve(&lib, b"seuph\0")?,
            fn_pv: Self::resolve(&lib, b"seupv\0")?,
            fn_tv: Self::resolve(&lib, b"seutv\0")?,
            fn_th: Self::resolve(&lib, b"seuth\0")?,
            fn_px: Self::resolve(&lib, b"seupx\0")?,
            fn_tx: Self::resolve(&lib, b"seutx\0")?,
            _lib: lib,
        })
    }

    // ── Constructors ────────────────────────────────────────────────

    /// Try to load the SEUIF97 shared library from a **directory** that
    /// contains the DLL / .so.  Common file names are tried
    /// automatically; if a candidate exists but cannot be loaded
    /// (e.g. architecture mismatch), the next candidate is tried.
    pub fn load_from_dir(dir: &Path) -> Result<Self, Seuif97SysError> {
        let candidates: &[&str] = if cfg!(target_os = "windows") {
            &["libseuif97.dll", "seuif97.dll"]
        } else if cfg!(target_os = "macos") {
            &["libseuif97.dylib"]
        } else {
            &["libseuif97.so"]
        };

        let mut errors = Vec::new();

        // 1. Try full paths inside the directory.
        for name in candidates {
            let full = dir.join(name);
            if full.exists() {
                match unsafe { Library::new(&full) } {
                    Ok(lib) => return Self::resolve_all(lib),
                    Err(e) => {
                        errors.push(format!("{}: {e}", full.display()));
                    }
                }
            }
        }

        // 2. Fall back to system-wide search (PATH / LD_LIBRARY_PATH)
        for name in candidates {
            if let Ok(lib) = unsafe { Library::new(*name) } {
                return Self::resolve_all(lib);
            }
        }

        let detail = if errors.is_empty() {
            format!(
                "No SEUIF97 library found in {} (tried: {candidates:?})",
                dir.display()
            )
        } else {
            format!(
                "SEUIF97 library found but could not be loaded:\n  - {}",
                errors.join("\n  - ")
            )
        };
        Err(Seuif97SysError::LibraryLoadFailed(detail))
    }

    /// Load the SEUIF97 shared library from an **exact file path**.
    pub fn load_from_file(path: &Path) -> Result<Self, Seuif97SysError> {
        let lib = unsafe { Library::new(path) }.map_err(|e| {
            Seuif97SysError::LibraryLoadFailed(format!("{}: {e}", path.display()))
        })?;
        Self::resolve_all(lib)
    }

    // ── SEUIF97 function wrappers ───────────────────────────────────
    //
    // Each method calls the pre-resolved function pointer directly; no
    // symbol lookup occurs at call time.  The calls take plain values
    // and return a double, so the wrappers are safe.

    /// Input pair (p, t): pressure [MPa], temperature [°C].
    pub fn pt(&self, pressure: f64, temperature: f64, pid: i32) -> f64 {
        unsafe { (self.fn_pt)(pressure, temperature, pid) }
    }

    /// Input pair (p, h): pressure [MPa], specific enthalpy [kJ/kg].
    pub fn ph(&self, pressure: f64, enthalpy: f64, pid: i32) -> f64 {
        unsafe { (self.fn_ph)(pressure, enthalpy, pid) }
    }

    /// Input pair (p, v): pressure [MPa], specific volume [m³/kg].
    pub fn pv(&self, pressure: f64, volume: f64, pid: i32) -> f64 {
        unsafe { (self.fn_pv)(pressure, volume, pid) }
    }

    /// Input pair (t, v): temperature [°C], specific volume [m³/kg].
    pub fn tv(&self, temperature: f64, volume: f64, pid: i32) -> f64 {
        unsafe { (self.fn_tv)(temperature, volume, pid) }
    }

    /// Input pair (t, h): temperature [°C], specific enthalpy [kJ/kg].
    pub fn th(&self, temperature: f64, enthalpy: f64, pid: i32) -> f64 {
        unsafe { (self.fn_th)(temperature, enthalpy, pid) }
    }

    /// Input pair (p, x): pressure [MPa], steam quality.
    pub fn px(&self, pressure: f64, quality: f64, pid: i32) -> f64 {
        unsafe { (self.fn_px)(pressure, quality, pid) }
    }

    /// Input pair (t, x): temperature [°C], steam quality.
    pub fn tx(&self, temperature: f64, quality: f64, pid: i32) -> f64 {
        unsafe { (self.fn_tx)(temperature, quality, pid) }
    }
}
