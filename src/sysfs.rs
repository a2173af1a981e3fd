
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};

pub const BRIGHTNESS: &str = "brightness";
pub const MAX_BRIGHTNESS: &str = "max_brightness";

/// The sysfs classes that expose brightness controls, in scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlClass {
    Backlight,
    Leds,
}

impl ControlClass {
    pub const ALL: [ControlClass; 2] = [ControlClass::Backlight, ControlClass::Leds];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ControlClass::Backlight => "backlight",
            ControlClass::Leds => "leds",
        }
    }

    #[inline]
    pub fn path(&self) -> PathBuf {
        PathBuf::from(format!("/sys/class/{}", self.name()))
    }

    pub fn default_dirs() -> Vec<PathBuf> {
        Self::ALL.iter().map(ControlClass::path).collect()
    }

    pub fn enum_controls(&self) -> Result<Vec<Control>> {
        scan_dir(&self.path())
    }
}

// stat errors other than NotFound (EACCES and friends) still mean the entry is there
fn entry_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(true)
}

/// A directory holding a `brightness` and a `max_brightness` file.
///
/// Only the path is kept, values are read from storage on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    path: PathBuf,
}

impl Control {
    /// Returns `None` unless `path` is a directory (or a symlink to one)
    /// containing both brightness files.
    pub fn from_path(path: &Path) -> Option<Control> {
        if !path.is_dir() {
            debug!("skipping {}: not a directory", path.display());
            return None;
        }

        for file in [BRIGHTNESS, MAX_BRIGHTNESS] {
            if !entry_exists(&path.join(file)) {
                debug!("skipping {}: no {}", path.display(), file);
                return None;
            }
        }

        Some(Self {
            path: path.to_path_buf(),
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    }

    pub fn read_value(&self, file: &str) -> Result<u64> {
        let path = self.path.join(file);
        let content = fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
        let token = content.split_whitespace().next().unwrap_or_default();
        debug!("read `{}' from {}", token, path.display());

        let value: i64 = token.parse().map_err(|source| Error::Parse {
            path: path.clone(),
            content: token.to_string(),
            source,
        })?;

        if value < 0 {
            return Err(Error::NegativeValue { path, value });
        }

        Ok(value as u64)
    }

    pub fn write_value(&self, file: &str, value: u64) -> Result<()> {
        let path = self.path.join(file);
        debug!("writing `{}' to {}", value, path.display());
        fs::write(&path, value.to_string()).map_err(|e| Error::io(path, e))
    }

    /// Can be 0 for LEDs whose driver never filled it in.
    #[inline]
    pub fn max_brightness(&self) -> Result<u64> {
        self.read_value(MAX_BRIGHTNESS)
    }

    #[inline]
    pub fn brightness(&self) -> Result<u64> {
        self.read_value(BRIGHTNESS)
    }

    #[inline]
    pub fn set_brightness(&self, value: u64) -> Result<()> {
        self.write_value(BRIGHTNESS, value)
    }
}

/// Controls found directly below `base`, ordered by file name.
pub fn scan_dir(base: &Path) -> Result<Vec<Control>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(base).map_err(|e| Error::io(base, e))? {
        entries.push(entry.map_err(|e| Error::io(base, e))?.path());
    }
    entries.sort();

    debug!("searching {} entries in {}", entries.len(), base.display());
    Ok(entries.iter().filter_map(|path| Control::from_path(path)).collect())
}

/// Scans every base directory in turn. The first one that can't be listed
/// fails the whole scan.
pub fn scan_dirs<P: AsRef<Path>>(bases: &[P]) -> Result<Vec<Control>> {
    let mut ret = Vec::new();
    for base in bases {
        ret.extend(scan_dir(base.as_ref())?);
    }

    Ok(ret)
}
