//! Where converted frames are written.
//!
//! The output root holds one subdirectory per format. Neither the root nor the
//! subdirectories are created here; they must exist before a conversion runs.

use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::detect::Format;

pub const DEFAULT_OUTPUT_ROOT: &str = "RayTracedImages";

/// Formats written for every conversion, in save order.
pub const OUTPUT_FORMATS: [Format; 2] = [Format::Ppm, Format::Png];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub format: Format,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, format: Format) -> PathBuf {
        match format {
            Format::Ppm => self.root.join("ppmImages"),
            Format::Png => self.root.join("pngImages"),
        }
    }

    /// Path of `<name>.<ext>` inside the directory for `format`.
    ///
    /// The name is appended verbatim: an empty name gives a bare `.ppm`, and a
    /// name with separators, leading ones included, points into nested
    /// directories below the format directory.
    pub fn target(&self, format: Format, name: &str) -> Target {
        let mut path = OsString::from(self.dir(format));
        path.push(MAIN_SEPARATOR_STR);
        path.push(name);
        path.push(".");
        path.push(format.extension());
        Target {
            format,
            path: PathBuf::from(path),
        }
    }

    pub fn targets(&self, name: &str) -> Vec<Target> {
        OUTPUT_FORMATS
            .iter()
            .map(|&format| self.target(format, name))
            .collect()
    }
}
