use std::fs;
use std::io::{BufRead, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::detect::Format;
use crate::error::{Error, Result};
use crate::layout::{OutputLayout, Target};
use crate::prompt::prompt_base_name;

pub const DEFAULT_INPUT: &str = "image.ppm";

/// A decoded input image and the format it was recognised as.
pub struct Loaded {
    pub image: DynamicImage,
    pub format: Option<Format>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input_format: Option<Format>,
    pub width: u32,
    pub height: u32,
    pub written: Vec<Target>,
}

/// Loads one image and writes it once per output format.
#[derive(Debug, Clone)]
pub struct Converter {
    input: PathBuf,
    layout: OutputLayout,
}

impl Converter {
    pub fn new(input: impl Into<PathBuf>, layout: OutputLayout) -> Self {
        Self {
            input: input.into(),
            layout,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Prompts for the base name, then runs the conversion.
    pub fn run_interactive(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Conversion> {
        let name = prompt_base_name(input, output)?;
        self.run(&name)
    }

    pub fn run(&self, name: &str) -> Result<Conversion> {
        let loaded = self.load()?;
        let targets = self.layout.targets(name);

        // No rollback: earlier targets stay on disk if a later one fails.
        for target in &targets {
            self.save(&loaded.image, target)?;
        }

        Ok(Conversion {
            input_format: loaded.format,
            width: loaded.image.width(),
            height: loaded.image.height(),
            written: targets,
        })
    }

    pub fn load(&self) -> Result<Loaded> {
        let bytes = fs::read(&self.input).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::InputNotFound {
                path: self.input.clone(),
            },
            _ => Error::Io(e),
        })?;

        // Reported only; decoding goes by content.
        let filename = self.input.file_name().map(|n| n.to_string_lossy());
        let format = Format::detect(filename.as_deref(), &bytes);

        let decode_err = |message: String| Error::Decode {
            path: self.input.clone(),
            message,
        };

        let image = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| decode_err(e.to_string()))?
            .decode()
            .map_err(|e| decode_err(e.to_string()))?;
        log::debug!(
            "decoded {} as {} ({}x{}, {:?})",
            self.input.display(),
            format.map_or_else(|| "unknown".to_string(), |f| f.to_string()),
            image.width(),
            image.height(),
            image.color()
        );

        Ok(Loaded { image, format })
    }

    /// Writes `image` to `target`. The target's directory must already exist.
    pub fn save(&self, image: &DynamicImage, target: &Target) -> Result<()> {
        let dir = target.path.parent().unwrap_or(Path::new(""));
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            log::debug!("missing output directory {}", dir.display());
            return Err(Error::OutputDirMissing {
                path: dir.to_path_buf(),
            });
        }

        let encoder = crate::formats::get_encoder(target.format)?;
        let file = fs::File::create(&target.path)
            .map_err(|e| Error::from_write(target.path.clone(), e))?;
        let mut writer = BufWriter::new(file);

        encoder
            .encode(image, &mut writer)
            .map_err(|e| Error::from_encode(target.path.clone(), e))?;
        writer
            .flush()
            .map_err(|e| Error::from_write(target.path.clone(), e))?;

        log::info!(
            "wrote {} ({})",
            target.path.display(),
            encoder.format_name()
        );
        Ok(())
    }
}
