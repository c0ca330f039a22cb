use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ppm,
    Png,
}

impl Format {
    pub fn detect(filename: Option<&str>, bytes: &[u8]) -> Option<Self> {
        if let Some(name) = filename
            && let Some(fmt) = Self::from_extension(name)
        {
            return Some(fmt);
        }
        Self::from_magic_bytes(bytes)
    }

    pub fn from_extension(filename: &str) -> Option<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())?;

        match ext.as_str() {
            "ppm" | "pnm" => Some(Self::Ppm),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 3 {
            return None;
        }

        // PNG: \x89PNG
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // PPM: P3 (ASCII) or P6 (binary), followed by whitespace
        if (bytes.starts_with(b"P3") || bytes.starts_with(b"P6"))
            && bytes[2].is_ascii_whitespace()
        {
            return Some(Self::Ppm);
        }

        None
    }

    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Png => "png",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ppm => write!(f, "ppm"),
            Self::Png => write!(f, "png"),
        }
    }
}
