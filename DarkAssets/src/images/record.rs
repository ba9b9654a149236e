//! Typed image filenames
//!
//! Source images follow `name[-dark][@2x|@3x][~iphone|~ipad].(png|jpg)`.
//! [`ImageFileRecord::parse`] splits a filename into those parts so the
//! linker can branch on fields instead of substrings.

use std::fmt;

/// Marker for the dark appearance variant
pub const DARK_MARKER: &str = "-dark";

/// Density multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    X1,
    X2,
    X3,
}

impl Scale {
    /// All scales in ascending order
    pub const ALL: [Scale; 3] = [Scale::X1, Scale::X2, Scale::X3];

    /// Filename suffix (`""`, `"@2x"`, `"@3x"`)
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::X1 => "",
            Self::X2 => "@2x",
            Self::X3 => "@3x",
        }
    }

    /// Value of the descriptor `scale` field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X1 => "1x",
            Self::X2 => "2x",
            Self::X3 => "3x",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device modifier suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Iphone,
    Ipad,
}

impl Device {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Iphone => "~iphone",
            Self::Ipad => "~ipad",
        }
    }
}

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpg,
}

impl ImageFormat {
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            _ => None,
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// A parsed source image filename
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFileRecord {
    /// Logical name without `-dark`, density or device suffix
    pub name: String,
    pub dark: bool,
    pub scale: Scale,
    pub device: Option<Device>,
    pub format: ImageFormat,
}

impl ImageFileRecord {
    /// Parse a filename, returning `None` for unsupported names
    #[must_use]
    pub fn parse(filename: &str) -> Option<Self> {
        let (stem, ext) = filename.rsplit_once('.')?;
        let format = ImageFormat::from_extension(ext)?;

        let (stem, device) = if let Some(rest) = stem.strip_suffix(Device::Iphone.suffix()) {
            (rest, Some(Device::Iphone))
        } else if let Some(rest) = stem.strip_suffix(Device::Ipad.suffix()) {
            (rest, Some(Device::Ipad))
        } else {
            (stem, None)
        };

        let (stem, scale) = if let Some(rest) = stem.strip_suffix(Scale::X2.suffix()) {
            (rest, Scale::X2)
        } else if let Some(rest) = stem.strip_suffix(Scale::X3.suffix()) {
            (rest, Scale::X3)
        } else {
            (stem, Scale::X1)
        };

        let dark = stem.contains(DARK_MARKER);
        let name = stem.replace(DARK_MARKER, "");
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name,
            dark,
            scale,
            device,
            format,
        })
    }

    fn device_suffix(&self) -> &'static str {
        self.device.map_or("", Device::suffix)
    }

    /// Name shared by every appearance and density of this image
    #[must_use]
    pub fn canonical_name(&self) -> String {
        format!("{}{}", self.name, self.device_suffix())
    }

    /// Path the catalog compiler hashes to name the image set
    #[must_use]
    pub fn logical_path(&self) -> String {
        format!("images/{}.{}", self.canonical_name(), self.format.extension())
    }

    /// Filename of the dark sibling at `scale`
    #[must_use]
    pub fn dark_filename(&self, scale: Scale) -> String {
        format!(
            "{}{DARK_MARKER}{}{}.{}",
            self.name,
            scale.suffix(),
            self.device_suffix(),
            self.format.extension()
        )
    }

    /// Whether this file carries a density suffix
    #[must_use]
    pub fn has_density_suffix(&self) -> bool {
        self.scale != Scale::X1
    }
}
