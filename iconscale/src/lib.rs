use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

/// Interpolation used when an image has to be scaled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => Self::Nearest,
            Filter::Triangle => Self::Triangle,
            Filter::CatmullRom => Self::CatmullRom,
            Filter::Gaussian => Self::Gaussian,
            Filter::Lanczos3 => Self::Lanczos3,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Triangle => write!(f, "triangle"),
            Self::CatmullRom => write!(f, "catmull-rom"),
            Self::Gaussian => write!(f, "gaussian"),
            Self::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(filter: &str) -> Result<Self> {
        Ok(match filter {
            "nearest" => Self::Nearest,
            "triangle" | "bilinear" => Self::Triangle,
            "catmull-rom" | "bicubic" => Self::CatmullRom,
            "gaussian" => Self::Gaussian,
            "lanczos3" | "antialias" => Self::Lanczos3,
            _ => anyhow::bail!("unsupported filter {}", filter),
        })
    }
}

/// A decoded image along with the format its content was read as.
pub struct Scaler {
    img: DynamicImage,
    format: ImageFormat,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        // decoding trusts the content, the extension is only a fallback
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let Some(format) = reader.format() else {
            anyhow::bail!("unknown image format");
        };
        let img = reader.decode()?;
        tracing::debug!(
            "decoded {} as {:?} {}x{}",
            path.display(),
            format,
            img.width(),
            img.height()
        );
        Ok(Self { img, format })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Format the image was decoded from.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Scales to exactly `width` x `height`, the aspect ratio is not kept.
    pub fn resize(&mut self, width: u32, height: u32, filter: Filter) {
        self.img = self.img.resize_exact(width, height, filter.into());
    }

    pub fn write<W: Write + Seek>(&self, w: &mut W, format: ImageFormat) -> Result<()> {
        self.encodable(format)
            .write_to(w, format)
            .with_context(|| format!("failed to encode {:?}", format))?;
        Ok(())
    }

    /// Writes the image in the format named by the extension of `path`, or in
    /// the decoded format when the extension is unknown.
    ///
    /// The whole image is encoded before `path` is touched, so an encoder
    /// error leaves an existing file intact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).unwrap_or(self.format);
        let mut buf = Cursor::new(Vec::new());
        self.write(&mut buf, format)?;
        std::fs::write(path, buf.into_inner())
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn encodable(&self, format: ImageFormat) -> Cow<'_, DynamicImage> {
        match (format, &self.img) {
            (ImageFormat::Jpeg, DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_)) => {
                Cow::Borrowed(&self.img)
            }
            (ImageFormat::Jpeg, img) => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
            _ => Cow::Borrowed(&self.img),
        }
    }
}
