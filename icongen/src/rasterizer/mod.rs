use std::error;
use std::fmt;
use std::io;
use std::path::Path;

#[cfg(not(feature = "rasterize_resvg"))]
pub mod dummy;
#[cfg(not(feature = "rasterize_resvg"))]
pub use self::dummy as driver;

#[cfg(feature = "rasterize_resvg")]
pub mod resvg;
#[cfg(feature = "rasterize_resvg")]
pub use self::resvg as driver;

/// An error relating to rasterization.
#[derive(Debug)]
pub enum Error {
    /// No rasterizer was compiled into this binary.
    #[cfg_attr(feature = "rasterize_resvg", allow(unused))]
    Unavailable,

    /// The source could not be read, or the target could not be written.
    Io(io::Error),

    /// The source is not a valid vector image.
    #[cfg_attr(not(feature = "rasterize_resvg"), allow(unused))]
    Parse(String),

    /// A pixmap of the requested size cannot be created.
    #[cfg_attr(not(feature = "rasterize_resvg"), allow(unused))]
    Size(u32),

    /// The rendered image could not be encoded.
    #[cfg_attr(not(feature = "rasterize_resvg"), allow(unused))]
    Encode(String),
}

/// A converter of vector images to square raster images.
pub trait Rasterizer {
    /// Renders a vector image to a PNG file of exactly `size` × `size`
    /// pixels.
    ///
    /// The source is scaled uniformly to fit the target and centered; any
    /// remaining area is transparent. An existing file at `target` is
    /// overwritten.
    ///
    /// # Arguments
    /// *  `source` - The source SVG.
    /// *  `size` - The width and height of the target.
    /// *  `target` - The target PNG.
    fn rasterize(
        &self,
        source: &Path,
        size: u32,
        target: &Path,
    ) -> Result<(), Error>;
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            Unavailable => write!(
                f,
                "no rasterizer available; \
                rebuild with `cargo build --features rasterize_resvg`",
            ),
            Io(e) => e.fmt(f),
            Parse(e) => write!(f, "invalid SVG: {}", e),
            Size(size) => write!(f, "invalid dimensions: {} × {}", size, size),
            Encode(e) => write!(f, "failed to encode PNG: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use Error::*;
        match self {
            Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(source: io::Error) -> Self {
        Self::Io(source)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display() {
        assert!(Error::Unavailable
            .to_string()
            .contains("--features rasterize_resvg"));
        assert_eq!(
            Error::Parse("unexpected end".into()).to_string(),
            "invalid SVG: unexpected end",
        );
        assert_eq!(Error::Size(0).to_string(), "invalid dimensions: 0 × 0");
        assert_eq!(
            Error::Encode("no data".into()).to_string(),
            "failed to encode PNG: no data",
        );
    }

    #[test]
    fn io_source() {
        let e: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(e.to_string(), "gone");
        assert!(e.source().is_some());
        assert!(Error::Size(1).source().is_none());
    }
}
