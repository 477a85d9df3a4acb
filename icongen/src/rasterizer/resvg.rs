use std::fs;
use std::path::Path;
use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};

use super::{Error, Rasterizer};

/// A rasterizer rendering with _resvg_.
pub struct Engine {
    /// The fonts available to text in source images.
    fonts: Arc<fontdb::Database>,
}

impl Engine {
    /// Creates a rasterizer with the system fonts loaded.
    pub fn new() -> Result<Self, Error> {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        log::debug!("Loaded {} font faces", fonts.len());

        Ok(Self {
            fonts: Arc::new(fonts),
        })
    }

    /// Parses a source image.
    ///
    /// Relative references in the image are resolved against the directory
    /// containing it.
    ///
    /// # Arguments
    /// *  `source` - The source SVG.
    fn load(&self, source: &Path) -> Result<Tree, Error> {
        let options = Options {
            resources_dir: source.parent().map(Path::to_path_buf),
            fontdb: self.fonts.clone(),
            ..Options::default()
        };

        Tree::from_data(&fs::read(source)?, &options)
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

/// The transform scaling an image uniformly to fit a square of `size`
/// pixels, centered along the shorter axis.
///
/// # Arguments
/// *  `svg` - The image to fit.
/// *  `size` - The width and height of the square.
fn fit(svg: &Tree, size: u32) -> Transform {
    let (width, height) = (svg.size().width(), svg.size().height());
    let side = size as f32;
    let scale = (side / width).min(side / height);

    Transform::from_row(
        scale,
        0.0,
        0.0,
        scale,
        (side - width * scale) / 2.0,
        (side - height * scale) / 2.0,
    )
}

impl Rasterizer for Engine {
    fn rasterize(
        &self,
        source: &Path,
        size: u32,
        target: &Path,
    ) -> Result<(), Error> {
        let svg = self.load(source)?;
        let mut pixmap = Pixmap::new(size, size).ok_or(Error::Size(size))?;

        resvg::render(&svg, fit(&svg, size), &mut pixmap.as_mut());
        log::debug!(
            "Rendered {} at {} × {}",
            source.display(),
            size,
            size,
        );

        let png = pixmap
            .encode_png()
            .map_err(|e| Error::Encode(e.to_string()))?;
        fs::write(target, png)?;

        Ok(())
    }
}
