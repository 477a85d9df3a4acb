use std::path::Path;

use super::{Error, Rasterizer};

/// The rasterizer used when no rendering backend is compiled in.
pub struct Engine;

impl Engine {
    /// Attempts to create a rasterizer.
    ///
    /// A dummy rasterizer is never available.
    pub fn new() -> Result<Self, Error> {
        Err(Error::Unavailable)
    }
}

impl Rasterizer for Engine {
    fn rasterize(
        &self,
        _source: &Path,
        _size: u32,
        _target: &Path,
    ) -> Result<(), Error> {
        Err(Error::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable() {
        assert!(matches!(Engine::new(), Err(Error::Unavailable)));
        assert!(matches!(
            Engine.rasterize(Path::new("a.svg"), 1, Path::new("a.png")),
            Err(Error::Unavailable),
        ));
    }
}
