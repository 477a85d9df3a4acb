use std::error;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::icons::{IconSet, IconSpec};
use crate::rasterizer::{self, Rasterizer};

/// An error aborting icon generation.
#[derive(Debug)]
pub enum Error {
    /// The selected source image does not exist.
    MissingSource(PathBuf),

    /// The rasterizer failed to generate an icon.
    Rasterize(PathBuf, rasterizer::Error),

    /// Progress could not be written.
    Output(io::Error),
}

/// Ensures that a source image exists.
///
/// # Arguments
/// *  `source` - The source SVG.
pub fn validate_source(source: &Path) -> Result<(), Error> {
    if source.exists() {
        Ok(())
    } else {
        Err(Error::MissingSource(source.to_path_buf()))
    }
}

/// A path as shown in progress messages, without a leading `./`.
fn relative(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

/// Generates a single icon.
///
/// A progress line is written before the rasterizer is invoked.
///
/// # Arguments
/// *  `rasterizer` - The rasterizer to use.
/// *  `source` - The source SVG.
/// *  `size` - The width and height of the icon.
/// *  `target` - The target PNG.
/// *  `output` - The destination of progress messages.
pub fn generate_icon<R, W>(
    rasterizer: &R,
    source: &Path,
    size: u32,
    target: &Path,
    output: &mut W,
) -> Result<(), Error>
where
    R: Rasterizer,
    W: Write,
{
    writeln!(
        output,
        "  Generating {}x{} → {}",
        size,
        size,
        relative(target).display(),
    )?;
    log::debug!("Rasterizing {} at {}px", source.display(), size);

    rasterizer
        .rasterize(source, size, target)
        .map_err(|e| Error::Rasterize(target.to_path_buf(), e))
}

/// Generates every icon of a set.
///
/// Icons are generated one at a time in table order, with a header for each
/// progress group. The first failure aborts the batch; files already written
/// are left in place.
///
/// # Arguments
/// *  `rasterizer` - The rasterizer to use.
/// *  `source` - The source SVG.
/// *  `set` - The icons to generate.
/// *  `directory` - The directory receiving the icons.
/// *  `output` - The destination of progress messages.
pub fn run_batch<R, W>(
    rasterizer: &R,
    source: &Path,
    set: IconSet,
    directory: &Path,
    output: &mut W,
) -> Result<(), Error>
where
    R: Rasterizer,
    W: Write,
{
    let specs = set.specs();
    for (i, group) in set.groups().iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        if group.end - group.start == 1 {
            writeln!(output, "Generating {} icon...", group.label)?;
        } else {
            writeln!(output, "Generating {} icons...", group.label)?;
        }

        for IconSpec { size, filename } in group.of(specs) {
            generate_icon(
                rasterizer,
                source,
                *size,
                &directory.join(filename),
                output,
            )?;
        }
    }

    log::info!("Generated {} icons from {}", specs.len(), source.display());
    Ok(())
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            MissingSource(path) => {
                write!(f, "source file '{}' not found", path.display())
            }
            Rasterize(path, _) => {
                write!(f, "failed to generate {}", path.display())
            }
            Output(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use Error::*;
        match self {
            MissingSource(_) => None,
            Rasterize(_, e) => Some(e),
            Output(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(source: io::Error) -> Self {
        Self::Output(source)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use super::*;

    /// A rasterizer recording its calls and writing the size as content.
    #[derive(Default)]
    struct TestRasterizer {
        calls: RefCell<Vec<(u32, PathBuf)>>,
        fail_at: Option<usize>,
    }

    impl Rasterizer for TestRasterizer {
        fn rasterize(
            &self,
            _source: &Path,
            size: u32,
            target: &Path,
        ) -> Result<(), rasterizer::Error> {
            let mut calls = self.calls.borrow_mut();
            if self.fail_at == Some(calls.len()) {
                return Err(rasterizer::Error::Parse("test".into()));
            }
            calls.push((size, target.to_path_buf()));
            fs::write(target, size.to_string())?;
            Ok(())
        }
    }

    #[test]
    fn validate_missing() {
        let directory = tempfile::tempdir().unwrap();
        let source = directory.path().join("concept-4-minimalist-w.svg");

        match validate_source(&source) {
            Err(Error::MissingSource(path)) => assert_eq!(path, source),
            _ => panic!("expected missing source"),
        }
        assert!(Error::MissingSource(source.clone())
            .to_string()
            .contains("concept-4-minimalist-w.svg"));

        fs::write(&source, "<svg/>").unwrap();
        assert!(validate_source(&source).is_ok());
    }

    #[test]
    fn generate_one() {
        let directory = tempfile::tempdir().unwrap();
        let target = directory.path().join("icon-29.png");
        let rasterizer = TestRasterizer::default();
        let mut output = Vec::new();

        generate_icon(
            &rasterizer,
            Path::new("source.svg"),
            29,
            &target,
            &mut output,
        )
        .unwrap();

        assert_eq!(
            *rasterizer.calls.borrow(),
            vec![(29, target.clone())],
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("  Generating 29x29 → {}\n", target.display()),
        );
    }

    #[test]
    fn progress_path() {
        assert_eq!(
            relative(&Path::new(".").join("icon-20@2x.png")),
            Path::new("icon-20@2x.png"),
        );
        assert_eq!(
            relative(Path::new("out/icon-20.png")),
            Path::new("out/icon-20.png"),
        );
        assert_eq!(
            relative(Path::new("/tmp/icon-20.png")),
            Path::new("/tmp/icon-20.png"),
        );
    }

    #[test]
    fn batch_generates_all() {
        let directory = tempfile::tempdir().unwrap();
        let rasterizer = TestRasterizer::default();
        let mut output = Vec::new();

        run_batch(
            &rasterizer,
            Path::new("source.svg"),
            IconSet::Ios,
            directory.path(),
            &mut output,
        )
        .unwrap();

        let calls = rasterizer.calls.borrow();
        assert_eq!(calls.len(), 18);
        for ((size, path), spec) in calls.iter().zip(IconSet::Ios.specs()) {
            assert_eq!(*size, spec.size);
            assert_eq!(path, &directory.path().join(spec.filename));
            assert_eq!(fs::read_to_string(path).unwrap(), size.to_string());
        }

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Generating iPhone icons...\n"));
        assert!(output.contains("\n\nGenerating iPad icons...\n"));
        assert!(output.contains("\n\nGenerating App Store icon...\n"));
        assert_eq!(output.matches("  Generating ").count(), 18);
    }

    #[test]
    fn batch_aborts_on_failure() {
        let directory = tempfile::tempdir().unwrap();
        let rasterizer = TestRasterizer {
            fail_at: Some(3),
            ..TestRasterizer::default()
        };
        let mut output = Vec::new();

        let result = run_batch(
            &rasterizer,
            Path::new("source.svg"),
            IconSet::Ios,
            directory.path(),
            &mut output,
        );

        match result {
            Err(Error::Rasterize(path, rasterizer::Error::Parse(_))) => {
                assert_eq!(path, directory.path().join("icon-29@3x.png"))
            }
            _ => panic!("expected rasterizer failure"),
        }
        assert_eq!(rasterizer.calls.borrow().len(), 3);
        assert_eq!(fs::read_dir(directory.path()).unwrap().count(), 3);
    }

    #[cfg(feature = "rasterize_resvg")]
    #[test]
    fn batch_with_resvg() {
        use resvg::tiny_skia::Pixmap;

        let directory = tempfile::tempdir().unwrap();
        let source = directory.path().join("concept-4-minimalist-w.svg");
        fs::write(
            &source,
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
                <circle cx="32" cy="32" r="30" fill="#123456"/>
            </svg>"##,
        )
        .unwrap();
        let rasterizer = rasterizer::driver::Engine::new().unwrap();

        run_batch(
            &rasterizer,
            &source,
            IconSet::Ios,
            directory.path(),
            &mut io::sink(),
        )
        .unwrap();

        for spec in IconSet::Ios.specs() {
            let pixmap =
                Pixmap::load_png(directory.path().join(spec.filename))
                    .unwrap();
            assert_eq!(
                (pixmap.width(), pixmap.height()),
                (spec.size, spec.size),
            );
        }
    }
}
