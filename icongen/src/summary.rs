use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::icons::{IconSet, IconSpec};

/// A generated file found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The file name.
    pub filename: &'static str,

    /// The file size, in bytes.
    pub bytes: u64,
}

impl Entry {
    /// The file size, in kilobytes.
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({:.1} KB)", self.filename, self.kilobytes())
    }
}

/// Collects the icons of a table that currently exist.
///
/// Icons without a file are skipped.
///
/// # Arguments
/// *  `directory` - The directory containing the icons.
/// *  `specs` - The icons to look for.
pub fn collect(directory: &Path, specs: &[IconSpec]) -> Vec<Entry> {
    specs
        .iter()
        .filter_map(|spec| match fs::metadata(directory.join(spec.filename)) {
            Ok(metadata) if metadata.is_file() => Some(Entry {
                filename: spec.filename,
                bytes: metadata.len(),
            }),
            _ => {
                log::debug!("Skipping missing {}", spec.filename);
                None
            }
        })
        .collect()
}

/// Writes the list of generated files.
///
/// # Arguments
/// *  `entries` - The files to list.
/// *  `output` - The destination.
pub fn report<W>(entries: &[Entry], output: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(output, "Generated files:")?;
    for entry in entries {
        writeln!(output, "  {}", entry)?;
    }
    writeln!(output)
}

/// Writes the guidance shown once all icons are generated.
///
/// # Arguments
/// *  `set` - The generated icon set.
/// *  `output` - The destination.
pub fn next_steps<W>(set: IconSet, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    let preview = set.preview().filename;
    writeln!(output, "Next steps:")?;
    writeln!(
        output,
        "  1. Review the generated icons (especially {})",
        preview,
    )?;
    writeln!(
        output,
        "  2. Verify {} references all files",
        set.manifest(),
    )?;
    match set {
        IconSet::Ios => {
            writeln!(
                output,
                "  3. Open Xcode and verify icons appear correctly",
            )?;
            writeln!(output, "  4. Test on device at all sizes")?;
        }
        IconSet::Web => {
            writeln!(
                output,
                "  3. Reload the app and check the installed icon",
            )?;
        }
    }
    writeln!(output)?;
    writeln!(output, "Tip: Preview the largest icon:")?;
    writeln!(output, "  open {}", preview)?;
    writeln!(output)
}
