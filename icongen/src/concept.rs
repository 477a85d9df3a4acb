use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// A named choice of source icon design.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Concept {
    /// The short code used to select this concept.
    pub key: &'static str,

    /// The human readable name.
    pub name: &'static str,

    /// The file name of the source SVG.
    pub file: &'static str,
}

/// All known concepts, in menu order.
pub const CONCEPTS: [Concept; 2] = [
    Concept {
        key: "1",
        name: "Concept 1 - Camera + Film Strip (cinematic)",
        file: "concept-1-camera-filmstrip.svg",
    },
    Concept {
        key: "4",
        name: "Concept 4 - Minimalist W + Camera \
            (RECOMMENDED - clean, scalable)",
        file: "concept-4-minimalist-w.svg",
    },
];

/// The key of the concept used when the selection is not recognised.
pub const DEFAULT_KEY: &str = "4";

/// The outcome of a concept selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The input named a known concept.
    Chosen(&'static Concept),

    /// The input was not recognised, so the default concept was used.
    Fallback(&'static Concept),
}

impl Concept {
    /// The path of the source SVG for this concept.
    ///
    /// # Arguments
    /// *  `directory` - The directory containing the source files.
    pub fn source(&self, directory: &Path) -> PathBuf {
        directory.join(self.file)
    }
}

impl Selection {
    /// The selected concept, regardless of how it was selected.
    pub fn concept(&self) -> &'static Concept {
        use Selection::*;
        match self {
            Chosen(c) | Fallback(c) => c,
        }
    }
}

/// Looks up a concept by its key.
pub fn find(key: &str) -> Option<&'static Concept> {
    CONCEPTS.iter().find(|c| c.key == key)
}

/// The built in default concept.
pub fn default_concept() -> &'static Concept {
    // DEFAULT_KEY is one of the keys of CONCEPTS
    find(DEFAULT_KEY).unwrap_or(&CONCEPTS[CONCEPTS.len() - 1])
}

/// Selects a concept from user input.
///
/// Surrounding whitespace is ignored. Input that does not match a key
/// selects `default`.
///
/// # Arguments
/// *  `input` - The raw user input.
/// *  `default` - The concept to use for unrecognised input.
pub fn select(input: &str, default: &'static Concept) -> Selection {
    match find(input.trim()) {
        Some(concept) => Selection::Chosen(concept),
        None => Selection::Fallback(default),
    }
}

/// Presents the concept menu, reads a single line and selects a concept.
///
/// End of input is treated like an unrecognised selection.
///
/// # Arguments
/// *  `input` - The source of user input.
/// *  `output` - The destination of the menu and prompt.
/// *  `default` - The concept to use for unrecognised input.
pub fn prompt<R, W>(
    input: &mut R,
    output: &mut W,
    default: &'static Concept,
) -> io::Result<Selection>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Available icon concepts:")?;
    for concept in CONCEPTS.iter() {
        writeln!(output, "  {}) {}", concept.key, concept.name)?;
    }
    writeln!(output)?;
    write!(
        output,
        "Which concept would you like to use? [{}]: ",
        CONCEPTS
            .iter()
            .map(|c| c.key)
            .collect::<Vec<_>>()
            .join("/"),
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selection = select(&line, default);
    if let Selection::Fallback(concept) = selection {
        log::warn!("Unrecognised selection {:?}", line.trim());
        if concept.key == DEFAULT_KEY {
            writeln!(
                output,
                "Invalid selection. Using concept {} (recommended).",
                concept.key,
            )?;
        } else {
            writeln!(
                output,
                "Invalid selection. Using concept {}.",
                concept.key,
            )?;
        }
    }

    Ok(selection)
}
