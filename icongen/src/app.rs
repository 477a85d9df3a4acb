use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::concept;
use crate::configuration::Configuration;
use crate::generator;
use crate::rasterizer::{self, Rasterizer};
use crate::summary;

/// The width of the banner rules.
const RULE_WIDTH: usize = 50;

/// Writes a banner line framed by rules.
///
/// # Arguments
/// *  `output` - The destination.
/// *  `text` - The banner text.
fn banner<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: Write,
{
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(output, "{}", rule)?;
    writeln!(output, "{}", text)?;
    writeln!(output, "{}", rule)?;
    writeln!(output)
}

/// Starts the generator.
///
/// The rasterizer is created first; if that fails, nothing else happens.
/// The configuration is loaded next, and then the session runs.
///
/// # Arguments
/// *  `engine` - Creates the rasterizer.
/// *  `configuration` - Loads the configuration.
/// *  `input` - The source of user input.
/// *  `output` - The destination of console output.
pub fn run<E, R, C, I, W>(
    engine: E,
    configuration: C,
    input: &mut I,
    output: &mut W,
) -> Result<(), Box<dyn Error>>
where
    E: FnOnce() -> Result<R, rasterizer::Error>,
    R: Rasterizer,
    C: FnOnce() -> io::Result<Configuration>,
    I: BufRead,
    W: Write,
{
    let rasterizer = engine()?;
    let configuration = configuration()
        .map_err(|e| format!("failed to load configuration: {}", e))?;

    session(&rasterizer, &configuration, input, output)
}

/// Runs one interactive session: select a concept, validate its source,
/// generate every icon and summarise the result.
///
/// # Arguments
/// *  `rasterizer` - The rasterizer to use.
/// *  `configuration` - The application configuration.
/// *  `input` - The source of user input.
/// *  `output` - The destination of console output.
pub fn session<R, I, W>(
    rasterizer: &R,
    configuration: &Configuration,
    input: &mut I,
    output: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: Rasterizer,
    I: BufRead,
    W: Write,
{
    banner(output, "WatchOrNot App Icon Generator")?;

    let concept =
        concept::prompt(input, output, configuration.default_concept())?
            .concept();
    let source = concept.source(configuration.source_directory());
    generator::validate_source(&source)?;

    writeln!(output)?;
    writeln!(output, "Selected: {}", concept.name)?;
    writeln!(output, "Generating app icons from: {}", source.display())?;
    writeln!(output)?;

    let set = configuration.icon_set();
    let directory = configuration.output_directory();
    generator::run_batch(rasterizer, &source, set, directory, output)?;

    writeln!(output)?;
    banner(output, "✓ All icons generated successfully!")?;

    summary::report(&summary::collect(directory, set.specs()), output)?;
    summary::next_steps(set, output)?;

    Ok(())
}
