//! Write parsed branching data to other formats

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::Branching;

/// Write [Branching] data to a JSON file
///
/// Branches and universes are written as lists in the order they were read,
/// since their compound keys are not valid JSON object keys.
///
/// ```rust, no_run
/// # use stools_branching::{read_branching, write_json};
/// let branching = read_branching("path/to/file.coe").unwrap();
/// write_json(&branching, "branching.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(branching: &Branching, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, branching)?;
    writer.flush()?;
    Ok(())
}

/// Serialise [Branching] data to a JSON string
pub fn to_json_string(branching: &Branching) -> Result<String> {
    Ok(serde_json::to_string(branching)?)
}
