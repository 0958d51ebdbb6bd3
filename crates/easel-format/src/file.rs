use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use easel_engine::shapes::ShapeCommand;

use crate::error::PaintFileError;
use crate::parser::parse_reader;
use crate::serializer::{write_shapes, SaveOptions};

/// Reads and parses the save file at `path`.
///
/// The file is closed on every exit path, including parse failures.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<ShapeCommand>, PaintFileError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let shapes = parse_reader(reader)?;
    log::info!("loaded {} shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}

/// Writes `shapes` to `path`, replacing any existing file.
pub fn save_file(
    path: impl AsRef<Path>,
    shapes: &[ShapeCommand],
    opts: &SaveOptions,
) -> Result<(), PaintFileError> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_shapes(shapes, writer, opts)?;
    log::info!("saved {} shapes to {}", shapes.len(), path.display());
    Ok(())
}
