//! Shader embedding library
//!
//! Scans a directory for vertex, geometry and fragment shader sources and
//! bakes them into `Shaders.h` as C++ raw string constants, so the shaders
//! ship inside the binary instead of being loaded at runtime.
//!
//! Shaders are recognized purely by filename: a name containing `vert`,
//! `geom` or `frag` (checked in that order) is embedded as
//! `<basename>Vertex`, `<basename>Geometry` or `<basename>Fragment`.

pub mod collector;
pub mod error;
pub mod generators;
pub mod model;
pub mod writer;

use std::path::Path;

pub use error::{EmbedError, Result};
pub use model::{GeneratedHeader, ShaderFile, ShaderKind};
pub use writer::WriteOutcome;

/// Name of the generated header, always placed in the scanned directory
pub const OUTPUT_FILE: &str = "Shaders.h";

/// Build the header text for every shader in `dir`
pub fn render_dir(dir: &Path) -> Result<String> {
    let shaders = collector::collect_shaders(dir)?;
    let header = GeneratedHeader::from_shaders(shaders);

    for id in header.duplicate_identifiers() {
        tracing::warn!("Identifier {} is generated more than once", id);
    }

    generators::cpp::generate_header(&header)
}

/// Regenerate `dir/Shaders.h`, leaving it untouched when nothing changed
pub fn generate_in(dir: &Path) -> Result<WriteOutcome> {
    let output = render_dir(dir)?;
    writer::write_if_changed(&dir.join(OUTPUT_FILE), &output)
}

/// Check that `dir/Shaders.h` matches what [`generate_in`] would write
pub fn check_in(dir: &Path) -> Result<bool> {
    let output = render_dir(dir)?;
    writer::is_in_sync(&dir.join(OUTPUT_FILE), &output)
}
