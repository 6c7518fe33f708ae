//! Intermediate representation for embedded shaders

/// Shader stage inferred from a filename marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Geometry,
    Fragment,
}

impl ShaderKind {
    /// Kinds in classification priority order
    pub const ALL: [ShaderKind; 3] = [Self::Vertex, Self::Geometry, Self::Fragment];

    /// Filename substring that selects this kind
    pub fn marker(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Geometry => "geom",
            Self::Fragment => "frag",
        }
    }

    /// Suffix appended to the basename to form the identifier
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "Vertex",
            Self::Geometry => "Geometry",
            Self::Fragment => "Fragment",
        }
    }

    /// Classify a filename by the first marker it contains.
    ///
    /// Matching is case-sensitive and ignores extensions, so `vertfrag.glsl`
    /// is a vertex shader and `Shader.VERT` is nothing at all.
    pub fn classify(filename: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| filename.contains(kind.marker()))
    }
}

impl std::fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified shader source read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFile {
    pub filename: String,
    pub kind: ShaderKind,
    pub content: String,
}

impl ShaderFile {
    /// Constant name emitted for this shader: `<basename><Kind>`
    pub fn identifier(&self) -> String {
        format!("{}{}", base_name(&self.filename), self.kind.name())
    }
}

/// Strip the final extension from a filename.
///
/// Leading dots belong to the name, so `.vert` has no extension while
/// `a.b.vert` becomes `a.b`.
pub fn base_name(filename: &str) -> &str {
    let stem_start = filename.len() - filename.trim_start_matches('.').len();
    match filename[stem_start..].rfind('.') {
        Some(dot) => &filename[..stem_start + dot],
        None => filename,
    }
}

/// One constant in the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub identifier: String,
    pub content: String,
}

/// Ordered set of constants making up `Shaders.h`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub entries: Vec<HeaderEntry>,
}

impl GeneratedHeader {
    pub fn from_shaders(shaders: Vec<ShaderFile>) -> Self {
        let entries = shaders
            .into_iter()
            .map(|shader| HeaderEntry {
                identifier: shader.identifier(),
                content: shader.content,
            })
            .collect();
        Self { entries }
    }

    /// Identifiers that appear more than once, in first-seen order
    pub fn duplicate_identifiers(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let id = entry.identifier.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}
