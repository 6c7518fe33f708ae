//! Shader discovery and classification

use std::path::Path;

use crate::error::{EmbedError, Result};
use crate::model::{ShaderFile, ShaderKind};

/// Collect every classifiable shader file directly inside `dir`.
///
/// Entries are visited in filename order. Each recognized shader is
/// announced on stdout as `<Kind> shader  <filename>`; unrecognized names
/// are skipped without output.
pub fn collect_shaders(dir: &Path) -> Result<Vec<ShaderFile>> {
    let read_dir_err = |source| EmbedError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        entries.push(entry.map_err(read_dir_err)?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut shaders = Vec::new();
    for entry in entries {
        let file_name = entry.file_name();
        let Some(filename) = file_name.to_str() else {
            tracing::debug!("Skipping non UTF-8 name {:?}", file_name);
            continue;
        };

        let Some(kind) = ShaderKind::classify(filename) else {
            continue;
        };

        let path = entry.path();
        if path.is_dir() {
            tracing::debug!("Skipping directory {}", path.display());
            continue;
        }

        println!("{} shader  {}", kind, filename);

        let content = std::fs::read_to_string(&path)
            .map_err(|source| EmbedError::ReadShader { path, source })?;

        shaders.push(ShaderFile {
            filename: filename.to_string(),
            kind,
            content,
        });
    }

    Ok(shaders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_classifies_and_skips() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.frag"), "void main() {}\n").unwrap();
        std::fs::write(dir.path().join("a.vert"), "#version 330\n").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "not a shader").unwrap();
        std::fs::create_dir(dir.path().join("vert_cache")).unwrap();

        let shaders = collect_shaders(dir.path()).unwrap();

        assert_eq!(shaders.len(), 2);
        assert_eq!(shaders[0].filename, "a.vert");
        assert_eq!(shaders[0].kind, ShaderKind::Vertex);
        assert_eq!(shaders[0].content, "#version 330\n");
        assert_eq!(shaders[1].filename, "b.frag");
        assert_eq!(shaders[1].kind, ShaderKind::Fragment);
    }

    #[test]
    fn test_collect_keeps_exact_content() {
        let dir = TempDir::new().unwrap();
        let source = "layout(location = 0) in vec3 pos;\r\n\tvoid main() {}\n\n";
        std::fs::write(dir.path().join("mesh.vert"), source).unwrap();

        let shaders = collect_shaders(dir.path()).unwrap();
        assert_eq!(shaders[0].content, source);
    }

    #[test]
    fn test_collect_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(collect_shaders(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = collect_shaders(&missing).unwrap_err();
        assert!(matches!(err, EmbedError::ReadDir { .. }));
    }

    #[test]
    fn test_collect_rejects_binary_shader() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("blob.frag"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = collect_shaders(dir.path()).unwrap_err();
        assert!(matches!(err, EmbedError::ReadShader { .. }));
    }
}
