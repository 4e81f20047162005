//! File-backed namespace snapshots.
//!
//! A notebook adapter exports its top-level namespace as JSON, YAML or TOML;
//! the decoder is picked from the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use crate::namespace::Namespace;
use crate::traits::{SnapshotDecoder, SourceError};

/// JSON snapshots.
#[derive(Debug, Default)]
pub struct JsonDecoder;

impl SnapshotDecoder for JsonDecoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn decode(&self, source: &str) -> Result<Namespace, SourceError> {
        serde_json::from_str(source).map_err(|e| SourceError::Decode {
            format: self.name(),
            message: e.to_string(),
        })
    }
}

/// YAML snapshots.
#[derive(Debug, Default)]
pub struct YamlDecoder;

impl SnapshotDecoder for YamlDecoder {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn extensions(&self) -> &[&'static str] {
        &["yaml", "yml"]
    }

    fn decode(&self, source: &str) -> Result<Namespace, SourceError> {
        serde_yaml::from_str(source).map_err(|e| SourceError::Decode {
            format: self.name(),
            message: e.to_string(),
        })
    }
}

/// TOML snapshots.
#[derive(Debug, Default)]
pub struct TomlDecoder;

impl SnapshotDecoder for TomlDecoder {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn extensions(&self) -> &[&'static str] {
        &["toml"]
    }

    fn decode(&self, source: &str) -> Result<Namespace, SourceError> {
        toml::from_str(source).map_err(|e| SourceError::Decode {
            format: self.name(),
            message: e.to_string(),
        })
    }
}

/// A namespace snapshot stored on disk.
pub struct SnapshotFile {
    path: PathBuf,
    decoders: Vec<Box<dyn SnapshotDecoder>>,
}

impl SnapshotFile {
    /// Create a snapshot reader with the built-in decoders.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            decoders: vec![
                Box::new(JsonDecoder),
                Box::new(YamlDecoder),
                Box::new(TomlDecoder),
            ],
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find the decoder for this file's extension (case-insensitive).
    pub fn decoder(&self) -> Result<&dyn SnapshotDecoder, SourceError> {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        self.decoders
            .iter()
            .find(|d| d.extensions().iter().any(|e| *e == ext))
            .map(|d| &**d)
            .ok_or_else(|| SourceError::UnsupportedFormat(self.path.display().to_string()))
    }

    /// Read and decode the snapshot.
    pub fn load(&self) -> Result<Namespace, SourceError> {
        let decoder = self.decoder()?;

        let content = fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let namespace = decoder.decode(&content)?;

        tracing::debug!(
            "Loaded {} namespace entries from {} ({})",
            namespace.len(),
            self.path.display(),
            decoder.name()
        );

        Ok(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{NamespaceValue, DEFAULT_MODULE};
    use crate::types::TypeAnnotation;
    use tempfile::tempdir;

    #[test]
    fn loads_json_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("namespace.json");
        fs::write(
            &path,
            r#"{
  "module": "__main__",
  "entries": {
    "add": {
      "kind": "function",
      "parameters": [
        {"name": "a", "annotation": {"kind": "named", "name": "int"}}
      ],
      "returns": {"kind": "named", "name": "int"},
      "docstring": "Adds."
    }
  }
}"#,
        )
        .unwrap();

        let ns = SnapshotFile::new(&path).load().unwrap();

        let Some(NamespaceValue::Function(add)) = ns.entries.get("add") else {
            panic!("add should be a function");
        };
        assert_eq!(add.returns, Some(TypeAnnotation::named("int")));
        assert_eq!(add.docstring.as_deref(), Some("Adds."));
    }

    #[test]
    fn loads_yaml_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("namespace.YML");
        fs::write(
            &path,
            "entries:\n  greet:\n    kind: function\n    docstring: Say hello.\n  pd:\n    kind: value\n    type_name: module\n",
        )
        .unwrap();

        let ns = SnapshotFile::new(&path).load().unwrap();

        assert_eq!(ns.module, DEFAULT_MODULE);
        assert_eq!(ns.len(), 2);
        assert!(matches!(ns.entries["greet"], NamespaceValue::Function(_)));
    }

    #[test]
    fn loads_toml_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("namespace.toml");
        fs::write(
            &path,
            "module = \"__main__\"\n\n[entries.ping]\nkind = \"function\"\ndocstring = \"Ping.\"\n",
        )
        .unwrap();

        let ns = SnapshotFile::new(&path).load().unwrap();

        assert!(matches!(ns.entries["ping"], NamespaceValue::Function(_)));
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = SnapshotFile::new("namespace.pickle").load();
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn reports_missing_file() {
        let temp = tempdir().unwrap();
        let result = SnapshotFile::new(temp.path().join("missing.json")).load();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn reports_decode_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = SnapshotFile::new(&path).load();

        assert!(matches!(
            result,
            Err(SourceError::Decode { format: "json", .. })
        ));
    }
}
