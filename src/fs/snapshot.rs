//! Snapshot codec
//!
//! A snapshot is the whole tree plus the current path and a timestamp. It is
//! what gets written to the persistent store after every mutation and what
//! `export-fs` / `import-fs` exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{FsError, Node};

pub const SNAPSHOT_VERSION: &str = "1.0";

/// Borrowed view used when writing, so persisting never clones the tree.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView<'a> {
    pub root: &'a Node,
    pub current_path: &'a str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

impl<'a> SnapshotView<'a> {
    pub fn new(root: &'a Node, current_path: &'a str) -> Self {
        Self {
            root,
            current_path,
            timestamp: Utc::now(),
            version: SNAPSHOT_VERSION,
        }
    }
}

/// Owned snapshot produced by parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub root: Node,
    pub current_path: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Metadata reported after a load or import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub timestamp: Option<DateTime<Utc>>,
    pub current_path: String,
}

impl Snapshot {
    /// Parse and validate snapshot text.
    ///
    /// Only `root` and `currentPath` are required. The root must be a
    /// directory.
    pub fn parse(text: &str) -> Result<Self, FsError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| FsError::InvalidSnapshot(e.to_string()))?;

        for field in ["root", "currentPath"] {
            if value.get(field).map_or(true, |v| v.is_null()) {
                return Err(FsError::InvalidSnapshot(format!("missing '{}'", field)));
            }
        }

        let snapshot: Snapshot = serde_json::from_value(value)
            .map_err(|e| FsError::InvalidSnapshot(e.to_string()))?;

        if !snapshot.root.is_directory() {
            return Err(FsError::InvalidSnapshot("root is not a directory".to_string()));
        }
        Ok(snapshot)
    }

    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            timestamp: self.timestamp,
            current_path: self.current_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_serializes_expected_fields() {
        let root = Node::root();
        let json = serde_json::to_value(SnapshotView::new(&root, "/home/user")).unwrap();
        assert_eq!(json["currentPath"], "/home/user");
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["root"]["type"], "directory");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_parse_requires_root_and_current_path() {
        let err = Snapshot::parse(r#"{"currentPath": "/"}"#).unwrap_err();
        assert_eq!(err, FsError::InvalidSnapshot("missing 'root'".to_string()));

        let root = serde_json::to_string(&Node::root()).unwrap();
        let err = Snapshot::parse(&format!(r#"{{"root": {}}}"#, root)).unwrap_err();
        assert_eq!(err, FsError::InvalidSnapshot("missing 'currentPath'".to_string()));
    }

    #[test]
    fn test_parse_rejects_garbage_and_file_root() {
        assert!(matches!(Snapshot::parse("not json"), Err(FsError::InvalidSnapshot(_))));

        let text = r#"{"root": {"type": "file", "name": "/", "content": ""}, "currentPath": "/"}"#;
        assert!(matches!(Snapshot::parse(text), Err(FsError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_parse_without_timestamp() {
        let text = r#"{"root": {"type": "directory", "name": "/", "content": {}}, "currentPath": "/"}"#;
        let snapshot = Snapshot::parse(text).unwrap();
        assert_eq!(snapshot.timestamp, None);
        assert_eq!(snapshot.info().current_path, "/");
    }
}
