//! File System Types
//!
//! Node model and error type for the virtual file store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Size reported for every directory, as `ls -l` shows it on ext4.
pub const DIRECTORY_SIZE: u64 = 4096;

pub const DIRECTORY_PERMISSIONS: &str = "drwxr-xr-x";
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("'{path}': No such file or directory")]
    NotFound { path: String },

    #[error("cannot create '{path}': parent directory not found")]
    ParentNotFound { path: String },

    #[error("'{path}': File exists")]
    AlreadyExists { path: String },

    #[error("'{path}': Not a directory")]
    NotADirectory { path: String },

    #[error("'{path}': Not a regular file")]
    NotAFile { path: String },

    #[error("cannot move '{from}' to a subdirectory of itself, '{to}'")]
    InvalidMove { from: String, to: String },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl FsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        FsError::NotADirectory { path: path.into() }
    }
}

/// Variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

/// A file or directory entry in the virtual tree.
///
/// Each node is owned by its parent's `children` map; the root is owned by
/// the [`VirtualFileSystem`](super::VirtualFileSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub permissions: String,
    pub owner: String,
    pub group: String,
    pub modified: DateTime<Utc>,
    pub kind: NodeKind,
}

impl Node {
    /// Create an empty directory owned by `user`.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: DIRECTORY_PERMISSIONS.to_string(),
            owner: "user".to_string(),
            group: "user".to_string(),
            modified: Utc::now(),
            kind: NodeKind::Directory { children: BTreeMap::new() },
        }
    }

    /// Create a regular file owned by `user`.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: FILE_PERMISSIONS.to_string(),
            owner: "user".to_string(),
            group: "user".to_string(),
            modified: Utc::now(),
            kind: NodeKind::File { content: content.into() },
        }
    }

    /// The root directory, owned by `root`.
    pub fn root() -> Self {
        Self {
            owner: "root".to_string(),
            group: "root".to_string(),
            ..Self::directory("/")
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Byte length of the content for files, [`DIRECTORY_SIZE`] for directories.
    pub fn size(&self) -> u64 {
        match &self.kind {
            NodeKind::File { content } => content.len() as u64,
            NodeKind::Directory { .. } => DIRECTORY_SIZE,
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Replace file content and bump the modification time.
    ///
    /// Returns `false` when called on a directory.
    pub fn set_content(&mut self, new_content: impl Into<String>) -> bool {
        match &mut self.kind {
            NodeKind::File { content } => {
                *content = new_content.into();
                self.modified = Utc::now();
                true
            }
            NodeKind::Directory { .. } => false,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Directory { .. } => "directory",
            NodeKind::File { .. } => "file",
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================
//
// {type, name, content, permissions, owner, group, size, modified}
// where `content` is text for files and a name -> node map for directories.

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 8)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("name", &self.name)?;
        match &self.kind {
            NodeKind::Directory { children } => state.serialize_field("content", children)?,
            NodeKind::File { content } => state.serialize_field("content", content)?,
        }
        state.serialize_field("permissions", &self.permissions)?;
        state.serialize_field("owner", &self.owner)?;
        state.serialize_field("group", &self.group)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("modified", &self.modified)?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
struct NodeRecord {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(default, alias = "children")]
    content: Option<RecordContent>,
    permissions: Option<String>,
    owner: Option<String>,
    group: Option<String>,
    modified: Option<DateTime<Utc>>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RecordContent {
    Text(String),
    Entries(BTreeMap<String, Node>),
}

impl TryFrom<NodeRecord> for Node {
    type Error = String;

    // `size` on the wire is ignored; it is always derived from the content.
    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let kind = match (record.kind.as_str(), record.content) {
            ("directory", Some(RecordContent::Entries(mut children))) => {
                for (key, child) in children.iter_mut() {
                    if key.is_empty() || key == "." || key == ".." || key.contains('/') {
                        return Err(format!("invalid entry name '{}' in '{}'", key, record.name));
                    }
                    child.name = key.clone();
                }
                NodeKind::Directory { children }
            }
            ("directory", None) => NodeKind::Directory { children: BTreeMap::new() },
            ("file", Some(RecordContent::Text(content))) => NodeKind::File { content },
            ("file", None) => NodeKind::File { content: String::new() },
            ("directory", Some(RecordContent::Text(_))) => {
                return Err(format!("directory '{}' has text content", record.name));
            }
            ("file", Some(RecordContent::Entries(_))) => {
                return Err(format!("file '{}' has directory entries", record.name));
            }
            (other, _) => return Err(format!("unknown node type '{}'", other)),
        };
        let default_permissions = match kind {
            NodeKind::Directory { .. } => DIRECTORY_PERMISSIONS,
            NodeKind::File { .. } => FILE_PERMISSIONS,
        };
        Ok(Node {
            name: record.name,
            permissions: record.permissions.unwrap_or_else(|| default_permissions.to_string()),
            owner: record.owner.unwrap_or_else(|| "user".to_string()),
            group: record.group.unwrap_or_else(|| "user".to_string()),
            modified: record.modified.unwrap_or_else(Utc::now),
            kind,
        })
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = NodeRecord::deserialize(deserializer)?;
        Node::try_from(record).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
