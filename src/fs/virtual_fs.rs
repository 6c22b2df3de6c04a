//! Virtual File System
//!
//! A tree of [`Node`]s rooted at `/`, a current-directory pointer and the
//! path algebra that ties them together. Every mutating operation writes the
//! full snapshot through to the backing [`KeyValueStore`].

use chrono::Utc;

use super::snapshot::{Snapshot, SnapshotInfo, SnapshotView};
use super::store::{KeyValueStore, MemoryStore};
use super::types::{FsError, Node, NodeKind};

/// Key the snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "linux-simulator-filesystem";

pub const DEFAULT_HOME: &str = "/home/user";

pub struct VirtualFileSystem {
    root: Node,
    current_path: String,
    home: String,
    storage_key: String,
    store: Box<dyn KeyValueStore>,
}

impl VirtualFileSystem {
    /// Create a file system backed by a fresh [`MemoryStore`], seeded with
    /// the default layout.
    pub fn new() -> Self {
        Self::open(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY, DEFAULT_HOME)
    }

    /// Restore from `store`, or seed the default layout when nothing usable
    /// is stored under `storage_key`.
    pub fn open(store: Box<dyn KeyValueStore>, storage_key: &str, home: &str) -> Self {
        let mut fs = Self {
            root: Node::root(),
            current_path: "/".to_string(),
            home: normalize_path(home),
            storage_key: storage_key.to_string(),
            store,
        };

        match fs.store.get(&fs.storage_key) {
            Ok(Some(text)) => match Snapshot::parse(&text) {
                Ok(snapshot) => {
                    fs.install(snapshot);
                    tracing::info!(current_path = %fs.current_path, "file system restored from store");
                    return fs;
                }
                Err(e) => tracing::warn!("stored snapshot is unusable, reseeding: {}", e),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to read stored snapshot: {}", e),
        }

        fs.seed();
        fs
    }

    // ========================================================================
    // Path algebra
    // ========================================================================

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Absolute paths are normalized as-is; relative ones are joined onto
    /// the current path first.
    pub fn resolve_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            normalize_path(path)
        } else {
            normalize_path(&format!("{}/{}", self.current_path, path))
        }
    }

    pub fn normalize_path(&self, path: &str) -> String {
        normalize_path(path)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get_node(&self, path: &str) -> Option<&Node> {
        let resolved = self.resolve_path(path);
        node_at(&self.root, &resolved)
    }

    pub fn get_file_content(&self, path: &str) -> Result<&str, FsError> {
        let node = self.get_node(path).ok_or_else(|| FsError::not_found(path))?;
        node.content().ok_or_else(|| FsError::NotAFile { path: path.to_string() })
    }

    pub fn list_directory(&self, path: Option<&str>) -> Result<Vec<&Node>, FsError> {
        let path = path.unwrap_or(self.current_path.as_str());
        self.get_node(path)
            .and_then(Node::children)
            .map(|children| children.values().collect())
            .ok_or_else(|| FsError::not_a_directory(path))
    }

    /// Depth-first search for files whose name or full path contains
    /// `pattern` as a literal substring.
    pub fn find_files(&self, pattern: &str, search_path: &str) -> Vec<String> {
        let start = self.resolve_path(search_path);
        let mut results = Vec::new();
        if let Some(node) = node_at(&self.root, &start) {
            collect_matches(node, &start, pattern, &mut results);
        }
        results
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn create_directory(&mut self, path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        let (parent, name) = split_parent(&resolved)
            .ok_or_else(|| FsError::AlreadyExists { path: path.to_string() })?;
        let children = children_at_mut(&mut self.root, &parent)
            .ok_or_else(|| FsError::ParentNotFound { path: path.to_string() })?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }
        children.insert(name.to_string(), Node::directory(name));
        tracing::debug!(path = %resolved, "created directory");
        self.persist();
        Ok(())
    }

    /// Create `path` as a file, overwriting whatever entry has that name.
    pub fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        self.insert_at(&resolved, path, |name| Node::file(name, content))?;
        tracing::debug!(path = %resolved, bytes = content.len(), "created file");
        self.persist();
        Ok(())
    }

    /// Editor save: update an existing file in place, or create it.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        match node_at_mut(&mut self.root, &resolved) {
            Some(node) => {
                if !node.set_content(content) {
                    return Err(FsError::NotAFile { path: path.to_string() });
                }
                tracing::debug!(path = %resolved, bytes = content.len(), "rewrote file");
                self.persist();
                Ok(())
            }
            None => self.create_file(path, content),
        }
    }

    /// Remove a node and its whole subtree.
    pub fn remove_node(&mut self, path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        self.detach(&resolved, path)?;
        tracing::debug!(path = %resolved, "removed node");
        self.repair_current_path();
        self.persist();
        Ok(())
    }

    /// Copy the source node to `dest`, then remove the source.
    ///
    /// Every check runs before the tree is touched, so a failed move leaves
    /// the tree, the current path and the store as they were. `dest` may
    /// replace a file or an empty directory, but never one of the source's
    /// ancestors or a directory that still has entries.
    pub fn move_node(&mut self, source: &str, dest: &str) -> Result<(), FsError> {
        let from = self.resolve_path(source);
        let to = self.resolve_path(dest);
        let node = node_at(&self.root, &from)
            .cloned()
            .ok_or_else(|| FsError::not_found(source))?;

        if from == to {
            return Ok(());
        }
        if from == "/" || to.starts_with(&format!("{}/", from)) {
            return Err(FsError::InvalidMove { from: source.to_string(), to: dest.to_string() });
        }
        if to == "/" || from.starts_with(&format!("{}/", to)) {
            return Err(FsError::AlreadyExists { path: dest.to_string() });
        }
        let occupied = node_at(&self.root, &to)
            .and_then(Node::children)
            .map_or(false, |children| !children.is_empty());
        if occupied {
            return Err(FsError::AlreadyExists { path: dest.to_string() });
        }

        self.insert_at(&to, dest, |name| Node {
            name: name.to_string(),
            owner: "user".to_string(),
            group: "user".to_string(),
            modified: Utc::now(),
            ..node
        })?;
        self.detach(&from, source)?;
        tracing::debug!(from = %from, to = %to, "moved node");
        self.repair_current_path();
        self.persist();
        Ok(())
    }

    pub fn change_directory(&mut self, path: &str) -> Result<&str, FsError> {
        let resolved = self.resolve_path(path);
        match node_at(&self.root, &resolved) {
            None => return Err(FsError::not_found(path)),
            Some(node) if !node.is_directory() => return Err(FsError::not_a_directory(path)),
            Some(_) => {}
        }
        self.current_path = resolved;
        self.persist();
        Ok(&self.current_path)
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Pretty-printed snapshot for `export-fs`.
    pub fn export_snapshot(&self) -> String {
        serde_json::to_string_pretty(&SnapshotView::new(&self.root, &self.current_path))
            .unwrap_or_default()
    }

    /// Replace the whole tree with the one in `text`.
    ///
    /// A snapshot that fails validation leaves the active tree untouched.
    pub fn import_snapshot(&mut self, text: &str) -> Result<SnapshotInfo, FsError> {
        let snapshot = Snapshot::parse(text)?;
        let info = snapshot.info();
        self.install(snapshot);
        tracing::info!(current_path = %self.current_path, "snapshot imported");
        self.persist();
        Ok(info)
    }

    /// Timestamp and current path of the snapshot currently in the store.
    pub fn stored_summary(&self) -> Option<SnapshotInfo> {
        let text = self.store.get(&self.storage_key).ok().flatten()?;
        Snapshot::parse(&text).ok().map(|s| s.info())
    }

    /// Drop the stored snapshot and reseed the default layout.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(&self.storage_key) {
            tracing::warn!("failed to clear stored snapshot: {}", e);
        }
        self.root = Node::root();
        self.current_path = "/".to_string();
        self.seed();
        tracing::info!("file system reset");
    }

    fn install(&mut self, snapshot: Snapshot) {
        self.root = snapshot.root;
        self.root.name = "/".to_string();
        self.current_path = normalize_path(&snapshot.current_path);
        self.repair_current_path();
    }

    fn persist(&mut self) {
        let view = SnapshotView::new(&self.root, &self.current_path);
        let text = match serde_json::to_string(&view) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to serialize snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &text) {
            tracing::warn!("failed to save file system: {}", e);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn insert_at<F>(&mut self, resolved: &str, display: &str, make: F) -> Result<(), FsError>
    where
        F: FnOnce(&str) -> Node,
    {
        let (parent, name) = split_parent(resolved)
            .ok_or_else(|| FsError::NotAFile { path: display.to_string() })?;
        let children = children_at_mut(&mut self.root, &parent)
            .ok_or_else(|| FsError::ParentNotFound { path: display.to_string() })?;
        children.insert(name.to_string(), make(name));
        Ok(())
    }

    fn detach(&mut self, resolved: &str, display: &str) -> Result<Node, FsError> {
        let (parent, name) = split_parent(resolved).ok_or_else(|| FsError::not_found(display))?;
        children_at_mut(&mut self.root, &parent)
            .and_then(|children| children.remove(name))
            .ok_or_else(|| FsError::not_found(display))
    }

    /// Clamp the current path to its nearest surviving ancestor directory.
    fn repair_current_path(&mut self) {
        let mut candidate = self.current_path.clone();
        while !node_at(&self.root, &candidate).map_or(false, Node::is_directory) {
            candidate = match split_parent(&candidate) {
                Some((parent, _)) => parent,
                None => "/".to_string(),
            };
        }
        if candidate != self.current_path {
            tracing::debug!(from = %self.current_path, to = %candidate, "current path clamped");
            self.current_path = candidate;
        }
    }

    fn seed(&mut self) {
        let home = self.home.clone();
        let mut dirs = vec![
            "/etc".to_string(),
            "/var".to_string(),
            "/var/log".to_string(),
            "/usr".to_string(),
            "/usr/bin".to_string(),
            "/tmp".to_string(),
            "/bin".to_string(),
            "/sbin".to_string(),
            "/dev".to_string(),
            "/proc".to_string(),
            "/sys".to_string(),
        ];
        let mut prefix = String::new();
        for segment in segments(&home) {
            prefix = format!("{}/{}", prefix, segment);
            dirs.push(prefix.clone());
        }
        for sub in ["Documents", "Downloads", "Pictures", "Music", "Videos"] {
            dirs.push(join(&home, sub));
        }

        let files = [
            (join(&home, "welcome.txt"), WELCOME_TEXT.to_string()),
            (join(&home, "Documents/example.txt"), "This is a sample file in the Documents folder.".to_string()),
            (join(&home, "Documents/notes.md"), NOTES_TEXT.to_string()),
            ("/etc/passwd".to_string(), format!(
                "root:x:0:0:root:/root:/bin/bash\nuser:x:1000:1000:User:{}:/bin/bash\n",
                home
            )),
            ("/etc/hosts".to_string(), "127.0.0.1 localhost\n::1 localhost\n".to_string()),
            ("/var/log/system.log".to_string(), SYSTEM_LOG_TEXT.to_string()),
        ];

        for dir in &dirs {
            if node_at(&self.root, dir).is_none() {
                let _ = self.insert_at(dir, dir, |name| Node::directory(name));
            }
        }
        for (path, content) in &files {
            let _ = self.insert_at(path, path, |name| Node::file(name, content.as_str()));
        }

        self.current_path = home;
        self.repair_current_path();
        tracing::info!("seeded default file system layout");
        self.persist();
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

const WELCOME_TEXT: &str = "Welcome to the Linux terminal simulator!\n\
This is a safe environment for learning.\n\
\n\
Try a few commands:\n\
- ls to list files\n\
- cd to change directory\n\
- cat to read this file\n\
- help to see every available command";

const NOTES_TEXT: &str = "# Notes\n\
\n\
- This is a markdown file\n\
- You can use grep to search text\n\
- Try: grep \"markdown\" notes.md";

const SYSTEM_LOG_TEXT: &str = "2024-01-01 10:00:00 System started\n\
2024-01-01 10:01:00 User logged in\n\
2024-01-01 10:02:00 Network connected\n";

// ============================================================================
// Path utilities
// ============================================================================

/// Collapse `.`, `..` and empty segments. `..` at the root is dropped, so
/// the result never escapes `/`.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    format!("/{}", resolved.join("/"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Split a normalized absolute path into its parent path and final segment.
/// Returns `None` for the root.
fn split_parent(path: &str) -> Option<(String, &str)> {
    let idx = path.rfind('/')?;
    let name = &path[idx + 1..];
    if name.is_empty() {
        return None;
    }
    let parent = if idx == 0 { "/".to_string() } else { path[..idx].to_string() };
    Some((parent, name))
}

fn node_at<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    segments(path).try_fold(root, |node, segment| node.children()?.get(segment))
}

fn node_at_mut<'a>(root: &'a mut Node, path: &str) -> Option<&'a mut Node> {
    segments(path).try_fold(root, |node, segment| node.children_mut()?.get_mut(segment))
}

fn children_at_mut<'a>(
    root: &'a mut Node,
    path: &str,
) -> Option<&'a mut std::collections::BTreeMap<String, Node>> {
    node_at_mut(root, path)?.children_mut()
}

fn collect_matches(node: &Node, path: &str, pattern: &str, results: &mut Vec<String>) {
    match &node.kind {
        NodeKind::File { .. } => {
            if node.name.contains(pattern) || path.contains(pattern) {
                results.push(path.to_string());
            }
        }
        NodeKind::Directory { children } => {
            for (name, child) in children {
                collect_matches(child, &join(path, name), pattern, results);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_fs() -> VirtualFileSystem {
        let mut fs = VirtualFileSystem::new();
        fs.root = Node::root();
        fs.current_path = "/".to_string();
        fs
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/bar/"), "/foo/bar");
        assert_eq!(normalize_path("foo//bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/./bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/../bar"), "/bar");
        assert_eq!(normalize_path("/../.."), "/");
        assert_eq!(normalize_path("/../a/../../b"), "/b");
    }

    #[test]
    fn test_normalize_path_is_idempotent() {
        for p in ["", "/", "a/b/../c", "/../x/./y//", "..", "./.", "/a/b/c/../../.."] {
            let once = normalize_path(p);
            assert_eq!(normalize_path(&once), once, "input {:?}", p);
        }
    }

    #[test]
    fn test_resolve_path_relative_to_current() {
        let mut fs = empty_fs();
        fs.create_directory("/a").unwrap();
        fs.change_directory("/a").unwrap();
        assert_eq!(fs.resolve_path("b/c"), "/a/b/c");
        assert_eq!(fs.resolve_path("../x"), "/x");
        assert_eq!(fs.resolve_path("/abs/./p"), "/abs/p");
    }

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("/"), None);
        assert_eq!(split_parent("/a"), Some(("/".to_string(), "a")));
        assert_eq!(split_parent("/a/b"), Some(("/a".to_string(), "b")));
    }

    #[test]
    fn test_create_directory_then_get_node() {
        let mut fs = empty_fs();
        fs.create_directory("/docs").unwrap();
        let node = fs.get_node("/docs").unwrap();
        assert!(node.is_directory());
        assert!(node.children().unwrap().is_empty());
    }

    #[test]
    fn test_create_directory_errors() {
        let mut fs = empty_fs();
        fs.create_directory("/docs").unwrap();
        assert_eq!(
            fs.create_directory("/docs"),
            Err(FsError::AlreadyExists { path: "/docs".to_string() })
        );
        assert_eq!(
            fs.create_directory("/missing/child"),
            Err(FsError::ParentNotFound { path: "/missing/child".to_string() })
        );
        fs.create_file("/f", "x").unwrap();
        assert!(matches!(fs.create_directory("/f/sub"), Err(FsError::ParentNotFound { .. })));
    }

    #[test]
    fn test_create_file_overwrites_any_entry() {
        let mut fs = empty_fs();
        fs.create_directory("/thing").unwrap();
        fs.create_file("/thing", "now a file").unwrap();
        let node = fs.get_node("/thing").unwrap();
        assert!(node.is_file());
        assert_eq!(node.size(), 10);
    }

    #[test]
    fn test_get_node_through_file_is_absent() {
        let mut fs = empty_fs();
        fs.create_file("/f", "x").unwrap();
        assert!(fs.get_node("/f/anything").is_none());
    }

    #[test]
    fn test_remove_node() {
        let mut fs = empty_fs();
        fs.create_directory("/d").unwrap();
        fs.create_file("/d/a.txt", "a").unwrap();
        fs.remove_node("/d/a.txt").unwrap();
        assert!(fs.get_node("/d/a.txt").is_none());
        assert!(fs.list_directory(Some("/d")).unwrap().is_empty());
        assert_eq!(fs.remove_node("/d/a.txt"), Err(FsError::not_found("/d/a.txt")));
        assert_eq!(fs.remove_node("/nope/x"), Err(FsError::not_found("/nope/x")));
    }

    #[test]
    fn test_remove_ancestor_of_current_path_clamps() {
        let mut fs = empty_fs();
        fs.create_directory("/a").unwrap();
        fs.create_directory("/a/b").unwrap();
        fs.change_directory("/a/b").unwrap();
        fs.remove_node("/a/b").unwrap();
        assert_eq!(fs.current_path(), "/a");
        fs.change_directory("/a").unwrap();
        fs.remove_node("/a").unwrap();
        assert_eq!(fs.current_path(), "/");
    }

    #[test]
    fn test_move_node() {
        let mut fs = empty_fs();
        fs.create_directory("/src").unwrap();
        fs.create_file("/src/f.txt", "data").unwrap();
        fs.create_directory("/dst").unwrap();
        fs.move_node("/src", "/dst/moved").unwrap();
        assert!(fs.get_node("/src").is_none());
        assert_eq!(fs.get_file_content("/dst/moved/f.txt").unwrap(), "data");
        assert_eq!(fs.get_node("/dst/moved").unwrap().name, "moved");
    }

    #[test]
    fn test_move_failure_keeps_source() {
        let mut fs = empty_fs();
        fs.create_file("/f.txt", "data").unwrap();
        assert!(matches!(fs.move_node("/f.txt", "/nope/f.txt"), Err(FsError::ParentNotFound { .. })));
        assert_eq!(fs.get_file_content("/f.txt").unwrap(), "data");
        assert_eq!(fs.move_node("/ghost", "/x"), Err(FsError::not_found("/ghost")));
    }

    #[test]
    fn test_move_onto_self_and_into_subtree() {
        let mut fs = empty_fs();
        fs.create_directory("/d").unwrap();
        fs.move_node("/d", "/d/").unwrap();
        assert!(fs.get_node("/d").is_some());
        assert!(matches!(fs.move_node("/d", "/d/inner"), Err(FsError::InvalidMove { .. })));
        assert!(fs.get_node("/d").is_some());
    }

    fn assert_consistent(fs: &VirtualFileSystem, store: &MemoryStore) {
        let saved = Snapshot::parse(&store.get("k").unwrap().unwrap()).unwrap();
        assert_eq!(&saved.root, fs.root());
        assert_eq!(saved.current_path, fs.current_path());
        assert!(fs.get_node(fs.current_path()).unwrap().is_directory());
    }

    #[test]
    fn test_move_onto_ancestor_is_rejected() {
        let store = MemoryStore::new();
        let mut fs = VirtualFileSystem::open(Box::new(store.clone()), "k", "/home/user");
        fs.create_directory("/tmp/a").unwrap();
        fs.create_directory("/tmp/a/a").unwrap();
        fs.create_file("/tmp/a/a/a", "inner").unwrap();
        fs.create_file("/tmp/a/other.txt", "keep").unwrap();
        fs.change_directory("/tmp/a").unwrap();
        let before = fs.root().clone();

        assert_eq!(
            fs.move_node("/tmp/a/a", "/tmp/a"),
            Err(FsError::AlreadyExists { path: "/tmp/a".to_string() })
        );
        assert!(matches!(fs.move_node("/tmp/a/a/a", "/"), Err(FsError::AlreadyExists { .. })));
        assert_eq!(fs.root(), &before);
        assert_eq!(fs.current_path(), "/tmp/a");
        assert_eq!(fs.get_file_content("/tmp/a/other.txt").unwrap(), "keep");
        assert_eq!(fs.get_file_content("/tmp/a/a/a").unwrap(), "inner");
        assert_consistent(&fs, &store);
    }

    #[test]
    fn test_move_onto_non_empty_directory_is_rejected() {
        let store = MemoryStore::new();
        let mut fs = VirtualFileSystem::open(Box::new(store.clone()), "k", "/home/user");
        fs.create_file("/tmp/f.txt", "data").unwrap();
        fs.create_directory("/tmp/full").unwrap();
        fs.create_file("/tmp/full/x", "x").unwrap();
        fs.create_directory("/tmp/empty").unwrap();

        assert_eq!(
            fs.move_node("/tmp/f.txt", "/tmp/full"),
            Err(FsError::AlreadyExists { path: "/tmp/full".to_string() })
        );
        assert_eq!(fs.get_file_content("/tmp/full/x").unwrap(), "x");
        assert_eq!(fs.get_file_content("/tmp/f.txt").unwrap(), "data");
        assert_consistent(&fs, &store);

        // an empty directory entry is replaced
        fs.move_node("/tmp/f.txt", "/tmp/empty").unwrap();
        assert_eq!(fs.get_file_content("/tmp/empty").unwrap(), "data");
        assert!(fs.get_node("/tmp/f.txt").is_none());
        assert_consistent(&fs, &store);
    }

    #[test]
    fn test_list_directory_errors() {
        let mut fs = empty_fs();
        fs.create_file("/f", "x").unwrap();
        assert_eq!(fs.list_directory(Some("/f")), Err(FsError::not_a_directory("/f")));
        assert_eq!(fs.list_directory(Some("/none")), Err(FsError::not_a_directory("/none")));
    }

    #[test]
    fn test_change_directory() {
        let mut fs = empty_fs();
        fs.create_directory("/d").unwrap();
        fs.create_file("/f", "").unwrap();
        assert_eq!(fs.change_directory("d").unwrap(), "/d");
        assert_eq!(fs.change_directory("..").unwrap(), "/");
        assert_eq!(fs.change_directory("/f"), Err(FsError::not_a_directory("/f")));
        assert_eq!(fs.change_directory("/zzz"), Err(FsError::not_found("/zzz")));
        assert_eq!(fs.current_path(), "/");
    }

    #[test]
    fn test_find_files() {
        let mut fs = empty_fs();
        fs.create_directory("/tmp").unwrap();
        fs.create_directory("/tmp/demo").unwrap();
        fs.create_file("/tmp/demo/a.txt", "").unwrap();
        fs.create_file("/tmp/b.txt", "").unwrap();
        assert_eq!(fs.find_files("a.txt", "/tmp"), vec!["/tmp/demo/a.txt"]);
        // full path matches too, directories themselves never do
        assert_eq!(fs.find_files("demo", "/tmp"), vec!["/tmp/demo/a.txt"]);
        assert_eq!(fs.find_files(".txt", "/tmp"), vec!["/tmp/b.txt", "/tmp/demo/a.txt"]);
        assert!(fs.find_files("x", "/missing").is_empty());
    }

    #[test]
    fn test_get_file_content_errors() {
        let mut fs = empty_fs();
        fs.create_directory("/d").unwrap();
        assert_eq!(fs.get_file_content("/d"), Err(FsError::NotAFile { path: "/d".to_string() }));
        assert_eq!(fs.get_file_content("/x"), Err(FsError::not_found("/x")));
    }

    #[test]
    fn test_write_file_updates_in_place() {
        let mut fs = empty_fs();
        fs.create_file("/n.txt", "old").unwrap();
        fs.write_file("/n.txt", "brand new").unwrap();
        assert_eq!(fs.get_file_content("/n.txt").unwrap(), "brand new");
        assert_eq!(fs.get_node("/n.txt").unwrap().size(), 9);
        fs.write_file("/fresh.txt", "x").unwrap();
        assert!(fs.get_node("/fresh.txt").is_some());
        assert!(matches!(fs.write_file("/", "x"), Err(FsError::NotAFile { .. })));
    }

    #[test]
    fn test_default_layout() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.current_path(), "/home/user");
        assert!(fs.get_node("/home/user/Documents").unwrap().is_directory());
        assert!(fs.get_file_content("/etc/hosts").unwrap().contains("localhost"));
        assert!(fs.get_node("/var/log/system.log").is_some());
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let store = MemoryStore::new();
        let mut fs = VirtualFileSystem::open(Box::new(store.clone()), "k", "/home/user");
        fs.create_directory("/tmp/new").unwrap();
        let saved = store.get("k").unwrap().unwrap();
        assert!(saved.contains("\"new\""));

        fs.change_directory("/tmp").unwrap();
        let saved = Snapshot::parse(&store.get("k").unwrap().unwrap()).unwrap();
        assert_eq!(saved.current_path, "/tmp");
    }

    #[test]
    fn test_open_restores_from_store() {
        let store = MemoryStore::new();
        {
            let mut fs = VirtualFileSystem::open(Box::new(store.clone()), "k", "/home/user");
            fs.create_file("/tmp/kept.txt", "kept").unwrap();
            fs.change_directory("/tmp").unwrap();
        }
        let fs = VirtualFileSystem::open(Box::new(store), "k", "/home/user");
        assert_eq!(fs.current_path(), "/tmp");
        assert_eq!(fs.get_file_content("/tmp/kept.txt").unwrap(), "kept");
    }

    #[test]
    fn test_open_reseeds_on_corrupt_store() {
        let mut store = MemoryStore::new();
        store.set("k", "{ not json").unwrap();
        let fs = VirtualFileSystem::open(Box::new(store), "k", "/home/user");
        assert!(fs.get_node("/home/user/welcome.txt").is_some());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut fs = VirtualFileSystem::new();
        fs.create_directory("/tmp/x").unwrap();
        fs.create_file("/tmp/x/y.txt", "why").unwrap();
        fs.change_directory("/tmp/x").unwrap();
        let exported = fs.export_snapshot();
        let original_root = fs.root().clone();

        let mut other = VirtualFileSystem::new();
        let info = other.import_snapshot(&exported).unwrap();
        assert_eq!(info.current_path, "/tmp/x");
        assert!(info.timestamp.is_some());
        assert_eq!(other.current_path(), "/tmp/x");
        assert_eq!(other.root(), &original_root);
    }

    #[test]
    fn test_import_invalid_leaves_tree_untouched() {
        let mut fs = VirtualFileSystem::new();
        fs.create_file("/tmp/keep.txt", "k").unwrap();
        assert!(fs.import_snapshot(r#"{"currentPath": "/"}"#).is_err());
        assert!(fs.import_snapshot("garbage").is_err());
        let dotted = r#"{"root": {"type": "directory", "name": "/", "content": {
            "..": {"type": "file", "name": "..", "content": ""}
        }}, "currentPath": "/"}"#;
        assert!(matches!(fs.import_snapshot(dotted), Err(FsError::InvalidSnapshot(_))));
        assert!(fs.get_node("/tmp/keep.txt").is_some());
    }

    #[test]
    fn test_import_clamps_dangling_current_path() {
        let mut fs = VirtualFileSystem::new();
        let text = r#"{"root": {"type": "directory", "name": "/", "content": {
            "a": {"type": "directory", "name": "a", "content": {}}
        }}, "currentPath": "/a/gone"}"#;
        fs.import_snapshot(text).unwrap();
        assert_eq!(fs.current_path(), "/a");
    }

    #[test]
    fn test_reset_reseeds() {
        let mut fs = VirtualFileSystem::new();
        fs.remove_node("/home").unwrap();
        fs.reset();
        assert_eq!(fs.current_path(), "/home/user");
        assert!(fs.get_node("/home/user/welcome.txt").is_some());
        assert!(fs.stored_summary().is_some());
    }
}
