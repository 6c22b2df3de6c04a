//! Shell session
//!
//! Ties one file system to one interpreter and to the host's collaborators:
//! the prompt renderer, the editor and the import file picker.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::commands::{CommandName, CommandOutput, SessionEnv};
use crate::config::ShellOptions;
use crate::fs::{FsError, SnapshotInfo, VirtualFileSystem};
use crate::interpreter::{parse_line, Completion, History, Interpreter, ParsedLine, PipelineError};

/// Called with the fresh prompt after a command that may have moved the
/// current directory.
pub type PromptHook = Box<dyn FnMut(&str) + Send>;

/// One shell shared between host tasks.
pub type SharedShell = Arc<Mutex<Shell>>;

/// Host facility that lets the user pick a snapshot file to import.
#[async_trait]
pub trait FileSelector: Send + Sync {
    /// Text of the chosen file, or `None` if the user cancelled.
    async fn select(&self) -> Option<String>;
}

const PROMPT_REFRESH: &[CommandName] = &[
    CommandName::Cd,
    CommandName::ImportFs,
    CommandName::ResetFs,
    CommandName::Mv,
    CommandName::Rm,
    CommandName::Rmdir,
];

pub const IMPORT_CANCELLED: &str = "Import cancelled.";

pub struct Shell {
    fs: VirtualFileSystem,
    interpreter: Interpreter,
    prompt_hook: Option<PromptHook>,
}

impl Shell {
    /// Open the configured store and restore the last snapshot, or seed a
    /// fresh file system.
    pub fn new(options: &ShellOptions) -> Self {
        let fs = VirtualFileSystem::open(options.open_store(), &options.storage_key, &options.home);
        Self::with_fs(fs, options.session_env())
    }

    pub fn with_fs(fs: VirtualFileSystem, env: SessionEnv) -> Self {
        Self {
            fs,
            interpreter: Interpreter::new(env),
            prompt_hook: None,
        }
    }

    /// Seeded in-memory session.
    pub fn ephemeral() -> Self {
        Self::with_fs(VirtualFileSystem::new(), SessionEnv::default())
    }

    pub fn into_shared(self) -> SharedShell {
        Arc::new(Mutex::new(self))
    }

    pub fn set_prompt_hook(&mut self, hook: PromptHook) {
        self.prompt_hook = Some(hook);
    }

    pub fn fs(&self) -> &VirtualFileSystem {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFileSystem {
        &mut self.fs
    }

    pub fn history(&self) -> &History {
        self.interpreter.history()
    }

    pub fn history_mut(&mut self) -> &mut History {
        self.interpreter.history_mut()
    }

    /// Run one line. Errors come back already carrying the `bash: ` prefix
    /// in their display form.
    pub fn execute(&mut self, line: &str) -> Result<CommandOutput, PipelineError> {
        let result = self.interpreter.execute(&mut self.fs, line);
        if refreshes_prompt(line) {
            self.refresh_prompt();
        }
        result
    }

    /// `user@host:path$ ` with the home directory shown as `~`.
    pub fn prompt(&self) -> String {
        let env = self.interpreter.env();
        format!("{}@{}:{}$ ", env.user, env.hostname, display_path(self.fs.current_path(), self.fs.home()))
    }

    /// Editor save: write the buffer back, creating the file if needed.
    pub fn save_editor(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        self.fs.write_file(path, content)
    }

    /// Replace the file system with an exported snapshot.
    pub fn import_text(&mut self, text: &str) -> Result<SnapshotInfo, FsError> {
        let info = self.fs.import_snapshot(text)?;
        self.refresh_prompt();
        Ok(info)
    }

    /// Complete an `import-fs`: wait for the host's file picker and apply
    /// the chosen snapshot. Always resolves to a message for the user.
    pub async fn import_from(&mut self, selector: &dyn FileSelector) -> String {
        match selector.select().await {
            None => IMPORT_CANCELLED.to_string(),
            Some(text) => import_message(self.import_text(&text)),
        }
    }

    pub fn complete(&self, input: &str) -> Completion {
        self.interpreter.complete(&self.fs, input)
    }

    fn refresh_prompt(&mut self) {
        if self.prompt_hook.is_some() {
            let prompt = self.prompt();
            if let Some(hook) = self.prompt_hook.as_mut() {
                hook(&prompt);
            }
        }
    }
}

/// User-facing result of an import attempt.
pub fn import_message(result: Result<SnapshotInfo, FsError>) -> String {
    match result {
        Ok(info) => format!(
            "File system imported successfully!\nBackup date: {}\nCurrent directory: {}",
            info.timestamp
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "N/A".to_string()),
            info.current_path
        ),
        Err(e) => format!("Invalid file: {}", e),
    }
}

fn display_path(path: &str, home: &str) -> String {
    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
        _ => path.to_string(),
    }
}

fn refreshes_prompt(line: &str) -> bool {
    let stages = match parse_line(line.trim()) {
        Ok(ParsedLine::Pipeline(stages)) => stages,
        Ok(ParsedLine::Redirect { command, .. }) => vec![command],
        Err(_) => return false,
    };
    stages.iter().filter_map(|words| words.first()).any(|name| {
        name.parse::<CommandName>()
            .map(|c| PROMPT_REFRESH.contains(&c))
            .unwrap_or(false)
    })
}
