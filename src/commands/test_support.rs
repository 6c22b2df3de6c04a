// src/commands/test_support.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, SessionEnv};
use crate::fs::VirtualFileSystem;

/// Seeded file system plus session state for exercising a single built-in.
pub struct Harness {
    pub fs: VirtualFileSystem,
    pub env: SessionEnv,
    pub history: Vec<String>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            fs: VirtualFileSystem::new(),
            env: SessionEnv::default(),
            history: Vec::new(),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let mut harness = Self::new();
        for (path, content) in files {
            harness.fs.create_file(path, content).unwrap();
        }
        harness
    }

    pub fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.run_with_stdin(cmd, args, None)
    }

    pub fn run_piped(
        &mut self,
        cmd: &dyn Command,
        args: &[&str],
        stdin: &str,
    ) -> Result<CommandOutput, CommandError> {
        self.run_with_stdin(cmd, args, Some(stdin.to_string()))
    }

    /// Run and unwrap the text output.
    pub fn text(&mut self, cmd: &dyn Command, args: &[&str]) -> String {
        self.run(cmd, args).unwrap().into_text()
    }

    fn run_with_stdin(
        &mut self,
        cmd: &dyn Command,
        args: &[&str],
        stdin: Option<String>,
    ) -> Result<CommandOutput, CommandError> {
        let mut ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            stdin,
            fs: &mut self.fs,
            env: &self.env,
            history: &self.history,
        };
        cmd.execute(&mut ctx)
    }
}
