//! simsh CLI entry point.
//!
//! Usage:
//!   simsh                      # Interactive session
//!   simsh -c "<line>"          # Run one line and exit
//!   simsh --ephemeral          # Nothing is persisted

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use simsh::commands::exit_cmd::BACKUP_FILE_NAME;
use simsh::{CommandOutput, Completion, FileSelector, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "simsh")]
#[command(about = "A simulated Linux shell over a persistent virtual file system")]
#[command(version)]
struct Cli {
    /// Run one command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// TOML file with session options
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory holding the persisted snapshot
    #[arg(long = "state-dir")]
    state_dir: Option<PathBuf>,

    /// Keep the file system in memory only
    #[arg(long = "ephemeral")]
    ephemeral: bool,

    /// Print -c results as JSON (output, error, exitCode)
    #[arg(long = "json")]
    json: bool,
}

type InputLines = Lines<BufReader<Stdin>>;

/// Reads a snapshot from a host path typed by the user.
struct PathSelector(String);

#[async_trait]
impl FileSelector for PathSelector {
    async fn select(&self) -> Option<String> {
        let path = self.0.trim();
        if path.is_empty() {
            return None;
        }
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path, e);
                None
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut options = match &cli.config {
        Some(path) => ShellOptions::from_toml_file(path)?,
        None => ShellOptions::default(),
    };
    if cli.state_dir.is_some() {
        options.state_dir = cli.state_dir.clone();
    }
    options.ephemeral |= cli.ephemeral;

    let mut shell = Shell::new(&options);

    match cli.command {
        Some(line) => run_command(&mut shell, &line, cli.json).await,
        None => {
            run_repl(&mut shell).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_command(shell: &mut Shell, line: &str, json: bool) -> Result<ExitCode> {
    let (output, error) = match shell.execute(line) {
        Ok(CommandOutput::Text(text)) => (text, None),
        Ok(CommandOutput::Export { file_name, json: snapshot }) => {
            (write_export(&file_name, &snapshot).await?, None)
        }
        Ok(CommandOutput::Exit { backup }) => (write_export(BACKUP_FILE_NAME, &backup).await?, None),
        Ok(_) => (String::new(), None),
        Err(e) => (String::new(), Some(e.to_string())),
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "output": output,
                "error": error,
                "exitCode": if error.is_some() { 1 } else { 0 },
            })
        );
    } else {
        if !output.is_empty() {
            println!("{}", output);
        }
        if let Some(e) = &error {
            eprintln!("{}", e);
        }
    }
    Ok(if error.is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn write_export(file_name: &str, json: &str) -> Result<String> {
    tokio::fs::write(file_name, json)
        .await
        .with_context(|| format!("Failed to write {}", file_name))?;
    Ok(format!("File system exported to '{}'", file_name))
}

async fn read_line(lines: &mut InputLines, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Line-mode stand-in for the editor panel: the buffer is replaced by the
/// lines typed until a lone `.`; `:q` abandons the edit.
async fn edit(shell: &mut Shell, lines: &mut InputLines, path: &str, content: &str) -> Result<()> {
    println!("--- {} ---", path);
    if !content.is_empty() {
        println!("{}", content);
    }
    println!("--- enter new content, '.' to save, ':q' to quit without saving ---");

    let mut buffer = Vec::new();
    while let Some(line) = read_line(lines, "").await? {
        match line.as_str() {
            "." => {
                match shell.save_editor(path, &buffer.join("\n")) {
                    Ok(()) => println!("Saved {}", path),
                    Err(e) => println!("nano: {}", e),
                }
                return Ok(());
            }
            ":q" => return Ok(()),
            _ => buffer.push(line),
        }
    }
    Ok(())
}

async fn run_repl(shell: &mut Shell) -> Result<()> {
    println!("simsh {} - type 'help' for commands, 'exit' to leave.", env!("CARGO_PKG_VERSION"));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let prompt = shell.prompt();
        let Some(line) = read_line(&mut lines, &prompt).await? else {
            println!();
            break;
        };

        // A trailing tab asks for completions instead of running the line.
        if let Some(partial) = line.strip_suffix('\t') {
            match shell.complete(partial) {
                Completion::Line(completed) => println!("{}", completed),
                Completion::Candidates(names) => println!("{}", names.join("  ")),
                Completion::NoMatch => {}
            }
            continue;
        }

        match shell.execute(&line) {
            Ok(CommandOutput::Text(text)) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Ok(CommandOutput::ClearScreen) => {
                print!("\x1b[2J\x1b[H");
                std::io::stdout().flush()?;
            }
            Ok(CommandOutput::OpenEditor { path, content }) => {
                edit(shell, &mut lines, &path, &content).await?;
            }
            Ok(CommandOutput::Import) => {
                let path = read_line(&mut lines, "Snapshot file to import: ").await?.unwrap_or_default();
                println!("{}", shell.import_from(&PathSelector(path)).await);
            }
            Ok(CommandOutput::Export { file_name, json }) => match write_export(&file_name, &json).await {
                Ok(message) => println!("{}", message),
                Err(e) => println!("export-fs: {:#}", e),
            },
            Ok(CommandOutput::Exit { backup }) => {
                match write_export(BACKUP_FILE_NAME, &backup).await {
                    Ok(_) => println!("Backup saved to '{}'. Session closed.", BACKUP_FILE_NAME),
                    Err(e) => println!("exit: {:#}", e),
                }
                break;
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
