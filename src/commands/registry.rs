// src/commands/registry.rs
use std::fmt;
use std::str::FromStr;

use super::types::{Command, CommandError};

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::cp::CpCommand;
use super::du_cmd::DuCommand;
use super::echo::EchoCommand;
use super::exit_cmd::ExitCommand;
use super::file_cmd::FileCommand;
use super::find::FindCommand;
use super::fs_admin_cmd::{DebugFsCommand, ExportFsCommand, ImportFsCommand, ResetFsCommand};
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::{HelpCommand, ManCommand};
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::nano_cmd::NanoCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::sort::SortCommand;
use super::sysinfo_cmd::{
    DateCommand, DfCommand, PsCommand, UnameCommand, UptimeCommand, WhoamiCommand,
};
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::uniq::UniqCommand;
use super::wc::WcCommand;
use super::which_cmd::WhichCommand;

macro_rules! command_table {
    ($( $variant:ident => $name:literal, $handler:expr, $summary:literal; )*) => {
        /// Closed set of built-in command identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CommandName {
            $( $variant, )*
        }

        impl CommandName {
            pub const ALL: &'static [CommandName] = &[ $( CommandName::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( CommandName::$variant => $name, )*
                }
            }

            /// One-line usage shown by `help`.
            pub fn summary(self) -> &'static str {
                match self {
                    $( CommandName::$variant => $summary, )*
                }
            }

            pub fn handler(self) -> &'static dyn Command {
                match self {
                    $( CommandName::$variant => &$handler, )*
                }
            }
        }

        impl FromStr for CommandName {
            type Err = CommandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(CommandName::$variant), )*
                    _ => Err(CommandError::CommandNotFound(s.to_string())),
                }
            }
        }
    };
}

command_table! {
    Ls => "ls", LsCommand, "ls [-l] [-a] [-h] [dir]      list directory contents";
    Cd => "cd", CdCommand, "cd [dir]                     change the current directory";
    Pwd => "pwd", PwdCommand, "pwd                          print the current directory";
    Mkdir => "mkdir", MkdirCommand, "mkdir <dir...>               create directories";
    Touch => "touch", TouchCommand, "touch <file...>              create empty files";
    Rm => "rm", RmCommand, "rm [-r] [-f] <path...>       remove files or directories";
    Rmdir => "rmdir", RmdirCommand, "rmdir <dir...>               remove empty directories";
    Cp => "cp", CpCommand, "cp <source> <dest>           copy a file";
    Mv => "mv", MvCommand, "mv <source> <dest>           move or rename";
    Cat => "cat", CatCommand, "cat <file...>                print file contents";
    Echo => "echo", EchoCommand, "echo [text...]               print text";
    Grep => "grep", GrepCommand, "grep <pattern> [file...]     search for matching lines";
    Find => "find", FindCommand, "find -name <pattern> [dir]   search files by name";
    Head => "head", HeadCommand, "head [N] <file>              first N lines (default 10)";
    Tail => "tail", TailCommand, "tail [N] <file>              last N lines (default 10)";
    Wc => "wc", WcCommand, "wc <file>                    count lines, words, characters";
    Sort => "sort", SortCommand, "sort <file>                  sort lines";
    Uniq => "uniq", UniqCommand, "uniq <file>                  drop adjacent duplicate lines";
    Ps => "ps", PsCommand, "ps                           list processes";
    Whoami => "whoami", WhoamiCommand, "whoami                       print the current user";
    Date => "date", DateCommand, "date                         print date and time";
    Clear => "clear", ClearCommand, "clear                        clear the screen";
    Help => "help", HelpCommand, "help                         show this help";
    Man => "man", ManCommand, "man <command>                show a command's manual";
    History => "history", HistoryCommand, "history                      show command history";
    Which => "which", WhichCommand, "which <command>              locate a command";
    File => "file", FileCommand, "file <path>                  guess a file's type";
    Du => "du", DuCommand, "du [path]                    estimate disk usage";
    Df => "df", DfCommand, "df                           report file system usage";
    Uptime => "uptime", UptimeCommand, "uptime                       show session uptime";
    Uname => "uname", UnameCommand, "uname [-a]                   print system information";
    Nano => "nano", NanoCommand, "nano <file>                  open the text editor";
    ResetFs => "reset-fs", ResetFsCommand, "reset-fs                     restore the initial file system";
    DebugFs => "debug-fs", DebugFsCommand, "debug-fs                     show the saved snapshot";
    ExportFs => "export-fs", ExportFsCommand, "export-fs                    export the file system as JSON";
    ImportFs => "import-fs", ImportFsCommand, "import-fs                    import a JSON backup";
    Exit => "exit", ExitCommand, "exit                         save a backup and end the session";
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a command name against the built-in table.
pub fn lookup(name: &str) -> Result<&'static dyn Command, CommandError> {
    name.parse::<CommandName>().map(CommandName::handler)
}

/// Names starting with `prefix`, in table order.
pub fn names_with_prefix(prefix: &str) -> Vec<&'static str> {
    CommandName::ALL
        .iter()
        .map(|c| c.as_str())
        .filter(|n| n.starts_with(prefix))
        .collect()
}
