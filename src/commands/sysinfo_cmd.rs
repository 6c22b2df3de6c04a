// src/commands/sysinfo_cmd.rs
//! System information stubs: ps, whoami, date, uptime, uname, df.
//!
//! The simulated machine has no real processes or disks, so these report a
//! fixed picture of one, except where the session itself has an answer
//! (user name, start time, clock).

use chrono::Local;

use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

struct Process {
    pid: u32,
    name: &'static str,
    cpu: f32,
    memory: f32,
}

const PROCESSES: &[Process] = &[
    Process { pid: 1, name: "init", cpu: 0.1, memory: 2.5 },
    Process { pid: 123, name: "bash", cpu: 0.2, memory: 1.8 },
    Process { pid: 456, name: "firefox", cpu: 15.3, memory: 24.6 },
    Process { pid: 789, name: "code", cpu: 8.7, memory: 12.3 },
];

const UNAME_ALL: &str =
    "Linux simulator 5.4.0-42-generic #46-Ubuntu SMP Fri Jul 10 00:24:02 UTC 2020 x86_64 x86_64 x86_64 GNU/Linux";

const DF_TABLE: &str = "\
Filesystem     1K-blocks    Used Available Use% Mounted on
/dev/sda1       20971520 5242880  15728640  26% /
tmpfs            2097152       0   2097152   0% /tmp
/dev/sda2       10485760 1048576   9437184  10% /home";

// ============================================================================
// ps
// ============================================================================

pub struct PsCommand;

impl Command for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let mut lines = vec![format!("{:>6} {:<15} {:>5} {:>5}", "PID", "COMMAND", "%CPU", "%MEM")];
        lines.extend(PROCESSES.iter().map(|p| {
            format!("{:>6} {:<15} {:>5.1} {:>5.1}", p.pid, p.name, p.cpu, p.memory)
        }));
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ============================================================================
// whoami / date / uptime
// ============================================================================

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::text(ctx.env.user.as_str()))
    }
}

pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(Local::now().format("%a %b %e %H:%M:%S %Z %Y").to_string()))
    }
}

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let now = Local::now();
        let up = (now - ctx.env.started_at).num_minutes().max(0);
        Ok(CommandOutput::Text(format!(
            " {} up {}:{:02}, 1 user, load average: 0.00, 0.01, 0.05",
            now.format("%H:%M:%S"),
            up / 60,
            up % 60
        )))
    }
}

// ============================================================================
// uname / df
// ============================================================================

pub struct UnameCommand;

impl Command for UnameCommand {
    fn name(&self) -> &'static str {
        "uname"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let text = if ctx.has_flag('a') { UNAME_ALL } else { "Linux" };
        Ok(CommandOutput::text(text))
    }
}

pub struct DfCommand;

impl Command for DfCommand {
    fn name(&self) -> &'static str {
        "df"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::text(DF_TABLE))
    }
}
