use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::EnvSnapConfig;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "envsnap",
    version,
    about = "Save and restore dev environment snapshots",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Capture the current environment under a name (overwrites same name)
    Save {
        name: String,
        /// Capture the full process environment instead of the fixed
        /// allow-list. May persist secrets to disk — off by default.
        #[arg(long, default_value_t = false)]
        full_env: bool,
    },
    /// List stored snapshots (name + timestamp)
    List {
        /// JSON output (array of {name, timestamp})
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one snapshot in full (name is typo-corrected)
    View {
        name: String,
        /// JSON output (the stored record)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show keys that differ between two snapshots
    Diff {
        name1: String,
        name2: String,
        /// JSON output (array of {key, left, right})
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a summary report for one snapshot
    Report {
        name: String,
        /// JSON output (summary object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Emit `export K=V` lines for a snapshot's stored env vars
    ///
    /// Вывод предназначен для eval во внешнем шелле:
    ///   source <(envsnap restore dev --env-vars)
    /// Без --env-vars печатается только подсказка и ничего не происходит.
    Restore {
        name: String,
        /// Print export lines for each stored variable
        #[arg(long, default_value_t = false)]
        env_vars: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = EnvSnapConfig::from_env();
    match cli.cmd {
        Cmd::Save { name, full_env } => commands::cmd_save(&cfg, &name, full_env),
        Cmd::List { json } => commands::cmd_list(&cfg, json),
        Cmd::View { name, json } => commands::cmd_view(&cfg, &name, json),
        Cmd::Diff { name1, name2, json } => commands::cmd_diff(&cfg, &name1, &name2, json),
        Cmd::Report { name, json } => commands::cmd_report(&cfg, &name, json),
        Cmd::Restore { name, env_vars } => commands::cmd_restore(&cfg, &name, env_vars),
    }
}
