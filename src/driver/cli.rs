//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::domain::entities::roll::{MarkFilter, RollState};
use crate::domain::entities::student::StudentId;
use crate::domain::services::aggregation::SortField;

/// 教室の出欠（ロールコール）を取るCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "rollcall")]
#[command(about = "Take and review classroom roll calls", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = "./.rollcall/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the home board roster
    Roster {
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,

        /// Sort by first-name or last-name
        #[arg(long, value_parser = parse_sort_field)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Only list students with this mark (all, present, late, absent)
        #[arg(long, value_parser = parse_mark_filter)]
        filter: Option<MarkFilter>,
    },

    /// Take a roll: mark students, then save or cancel
    Roll {
        /// Mark as ID=STATE (present, late, absent); repeatable
        #[arg(short, long = "mark", value_parser = parse_mark)]
        marks: Vec<(StudentId, RollState)>,

        /// Only list students with this mark before finishing
        #[arg(long, value_parser = parse_mark_filter)]
        filter: Option<MarkFilter>,

        /// Discard the roll instead of saving it
        #[arg(long)]
        cancel: bool,

        /// Print the payload without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// List completed rolls
    Activity,
}

/// Parse "ID=STATE"
pub fn parse_mark(s: &str) -> Result<(StudentId, RollState), String> {
    let (id, state) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=STATE, got {:?}", s))?;
    let id = id
        .trim()
        .parse::<StudentId>()
        .map_err(|e| format!("invalid student id {:?}: {}", id, e))?;
    let state = state.parse::<RollState>().map_err(|e| e.to_string())?;
    Ok((id, state))
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse()
}

fn parse_mark_filter(s: &str) -> Result<MarkFilter, String> {
    s.parse().map_err(|e: crate::domain::error::RollError| e.to_string())
}
