//! CLI argument definitions using clap derive macros.

use clap::{Parser, ValueEnum};

use todo_core::config::{IdPolicy, LoadPolicy, TitlePolicy};

/// Single-screen to-do list in the terminal
#[derive(Parser, Debug)]
#[command(name = "todo", about, version)]
pub struct Cli {
    /// Remote list endpoint (overrides TODO_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Start from a small built-in list instead of the network
    #[arg(long)]
    pub offline: bool,

    /// How the fetched list is applied (overrides TODO_LOAD_POLICY)
    #[arg(long, value_enum)]
    pub load_policy: Option<LoadPolicyArg>,

    /// What Save stores (overrides TODO_TITLE_POLICY)
    #[arg(long, value_enum)]
    pub title_policy: Option<TitlePolicyArg>,

    /// Id assignment for new tasks (overrides TODO_ID_POLICY)
    #[arg(long, value_enum)]
    pub id_policy: Option<IdPolicyArg>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LoadPolicyArg {
    Replace,
    KeepLocal,
}

impl From<LoadPolicyArg> for LoadPolicy {
    fn from(arg: LoadPolicyArg) -> Self {
        match arg {
            LoadPolicyArg::Replace => LoadPolicy::Replace,
            LoadPolicyArg::KeepLocal => LoadPolicy::KeepLocal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TitlePolicyArg {
    Verbatim,
    Trimmed,
}

impl From<TitlePolicyArg> for TitlePolicy {
    fn from(arg: TitlePolicyArg) -> Self {
        match arg {
            TitlePolicyArg::Verbatim => TitlePolicy::Verbatim,
            TitlePolicyArg::Trimmed => TitlePolicy::Trimmed,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IdPolicyArg {
    LengthPlusOne,
    MaxPlusOne,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::LengthPlusOne => IdPolicy::LengthPlusOne,
            IdPolicyArg::MaxPlusOne => IdPolicy::MaxPlusOne,
        }
    }
}
