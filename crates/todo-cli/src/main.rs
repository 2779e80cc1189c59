mod cli;
mod commands;
mod output;

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use todo_core::domain::OwnerId;
use todo_core::impls::{ChannelSink, StaticTaskSource};
use todo_core::observability::{self, LogConfig};
use todo_core::{AppBuilder, AppConfig, ListEvent, Task, TaskId, TodoScreen};

use crate::cli::Cli;
use crate::commands::{Command, HELP};

fn offline_tasks(owner: OwnerId) -> Vec<Task> {
    vec![
        Task::new(TaskId::new(1), "Water the plants", owner),
        Task::new(TaskId::new(2), "Call the bank", owner).with_completed(true),
        Task::new(TaskId::new(3), "Book dentist appointment", owner),
    ]
}

fn config_from(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("reading TODO_* environment")?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.endpoint(endpoint.clone());
    }
    if let Some(policy) = cli.load_policy {
        config = config.load_policy(policy.into());
    }
    if let Some(policy) = cli.title_policy {
        config = config.title_policy(policy.into());
    }
    if let Some(policy) = cli.id_policy {
        config = config.id_policy(policy.into());
    }
    Ok(config)
}

async fn show(screen: &TodoScreen) {
    print!("{}", output::render(&screen.view().await));
}

async fn show_json(screen: &TodoScreen) -> Result<()> {
    let json = serde_json::to_string_pretty(&screen.view().await)?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(&LogConfig {
        level: cli.log_level.clone(),
        ansi: std::io::stderr().is_terminal(),
    })?;

    let config = config_from(&cli)?;
    let (tx, mut events) = mpsc::unbounded_channel();

    let builder = AppBuilder::new(config.clone()).sink(Arc::new(ChannelSink::new(tx)));
    let builder = if cli.offline {
        builder.source(Arc::new(StaticTaskSource::new(offline_tasks(
            config.owner_id,
        ))))
    } else {
        builder.http_source()?
    };
    let app = builder.build()?;
    info!(endpoint = %app.config.endpoint, offline = cli.offline, "starting");

    let _load = app.start();
    show(&app.screen).await;
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = events.recv() => match event {
                ListEvent::Loaded { count } => {
                    println!("loaded {count} tasks");
                    show(&app.screen).await;
                }
                ListEvent::LoadFailed { reason } => {
                    println!("could not load tasks: {reason}");
                }
                _ => {}
            },
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match commands::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Show) => show(&app.screen).await,
                    Ok(Command::Json) => show_json(&app.screen).await?,
                    Ok(Command::Gesture(gesture)) => match app.screen.handle(gesture).await {
                        Ok(()) => show(&app.screen).await,
                        Err(err) => println!("! {err}"),
                    },
                    Err(msg) => println!("! {msg}"),
                }
            }
        }
    }

    Ok(())
}
