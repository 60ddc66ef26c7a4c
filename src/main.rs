use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::info;

use crate::app::{ActivityBoard, TerminalLines, TerminalPrompt};
use crate::config::Settings;
use crate::page::Page;
use crate::service::ActivityClient;

mod app;
mod config;
mod misc;
mod model;
mod page;
mod service;
#[cfg(test)]
mod testing;

const HELP: &str = "\
commands:
  show                        print the board
  html                        print the board as html
  refresh                     reload the activities
  email <address>             fill in the email field
  select <activity>           choose an activity
  submit                      sign up with the form
  unregister <email> <activity>
  quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::parse();
    misc::log::init(settings.log.as_deref());

    let lines: TerminalLines = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let board = ActivityBoard::create(
        Arc::new(ActivityClient::create(settings.server.clone())),
        Page::default(),
        Box::new(TerminalPrompt::new(lines.clone())),
    );
    info!("activity board is running against: {}", settings.server);
    println!("{HELP}");

    loop {
        // the prompt reads from the same lines, so the lock is released here
        let next = lines.lock().await.next_line().await?;
        let Some(line) = next else { break };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "" => {}
            "show" => print!("{}", board.op.Snapshot().await?),
            "html" => println!("{}", board.op.Snapshot().await?.to_html()),
            "refresh" => board.op.spawn().Refresh(),
            "email" => board.op.SetEmail(rest.to_string()).await?,
            "select" => {
                if !board.op.SelectActivity(rest.to_string()).await? {
                    println!("no activity named `{rest}`");
                }
            }
            "submit" => board.op.Submit().await?,
            "unregister" => match rest.split_once(' ') {
                Some((email, activity)) => {
                    let activity = activity.trim().to_string();
                    if !board.op.ClickUnregister(activity, email.to_string()).await? {
                        println!("nothing sent");
                    }
                }
                None => println!("usage: unregister <email> <activity>"),
            },
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`, try `help`"),
        }
    }
    Ok(())
}
