use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frontdesk_agent::FrontDeskAgent;
use frontdesk_core::{BusinessInfo, QuickAction};
use frontdesk_observability::{init_tracing, AppMetrics};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "frontdesk")]
#[command(about = "Front desk assistant CLI")]
struct Cli {
    #[arg(long)]
    business: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    reply_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Ask { text: String },
    Quick { action: String },
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("frontdesk_cli");
    let cli = Cli::parse();

    let agent = build_agent(&cli)?;

    match cli.command {
        Command::Chat => run_chat(agent).await?,
        Command::Ask { text } => {
            let pending = agent.submit(&text).context("message is empty")?;
            if let Some(reply) = pending.reply().await? {
                println!("{}", reply.text);
            }
        }
        Command::Quick { action } => {
            let action = QuickAction::parse(&action)
                .context("invalid quick action (hours | contact | location)")?;
            let pending = agent.quick_action(action);
            if let Some(reply) = pending.reply().await? {
                println!("{}", reply.text);
            }
        }
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(agent.business())?);
        }
    }

    Ok(())
}

async fn run_chat(agent: FrontDeskAgent) -> Result<()> {
    println!("{} chat. type 'exit' to quit.", agent.business().name);

    if let Some(greeting) = agent.transcript().first() {
        println!("\n{}\n", greeting.text);
    }

    let hint = QuickAction::all()
        .into_iter()
        .map(|action| format!("/{} ({})", action.as_str(), action.label()))
        .collect::<Vec<_>>()
        .join("  ");
    println!("Quick questions: {hint}");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let pending = if let Some(rest) = message.strip_prefix('/') {
            match QuickAction::parse(rest) {
                Some(action) => agent.quick_action(action),
                None => {
                    println!("unknown quick prompt. try /hours, /contact or /location.");
                    continue;
                }
            }
        } else {
            match agent.submit(message) {
                Some(pending) => pending,
                None => continue,
            }
        };

        if let Some(reply) = pending.reply().await? {
            println!("\n{}\n", reply.text);
        }
    }

    let snapshot = agent.metrics().snapshot();
    info!(
        session_id = %agent.session_id(),
        messages = snapshot.messages_total,
        replies = snapshot.replies_total,
        fallbacks = snapshot.fallback_total,
        cancelled = snapshot.cancelled_total,
        quick_actions = snapshot.quick_actions_total,
        avg_reply_latency_millis = snapshot.avg_reply_latency_millis,
        "chat session closed"
    );

    Ok(())
}

fn build_agent(cli: &Cli) -> Result<FrontDeskAgent> {
    let metrics = AppMetrics::shared();

    let business = if let Some(path) = &cli.business {
        BusinessInfo::from_json_file(path)?
    } else if let Ok(path) = env::var("FRONTDESK_BUSINESS") {
        BusinessInfo::from_json_file(&path)?
    } else {
        BusinessInfo::default()
    };

    Ok(FrontDeskAgent::new(business, metrics)
        .with_reply_delay(Duration::from_millis(cli.reply_delay_ms)))
}
