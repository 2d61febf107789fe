use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sathi_agent::AdvisoryAgent;
use sathi_core::{ChatInput, OfflineResponder};
use sathi_observability::{init_tracing, AppMetrics};
use sathi_storage::Store;

#[derive(Debug, Parser)]
#[command(name = "sathi")]
#[command(about = "FarmaSathi advisory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat with the offline advisor.
    Chat {
        #[arg(long)]
        locale: Option<String>,
    },
    /// One-shot question, prints the reply as JSON.
    Ask {
        text: String,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Fixed weather reading for a known city.
    Weather { city: String },
    /// List the cities the weather gazetteer knows.
    Cities,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("sathi_cli");
    let cli = Cli::parse();

    let agent = build_agent().await?;

    match cli.command {
        Command::Chat { locale } => run_chat(agent, locale).await?,
        Command::Ask { text, locale } => {
            let reply = agent
                .handle_chat(ChatInput {
                    session_id: None,
                    text,
                    locale,
                    user_id: None,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Weather { city } => {
            let gazetteer = agent.responder().gazetteer();
            match gazetteer.by_name(&city) {
                Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                None => {
                    let fallback = gazetteer.extract_or_default(&city.to_lowercase());
                    println!("{}", serde_json::to_string_pretty(fallback)?);
                }
            }
        }
        Command::Cities => {
            for city in agent.responder().gazetteer().cities() {
                println!("{}, {}", city.name, city.state);
            }
        }
    }

    Ok(())
}

async fn run_chat(agent: AdvisoryAgent<Store>, locale: Option<String>) -> Result<()> {
    let mut session_id: Option<String> = None;

    println!("FarmaSathi chat mode. type 'exit' to quit.");

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

        let reply = agent
            .handle_chat(ChatInput {
                session_id: session_id.clone(),
                text: message.to_string(),
                locale: locale.clone(),
                user_id: None,
            })
            .await?;

        session_id = Some(reply.session_id.clone());

        println!("\n[{}] {}\n", reply.locale.as_code(), reply.message);

        if let Some(data) = reply.data {
            println!("{}\n", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}

async fn build_agent() -> Result<AdvisoryAgent<Store>> {
    let metrics = AppMetrics::shared();
    let responder = Arc::new(OfflineResponder::new()?);

    let store = if let Ok(database_url) = env::var("SATHI_DATABASE_URL") {
        Store::sqlite(&database_url).await?
    } else {
        Store::memory()
    };

    Ok(AdvisoryAgent::new(responder, Arc::new(store), metrics))
}
