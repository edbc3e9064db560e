mod display;

use anyhow::{Context, Result, bail};
use chatmark_client::{ApiClient, ChatController, ClientError};
use chatmark_config::Config;
use chatmark_engine::{ChatSession, RenderOptions, StreamRenderer, render_markdown_with};
use clap::{Parser, Subcommand};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about = "Render streamed chat Markdown to HTML")]
struct Cli {
    /// Chat server base URL (overrides the config file and CHATMARK_SERVER)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a Markdown file (or stdin) to HTML
    Render {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Feed the input through the stream renderer in chunks of this many bytes
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Do not escape HTML in prose text
        #[arg(long)]
        raw_prose: bool,
    },
    /// Send a message and print the rendered reply
    Chat {
        message: String,

        /// Continue this conversation instead of starting a new one
        #[arg(long)]
        conversation: Option<Uuid>,

        /// User id (defaults to `username` from the config file)
        #[arg(long)]
        user: Option<String>,
    },
    /// Manage conversation history
    #[command(subcommand)]
    Conversations(ConversationsCommand),
}

#[derive(Debug, Subcommand)]
enum ConversationsCommand {
    /// List conversations, newest first
    List {
        #[arg(long)]
        user: Option<String>,
    },
    /// Print a conversation with rendered bot replies
    Show { id: Uuid },
    /// Change a conversation's summary
    Rename { id: Uuid, summary: String },
    /// Delete a conversation and its messages
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        // Chat failures carry a short user-facing message; log the detail.
        match e.downcast_ref::<ClientError>() {
            Some(client_err) => {
                log::error!("{client_err}");
                eprintln!("{}", client_err.status_message());
            }
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?.with_server_override(cli.server.as_deref());
    log::debug!("using server {}", config.server_url);

    match cli.command {
        Command::Render {
            file,
            chunk_size,
            raw_prose,
        } => {
            let mut options = config.render.clone();
            if raw_prose {
                options.escape_prose = false;
            }
            let input = read_input(file.as_ref())?;
            let html = render(&input, &options, chunk_size)?;
            write_stdout(&html)
        }
        Command::Chat {
            message,
            conversation,
            user,
        } => {
            let user = resolve_user(user, &config)?;
            let client = ApiClient::new(&config.server_url)?;
            let controller = ChatController::new(&client, config.render.clone());
            let mut session = ChatSession::new(user, config.timezone.clone());
            if let Some(id) = conversation {
                session.open_conversation(id);
            }

            let mut chunks = 0usize;
            let reply = controller
                .send(&mut session, &message, |html| {
                    chunks += 1;
                    log::debug!("chunk {chunks}: {} bytes of html", html.len());
                })
                .await?;

            if let Some(id) = reply.conversation_id {
                eprintln!("conversation: {id}");
            }
            write_stdout(&reply.html)
        }
        Command::Conversations(cmd) => conversations(cmd, &config).await,
    }
}

async fn conversations(cmd: ConversationsCommand, config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.server_url)?;
    match cmd {
        ConversationsCommand::List { user } => {
            let user = resolve_user(user, config)?;
            let conversations = client.list_conversations(&user).await?;
            if conversations.is_empty() {
                println!("No conversations yet");
                return Ok(());
            }
            let now = chrono::Utc::now();
            for conv in conversations {
                println!(
                    "{}  {:<40}  {}",
                    conv.id,
                    conv.title(),
                    display::format_time_ago(&conv.created_at, now)
                );
            }
            Ok(())
        }
        ConversationsCommand::Show { id } => {
            let detail = client.get_conversation(id).await?;
            let mut out = String::new();
            for msg in &detail.messages {
                let role = if msg.sender_role == "user" { "user" } else { "bot" };
                out.push_str(&format!(
                    "<div class=\"message {role}\">{}</div>\n",
                    render_markdown_with(&msg.content, &config.render)
                ));
            }
            write_stdout(&out)
        }
        ConversationsCommand::Rename { id, summary } => {
            let summary = summary.trim();
            if summary.is_empty() {
                bail!("summary must not be empty");
            }
            let renamed = client.rename_conversation(id, summary).await?;
            println!("{}  {}", renamed.id, renamed.title());
            Ok(())
        }
        ConversationsCommand::Delete { id } => {
            client.delete_conversation(id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::info!(
                "no config file at {}, using defaults",
                path.cloned().unwrap_or_else(Config::config_path).display()
            );
            Ok(Config::default())
        }
    }
}

fn resolve_user(flag: Option<String>, config: &Config) -> Result<String> {
    flag.or_else(|| config.username.clone())
        .context("no user id: pass --user or set `username` in the config file")
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Renders in one pass, or chunk by chunk to mimic a streamed reply.
fn render(input: &str, options: &RenderOptions, chunk_size: Option<usize>) -> Result<String> {
    match chunk_size {
        None => Ok(render_markdown_with(input, options)),
        Some(0) => bail!("--chunk-size must be at least 1"),
        Some(size) => {
            let mut stream = StreamRenderer::new(options.clone());
            for chunk in input.as_bytes().chunks(size) {
                stream.push_bytes(chunk);
            }
            log::info!("rendered {} chunks", stream.chunks());
            Ok(stream.finish().to_string())
        }
    }
}

fn write_stdout(html: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    if !html.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
