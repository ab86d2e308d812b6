mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chatdoc::domain::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use chatdoc::{ChatSession, Container, LlmSettings, TurnOutcome, NO_DOCUMENT_NOTICE};

use cli::{Commands, ProviderArg, ReplCommand, HELP};

#[derive(Parser)]
#[command(name = "chatdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Anthropic API key
    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "ANTHROPIC_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Anthropic-compatible endpoint
    #[arg(long, global = true, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    #[arg(long, global = true, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[arg(long, global = true, value_enum, default_value_t = ProviderArg::Anthropic)]
    provider: ProviderArg,

    /// Answer offline with a deterministic mock instead of calling a provider
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            provider: self.provider.into(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            mock: self.mock_llm,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so .env values feed clap's env fallbacks.
    dotenvy::dotenv().ok();
    let env_key = std::env::var("ANTHROPIC_API_KEY").ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut container = Container::new(cli.llm_settings());

    match cli.command {
        Commands::Ask { file, question } => {
            let mut session = container.chat_session()?;
            session.load_path(&file).await?;

            match session.ask(&question).await {
                TurnOutcome::Answered(reply) => println!("{}", reply),
                TurnOutcome::Ignored => bail!("question must not be empty"),
                TurnOutcome::NoDocument => bail!(NO_DOCUMENT_NOTICE),
            }
        }

        Commands::Preview { file } => {
            let mut session = container.chat_session()?;
            let document = session.load_path(&file).await?;
            println!("{}", document.preview());
        }

        Commands::Chat { file } => {
            let mut session = container.chat_session()?;
            run_chat(&mut container, &mut session, file, env_key.as_deref()).await?;
        }
    }

    Ok(())
}

async fn run_chat(
    container: &mut Container,
    session: &mut ChatSession,
    file: Option<PathBuf>,
    env_key: Option<&str>,
) -> Result<()> {
    println!("Chat With Doc");
    println!("Supported files: {}", session.supported_extensions().join(", "));
    println!("{}\n", HELP);

    match file {
        Some(path) => load(session, &path).await,
        None => println!("Please upload a document first (/load <path>)."),
    }
    if !session.has_llm() {
        println!("No API key configured; set ANTHROPIC_API_KEY or use /key <api-key>.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Ask(question) => match session.ask(&question).await {
                TurnOutcome::Answered(reply) => println!("\n{}\n", reply),
                TurnOutcome::NoDocument => println!("{}", NO_DOCUMENT_NOTICE),
                TurnOutcome::Ignored => {}
            },
            ReplCommand::Load(path) => load(session, Path::new(&path)).await,
            ReplCommand::Preview => match session.document() {
                Some(document) => println!("{}\n", document.preview()),
                None => println!("No document loaded."),
            },
            ReplCommand::Clear => {
                session.clear_transcript();
                println!("Chat history cleared.");
            }
            ReplCommand::History { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(session.transcript())?);
                } else if session.transcript().is_empty() {
                    println!("No messages yet.");
                } else {
                    for message in session.transcript() {
                        println!("[{}] {}", message.role(), message.content());
                    }
                }
            }
            ReplCommand::Key(key) => match container.set_api_key(key.as_str()) {
                Ok(llm) => {
                    session.set_llm(llm);
                    if key_differs_from_env(env_key, &key) {
                        println!("API key updated!");
                    }
                }
                Err(e) => println!("{}", e),
            },
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => break,
            ReplCommand::Invalid(message) => println!("{}", message),
        }
    }

    info!("Chat ended with {} messages", session.transcript().len());
    Ok(())
}

/// Whether a `/key` value differs from `ANTHROPIC_API_KEY` in the environment.
fn key_differs_from_env(env_key: Option<&str>, key: &str) -> bool {
    env_key != Some(key)
}

/// Load a document into the session, reporting the outcome inline.
async fn load(session: &mut ChatSession, path: &Path) {
    match session.load_path(path).await {
        Ok(document) => println!("Loaded document: {}", document.name()),
        Err(e) => println!("{}", e),
    }
}
