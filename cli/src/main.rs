//! CLI entrypoint for juris
//!
//! Wires the layers together with dependency injection and exposes the
//! tool invocation layer as a small operator CLI: list the catalog,
//! describe a tool's schema, dispatch an invocation, or run a chat quick
//! action.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use juris_application::{InvokeToolUseCase, RunQuickActionUseCase};
use juris_domain::practice::entities::{QuickActionRequest, QuickActionType};
use juris_domain::tool::entities::{InvocationContext, ToolCategory, ToolInvocation};
use juris_infrastructure::{
    ConfigLoader, FileConfig, HttpToolEndpoint, RestPracticeStore, catalog, default_catalog,
};

/// CLI arguments for juris
#[derive(Parser, Debug)]
#[command(name = "juris")]
#[command(author, version, about = "Legal practice AI tools - catalog, invocation, quick actions")]
#[command(long_about = r#"
juris exposes the practice's AI tool catalog from the command line.

Invocations are validated against each tool's declared parameter schema
before anything touches the network; every outcome is printed as the same
JSON result envelope.

Configuration files are loaded from (in priority order):
1. JURIS_-prefixed environment variables
2. --config <path>     Explicit config file
3. ./juris.toml        Project-level config
4. ~/.config/juris/config.toml   Global config

Example:
  juris tools --category calculation
  juris invoke deadline_calculator -p event_date=2026-08-01 -p deadline_days=15
  juris quick-action create-task "Protocolar recurso ate sexta" --thread thread-4
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    no_config: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tools in the catalog
    Tools {
        /// Only list tools in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Show one tool's full schema as JSON
    Describe {
        /// Catalog id of the tool
        tool_id: String,
    },
    /// Validate and dispatch a tool invocation
    Invoke {
        /// Catalog id of the tool
        tool_id: String,

        /// Parameter as key=value; the value parses as JSON, falling back
        /// to a plain string (can be specified multiple times)
        #[arg(short, long, value_name = "KEY=VALUE")]
        param: Vec<String>,

        /// Case / matter identifier forwarded as context
        #[arg(long, value_name = "ID")]
        case: Option<String>,

        /// Counterparty identifier forwarded as context
        #[arg(long, value_name = "ID")]
        counterparty: Option<String>,

        /// Conversation thread identifier forwarded as context
        #[arg(long, value_name = "ID")]
        thread: Option<String>,
    },
    /// Run a chat quick action and write its audit entry
    QuickAction {
        /// Which quick action to run
        #[arg(value_enum)]
        action: QuickActionKind,

        /// Free-text content of the action
        content: String,

        /// Conversation thread the action originates from
        #[arg(long, value_name = "ID")]
        thread: String,
    },
}

/// CLI-facing quick action names
#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuickActionKind {
    CreateTask,
    RequestDocument,
    CompleteStep,
}

impl From<QuickActionKind> for QuickActionType {
    fn from(kind: QuickActionKind) -> Self {
        match kind {
            QuickActionKind::CreateTask => QuickActionType::CreateTask,
            QuickActionKind::RequestDocument => QuickActionType::RequestDocument,
            QuickActionKind::CompleteStep => QuickActionType::CompleteStep,
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid parameter '{raw}': expected key=value");
    };
    let parsed =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), parsed))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Tools { ref category } => {
            let tools: Vec<_> = match category {
                Some(raw) => {
                    let parsed: ToolCategory =
                        raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    catalog().by_category(parsed)
                }
                None => catalog().all().iter().collect(),
            };

            for tool in tools {
                println!(
                    "{:<24} {:<12} v{:<8} {}",
                    tool.id, tool.category, tool.version, tool.name
                );
            }
        }

        Command::Describe { ref tool_id } => match catalog().get(tool_id) {
            Some(tool) => println!("{}", serde_json::to_string_pretty(tool)?),
            None => bail!("Tool {tool_id} not found"),
        },

        Command::Invoke {
            ref tool_id,
            ref param,
            ref case,
            ref counterparty,
            ref thread,
        } => {
            let config = load_config(&cli)?;
            if config.tools.base_url.is_empty() {
                bail!("tools.base_url is not configured (juris.toml or JURIS_TOOLS__BASE_URL)");
            }

            // === Dependency Injection ===
            let endpoint = Arc::new(HttpToolEndpoint::new(
                &config.tools.base_url,
                &config.tools.api_key,
            ));
            let use_case = InvokeToolUseCase::new(Arc::new(default_catalog()), endpoint);

            let mut invocation = ToolInvocation::new(tool_id);
            for raw in param {
                let (key, value) = parse_param(raw)?;
                invocation = invocation.with_param(key, value);
            }

            let mut context = InvocationContext::new();
            if let Some(case_id) = case {
                context = context.with_case(case_id);
            }
            if let Some(counterparty_id) = counterparty {
                context = context.with_counterparty(counterparty_id);
            }
            if let Some(thread_id) = thread {
                context = context.with_thread(thread_id);
            }
            if !context.is_empty() {
                invocation = invocation.with_context(context);
            }

            info!(tool = %tool_id, "Invoking tool");
            let result = use_case.execute(&invocation).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.is_success() {
                std::process::exit(1);
            }
        }

        Command::QuickAction {
            action,
            ref content,
            ref thread,
        } => {
            let config = load_config(&cli)?;
            if config.practice.base_url.is_empty() {
                bail!(
                    "practice.base_url is not configured (juris.toml or JURIS_PRACTICE__BASE_URL)"
                );
            }

            let store = Arc::new(RestPracticeStore::new(
                &config.practice.base_url,
                &config.practice.api_key,
            ));
            let use_case = RunQuickActionUseCase::new(store.clone(), store);

            let record = use_case
                .execute(QuickActionRequest::new(action.into(), content, thread))
                .await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
