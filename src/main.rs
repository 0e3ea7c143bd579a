use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use summarizer::config::{DEFAULT_BASE_URL, DEFAULT_MAX_REDUCE_DEPTH, DEFAULT_MODEL};
use summarizer::{
    CharEstimateCounter, DEFAULT_TOKEN_LIMIT, DefaultResolver, OpenAiGateway, Strategy,
    Summarizer, SummarizerConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Summarize an input string, the contents of a .txt file, or a web page given its URL
#[derive(Parser, Debug)]
#[command(name = "summarize", version)]
struct Cli {
    /// A string, .txt file, or URL to be summarized
    input: String,

    /// Summarization strategy
    #[arg(short = 't', long = "type", value_enum, default_value_t = Strategy::Hierarchical)]
    strategy: Strategy,

    /// Model used for completions and token counting
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum tokens per request and per chunk
    #[arg(long, env = "SUMMARIZER_TOKEN_LIMIT", default_value_t = DEFAULT_TOKEN_LIMIT)]
    token_limit: usize,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenAI-compatible API root
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 180)]
    timeout: u64,

    /// Re-summarize combined chunk summaries until they fit the token limit
    #[arg(long)]
    recursive: bool,

    /// Extra reduce passes allowed with --recursive
    #[arg(long, default_value_t = DEFAULT_MAX_REDUCE_DEPTH)]
    max_reduce_depth: usize,

    /// Count tokens with a character estimate instead of the model's vocabulary
    #[arg(long)]
    estimate_tokens: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SummarizerConfig {
        SummarizerConfig {
            model: self.model.clone(),
            token_limit: self.token_limit,
            api_key: self.api_key.clone().unwrap_or_default(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            recursive_reduce: self.recursive,
            max_reduce_depth: self.max_reduce_depth,
        }
    }
}

fn build_summarizer(cli: &Cli) -> Result<Summarizer> {
    let config = cli.config();

    if !cli.estimate_tokens {
        return Summarizer::from_config(config).context("Failed to set up summarizer");
    }

    config.validate()?;
    let gateway = OpenAiGateway::new(&config)?;
    let resolver = DefaultResolver::new(config.timeout)?;
    Ok(Summarizer::new(
        config,
        Arc::new(gateway),
        Arc::new(resolver),
        Arc::new(CharEstimateCounter),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "summarizer=debug,summarize=debug"
    } else {
        "summarizer=warn,summarize=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summarizer = build_summarizer(&cli)?;
    let summary = summarizer
        .summarize(cli.strategy, &cli.input)
        .await
        .context("Summarization failed")?;

    println!("{}", summary);
    Ok(())
}
