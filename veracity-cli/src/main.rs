//! Veracity CLI
//!
//! Heuristic misinformation-risk scoring for web content.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use veracity_core::AnalysisSubject;
use veracity_engine::{Engine, EngineConfig, JsonFileStore, Store};
use veracity_factcheck::{FactCheckProvider, HttpProvider, ProviderConfig};

#[derive(Parser)]
#[command(name = "veracity")]
#[command(author, version, about = "Veracity: misinformation-risk scoring for web content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,

    /// Path of the persisted state file
    #[arg(long, default_value = "veracity_state.json")]
    state: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a page for misinformation risk
    Analyze {
        /// Page URL
        #[arg(short, long)]
        url: String,

        /// Page title
        #[arg(short, long, default_value = "")]
        title: String,

        /// File with the extracted page text (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Fact-check provider API key
        #[arg(long, env = "VERACITY_API_KEY")]
        api_key: Option<String>,

        /// Fact-check provider base URL
        #[arg(long, env = "VERACITY_PROVIDER_URL", default_value = "https://api.parallel.ai")]
        provider_url: String,

        /// Result cache TTL in seconds (0 disables caching)
        #[arg(long, default_value = "900")]
        cache_ttl: u64,

        /// Skip the provider and use the simulated heuristic
        #[arg(long)]
        simulate: bool,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record whether a delivered score was accurate
    Feedback {
        /// URL of the analyzed page
        #[arg(short, long)]
        url: String,

        /// The score was accurate
        #[arg(long, conflicts_with = "inaccurate")]
        accurate: bool,

        /// The score was inaccurate
        #[arg(long)]
        inaccurate: bool,
    },

    /// Show community feedback statistics
    Stats,

    /// Check fact-check provider configuration and reachability
    Status {
        #[arg(long, env = "VERACITY_API_KEY")]
        api_key: Option<String>,

        #[arg(long, env = "VERACITY_PROVIDER_URL", default_value = "https://api.parallel.ai")]
        provider_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Analyze {
            url,
            title,
            file,
            api_key,
            provider_url,
            cache_ttl,
            simulate,
            json,
        } => {
            run_analyze(
                &cli.state,
                &url,
                &title,
                file,
                api_key,
                provider_url,
                cache_ttl,
                simulate,
                json,
            )
            .await?;
        }
        Commands::Feedback {
            url,
            accurate,
            inaccurate,
        } => {
            run_feedback(&cli.state, &url, accurate, inaccurate)?;
        }
        Commands::Stats => {
            run_stats(&cli.state);
        }
        Commands::Status {
            api_key,
            provider_url,
        } => {
            run_status(api_key, provider_url).await;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_analyze(
    state: &PathBuf,
    url: &str,
    title: &str,
    file: Option<PathBuf>,
    api_key: Option<String>,
    provider_url: String,
    cache_ttl: u64,
    simulate: bool,
    json: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("could not read page text from stdin")?;
            buf
        }
    };

    let config = EngineConfig {
        api_key,
        provider_url,
        provider_timeout_secs: 10,
        cache_ttl_secs: cache_ttl,
    };

    let store = Arc::new(Store::open(
        Arc::new(JsonFileStore::new(state)),
        config.cache_ttl_secs,
    ));
    let engine = Engine::new(&config, store)?;

    let subject = AnalysisSubject::new(url, title, text);
    let result = if simulate {
        engine.analyze_simulated(&subject)
    } else {
        engine.analyze(&subject).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n🔎 Veracity analysis for {}\n", result.url);
    println!("   Risk score:      {}/100", result.score);
    println!(
        "   Source:          {} ({})",
        result.source.score, result.source.label
    );
    println!(
        "   Sensationalism:  {} ({})",
        result.sensationalism.score, result.sensationalism.label
    );
    println!(
        "   Writing style:   {} ({})",
        result.style.score, result.style.label
    );
    println!(
        "   Fact check:      {} ({})",
        result.fact_check.score, result.fact_check.label
    );

    println!("\n📚 Verification sources:");
    for source in &result.sources {
        let mut tags = Vec::new();
        if source.is_trusted {
            tags.push("trusted");
        }
        if source.is_fallback {
            tags.push("fallback");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        println!("   - {}{}", source.title, tags);
        println!("     {}", source.url);
    }

    Ok(())
}

fn run_feedback(state: &PathBuf, url: &str, accurate: bool, inaccurate: bool) -> Result<()> {
    if accurate == inaccurate {
        bail!("pass exactly one of --accurate or --inaccurate");
    }

    let store = Arc::new(Store::open(Arc::new(JsonFileStore::new(state)), 900));

    let result = match store.cached(url) {
        Some(result) => result,
        None => bail!("no cached analysis for {url}; run `veracity analyze` first"),
    };

    store.record_feedback(url, accurate, result, chrono::Utc::now())?;

    let stats = store.feedback_stats();
    println!("✅ Feedback recorded for {url}");
    println!(
        "   Community stats: {} reports, {:.1}% rated accurate",
        stats.total,
        stats.accuracy_pct()
    );
    Ok(())
}

fn run_stats(state: &PathBuf) {
    let store = Store::open(Arc::new(JsonFileStore::new(state)), 900);
    let stats = store.feedback_stats();

    println!("📊 Community feedback");
    println!("   Total reports:  {}", stats.total);
    println!("   Accurate:       {}", stats.accurate);
    println!("   Inaccurate:     {}", stats.inaccurate);
    println!("   Accuracy:       {:.1}%", stats.accuracy_pct());
}

async fn run_status(api_key: Option<String>, provider_url: String) {
    println!("🔌 Checking fact-check provider...\n");

    let Some(key) = api_key else {
        println!("ℹ️  No API key configured (set VERACITY_API_KEY)");
        println!("   Analyses will use the simulated verification heuristic.");
        return;
    };

    println!("✓ API key configured");

    match HttpProvider::new(ProviderConfig::new(provider_url.as_str(), key.as_str())) {
        Ok(provider) => match provider.search("connectivity check").await {
            Ok(hits) => {
                println!("✅ Provider reachable at {provider_url} ({} results)", hits.len());
            }
            Err(e) => {
                println!("⚠️  Provider unreachable: {e}");
                println!("   Analyses will fall back to the simulated heuristic.");
            }
        },
        Err(e) => println!("❌ Could not build HTTP client: {e}"),
    }
}
