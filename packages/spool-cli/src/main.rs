//! Command line interface for turning articles into threads.

mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spool::{
    Article, ArticleSource, InsightExtractor, InsightFallback, MediumSource, OpenAiGenerator,
    PostComposer, ThreadAssembler, ThreadConfig,
};

#[derive(Parser)]
#[command(name = "spool")]
#[command(about = "Convert articles into ready-to-post social threads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a thread from a Medium article
    Thread {
        /// Medium article URL
        #[arg(long, conflicts_with = "article_id")]
        url: Option<String>,

        /// Medium article id
        #[arg(long)]
        article_id: Option<String>,

        /// Draft framing with per-post quality checks
        #[arg(long)]
        preview: bool,

        /// Insight strategy when generation is unavailable
        #[arg(long, value_enum, default_value_t = FallbackArg::Generic)]
        fallback: FallbackArg,
    },

    /// Create a thread from a built-in sample article
    Demo {
        /// Title for the sample article
        #[arg(long, default_value = "10 AI Trends That Will Shape 2025")]
        title: String,

        /// Insight strategy when generation is unavailable
        #[arg(long, value_enum, default_value_t = FallbackArg::Generic)]
        fallback: FallbackArg,
    },

    /// List a Medium user's articles
    Articles {
        /// Medium username
        #[arg(long, default_value = "dillondoa")]
        username: String,

        /// Maximum number of articles to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Report which API keys are configured
    Env,

    /// Round-trip the generator and report degradation
    Diagnose,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FallbackArg {
    /// Fixed generic insights
    Generic,

    /// First sentence of each substantial paragraph
    Paragraph,
}

impl From<FallbackArg> for InsightFallback {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Generic => InsightFallback::Generic,
            FallbackArg::Paragraph => InsightFallback::ParagraphSplit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Thread {
            url,
            article_id,
            preview,
            fallback,
        } => cmd_thread(url, article_id, preview, fallback.into()).await,
        Commands::Demo { title, fallback } => cmd_demo(&title, fallback.into()).await,
        Commands::Articles { username, limit } => cmd_articles(&username, limit).await,
        Commands::Env => cmd_env(),
        Commands::Diagnose => cmd_diagnose().await,
    }
}

async fn cmd_thread(
    url: Option<String>,
    article_id: Option<String>,
    preview: bool,
    fallback: InsightFallback,
) -> Result<()> {
    if url.is_none() && article_id.is_none() {
        anyhow::bail!(
            "provide either --url or --article-id\n\
             Example: spool thread --article-id 3f2a1b\n\
             Example: spool thread --url https://medium.com/@writer/post-3f2a1b"
        );
    }

    info!(?url, ?article_id, "creating thread");
    let article = fetch_article(url, article_id).await;

    let config = ThreadConfig::default().with_insight_fallback(fallback);
    let assembler = build_assembler(config);
    let thread = assembler.assemble(&article).await;

    if preview {
        render::preview(&thread, &article);
    } else {
        render::final_thread(&thread, &article);
    }
    Ok(())
}

async fn cmd_demo(title: &str, fallback: InsightFallback) -> Result<()> {
    info!(title, "creating sample thread");
    render::banner()?;

    let article = Article::placeholder(title);
    let config = ThreadConfig::default().with_insight_fallback(fallback);
    let assembler = build_assembler(config);
    let thread = assembler.assemble(&article).await;

    render::demo_thread(&thread);
    Ok(())
}

async fn cmd_articles(username: &str, limit: usize) -> Result<()> {
    info!(username, limit, "listing articles");
    let source = MediumSource::from_env()
        .map_err(|_| anyhow::anyhow!("MEDIUM_API_KEY is not configured"))?;

    let ids = source.user_articles(username).await?;
    if ids.is_empty() {
        println!(
            "{}",
            format!("❌ No articles found for user: {username}").bright_red()
        );
        return Ok(());
    }

    let mut summaries = Vec::new();
    for id in ids.iter().take(limit) {
        match source.article_info(id).await {
            Ok(summary) => summaries.push(summary),
            Err(error) => {
                eprintln!("{}", format!("⚠️  Skipping {id}: {error}").yellow());
            }
        }
    }

    render::article_listing(username, &summaries);
    Ok(())
}

fn cmd_env() -> Result<()> {
    println!("{}", "🔧 Environment Variables Test".bright_cyan().bold());
    println!("{}", render::SEPARATOR.bright_cyan());
    report_key("Medium API Key", "MEDIUM_API_KEY");
    report_key("OpenAI API Key", "OPENAI_API_KEY");
    println!();
    println!(
        "{}",
        "💡 If keys show as not loaded, check your .env file in the project root.".dimmed()
    );
    Ok(())
}

async fn cmd_diagnose() -> Result<()> {
    let test_content = "Artificial intelligence is transforming how we work and live. \
                        Machine learning algorithms are becoming more sophisticated every day. \
                        The future of AI development looks incredibly promising.";

    println!("{}", "🤖 Generator Connectivity Test".bright_cyan().bold());
    println!("{}", render::SEPARATOR.bright_cyan());

    let config = ThreadConfig::default();
    let (extractor, composer) = match OpenAiGenerator::from_env() {
        Ok(generator) => {
            let generator = Arc::new(generator);
            (
                InsightExtractor::new(Arc::clone(&generator), config.clone()),
                PostComposer::new(generator, config),
            )
        }
        Err(_) => {
            println!(
                "{}",
                "⚠️  OPENAI_API_KEY not set, running without generator".yellow()
            );
            (
                InsightExtractor::without_generator(config.clone()),
                PostComposer::without_generator(config),
            )
        }
    };

    let insights = extractor.extract(test_content, "AI Test Article").await;

    // Template content always opens with the same generic line, which
    // makes silent degradation recognizable.
    if insights[0].contains("key to success") {
        println!(
            "{}",
            "❌ Status: DEGRADED (template content substituted)".bright_red()
        );
        println!(
            "{}",
            "🔍 Generator calls are falling back to local templates".red()
        );
        println!(
            "{}",
            "💡 Check: key format, network connectivity, rate limits".yellow()
        );
    } else {
        println!(
            "{}",
            "✅ Status: CONNECTED (generated content detected)".bright_green()
        );
        println!("{}", "🎉 Generator integration is working!".bright_green());
    }

    println!();
    println!("{}", "📋 Extracted insights:".bold());
    for (i, insight) in insights.iter().enumerate() {
        println!("{}. {insight}", i + 1);
    }

    println!();
    println!("{}", "🎯 Hook composition:".bold());
    let hook = composer.compose_hook("AI Test Article", &insights[0]).await;
    println!("{hook}");

    Ok(())
}

/// Fetch the requested article, substituting the built-in sample when
/// the fetch fails so a thread always comes out.
async fn fetch_article(url: Option<String>, article_id: Option<String>) -> Article {
    let fetched = match MediumSource::from_env() {
        Ok(source) => {
            if let Some(id) = &article_id {
                source.fetch_by_id(id).await
            } else {
                source.fetch_by_url(url.as_deref().unwrap_or_default()).await
            }
        }
        Err(error) => Err(error),
    };

    match fetched {
        Ok(article) => article,
        Err(error) => {
            eprintln!(
                "{}",
                format!("⚠️  Article fetch failed ({error}), using sample article").yellow()
            );
            let mut article = Article::placeholder("The Future of AI Development");
            if let Some(url) = url {
                article = article.with_url(url);
            }
            article
        }
    }
}

/// Build an assembler with the generator when a key is configured.
fn build_assembler(config: ThreadConfig) -> ThreadAssembler<OpenAiGenerator> {
    match OpenAiGenerator::from_env() {
        Ok(generator) => ThreadAssembler::with_config(Arc::new(generator), config),
        Err(_) => {
            eprintln!(
                "{}",
                "⚠️  OPENAI_API_KEY not set, composing with template content".yellow()
            );
            ThreadAssembler::without_generator_with_config(config)
        }
    }
}

fn report_key(label: &str, var: &str) {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => {
            let head: String = value.chars().take(10).collect();
            println!("{label}: {} ({head}...)", "✅ Loaded".bright_green());
        }
        _ => println!("{label}: {}", "❌ Not loaded".bright_red()),
    }
}
