//! Terminal output for threads and article listings.

use colored::Colorize;
use console::Term;

use spool::{Article, ArticleSummary, Thread, PLATFORM_LIMIT};

pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const POST_RULE: &str = "───────────────────────────────────────";

/// Soft ceiling above which a post is flagged as long in previews.
const LONG_WARNING: usize = 260;
/// Floor below which a post is flagged as thin in previews.
const SHORT_WARNING: usize = 50;

pub fn banner() -> std::io::Result<()> {
    let term = Term::stdout();
    term.write_line("")?;
    term.write_line(&"╭──────────────────────────────╮".bright_cyan().to_string())?;
    term.write_line(&"│   spool · article threader   │".bright_cyan().to_string())?;
    term.write_line(&"╰──────────────────────────────╯".bright_cyan().to_string())?;
    term.write_line("")?;
    Ok(())
}

/// Draft view with a role label and length verdict per post.
pub fn preview(thread: &Thread, article: &Article) {
    println!();
    println!("{}", "🧵 THREAD PREVIEW".bright_cyan().bold());
    println!("{}", SEPARATOR.bright_cyan());
    println!("📄 {}", article.title.bold());
    println!("🔗 {}", article.url.dimmed());
    println!("📊 {} posts", thread.post_count());
    println!();

    let total = thread.post_count();
    for post in &thread.posts {
        let role = if post.order == 1 {
            "🎯 HOOK"
        } else if post.order as usize == total {
            "🎬 WRAP-UP"
        } else {
            "💡 INSIGHT"
        };
        println!("{}", format!("{role} (post {}/{total})", post.order).bold());
        println!("{}", POST_RULE.dimmed());
        println!("{}", post.content);
        println!("{}", POST_RULE.dimmed());

        let verdict = if post.character_count > LONG_WARNING {
            "⚠️  Long".yellow()
        } else if post.character_count < SHORT_WARNING {
            "⚠️  Short".yellow()
        } else {
            "✅ Good".bright_green()
        };
        println!(
            "📏 {}/{} characters {}",
            post.character_count, PLATFORM_LIMIT, verdict
        );
        println!();
    }
}

/// Copy-ready view of an assembled thread.
pub fn final_thread(thread: &Thread, article: &Article) {
    println!();
    println!("{}", "🎉 THREAD READY!".bright_green().bold());
    println!("{}", SEPARATOR.bright_green());
    println!("📄 {}", article.title.bold());
    println!("🔗 {}", article.url.dimmed());
    println!("📊 {} posts", thread.post_count());

    for post in &thread.posts {
        println!();
        println!("{}", format!("📋 POST {}:", post.order).bold());
        println!("{}", POST_RULE.dimmed());
        println!("{}", post.content);
        println!("{}", POST_RULE.dimmed());
        println!(
            "{}",
            format!("✅ {} characters • Ready to post", post.character_count).bright_green()
        );
    }

    println!();
    println!(
        "{}",
        "🚀 Ready to post! Copy each post above in order.".bright_cyan()
    );
}

/// Compact view for the sample thread.
pub fn demo_thread(thread: &Thread) {
    println!("{}", "🎉 Sample Thread Created!".bright_green().bold());
    println!("{}", SEPARATOR.bright_green());

    for post in &thread.posts {
        println!();
        println!("{}", format!("🐦 Post {}:", post.order).bold());
        println!("{}", post.content);
        println!(
            "{}",
            format!("📏 Characters: {}/{}", post.character_count, PLATFORM_LIMIT).dimmed()
        );
    }

    println!();
    println!("{}", format!("🆔 Thread: {}", thread.id).dimmed());
}

/// Numbered listing of a user's articles with per-article metadata.
pub fn article_listing(username: &str, summaries: &[ArticleSummary]) {
    println!();
    println!(
        "{}",
        format!("📚 Articles by @{username}").bright_cyan().bold()
    );
    println!("{}", SEPARATOR.bright_cyan());

    for (i, summary) in summaries.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, summary.title.bold());
        if let Some(subtitle) = &summary.subtitle {
            if !subtitle.is_empty() {
                println!("   {}", subtitle.dimmed());
            }
        }

        let mut details = Vec::new();
        if let Some(published) = &summary.published_at {
            details.push(format!("📅 {published}"));
        }
        if let Some(minutes) = summary.reading_time {
            details.push(format!("📖 {minutes:.0} min read"));
        }
        if let Some(claps) = summary.claps {
            details.push(format!("👏 {claps}"));
        }
        if !details.is_empty() {
            println!("   {}", details.join("  "));
        }
        println!("   🆔 {}", summary.id.dimmed());
    }

    println!();
    println!(
        "{}",
        "💡 Use 'spool thread --article-id <ID>' to create a thread".dimmed()
    );
}
