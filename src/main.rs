//! RepoScout CLI
//!
//! Launches the interactive TUI by default; the `search` and `bookmarks`
//! subcommands provide one-shot output for scripting.

use clap::{Parser, Subcommand};
use console::style;
use reposcout::{format_stars, BookmarkStore, GitHubClient, JsonStore, Repository};

/// RepoScout - Search GitHub repositories and bookmark them
///
/// Run without a subcommand for the interactive terminal UI.
#[derive(Parser)]
#[command(name = "reposcout")]
#[command(author = "RepoScout Contributors")]
#[command(version)]
#[command(about = "Search GitHub repositories and bookmark them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories once and print the results
    Search {
        /// Search query
        query: String,

        /// Maximum results to print
        #[arg(short, long, default_value = "10")]
        max: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// List bookmarked repositories
    Bookmarks {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() {
    // Initialize logging
    reposcout::logging::init();
    reposcout::logging::info("MAIN", "RepoScout starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(),
        Some(Commands::Search { query, max, output }) => cmd_search(&query, max, &output),
        Some(Commands::Bookmarks { output }) => cmd_bookmarks(&output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Interactive mode
fn cmd_tui() -> reposcout::Result<()> {
    let client = GitHubClient::new()?;
    let bookmarks = BookmarkStore::load(JsonStore::open_default()?);
    reposcout::tui::run(client, bookmarks)
}

/// One-shot search command implementation
fn cmd_search(query: &str, max: usize, output_format: &str) -> reposcout::Result<()> {
    let client = GitHubClient::new()?;
    let results = client.search_repositories(query)?;

    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "query": query,
                "total_count": results.total_count,
                "incomplete_results": results.incomplete_results,
                "items": results.items.iter().take(max).collect::<Vec<_>>(),
            }))?
        );
        return Ok(());
    }

    if results.items.is_empty() {
        println!("No repositories found for '{}'.", query);
        return Ok(());
    }

    println!(
        "{} {} repositories match '{}' (showing {}):",
        style("\u{2713}").green().bold(),
        style(results.total_count).cyan(),
        style(query).yellow(),
        results.items.len().min(max)
    );
    println!();

    for repo in results.items.iter().take(max) {
        print_repo(repo, None);
    }

    Ok(())
}

/// List saved bookmarks
fn cmd_bookmarks(output_format: &str) -> reposcout::Result<()> {
    let bookmarks = BookmarkStore::load(JsonStore::open_default()?);

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(bookmarks.list())?);
        return Ok(());
    }

    if bookmarks.count() == 0 {
        println!("No bookmarks saved yet. Press 'b' on a result in the TUI to add one.");
        return Ok(());
    }

    println!(
        "{} {} bookmarked repositories:",
        style("\u{2605}").yellow().bold(),
        style(bookmarks.count()).cyan()
    );
    println!();

    for repo in bookmarks.list() {
        print_repo(repo, Some("\u{2605}"));
    }

    Ok(())
}

fn print_repo(repo: &Repository, marker: Option<&str>) {
    println!(
        "  {}{}",
        marker.map(|m| format!("{} ", m)).unwrap_or_default(),
        style(&repo.full_name).cyan().bold()
    );
    println!(
        "    \u{2B50} {} {}",
        format_stars(repo.stargazers_count),
        repo.language
            .as_deref()
            .map(|l| format!("| {}", l))
            .unwrap_or_default()
    );
    if let Some(desc) = &repo.description {
        println!("    {}", desc);
    }
    println!("    {}", style(&repo.html_url).dim());
    println!();
}
