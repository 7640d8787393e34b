mod api;
mod category;
mod config;
mod dispatch;
mod hn;
mod model;

use std::{error::Error, process};

use api::{AuthorizedClient, PasswordAuthenticator};
use category::Category;
use clap::Parser;
use config::Credentials;
use log::debug;
use model::{Post, PostTarget};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(bin_name = env!("CARGO_BIN_NAME"))]
#[command(version, about = "A-RAM Reddit Auto-Poster")]
#[command(long_about = None)]
struct Cli {
    #[arg(long, help = "Post title")]
    title: String,

    #[arg(long, help = "URL to share (for link posts)")]
    url: Option<String>,

    #[arg(long, help = "Post body (for text posts)")]
    body: Option<String>,

    #[arg(long, help = "Subreddit category to post to")]
    category: Option<String>,

    #[arg(long, help = "Specific subreddit to post to")]
    subreddit: Option<String>,

    #[arg(long, help = "Generate Hacker News post template")]
    hn: bool,

    #[arg(long, help = "Don't actually post, just show what would happen")]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if cli.hn {
        println!("{}", hn::TEMPLATE);
        return Ok(());
    }

    if cli.dry_run {
        print_dry_run(&cli);
        return Ok(());
    }

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Set these environment variables:");
            for name in config::ALL_ENV {
                eprintln!("  {}", name);
            }
            process::exit(1);
        }
    };

    // Цели определяем до аутентификации, чтобы не ходить в сеть зря.
    let Some(targets) = resolve_targets(cli.subreddit.as_deref(), cli.category.as_deref()) else {
        return Ok(());
    };

    let client = match authenticate(&credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Reddit authentication failed: {}", e);
            process::exit(1);
        }
    };

    let post = Post::new(cli.title, cli.url, cli.body);
    debug!("Публикуем {:?}", post);

    let deliveries = dispatch::dispatch(&client, &targets, &post);

    let failed = dispatch::failed_forums(&deliveries);
    println!(
        "\nPosted to {} of {} subreddit(s)",
        deliveries.len() - failed.len(),
        deliveries.len()
    );
    if !failed.is_empty() {
        println!("   Failed: {}", failed.join(", "));
    }

    Ok(())
}

fn authenticate(credentials: &Credentials) -> anyhow::Result<AuthorizedClient> {
    let access_token = PasswordAuthenticator::new(credentials)?.authenticate()?;

    let client = AuthorizedClient::from_token(access_token, &credentials.user_agent())?;

    println!("✓ Authenticated as u/{}", client.me()?);

    Ok(client)
}

/// Определяет куда постить. `None` значит что постить некуда и об этом уже
/// сообщено пользователю.
fn resolve_targets(subreddit: Option<&str>, category: Option<&str>) -> Option<Vec<PostTarget>> {
    if let Some(name) = subreddit {
        return Some(vec![PostTarget::new(name.trim_start_matches("r/"))]);
    }

    let Some(name) = category else {
        println!("Specify --subreddit or --category");
        println!("Categories: {}", category::names().join(", "));
        return None;
    };

    match name.parse::<Category>() {
        Ok(c) => {
            println!(
                "\nPosting to {} subreddits in '{}'...",
                c.forums().len(),
                c
            );
            Some(c.targets())
        }
        Err(e) => {
            println!("Unknown category: {}", e.0);
            println!("Available: {}", category::names().join(", "));
            None
        }
    }
}

fn print_dry_run(cli: &Cli) {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "(none)".to_owned());

    println!("DRY RUN MODE - Not actually posting");
    println!("Title: {}", cli.title);
    println!("URL: {}", show(&cli.url));
    println!("Body: {}", show(&cli.body));
    println!("Category: {}", show(&cli.category));
    println!("Subreddit: {}", show(&cli.subreddit));
}
