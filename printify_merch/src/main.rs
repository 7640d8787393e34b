mod api;
mod batch;
mod config;
mod discovery;
mod model;

use std::{error::Error, path::PathBuf, process};

use api::{Blueprint, PrintifyClient};
use clap::Parser;
use discovery::Discovery;
use log::debug;

/// Сколько моделей каталога показывать в `blueprints`.
const BLUEPRINTS_LIMIT: usize = 20;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(bin_name = env!("CARGO_BIN_NAME"))]
enum Cli {
    #[command(about = "Prints tool version")]
    #[command(long_about = None)]
    Version,

    #[command(about = "Create merch products for every album cover in the images folder")]
    #[command(long_about = None)]
    Create(ConfigArgs),

    #[command(about = "List available catalog blueprints")]
    #[command(long_about = None)]
    Blueprints(ConfigArgs),
}

#[derive(clap::Args)]
struct ConfigArgs {
    #[arg(short = 'c', long)]
    config_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse() {
        Cli::Version => {
            println!(env!("CARGO_PKG_VERSION"));
        }
        Cli::Create(args) => {
            create(args)?;
        }
        Cli::Blueprints(args) => {
            debug!("Подгружаем конфиг из {:?}", args.config_path);
            let cfg = config::load(args.config_path)?;

            let client = PrintifyClient::new(&cfg.base_url, require_token())?;

            print_blueprints(&client.blueprints()?);
        }
    };

    Ok(())
}

fn create(args: ConfigArgs) -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("Printify Bulk Merch Creator");
    println!("{}", "=".repeat(50));

    debug!("Подгружаем конфиг из {:?}", args.config_path);
    let cfg = config::load(args.config_path)?;

    let token = require_token();

    let client = PrintifyClient::new(&cfg.base_url, token)?;

    let shop = match client.first_shop() {
        Ok(shop) => shop,
        Err(e) => {
            eprintln!("Could not get shop ID ({}). Check your API token.", e);
            process::exit(1);
        }
    };
    println!("\n✓ Using shop ID: {} ({})", shop.id, shop.title);

    let images = match discovery::discover(&cfg.images_path)? {
        Discovery::Created => {
            println!("\nCreated folder: {}", cfg.images_path.display());
            println!("   Add your album cover images there and run again!");
            return Ok(());
        }
        Discovery::Found(images) if images.is_empty() => {
            eprintln!("\nNo images found in {}", cfg.images_path.display());
            eprintln!("   Supported formats: JPG, PNG, WebP");
            process::exit(1);
        }
        Discovery::Found(images) => images,
    };

    println!("\nFound {} album cover(s)", images.len());

    let summary = batch::run(&client, shop.id, &images, &cfg.templates);

    println!("\n{}", "=".repeat(50));
    println!("Done! Created {} products", summary.created);
    if summary.failed_uploads > 0 || summary.failed_products > 0 {
        println!(
            "   {} upload(s) and {} product(s) failed, see above",
            summary.failed_uploads, summary.failed_products
        );
    }
    println!("   Go to Printify to review and publish them!");
    println!("{}", "=".repeat(50));

    Ok(())
}

/// Без токена дальше идти бессмысленно, поэтому сразу завершаемся.
fn require_token() -> model::Token {
    match config::token() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Please set your Printify API token! ({})", e);
            eprintln!("   1. Go to Printify > My Profile > Connections");
            eprintln!("   2. Generate a Personal Access Token");
            eprintln!("   3. Set the {} environment variable", config::TOKEN_ENV);
            process::exit(1);
        }
    }
}

fn print_blueprints(blueprints: &[Blueprint]) {
    println!("\nAvailable Blueprints:");
    for bp in blueprints.iter().take(BLUEPRINTS_LIMIT) {
        println!("  {}: {}", bp.id, bp.title);
    }
}
