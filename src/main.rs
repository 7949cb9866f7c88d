mod cli;

use catalogbot::{config, server, store};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting catalogbot server");

    // Seeding must finish before the listener is bound
    let (db_pool, report) = store::init_store(&config)?;
    if !report.seeded {
        tracing::info!("Using existing catalog");
    }

    let ctx = server::AppContext::new(db_pool, config);
    let result = server::start_server(ctx).await;

    tracing::info!("Shutting down...");
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "catalogbot=trace,catalogbot_db=debug,tower_http=debug".to_string()
        } else {
            "catalogbot=info,catalogbot_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Init => init_catalog(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("catalogbot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_catalog(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let (_pool, report) = store::init_store(&config)?;

    println!("Database: {}", config.database.path.display());
    if report.seeded {
        println!(
            "Seeded {} categories, {} products, {} links",
            report.categories, report.products, report.links
        );
    } else {
        println!("Catalog already initialized, nothing to seed");
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Database: {}", config.database.path.display());
    println!(
        "  Limits: top products {}, search {}",
        config.catalog.top_products_limit, config.catalog.search_limit
    );
    match config.catalog.fixture {
        Some(ref fixture) if config.catalog.seed => {
            println!("  Seed: {}", fixture.display())
        }
        _ if config.catalog.seed => println!("  Seed: built-in catalog"),
        _ => println!("  Seed: disabled"),
    }

    Ok(())
}
