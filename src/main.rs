//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `droid_utils` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output
//!
//! Blocking work (installers, server start, blocking lookups) runs on
//! `spawn_blocking` so the runtime stays responsive.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use droid_utils::bootstrap::{
    install_deps, setup_and_start, start_server, RustupSource, SetupOptions, StartChoice,
    SystemRunner,
};
use droid_utils::config::{Cli, Command, WebhookArgs};
use droid_utils::initialization::{init_logger_with, load_env_file};
use droid_utils::layout::check_folders;
use droid_utils::storage::distinct_countries;
use droid_utils::utils::timed;
use droid_utils::webhook::{send_webhook, Embed, WebhookMessage};
use droid_utils::{
    check_md5, init_db_pool, make_md5, make_uuid, run_migrations, update_user_country_if_needed,
    BackfillOutcome, Config, CountryResolver,
};

#[tokio::main]
async fn main() -> Result<()> {
    let env_path = load_env_file();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    if let Some(path) = env_path {
        log::debug!("Loaded environment from {}", path.display());
    }

    let ok = match cli.command {
        Command::InstallDeps => {
            let python = config.python.clone();
            tokio::task::spawn_blocking(move || install_deps(&SystemRunner, &python))
                .await
                .context("Dependency installation panicked")?
        }
        Command::Setup {
            start,
            no_start,
            entrypoint,
        } => {
            let options = SetupOptions {
                python: config.python.clone(),
                project_dir: std::env::current_dir().context("Failed to read current directory")?,
                rustup: RustupSource::for_current_platform(),
                start: if start {
                    StartChoice::Always
                } else if no_start {
                    StartChoice::Never
                } else {
                    StartChoice::Ask
                },
                entrypoint,
            };
            tokio::task::spawn_blocking(move || {
                let stdin = std::io::stdin();
                let mut stdout = std::io::stdout();
                setup_and_start(&SystemRunner, &options, &mut stdin.lock(), &mut stdout)
            })
            .await
            .context("Setup panicked")?
        }
        Command::Serve { entrypoint } => {
            let python = config.python.clone();
            let dir = std::env::current_dir().context("Failed to read current directory")?;
            tokio::task::spawn_blocking(move || start_server(&python, &entrypoint, &dir))
                .await
                .context("Server start panicked")?
                .context("Failed to start server")?
        }
        Command::CheckFolders { root } => {
            check_folders(&root).context("Failed to create data folders")?;
            println!("Data folders ready under {}", root.display());
            true
        }
        Command::Hash { value, check } => match check {
            Some(expected) => {
                let matches = check_md5(&value, &expected);
                println!("{}", if matches { "match" } else { "mismatch" });
                matches
            }
            None => {
                println!("{}", make_md5(&value));
                true
            }
        },
        Command::Uuid { prefix } => {
            println!("{}", make_uuid(&prefix));
            true
        }
        Command::Lookup { ip, blocking } => lookup(&config, ip, blocking).await?,
        Command::BackfillCountry { user_id, ip } => {
            let pool = init_db_pool(&config.database_url)
                .await
                .context("Failed to open database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            let resolver = CountryResolver::from_config(&config)
                .await
                .context("Failed to create country resolver")?;

            let outcome = update_user_country_if_needed(&pool, &resolver, user_id, &ip).await;
            println!("{:?}", outcome);
            !matches!(outcome, BackfillOutcome::Failed)
        }
        Command::Countries => {
            let pool = init_db_pool(&config.database_url)
                .await
                .context("Failed to open database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;

            let countries = timed("distinct_countries", distinct_countries(&pool))
                .await
                .context("Failed to query countries")?;
            for country in countries {
                println!("{}", country);
            }
            true
        }
        Command::Webhook(args) => webhook(args).await?,
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}

async fn lookup(config: &Config, ip: String, blocking: bool) -> Result<bool> {
    let country = if blocking {
        let config = config.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<String>> {
            let resolver = CountryResolver::from_config_blocking(&config)
                .context("Failed to create country resolver")?;
            Ok(resolver.resolve_blocking(&ip))
        })
        .await
        .context("Lookup panicked")??
    } else {
        let resolver = CountryResolver::from_config(config)
            .await
            .context("Failed to create country resolver")?;
        resolver.resolve(&ip).await
    };

    match country {
        Some(code) => {
            println!("{}", code);
            Ok(true)
        }
        None => {
            eprintln!("No country found");
            Ok(false)
        }
    }
}

async fn webhook(args: WebhookArgs) -> Result<bool> {
    let message = if args.embed {
        WebhookMessage::embed(Embed::from_parts(
            args.content,
            args.title,
            args.title_url,
            args.thumbnail,
            args.footer,
        ))
    } else {
        WebhookMessage::text(args.content)
    };

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    Ok(send_webhook(&client, &args.url, &message).await)
}
