//! CLI administration tool for draft-redirects.
//!
//! Provides commands for managing admin tokens, content items and the
//! redirect map without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create a token that may edit redirects
//! cargo run --bin admin -- token create --name editor
//!
//! # Add a draft and a published page
//! cargo run --bin admin -- content add --title "Spring Sale" --status draft
//! cargo run --bin admin -- content add --title "Sale" --status publish
//!
//! # Inspect the redirect map
//! cargo run --bin admin -- redirects list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL`, `SITE_URL`, `TOKEN_SIGNING_SECRET`,
//! `SETTINGS_BACKEND` and friends. See [`draft_redirects::config`].

use draft_redirects::application::services::{AuthService, RedirectMapStore};
use draft_redirects::config::{self, Config, SettingsBackend};
use draft_redirects::domain::entities::{Capability, ContentStatus, NewContentItem, RedirectMap};
use draft_redirects::domain::repositories::{ContentRepository, TokenRepository};
use draft_redirects::infrastructure::persistence::{PgContentRepository, PgTokenRepository};
use draft_redirects::server;
use draft_redirects::utils::slug::{is_valid_slug, slugify};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing draft-redirects.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage admin tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage content items
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Inspect or clear the redirect map
    Redirects {
        #[command(subcommand)]
        action: RedirectsAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new admin token
    Create {
        /// Token name (e.g., "editor", "marketing")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Capability granted to the token (repeatable)
        #[arg(short, long = "capability", default_value = "manage_settings")]
        capabilities: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Content management subcommands.
#[derive(Subcommand)]
enum ContentAction {
    /// Add a content item
    Add {
        #[arg(long)]
        title: String,

        /// Slug (derived from the title if omitted; pass "" for none)
        #[arg(long)]
        slug: Option<String>,

        /// Content type
        #[arg(long = "type", default_value = "post")]
        content_type: String,

        /// draft, publish, pending, private or trash
        #[arg(long, default_value = "draft")]
        status: ContentStatus,

        #[arg(long, default_value = "")]
        body: String,
    },

    /// List content items
    List {
        /// Only show items with this status
        #[arg(long)]
        status: Option<ContentStatus>,
    },

    /// Change the status of an item
    Status { id: i64, status: ContentStatus },

    /// Delete an item
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Redirect map subcommands.
#[derive(Subcommand)]
enum RedirectsAction {
    /// Print every stored slug mapping
    List,

    /// Remove all mappings
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &config, &pool).await?,
        Commands::Content { action } => handle_content_action(action, &pool).await?,
        Commands::Redirects { action } => handle_redirects_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn map_store(config: &Config, pool: &PgPool) -> Result<RedirectMapStore> {
    if config.settings_backend == SettingsBackend::Memory {
        println!(
            "{}",
            "Warning: SETTINGS_BACKEND=memory, the redirect map is not shared with the server"
                .yellow()
        );
    }
    let settings = server::settings_store(config, Arc::new(pool.clone())).await?;
    Ok(RedirectMapStore::new(settings))
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create {
            name,
            token,
            capabilities,
            yes,
        } => {
            let auth = AuthService::new(repo, config.token_signing_secret.clone());
            create_token(&auth, name, token, capabilities, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name_or_id } => {
            revoke_token(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Creates a new admin token with interactive prompts.
///
/// Only the HMAC of the token is stored; the raw value is shown once.
async fn create_token(
    auth: &AuthService,
    name: Option<String>,
    token: Option<String>,
    capabilities: Vec<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create Admin Token".bright_blue().bold());
    println!();

    for capability in &capabilities {
        capability
            .parse::<Capability>()
            .with_context(|| format!("Unsupported capability '{}'", capability))?;
    }

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("editor")
            .interact_text()?,
    };

    if token.is_some() {
        println!("{}", "Using provided token value".yellow());
    }

    if !skip_confirm {
        println!("  Name:         {}", token_name.cyan());
        println!("  Capabilities: {}", capabilities.join(", ").cyan());
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let (stored, raw) = auth
        .issue_token(&token_name, token, capabilities)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "Token created successfully!".green().bold());
    println!();
    println!("  ID:    {}", stored.id.to_string().bright_black());
    println!("  Name:  {}", stored.name.cyan());
    println!("  Token: {}", raw.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!(
        "Sign in at {}/admin/login with this token.",
        "<SITE_URL>".bright_cyan()
    );
    println!();

    Ok(())
}

/// Lists all admin tokens with status indicators.
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "Admin Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<20} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Capabilities".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "-".repeat(84).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<24} {:<20} {:<20} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.capabilities.join(","),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up by ID, anything else by exact name.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "Revoke Admin Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Dispatches content management commands.
async fn handle_content_action(action: ContentAction, pool: &PgPool) -> Result<()> {
    let repo = PgContentRepository::new(Arc::new(pool.clone()));

    match action {
        ContentAction::Add {
            title,
            slug,
            content_type,
            status,
            body,
        } => {
            let slug = slug.unwrap_or_else(|| slugify(&title));
            if !is_valid_slug(&slug) {
                anyhow::bail!(
                    "Invalid slug '{}': use lowercase letters, digits, '_' and '-'",
                    slug
                );
            }

            let item = repo
                .create(NewContentItem {
                    title,
                    slug,
                    content_type,
                    status,
                    body,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create content: {}", e))?;

            println!(
                "{} {} {} [{}]",
                "Created".green().bold(),
                item.id.to_string().bright_black(),
                item.label().cyan(),
                item.status
            );
            if !item.slug.is_empty() {
                println!("  Slug: {}", item.slug.bright_white());
            }
        }
        ContentAction::List { status } => {
            let statuses = match status {
                Some(s) => vec![s],
                None => vec![
                    ContentStatus::Draft,
                    ContentStatus::Publish,
                    ContentStatus::Pending,
                    ContentStatus::Private,
                    ContentStatus::Trash,
                ],
            };

            println!("{}", "Content Items".bright_blue().bold());
            println!();
            println!(
                "  {:<6} {:<10} {:<32} {:<28} {}",
                "ID".bright_white().bold(),
                "Status".bright_white().bold(),
                "Title".bright_white().bold(),
                "Slug".bright_white().bold(),
                "Type".bright_white().bold()
            );
            println!("  {}", "-".repeat(88).bright_black());

            let mut total = 0;
            for status in statuses {
                let items = repo
                    .list_by_status(status, None)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to list content: {}", e))?;
                total += items.len();
                for item in items {
                    println!(
                        "  {:<6} {:<10} {:<32} {:<28} {}",
                        item.id.to_string().bright_black(),
                        item.status.to_string(),
                        item.title.cyan(),
                        item.slug,
                        item.content_type.bright_black()
                    );
                }
            }

            println!();
            println!("  Total: {}", total.to_string().bright_white().bold());
            println!();
        }
        ContentAction::Status { id, status } => {
            let item = repo
                .update_status(id, status)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to update content: {}", e))?;
            println!(
                "{} {} is now {}",
                "Updated".green().bold(),
                item.label().cyan(),
                item.status.to_string().bright_white()
            );
        }
        ContentAction::Delete { id, yes } => {
            let item = repo
                .find_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .context("Content item not found")?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {}?", item.label()))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            repo.delete(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete content: {}", e))?;
            println!("{} {}", "Deleted".green().bold(), item.label().cyan());
        }
    }

    Ok(())
}

/// Dispatches redirect map commands.
async fn handle_redirects_action(
    action: RedirectsAction,
    config: &Config,
    pool: &PgPool,
) -> Result<()> {
    let store = map_store(config, pool).await?;

    match action {
        RedirectsAction::List => {
            println!("{}", "Current Draft Slug Mappings".bright_blue().bold());
            println!();

            let map = store
                .load()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load redirect map: {}", e))?;

            if map.is_empty() {
                println!("{}", "  No current slug mappings.".yellow());
                return Ok(());
            }

            for (slug, url) in map.iter() {
                println!("  {} -> {}", slug.cyan(), url.bright_white());
            }
            println!();
            println!("  Total: {}", map.len().to_string().bright_white().bold());
            println!();
        }
        RedirectsAction::Clear { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every redirect mapping?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            store
                .save(&RedirectMap::new())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to clear redirect map: {}", e))?;
            println!("{}", "Redirect map cleared".green().bold());
        }
    }

    Ok(())
}

/// Displays content counts per status, mapping count and active tokens.
async fn handle_stats(config: &Config, pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let by_status: Vec<(String, i64)> = sqlx::query_as(
        "SELECT status, COUNT(*) FROM content_items GROUP BY status ORDER BY status",
    )
    .fetch_all(pool)
    .await?;

    let tokens_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    let mappings = map_store(config, pool)
        .await?
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load redirect map: {}", e))?;

    if by_status.is_empty() {
        println!("  Content:       {}", "0".bright_green().bold());
    }
    for (status, count) in &by_status {
        println!(
            "  {:<14} {}",
            format!("{}:", status),
            count.to_string().bright_green().bold()
        );
    }
    println!(
        "  Mappings:      {}",
        mappings.len().to_string().bright_green().bold()
    );
    println!(
        "  Active tokens: {}",
        tokens_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
