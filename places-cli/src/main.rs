use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use places_client::{ApiConfig, HttpClient};
use places_core::api::{BASE_URL_VAR, DEFAULT_BASE_URL, TOKEN_VAR};
use places_core::models::Card;
use places_core::{validate, Field};

mod logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL, e.g. https://nomoreparties.co/v1/<cohort>
    #[arg(short, long)]
    server: Option<String>,

    /// Value sent in the `authorization` header
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current profile
    Me,

    EditProfile {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        about: String,
    },

    Avatar {
        #[arg(short, long)]
        url: String,
    },

    /// List cards, newest first as returned by the server
    Cards {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        link: String,
    },

    Delete {
        #[arg(short, long)]
        id: String,
    },

    Like {
        #[arg(short, long)]
        id: String,
    },

    Unlike {
        #[arg(short, long)]
        id: String,
    },
}

fn api_config(cli: &Cli) -> ApiConfig {
    let base_url = cli
        .server
        .clone()
        .or_else(|| std::env::var(BASE_URL_VAR).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_VAR).ok())
        .unwrap_or_default();

    ApiConfig::new(base_url, token)
}

/// Exits with the field message when `value` breaks the field's rule.
fn require_valid(field: Field, value: &str) {
    let state = validate(field, value);
    if !state.is_valid {
        println!("❌ Invalid {}: {}", field, state.message);
        std::process::exit(1);
    }
}

fn print_card(index: usize, card: &Card, user_id: &str) {
    let liked = if card.is_liked_by(user_id) { "♥" } else { "♡" };
    println!("   {}. [{}] {}", index + 1, card.id, card.name);
    println!("      Image: {}", card.image_url);
    println!("      Owner: {}", card.owner.name);
    println!("      Likes: {} {}", liked, card.like_count());
    if let Some(created_at) = card.created_at {
        println!("      Created: {}", created_at.format("%Y-%m-%d %H:%M"));
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = api_config(&cli);

    // проверяем ввод до обращения к серверу
    match &cli.command {
        Commands::EditProfile { name, about } => {
            require_valid(Field::Name, name);
            require_valid(Field::Description, about);
        }
        Commands::Avatar { url } => require_valid(Field::Avatar, url),
        Commands::Add { title, link } => {
            require_valid(Field::Title, title);
            require_valid(Field::Link, link);
        }
        _ => {}
    }

    println!("🔌 Connecting to: {}", config.base_url);
    let client = HttpClient::new(config);

    match &cli.command {
        Commands::Me => match client.fetch_user().await {
            Ok(user) => {
                println!("✅ Profile:");
                println!("   ID: {}", user.id);
                println!("   Name: {}", user.name);
                println!("   About: {}", user.about);
                println!("   Avatar: {}", user.avatar_url);
            }
            Err(e) => {
                if e.is_unauthorized() {
                    println!("❌ Unauthorized. Check --token or {}", TOKEN_VAR);
                } else {
                    println!("❌ Failed to load profile: {}", e);
                }
                std::process::exit(1);
            }
        },

        Commands::EditProfile { name, about } => {
            println!("✏️ Updating profile...");

            match client.update_user(name.trim(), about.trim()).await {
                Ok(user) => {
                    println!("✅ Profile updated!");
                    println!("   Name: {}", user.name);
                    println!("   About: {}", user.about);
                }
                Err(e) => {
                    println!("❌ Failed to update profile: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Avatar { url } => {
            println!("🖼️ Updating avatar...");

            match client.update_avatar(url.trim()).await {
                Ok(user) => {
                    println!("✅ Avatar updated!");
                    println!("   Avatar: {}", user.avatar_url);
                }
                Err(e) => {
                    println!("❌ Failed to update avatar: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Cards { limit } => {
            let (user, cards) = tokio::join!(client.fetch_user(), client.fetch_cards());
            let user = user.context("Failed to load profile")?;
            let cards = cards.context("Failed to load cards")?;

            println!("✅ Found {} cards", cards.len());
            println!();
            for (i, card) in cards.iter().take(*limit).enumerate() {
                print_card(i, card, &user.id);
            }
        }

        Commands::Add { title, link } => {
            println!("📝 Creating card...");

            match client.add_card(title.trim(), link.trim()).await {
                Ok(card) => {
                    println!("✅ Card created!");
                    println!("   ID: {}", card.id);
                    println!("   Title: {}", card.name);
                    println!("   Image: {}", card.image_url);
                }
                Err(e) => {
                    println!("❌ Failed to create card: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Delete { id } => {
            let (user, cards) = tokio::join!(client.fetch_user(), client.fetch_cards());
            let user = user.context("Failed to load profile")?;
            let cards = cards.context("Failed to load cards")?;

            let Some(card) = cards.iter().find(|card| &card.id == id) else {
                println!("❌ Card {} not found", id);
                std::process::exit(1);
            };
            if card.owner_id() != user.id {
                println!("❌ Card {} belongs to {}, only the owner can delete it", id, card.owner.name);
                std::process::exit(1);
            }

            println!("🗑️ Deleting card {}", id);
            match client.delete_card(id).await {
                Ok(_) => println!("✅ Card deleted!"),
                Err(e) => {
                    println!("❌ Failed to delete card: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Like { id } | Commands::Unlike { id } => {
            let result = if matches!(cli.command, Commands::Like { .. }) {
                client.like_card(id).await
            } else {
                client.unlike_card(id).await
            };

            match result {
                Ok(card) => {
                    println!("✅ {} now has {} likes", card.name, card.like_count());
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Card {} not found", id);
                    } else {
                        println!("❌ Failed to update like: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
