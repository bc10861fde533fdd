//! Meridian CLI - Command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart and inspect it
//! meridian cart add --id watch2 --name "Model Two" --price 2495.99 --image Time/model-two.jpeg
//! meridian cart show
//!
//! # Adjust quantities
//! meridian cart set-quantity watch2 3
//! meridian cart remove watch2
//!
//! # Check out (requires a signed-in session)
//! meridian session sign-in
//! meridian checkout summary
//! meridian checkout pay --name "Jane Smith" --card "4111 1111 1111 1111" --expiry 12/33 --cvc 123
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, inspect, and mutate the persisted cart
//! - `checkout` - Checkout summary and payment submission
//! - `session` - The local sign-in flag
//!
//! State lives under `MERIDIAN_DATA_DIR` (default `.meridian`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use meridian_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "meridian")]
#[command(author, version, about = "Meridian storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, inspect, and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Checkout summary and payment submission
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Manage the local sign-in flag
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product to the cart
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g. 2495.99)
        #[arg(long)]
        price: String,

        /// Image reference
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Show the cart contents and totals
    Show,
    /// Overwrite the quantity of a cart line
    SetQuantity {
        /// Product identifier
        id: String,

        /// New quantity (positive integer)
        quantity: i64,
    },
    /// Remove a cart line
    Remove {
        /// Product identifier
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show the checkout summary (requires sign-in, non-empty cart)
    Summary,
    /// Validate payment fields and clear the cart on success
    Pay {
        /// Cardholder name
        #[arg(long)]
        name: String,

        /// Card number (whitespace tolerated)
        #[arg(long)]
        card: String,

        /// Expiry in MM/YY
        #[arg(long)]
        expiry: String,

        /// 3 or 4 digit CVC
        #[arg(long)]
        cvc: String,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Mark the session as signed in
    SignIn,
    /// Mark the session as signed out
    SignOut,
    /// Show whether the session is signed in
    Status,
}

fn main() {
    dotenvy::dotenv().ok();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let filter = config
        .log_filter
        .clone()
        .map_or_else(|| EnvFilter::new("info"), EnvFilter::new);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                id,
                name,
                price,
                image,
            } => commands::cart::add(config, &id, &name, &price, &image)?,
            CartAction::Show => commands::cart::show(config)?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(config, &id, quantity)?;
            }
            CartAction::Remove { id } => commands::cart::remove(config, &id)?,
            CartAction::Clear => commands::cart::clear(config)?,
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Summary => commands::checkout::summary(config)?,
            CheckoutAction::Pay {
                name,
                card,
                expiry,
                cvc,
            } => commands::checkout::pay(config, name, card, expiry, cvc)?,
        },
        Commands::Session { action } => match action {
            SessionAction::SignIn => commands::session::sign_in(config)?,
            SessionAction::SignOut => commands::session::sign_out(config)?,
            SessionAction::Status => commands::session::status(config)?,
        },
    }
    Ok(())
}
