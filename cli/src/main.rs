//! shopfront-cli — exercise the storefront engine from a terminal.
//!
//! Preference commands (wishlist, kids mode) run against a file-backed
//! store, so state survives between invocations the way a browser profile
//! would. Cart and search commands hit a live shop at `--base-url`.

use clap::{Args, Parser, Subcommand};
use shopfront::money::{format_eur, shipping_progress};
use shopfront::net::cart::CartSummary;
use shopfront::net::search::should_query;
use shopfront::net::{ApiError, CommerceClient};
use shopfront::state::kids_mode::KidsMode;
use shopfront::state::wishlist::{ProductId, WishlistController};
use shopfront::storage::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("commerce request failed: {0}")]
    Api(#[from] ApiError),
    #[error("query too short: need at least 2 characters")]
    QueryTooShort,
}

#[derive(Parser, Debug)]
#[command(name = "shopfront-cli", about = "Storefront engine CLI")]
struct Cli {
    /// Shop to target for cart and search commands.
    #[arg(long, env = "SHOPFRONT_BASE_URL", default_value = "http://127.0.0.1:9292")]
    base_url: String,

    /// Backing file for wishlist and kids-mode state.
    #[arg(long, env = "SHOPFRONT_STORE_PATH", default_value = "shopfront-store.json")]
    store_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Wishlist(WishlistCommand),
    KidsMode(KidsModeCommand),
    Cart(CartCommand),
    Search {
        query: String,
    },
}

#[derive(Args, Debug)]
struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Subcommand, Debug)]
enum WishlistSubcommand {
    Add { product_id: String },
    Remove { product_id: String },
    Toggle { product_id: String },
    List,
}

#[derive(Args, Debug)]
struct KidsModeCommand {
    #[command(subcommand)]
    command: KidsModeSubcommand,
}

#[derive(Subcommand, Debug)]
enum KidsModeSubcommand {
    Status,
    Toggle,
    On,
    Off,
}

#[derive(Args, Debug)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Subcommand, Debug)]
enum CartSubcommand {
    Add {
        variant_id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Change {
        line_key: String,
        quantity: u32,
    },
    Show,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Wishlist(wishlist) => {
            run_wishlist(&cli.store_path, wishlist);
            Ok(())
        }
        Command::KidsMode(kids_mode) => {
            run_kids_mode(&cli.store_path, kids_mode);
            Ok(())
        }
        Command::Cart(cart) => run_cart(&cli.base_url, cart).await,
        Command::Search { query } => run_search(&cli.base_url, &query).await,
    }
}

fn run_wishlist(store_path: &str, wishlist: WishlistCommand) {
    let mut controller = WishlistController::open(FileStore::open(store_path));

    match wishlist.command {
        WishlistSubcommand::Add { product_id } => {
            let id = ProductId::new(product_id);
            if controller.is_favorited(&id) {
                println!("already in favorites: {id}");
            } else {
                let outcome = controller.toggle(&id);
                println!("{} ({} total)", outcome.toast_message, outcome.badge.count);
            }
        }
        WishlistSubcommand::Remove { product_id } => {
            let id = ProductId::new(product_id);
            if controller.is_favorited(&id) {
                let outcome = controller.toggle(&id);
                println!("{} ({} total)", outcome.toast_message, outcome.badge.count);
            } else {
                println!("not in favorites: {id}");
            }
        }
        WishlistSubcommand::Toggle { product_id } => {
            let outcome = controller.toggle(&ProductId::new(product_id));
            println!("{} ({} total)", outcome.toast_message, outcome.badge.count);
        }
        WishlistSubcommand::List => {
            for id in controller.items() {
                println!("{id}");
            }
            println!("total: {}", controller.badge().count);
        }
    }
}

fn run_kids_mode(store_path: &str, kids_mode: KidsModeCommand) {
    let mut mode = KidsMode::open(FileStore::open(store_path));

    let active = match kids_mode.command {
        KidsModeSubcommand::Status => mode.is_active(),
        KidsModeSubcommand::Toggle => mode.toggle(),
        KidsModeSubcommand::On => {
            mode.set_active(true);
            true
        }
        KidsModeSubcommand::Off => {
            mode.set_active(false);
            false
        }
    };
    println!("kids mode: {}", if active { "on" } else { "off" });
}

async fn run_cart(base_url: &str, cart: CartCommand) -> Result<(), CliError> {
    let client = CommerceClient::new(base_url)?;

    match cart.command {
        CartSubcommand::Add {
            variant_id,
            quantity,
        } => {
            client.cart_add(&variant_id, quantity).await?;
            println!("added {quantity} x {variant_id}");
            // Read the cart back for the counters, as the page does.
            print_summary(&client.cart().await?);
        }
        CartSubcommand::Change { line_key, quantity } => {
            let summary = client.cart_change(&line_key, quantity).await?;
            if quantity == 0 {
                println!("removed {line_key}");
            }
            print_summary(&summary);
        }
        CartSubcommand::Show => {
            print_summary(&client.cart().await?);
        }
    }
    Ok(())
}

async fn run_search(base_url: &str, query: &str) -> Result<(), CliError> {
    if !should_query(query) {
        return Err(CliError::QueryTooShort);
    }

    let client = CommerceClient::new(base_url)?;
    let products = client.suggest(query).await?;

    if products.is_empty() {
        println!("no results");
        return Ok(());
    }
    for product in products {
        println!("{}  {}  {}", format_eur(product.price), product.title, product.url);
    }
    Ok(())
}

fn print_summary(summary: &CartSummary) {
    println!("items: {}", summary.item_count);
    println!("total: {}", format_eur(summary.total_price));

    let progress = shipping_progress(summary.total_price);
    if progress.unlocked() {
        println!("free shipping unlocked");
    } else {
        println!(
            "free shipping: {} to go ({:.0}%)",
            format_eur(progress.remaining_cents),
            progress.percent
        );
    }
}
