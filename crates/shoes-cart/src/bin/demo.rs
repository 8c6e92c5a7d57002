//! # cart-demo: Headless Cart Driver
//!
//! A small CLI standing in for the storefront UI. Each invocation
//! hydrates the session from the persisted snapshot, applies one
//! command, and prints the resulting cart.
//!
//! ## Usage
//! ```text
//! cart-demo show                  print the current cart
//! cart-demo add <id>              add one unit of a product
//! cart-demo remove <id>           remove a product's entry
//! cart-demo update <id> <amount>  set a product's quantity
//! cart-demo clear                 empty the cart
//! ```
//!
//! Point it at a catalog service with `ROCKETSHOES_API_URL` (defaults to
//! `http://localhost:3333`).

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use shoes_cart::{CartSession, TracingNotifier};
use shoes_core::Cart;
use shoes_inventory::{HttpInventoryClient, InventoryConfig};
use shoes_storage::FileStore;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "cart-demo failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = InventoryConfig::load_or_default(None);
    let inventory = Arc::new(HttpInventoryClient::new(&config)?);
    let store = Arc::new(FileStore::open_default()?);

    let session = CartSession::hydrate(inventory, store, Arc::new(TracingNotifier));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cart = match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        ["show"] | [] => session.cart().await,
        ["add", id] => session.add_product(id.parse()?).await?,
        ["remove", id] => session.remove_product(id.parse()?).await?,
        ["update", id, amount] => {
            session
                .update_product_amount(id.parse()?, amount.parse()?)
                .await?
        }
        ["clear"] => session.clear().await,
        _ => {
            eprintln!("usage: cart-demo <show | add <id> | remove <id> | update <id> <amount> | clear>");
            return Err("unrecognized command".into());
        }
    };

    print_cart(&cart);
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for entry in cart.entries() {
        println!(
            "{:>6}  {:<40}  x{:<3}  R$ {}.{:02}",
            entry.product_id(),
            entry.product.title,
            entry.amount,
            entry.line_total_cents() / 100,
            entry.line_total_cents() % 100,
        );
    }
    println!(
        "{} item(s), subtotal R$ {}.{:02}",
        cart.total_quantity(),
        cart.subtotal_cents() / 100,
        cart.subtotal_cents() % 100,
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoes_cart=trace` - Trace the cart crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shoes=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
