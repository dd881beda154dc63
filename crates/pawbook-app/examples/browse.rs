//! Browse example - page through persons and peek at a pet list.
//!
//! Run against a live backend: `cargo run --example browse -- http://127.0.0.1:5000`

use pawbook_app::{DetailVariant, Home, RestDirectory};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Base URL from args, else PAWBOOK_API_BASE, else the local default
    let base = std::env::args().nth(1);

    let directory = Arc::new(RestDirectory::new(base.as_deref()));
    let mut home = Home::mount(directory, DetailVariant::Pets).await;

    let cards = home.cards();
    if cards.is_empty() {
        println!("No persons on page {}.", home.page_label());
        return Ok(());
    }

    println!("Page {}:", home.page_label());
    for card in &cards {
        let stats: Vec<String> = card
            .stats
            .iter()
            .map(|stat| format!("{}: {}", stat.name, stat.value))
            .collect();
        println!("  - {} ({})", card.name, stats.join(", "));
    }

    // Open the first card's pet modal
    home.select_card(0).await;
    if let Some(person) = home.selected_person() {
        println!("Pets of {}:", person.name);
        for pet in home.pets() {
            println!("  - {}", pet.name);
        }
    }
    home.close_modal();

    Ok(())
}
