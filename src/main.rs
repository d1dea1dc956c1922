use lending_engine::{
    adapters::system::{RandomIdGenerator, SystemClock},
    application::lending::{
        ServiceDependencies, add_book, borrow_book, generate_report, get_member_loans,
        register_member, search_books,
    },
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        loan_period_days = config.policy.loan_period_days(),
        daily_fine_rate = config.policy.daily_fine_rate(),
        "lending policy loaded"
    );

    let deps = ServiceDependencies::in_memory(
        Arc::new(RandomIdGenerator::new()),
        Arc::new(SystemClock::new()),
        config.policy,
    );

    // Seed the catalog
    let gatsby = add_book(
        &deps,
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "978-0743273565",
    )
    .await;
    add_book(&deps, "1984", "George Orwell", "978-0451524935").await;

    let member_id = register_member(&deps, "John Doe", "john@example.com").await;

    let loan_id = borrow_book(&deps, &gatsby.id, &member_id).await?;
    tracing::info!(%loan_id, "loan opened");

    for book in search_books(&deps, "orwell").await {
        tracing::info!(book_id = %book.id, title = %book.title, "search hit");
    }

    let loans = get_member_loans(&deps, &member_id).await?;
    tracing::info!(%member_id, loans = loans.len(), "member loans");

    let report = generate_report(&deps).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
