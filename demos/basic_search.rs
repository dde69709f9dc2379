//! Example: a single search with deduplication.

use serp_scout::{search, SafeSearch, SearchOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let options = SearchOptions::new()
        .with_num_results(5)
        .with_safe(SafeSearch::Off)
        .with_unique(true);

    let term = "rust programming language";
    println!("Searching for: {}", term);
    println!();

    let results = search(term, &options).await?;

    println!("Found {} results", results.len());
    println!();

    for (i, result) in results.iter().enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   URL: {}", result.url);
        if !result.description.is_empty() {
            println!("   {}", result.description);
        }
        println!();
    }

    Ok(())
}
