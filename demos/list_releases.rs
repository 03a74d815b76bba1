use hashicorp_releases::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("🔎 HashiCorp Releases Client Example\n");

    let mut client = ReleasesClientBuilder::new_http().build()?;

    // Step 1: List every product on the releases site
    println!("📦 Listing products...");
    let products = client.list_product_names().await?;
    println!("✓ {} products available", products.len());
    for name in products.iter().take(10) {
        println!("  - {name}");
    }

    // Step 2: Page through the newest vault releases
    println!("\n📚 Listing the 5 newest vault releases...");
    let params = ListReleasesParams::new().with_limit(5);
    let releases = client.list_releases("vault", Some(params)).await?;
    for Release {
        version,
        is_prerelease,
        timestamp_created,
        ..
    } in &releases
    {
        let marker = if *is_prerelease { " (prerelease)" } else { "" };
        println!("  {version}{marker} — {timestamp_created}");
    }

    // The pagination cursor is the creation timestamp of the oldest release
    // on the current page
    if let Some(oldest) = releases.last() {
        println!("\n📚 Fetching the next page...");
        let params = ListReleasesParams::new()
            .with_limit(5)
            .with_after(oldest.timestamp_created.to_rfc3339());
        for release in client.list_releases("vault", Some(params)).await? {
            println!("  {} — {}", release.version, release.timestamp_created);
        }
    }

    // Step 3: Fetch one release in full
    println!("\n🔍 Fetching vault 1.2.3...");
    match client.specific_release("vault", "1.2.3", None).await {
        Ok(release) => {
            println!("✓ {} {}", release.name, release.version);
            println!("  License class: {}", release.license_class);
            println!("  Status: {}", release.status.state);
            println!("  Builds:");
            for Build { os, arch, url, .. } in release.builds.iter().take(5) {
                println!("    {os}/{arch}: {url}");
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to fetch release: {e}");
        }
    }

    println!("\n✅ Example completed successfully!");

    Ok(())
}
