//! Status command handler

use super::open_store;
use crate::config::Config;
use crate::seed::data::Dataset;

pub async fn cmd_status(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    store.ping().await?;

    let dataset = Dataset::builtin();
    let counts = store.table_counts().await?;

    println!("Catalogue at {}", config.general.database_path);
    println!("{:-<44}", "");
    println!("  {:<14} {:>8} {:>8}", "table", "rows", "dataset");

    let mut seeded = true;
    for (table, rows) in counts {
        let expected = dataset.len_of(table) as u64;
        let marker = if rows == expected { "✓" } else { "•" };
        seeded &= rows == expected;
        println!("{marker} {:<14} {rows:>8} {expected:>8}", table.to_string());
    }

    println!();
    if seeded {
        println!("Catalogue matches the embedded dataset.");
    } else {
        println!("Catalogue differs from the embedded dataset. Run: marquee reset");
    }

    Ok(())
}
