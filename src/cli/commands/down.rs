use super::{open_store, print_rows};
use crate::config::Config;
use crate::seed;

pub async fn cmd_down(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let report = seed::down(&store.conn).await?;

    print_rows("Cleared catalogue", &report);
    Ok(())
}
