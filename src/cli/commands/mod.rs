mod check;
mod down;
mod init;
mod status;
mod up;

pub use check::cmd_check;
pub use down::cmd_down;
pub use init::cmd_init;
pub use status::cmd_status;
pub use up::{cmd_reset, cmd_up};

use crate::config::Config;
use crate::db::Store;
use crate::seed::RowReport;

async fn open_store(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

fn print_rows(heading: &str, report: &RowReport) {
    println!("{heading}");
    println!("{:-<40}", "");
    for (table, rows) in &report.rows {
        println!("  {:<14} {rows:>6}", table.to_string());
    }
    println!("{:-<40}", "");
    println!("  {:<14} {:>6}", "total", report.total());
}
