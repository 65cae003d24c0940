use clap::Parser;
use marquee::cli::{Cli, Commands};
use marquee::{Config, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // `init` may point --config at a file that does not exist yet.
    let config = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load_with(cli.config.as_deref())?
    };
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(cli, config))
}
