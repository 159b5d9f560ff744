use anyhow::Result;
use clap::Parser;

mod cli;

use cli::opt;

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();
        cli::exec(opt.command).await
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
