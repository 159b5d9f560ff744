pub(crate) mod opt;
mod run;

use anyhow::Error;
use opt::Commands;
use run::run;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Run(o) => run(o).await,
    }
}
