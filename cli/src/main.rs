mod commands;
mod terminal;

use commands::{CommandLine, Commands, health, list, show, watch};
use proxylist_common::collection::{Products, Users};
use proxylist_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let cfg: Config = commands.config()?;

    print::banner(cfg.quiet);

    match commands.command.unwrap_or(Commands::Show) {
        Commands::Show => show::show(&cfg).await,
        Commands::Users => list::list::<Users>(&cfg).await,
        Commands::Products => list::list::<Products>(&cfg).await,
        Commands::Watch => {
            print::header("watching the gateway", cfg.quiet);
            watch::watch(&cfg).await
        }
        Commands::Health => health::health(&cfg).await,
    }
}
