mod cli;

use assocmine_lib::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    cli::mine::handle_mine_command(&cli)
}
