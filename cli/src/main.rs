mod commands;
mod terminal;

use commands::{CommandLine, Commands, clab2kuid, version};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Clab2kuid(args) => clab2kuid::clab2kuid(args, commands.config.as_deref()),
        Commands::Version => {
            version::version();
            Ok(())
        }
    }
}
