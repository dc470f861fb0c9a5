//! mcp-forge's main application entry point.
//! Parses the command line, configures logging and dispatches the requested command.

use mcp_forge::{
    cli::{parse_cli, run, Commands},
    error::default_error_handler,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let cli = parse_cli();

    let result = match cli.command {
        Commands::New(args) => {
            init_logger(args.verbose);
            run(args)
        }
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
