//! rilega command-line entry point

use clap::Parser;

use rilega_cli::commands::Commands;

/// Reflow and classify extracted résumé text
#[derive(Debug, Parser)]
#[command(name = "rilega", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reflow(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
