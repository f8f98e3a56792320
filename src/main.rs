use clap::Parser;
use miette::Result;
use px_armory::cli::{log_filter, Cli, Commands};
use px_armory::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let printer = Printer::new();
    match cli.command {
        Commands::Generate(args) => px_armory::cli::generate::run(args, &printer)?,
        Commands::Build(args) => {
            px_armory::cli::build::run(args, &printer)?;
        }
        Commands::Materials(args) => px_armory::cli::materials::run(args, &printer)?,
        Commands::Completions(args) => px_armory::cli::completions::run(args, &printer)?,
    }

    Ok(())
}
