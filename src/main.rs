use bossc::cli::{build::BuildArgs, Cli, Commands};
use bossc::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Some(Commands::Build(args)) => bossc::cli::build::run(args, &printer)?,
        Some(Commands::Check(args)) => bossc::cli::check::run(args, &printer)?,
        Some(Commands::Init(args)) => bossc::cli::init::run(args, &printer)?,
        Some(Commands::Completions(args)) => bossc::cli::completions::run(args)?,
        None => bossc::cli::build::run(BuildArgs::default(), &printer)?,
    }

    Ok(())
}
