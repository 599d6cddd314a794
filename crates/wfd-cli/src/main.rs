use clap::Parser;

mod cli;
mod commands;
mod logging;
mod output;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;
    let report = commands::execute(&cli)?;
    print!("{report}");
    Ok(())
}
