use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use ssm_report::cli;
use tracing::error;

fn main() -> Result<()> {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            // Wrong argument count: usage on stdout, exit 1.
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    if let Err(err) = cli::dispatch(args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
    Ok(())
}
