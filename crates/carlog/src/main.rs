use anyhow::Context;
use carlog::{logging, Cli, Config};
use clap::{CommandFactory, FromArgMatches};

fn main() -> anyhow::Result<()> {
    // ArgMatches stay around so maker flags can be read by id.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    logging::init(cli.verbose);
    let config = Config::from(cli);

    let outcome = carlog::run(&config, &matches).with_context(|| {
        format!(
            "could not build report {} from {}",
            config.output.display(),
            config.input.display()
        )
    })?;
    tracing::debug!(?outcome, "done");
    Ok(())
}
