use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vmfw_fixtures::cli::Cli;
use vmfw_fixtures::config::Settings;
use vmfw_fixtures::log_messages;
use vmfw_fixtures::output::{self, OutputFormat, OutputSink};
use vmfw_fixtures::{FixtureGenerator, TagCatalog};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::new()?;

    // Initialize tracing; stdout is reserved for the document
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(level = %settings.logging.level, "{}", log_messages::configuration::CONFIG_LOADED);
    info!(
        vm_count = cli.vm_count,
        fw_count = cli.fw_count,
        "{}",
        log_messages::application::STARTING
    );

    let catalog = TagCatalog::builtin()?;
    let document = match cli.seed {
        Some(seed) => {
            debug!(seed, "{}", log_messages::generation::SEEDED_RNG);
            FixtureGenerator::seeded(catalog, seed).generate(cli.vm_count, cli.fw_count)?
        }
        None => FixtureGenerator::from_entropy(catalog).generate(cli.vm_count, cli.fw_count)?,
    };

    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::from_pretty(settings.output.pretty)
    };
    output::emit(&document, &OutputSink::from(cli.outfile), format)?;

    info!("{}", log_messages::application::FINISHED);
    Ok(())
}
