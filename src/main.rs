use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use link_resolver::cli::{self, OutputFormat, Record};
use link_resolver::logging::{self, Verbosity};
use link_resolver::{Catalog, LinkResolver, Services};
use std::sync::Arc;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))
        .context("Failed to initialize logging")?;
    args.validate().context("Invalid arguments")?;

    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog: {}", args.catalog.display()))?;
    let working_language = catalog.settings.working_language;
    let cache_config = catalog.settings.cache_config();

    let resolver = LinkResolver::builder(Services::from_shared(Arc::new(catalog)))
        .with_working_language(working_language)
        .with_cache_config(cache_config)
        .build();

    let records: Vec<Record> = args
        .expressions
        .iter()
        .filter_map(|expression| {
            let name = args
                .op
                .includes_name()
                .then(|| resolver.get_display_name(expression, args.language));
            let link = args
                .op
                .includes_link()
                .then(|| resolver.get_link(expression, args.language));
            Record::from_results(expression, name, link)
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&records).context("Failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for record in &records {
                println!("{}", record.to_text());
            }
        }
    }

    Ok(())
}
