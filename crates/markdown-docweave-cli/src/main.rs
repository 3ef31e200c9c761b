use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_docweave_config::{BrandCatalog, Config};
use markdown_docweave_engine::{BrandConfig, MemoryStore, compile, parse_markdown, publish};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "markdown-docweave",
    version,
    about = "Compile Markdown into branded rich-text document edits"
)]
struct Cli {
    /// Brands file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    brands_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed block list as JSON
    Parse {
        /// Markdown file to parse
        file: PathBuf,
    },

    /// Print the compiled operations as JSON, tables left as placeholders
    Compile {
        /// Markdown file to compile
        file: PathBuf,

        /// Brand to style with (defaults to the configured default brand)
        #[arg(short, long)]
        brand: Option<String>,

        /// Offset the first block is inserted at
        #[arg(long, default_value_t = 1)]
        start_offset: usize,
    },

    /// Publish into an in-memory document and print the result
    Publish {
        /// Markdown file to publish
        file: PathBuf,

        /// Brand to style with (defaults to the configured default brand)
        #[arg(short, long)]
        brand: Option<String>,

        /// Identifier of the target document
        #[arg(long, default_value = "document")]
        document_id: String,

        /// Also print every applied batch as JSON
        #[arg(long)]
        show_batches: bool,
    },

    /// List the available brands
    Brands,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.unwrap_or_default();
    let brands_file = cli.brands_file.clone().or(config.brands_path.clone());

    match cli.command {
        Command::Parse { file } => {
            let blocks = parse_markdown(&read_markdown(&file)?);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Command::Compile {
            file,
            brand,
            start_offset,
        } => {
            let catalog = BrandCatalog::load(brands_file.as_deref())?;
            let brand = resolve_brand(&catalog, brand.as_deref(), &config)?;
            let blocks = parse_markdown(&read_markdown(&file)?);
            let compiled = compile(&blocks, start_offset, brand);
            println!("{}", serde_json::to_string_pretty(&compiled)?);
        }
        Command::Publish {
            file,
            brand,
            document_id,
            show_batches,
        } => {
            let catalog = BrandCatalog::load(brands_file.as_deref())?;
            let brand = resolve_brand(&catalog, brand.as_deref(), &config)?;
            let markdown = read_markdown(&file)?;
            log::info!("Parsing markdown ({} chars)", markdown.chars().count());

            let mut store = MemoryStore::new();
            store.create(document_id.as_str());
            let report = publish(&mut store, &document_id, &markdown, brand)?;
            log::info!(
                "{} blocks, {} tables, document ends at {}",
                report.blocks,
                report.tables,
                report.end_offset
            );

            print!("{}", store.render(&document_id)?);
            if show_batches {
                let batches = store.batches(&document_id)?;
                println!("{}", serde_json::to_string_pretty(batches)?);
            }
        }
        Command::Brands => {
            let catalog = BrandCatalog::load(brands_file.as_deref())?;
            let default = config.default_brand.as_deref();
            for name in catalog.names() {
                if Some(name) == default {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
        }
    }

    Ok(())
}

fn read_markdown(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))
}

fn resolve_brand<'c>(
    catalog: &'c BrandCatalog,
    requested: Option<&str>,
    config: &Config,
) -> Result<&'c BrandConfig> {
    let Some(name) = requested.or(config.default_brand.as_deref()) else {
        bail!(
            "no brand given; pass --brand or set default_brand in {}",
            Config::config_path().display()
        );
    };
    Ok(catalog.get(name)?)
}
