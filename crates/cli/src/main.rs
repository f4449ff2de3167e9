//! Sdkdocs Generator CLI
//!
//! Command-line interface for generating SDK reference documentation from
//! versioned service model files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sdkdocs_generator_common::{
    DocBuildMetadata, DocBuildOptions, DocClass, MemoryRegistry, RegistryObserver,
};
use sdkdocs_generator_generator::{ApiDocumentor, DocSetWriter, DocumentorReport};
use sdkdocs_generator_parser::{
    discover_model_files, public_waiter_names, JsonModelTranslator, ModelTranslator, WaiterResolver,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sdkdocs-generator")]
#[command(version, about = "Generate SDK reference documentation from service model files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the service model files discovered in a directory
    #[command(after_help = "EXAMPLES:\n  \
        # List discovered models grouped by service\n  \
        sdkdocs-generator list --models ./apis")]
    List {
        /// Directory containing model files
        #[arg(short, long)]
        models: PathBuf,
    },

    /// Parse a single model file and display the extracted documentation inputs
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect one model, including resolved waiters\n  \
        sdkdocs-generator parse --model ./apis/s3-2006-03-01.json")]
    Parse {
        /// Path to the model file
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Generate reference documentation for every model in a directory
    #[command(after_help = "EXAMPLES:\n  \
        # Generate the full reference set\n  \
        sdkdocs-generator generate \\\n    \
        --models ./apis \\\n    \
        --output ./reference\n\n  \
        # Only the latest version of selected services\n  \
        sdkdocs-generator generate \\\n    \
        --models ./apis \\\n    \
        --filter s3,sqs \\\n    \
        --latest-only \\\n    \
        --output ./reference\n\n  \
        # Drive options from a YAML config\n  \
        sdkdocs-generator generate \\\n    \
        --models ./apis \\\n    \
        --config docbuild.yaml \\\n    \
        --output ./reference")]
    Generate {
        /// Directory containing model files
        #[arg(short, long)]
        models: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./reference")]
        output: PathBuf,

        /// Comma-separated list of service identifiers to include
        #[arg(long, value_delimiter = ',')]
        filter: Option<Vec<String>>,

        /// Path to a YAML build configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Title for the generated index page
        #[arg(long)]
        title: Option<String>,

        /// Document only the latest version of each service
        #[arg(long)]
        latest_only: bool,

        /// Skip waiter pseudo-methods
        #[arg(long)]
        no_waiters: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::List { models } => {
            list_command(models.as_path())?;
        }
        Commands::Parse { model } => {
            parse_command(model.as_path(), cli.verbose)?;
        }
        Commands::Generate {
            models,
            output,
            filter,
            config,
            title,
            latest_only,
            no_waiters,
        } => {
            generate_command(GenerateConfig {
                models: models.as_path(),
                output: output.as_path(),
                filter: filter.as_deref(),
                config: config.as_deref(),
                title: title.as_deref(),
                latest_only,
                no_waiters,
                verbose: cli.verbose,
            })?;
        }
    }

    Ok(())
}

fn list_command(models: &Path) -> Result<()> {
    println!(
        "{} Scanning directory for models: {}",
        "→".cyan(),
        models.display()
    );

    let catalog = discover_model_files(models).context("Failed to scan model directory")?;

    if catalog.is_empty() {
        println!("{} No model files found", "⚠".yellow());
        return Ok(());
    }

    let total: usize = catalog.values().map(Vec::len).sum();
    println!(
        "{} Discovered {} model file(s) across {} service(s)\n",
        "✓".green(),
        total,
        catalog.len()
    );

    for (service, files) in &catalog {
        println!("{}", service.bold());
        let current_index = files.len() - 1;
        for (index, file) in files.iter().enumerate() {
            let marker = if index == current_index {
                "(current)".green().to_string()
            } else {
                "(superseded)".dimmed().to_string()
            };
            println!("  • {} {}", file.file_name(), marker);
        }
    }

    Ok(())
}

fn parse_command(model: &Path, verbose: bool) -> Result<()> {
    println!("{} Parsing model file: {}", "→".cyan(), model.display());

    let file = sdkdocs_generator_parser::ModelFile::from_path(model)
        .with_context(|| format!("Not a model filename: {}", model.display()))?;

    let api_model = JsonModelTranslator
        .translate(&file)
        .context("Failed to translate model")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Service:".bold());
    println!("  Name: {}", api_model.metadata.service_full_name.yellow());
    println!("  Endpoint prefix: {}", api_model.metadata.endpoint_prefix);
    println!("  API version: {}", api_model.metadata.api_version);
    if let Some(protocol) = &api_model.metadata.protocol {
        println!("  Protocol: {}", protocol);
    }
    println!("  Operations: {}", api_model.operations.len());

    if verbose {
        println!("\n{}", "Operations:".bold());
        for operation in api_model.operations.values() {
            println!("  • {}", operation.name.cyan());
        }
    }

    let waiter_names = public_waiter_names(&api_model.waiters);
    if !waiter_names.is_empty() {
        println!("\n{}", "Waiters:".bold());
        let mut resolver = WaiterResolver::new(&api_model.waiters);
        for name in waiter_names {
            match resolver.resolve(name) {
                Ok(config) => {
                    let fields: Vec<String> = config
                        .iter()
                        .map(|(key, value)| format!("{}={}", key, value))
                        .collect();
                    println!("  • {} {}", name.cyan(), fields.join(" ").dimmed());
                }
                Err(e) => {
                    eprintln!("  {} {}: {}", "⚠".yellow(), name, e);
                }
            }
        }
    }

    Ok(())
}

/// Configuration for the generate command
struct GenerateConfig<'a> {
    models: &'a Path,
    output: &'a Path,
    filter: Option<&'a [String]>,
    config: Option<&'a Path>,
    title: Option<&'a str>,
    latest_only: bool,
    no_waiters: bool,
    verbose: bool,
}

/// Prints one line per registered class as generation progresses
struct ProgressObserver;

impl RegistryObserver for ProgressObserver {
    fn class_registered(&mut self, class: &DocClass) {
        println!("{} Documented {}", "✓".green(), class.identifier.yellow());
    }
}

fn generate_command(config: GenerateConfig) -> Result<()> {
    println!(
        "{} Generating reference documentation from: {}",
        "→".cyan(),
        config.models.display()
    );

    let mut options = match config.config {
        Some(path) => {
            println!("{} Loading build config: {}", "→".cyan(), path.display());
            DocBuildMetadata::load(path)
                .context("Failed to load build configuration")?
                .to_build_options()
        }
        None => DocBuildOptions::default(),
    };

    // CLI flags override the config file
    if let Some(filter) = config.filter {
        options.include = filter.to_vec();
    }
    if let Some(title) = config.title {
        options.title = title.to_string();
    }
    if config.latest_only {
        options.document_superseded = false;
    }
    if config.no_waiters {
        options.include_waiters = false;
    }

    if config.verbose {
        println!("  Title: {}", options.title);
        println!("  Superseded versions: {}", options.document_superseded);
        println!("  Waiters: {}", options.include_waiters);
        println!("  Output: {}", config.output.display());
    }

    let mut registry = MemoryRegistry::new();
    registry.subscribe(Box::new(ProgressObserver));

    let documentor = ApiDocumentor::new(JsonModelTranslator, options.clone());
    let report = documentor
        .document_directory(config.models, &mut registry)
        .context("Failed to document model directory")?;

    report_failures(&report);

    if registry.is_empty() {
        anyhow::bail!("No services documented");
    }

    println!("\n{} Writing reference pages...", "→".cyan());
    let writer = DocSetWriter::new(options.title).context("Failed to create writer")?;
    writer
        .write_to_directory(&registry, config.output)
        .context("Failed to write reference pages")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!(
        "\n{} {} class(es), {} method(s), {} waiter(s)",
        "✓".green().bold(),
        report.classes,
        report.methods,
        report.waiters
    );
    println!("\n{}", "Generated files:".bold());
    println!("  📄 {}/index.md", config.output.display());
    println!("  📄 {}/<class>.md", config.output.display());
    println!("\n{}", "Next steps:".bold());
    println!("  1. Review generated pages in {}", config.output.display());
    println!("  2. Publish them with your documentation site build");

    Ok(())
}

fn report_failures(report: &DocumentorReport) {
    for skipped in &report.skipped {
        eprintln!(
            "{} Skipping {}: {}",
            "⚠".yellow(),
            skipped.path.display(),
            skipped.reason
        );
    }
    for failure in &report.waiter_failures {
        eprintln!(
            "{} Skipping waiter {} on {}: {}",
            "⚠".yellow(),
            failure.waiter,
            failure.class_identifier,
            failure.reason
        );
    }

    let total = report.skipped.len() + report.waiter_failures.len();
    if total > 0 {
        println!("\n{} Skipped {} item(s) due to errors", "⚠".yellow(), total);
    }
}
