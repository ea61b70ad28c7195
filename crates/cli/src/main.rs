//! swagger-docgen CLI
//!
//! Command-line interface for turning Swagger 2.0 documents into
//! documentation view models.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use swagger_docgen_common::Document;
use swagger_docgen_parser::{SourceFormat, SwaggerParser};
use swagger_docgen_view::{
    publish, BuildOptions, MethodOrder, OutputFormat, SerializingSink, ViewModelBuilder,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger-docgen")]
#[command(version, about = "Build documentation view models from Swagger 2.0 documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the view model and print it as JSON or YAML
    #[command(after_help = "EXAMPLES:\n  \
        # Print the view model as JSON\n  \
        swagger-docgen view --spec swagger.yaml\n\n  \
        # Write YAML, ordering methods alphabetically\n  \
        swagger-docgen view --spec swagger.json \\\n    \
        --output-format yaml \\\n    \
        --method-order alphabetical \\\n    \
        --output view.yaml")]
    View {
        /// Path to the Swagger file
        #[arg(short, long)]
        spec: PathBuf,

        /// Input format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<InputFormat>,

        /// Output format
        #[arg(long, default_value = "json")]
        output_format: OutputFormatArg,

        /// Order of operations within a path (overrides the config file)
        #[arg(long)]
        method_order: Option<MethodOrderArg>,

        /// YAML file with build options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a Swagger file can be turned into a view model
    Check {
        /// Path to the Swagger file
        #[arg(short, long)]
        spec: PathBuf,

        /// Input format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<InputFormat>,

        /// Order of operations within a path (overrides the config file)
        #[arg(long)]
        method_order: Option<MethodOrderArg>,

        /// YAML file with build options
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => SourceFormat::Json,
            InputFormat::Yaml => SourceFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodOrderArg {
    /// GET, PUT, POST, DELETE, OPTIONS, HEAD, PATCH
    Canonical,
    /// DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT
    Alphabetical,
}

impl From<MethodOrderArg> for MethodOrder {
    fn from(order: MethodOrderArg) -> Self {
        match order {
            MethodOrderArg::Canonical => MethodOrder::Canonical,
            MethodOrderArg::Alphabetical => MethodOrder::Alphabetical,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::View {
            spec,
            format,
            output_format,
            method_order,
            config,
            output,
        } => {
            let options = resolve_options(config.as_deref(), method_order)?;
            view_command(
                spec.as_path(),
                format,
                output_format.into(),
                &options,
                output.as_deref(),
            )?;
        }
        Commands::Check {
            spec,
            format,
            method_order,
            config,
        } => {
            let options = resolve_options(config.as_deref(), method_order)?;
            check_command(spec.as_path(), format, &options, cli.verbose)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with a view model written to stdout
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Config file first, then the command-line flag on top
fn resolve_options(
    config: Option<&Path>,
    method_order: Option<MethodOrderArg>,
) -> Result<BuildOptions> {
    let mut options = match config {
        Some(path) => BuildOptions::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BuildOptions::default(),
    };

    if let Some(order) = method_order {
        options = options.with_method_order(order.into());
    }

    tracing::debug!(?options, "resolved build options");

    Ok(options)
}

fn load_document(spec_path: &Path, format: Option<InputFormat>) -> Result<Document> {
    let format = format
        .map(SourceFormat::from)
        .unwrap_or_else(|| SourceFormat::detect(spec_path));

    let parser = SwaggerParser::from_file_with_format(spec_path, format)
        .context("Failed to load Swagger document")?;

    Ok(parser.into_document())
}

fn view_command(
    spec_path: &Path,
    format: Option<InputFormat>,
    output_format: OutputFormat,
    options: &BuildOptions,
    output: Option<&Path>,
) -> Result<()> {
    let document = load_document(spec_path, format)?;

    // Nothing is written unless the build succeeds
    let mut sink = SerializingSink::new(Vec::new(), output_format);
    publish(&document, options, &mut sink).context("Failed to build view model")?;
    let rendered = sink.into_inner();

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote view model to {}", "✓".green(), path.display());
        }
        None => io::stdout().write_all(&rendered)?,
    }

    Ok(())
}

fn check_command(
    spec_path: &Path,
    format: Option<InputFormat>,
    options: &BuildOptions,
    verbose: bool,
) -> Result<()> {
    println!("{} Checking Swagger file: {}", "→".cyan(), spec_path.display());

    let document = load_document(spec_path, format)?;

    if verbose {
        println!("  Title: {}", document.info.title);
        println!("  Version: {}", document.info.version);
        println!("  Paths: {}", document.paths.len());
        println!("  Method order: {:?}", options.method_order);
    }

    let view = ViewModelBuilder::new(options.clone())
        .build(&document)
        .context("Swagger document cannot be rendered")?;

    println!("\n{}", "✓ View model built!".green().bold());
    println!("  Title: {}", view.title.yellow());
    println!("  Operations: {}", view.operations.len());

    if verbose {
        println!("\n{}", "Operations:".bold());
        for op in &view.operations {
            let mut flags = Vec::new();
            if op.deprecated {
                flags.push("deprecated");
            }
            if op.consumes.is_fallback {
                flags.push("inherits consumes");
            }
            if op.produces.is_fallback {
                flags.push("inherits produces");
            }
            if op.schemes.is_fallback {
                flags.push("inherits schemes");
            }

            println!(
                "  • {} {} ({} params, {} responses){}",
                op.method.to_string().cyan(),
                op.path,
                op.parameters.len(),
                op.responses.len(),
                if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", flags.join(", ")).dimmed().to_string()
                }
            );
        }
    }

    Ok(())
}
