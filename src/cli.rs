use crate::input::InputFormat;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Param Cleaner - Build example request payloads from flat API parameter descriptors
#[derive(Parser, Debug)]
#[command(name = "param-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the JSON or YAML file holding parameter descriptors
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Shape of the input document
    #[arg(short = 'm', long = "mode", value_enum, default_value = "params")]
    pub mode: Mode,

    /// Input format (if not specified, detected from the file extension)
    #[arg(short = 'i', long = "input-format", value_enum)]
    pub input_format: Option<InputFormat>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Keep parameters marked as excluded from examples
    #[arg(long = "keep-excluded")]
    pub keep_excluded: bool,

    /// Keep optional parameters that have no example value
    #[arg(long = "keep-optional-nulls")]
    pub keep_optional_nulls: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Input document shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// A single mapping of parameter paths to descriptors
    Params,
    /// An endpoint with urlParameters, queryParameters and bodyParameters
    Endpoint,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Form/query payload with bracket notation
    Form,
}

impl CliArgs {
    /// The input format to use, falling back to the file extension.
    pub fn resolved_input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| InputFormat::from_path(&self.input_path))
    }

    /// The filter stages enabled by the command-line flags.
    pub fn example_filter(&self) -> crate::filter::ExampleFilter {
        crate::filter::ExampleFilter {
            drop_excluded: !self.keep_excluded,
            drop_optional_without_example: !self.keep_optional_nulls,
        }
    }
}

/// Logger configured from `env`, with `-v` forcing debug output
///
/// Without `-v` the filter in `env` (normally `RUST_LOG`) decides the level.
pub fn logger_builder(env: env_logger::Env<'_>, verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input_path.display());
    }

    if !args.input_path.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input_path.display());
    }

    if args.mode == Mode::Endpoint && args.output_format == OutputFormat::Form {
        anyhow::bail!("Form output is only available in params mode");
    }

    info!("Input file: {}", args.input_path.display());
    info!("Input format: {:?}", args.resolved_input_format());
    info!("Mode: {:?}", args.mode);
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Render the cleaned examples described by `args`
pub fn render(args: &CliArgs) -> Result<String> {
    use crate::cleaner::clean;
    use crate::input::{load_endpoint, load_parameters};
    use crate::serializer::{serialize_form, serialize_json, serialize_yaml};

    let format = args.resolved_input_format();
    let filter = args.example_filter();
    debug!("Example filter: {:?}", filter);

    match args.mode {
        Mode::Params => {
            info!("Loading parameter descriptors...");
            let parameters = load_parameters(&args.input_path, format)?;
            info!("Loaded {} parameters", parameters.len());

            let filtered = filter.apply(&parameters);
            if filtered.len() < parameters.len() {
                info!(
                    "Dropped {} parameters from examples",
                    parameters.len() - filtered.len()
                );
            }

            let cleaned = clean(&filtered);
            match args.output_format {
                OutputFormat::Json => serialize_json(&cleaned),
                OutputFormat::Yaml => serialize_yaml(&cleaned),
                OutputFormat::Form => Ok(serialize_form(&cleaned)),
            }
        }
        Mode::Endpoint => {
            info!("Loading endpoint parameters...");
            let endpoint = load_endpoint(&args.input_path, format)?;
            if endpoint.is_empty() {
                log::warn!("Endpoint document declares no parameters");
            }

            let cleaned = endpoint.clean(&filter);
            match args.output_format {
                OutputFormat::Json => serialize_json(&cleaned),
                OutputFormat::Yaml => serialize_yaml(&cleaned),
                OutputFormat::Form => {
                    anyhow::bail!("Form output is only available in params mode")
                }
            }
        }
    }
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::serializer::write_to_file;

    info!("Cleaning parameters from {}", args.input_path.display());
    let content = render(&args)?;

    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote examples to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
