mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use pagelift_core::{ExportFormat, ExtractConfig, extract_html, fetch_file, fetch_stdin, fetch_url};
use url::Url;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputFormat(ExportFormat);

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(Self(ExportFormat::Content)),
            "json" => Ok(Self(ExportFormat::Json)),
            "csv" => Ok(Self(ExportFormat::Csv)),
            "text" | "txt" => Ok(Self(ExportFormat::Text)),
            _ => Err(format!("Invalid format: {}. Valid options: content, json, csv, text", s)),
        }
    }
}

/// Where the markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    Url(Url),
    File(String),
}

impl Input {
    fn classify(input: &str) -> Self {
        if input == "-" {
            return Self::Stdin;
        }
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(input.to_string()),
        }
    }
}

/// Turn a web page into structured, readable text
#[derive(Parser, Debug)]
#[command(name = "pagelift")]
#[command(version)]
#[command(about = "Turn web pages into structured, readable text", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (content, json, csv, text)
    #[arg(short, long, default_value = "content", value_name = "FORMAT")]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Paragraphs at or below this many characters are dropped
    #[arg(long, default_value = "20", value_name = "NUM")]
    min_paragraph_chars: usize,

    /// Code blocks at or below this many characters are dropped
    #[arg(long, default_value = "10", value_name = "NUM")]
    min_code_chars: usize,

    /// Print document statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Show progress and timings on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn extract_config(&self) -> anyhow::Result<ExtractConfig> {
        anyhow::ensure!(self.timeout > 0, "--timeout must be greater than zero");

        let mut builder = ExtractConfig::builder()
            .timeout_ms(self.timeout.saturating_mul(1000))
            .min_paragraph_chars(self.min_paragraph_chars)
            .min_code_chars(self.min_code_chars);
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        Ok(builder.build())
    }
}

async fn read_input(input: &Input, config: &ExtractConfig, verbose: bool) -> anyhow::Result<String> {
    match input {
        Input::Stdin => {
            if verbose {
                echo::print_step(1, 3, "Reading from stdin");
            }
            fetch_stdin().context("Failed to read from stdin")
        }
        Input::Url(url) => {
            if verbose {
                echo::print_step(1, 3, &format!("Fetching from {}", url.as_str().bright_white().underline()));
            }
            fetch_url(url.as_str(), &config.fetch)
                .await
                .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))
                .context("Failed to fetch URL")
        }
        Input::File(path) => {
            if verbose {
                echo::print_step(1, 3, &format!("Reading from file {}", path.bright_white()));
            }
            fetch_file(path).with_context(|| format!("Failed to read file: {}", path))
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.extract_config()?;
    let input = Input::classify(&args.input);
    let started = Instant::now();
    let mut timings: Vec<(&str, Duration)> = Vec::new();

    if args.verbose {
        echo::print_banner();
    }

    let html = read_input(&input, &config, args.verbose).await?;
    timings.push(("Input", started.elapsed()));

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        eprintln!();
        echo::print_step(2, 3, "Extracting content");
    }

    let stage = Instant::now();
    let result = extract_html(&args.input, &html, &config).context("Failed to extract content")?;
    timings.push(("Extraction", stage.elapsed()));

    if args.verbose {
        echo::print_detail("Title", &result.title);
        echo::print_detail("Blocks", &result.blocks.len().to_string());
        eprintln!();
        echo::print_step(3, 3, "Writing output");
        echo::print_detail("Format", &format!("{:?}", args.format.0));
        eprintln!();
    }

    let output = result.to_format(args.format.0).context("Failed to format output")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    if args.stats {
        echo::print_statistics(&result.statistics);
    }

    if args.verbose {
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        echo::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
