// ABOUTME: CLI binary for the contentmass main-content extractor.
// ABOUTME: Loads HTML from files, stdin, or URLs and prints the selected content root.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use contentmass::resource;
use contentmass::{ContentResult, ContentType, Extractor, ScoringConfig};
use log::LevelFilter;
use scraper::Html;

#[derive(Parser, Debug)]
#[command(name = "contentmass")]
#[command(about = "Extract the main content of HTML documents")]
struct Args {
    /// Output format: html (default), markdown/md, text/txt
    #[arg(short = 'f', long = "format", default_value = "html")]
    format: String,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output as JSON instead of raw content
    #[arg(long = "json")]
    json_output: bool,

    /// JSON file overriding scoring constants
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Print the ranked score table instead of the content
    #[arg(long = "scores")]
    scores: bool,

    /// Fetch timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// HTML files, http(s) URLs, or "-" for stdin
    #[arg()]
    targets: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Format output based on whether JSON output is requested.
fn format_output(results: &[ContentResult], json_output: bool) -> Result<String, serde_json::Error> {
    if json_output {
        if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(results)
        }
    } else {
        Ok(results
            .iter()
            .map(|r| r.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

/// Ranked score table of one target, one "score<TAB>depth<TAB>label" row per element.
fn format_scores(extractor: &Extractor, target: &str) -> Result<String, contentmass::ExtractError> {
    let res = resource::load(target, extractor.options())?;
    let mut doc = Html::parse_document(&res.text());
    let rows = extractor.score_details(&mut doc);

    let mut out = format!("# {}\n", res.source);
    for row in rows {
        out.push_str(&format!("{:.2}\t{}\t{}\n", row.score, row.depth, row.label));
    }
    Ok(out)
}

fn emit(output: &Option<PathBuf>, text: &str) -> bool {
    match output {
        Some(path) => match fs::write(path, text) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("error writing to {:?}: {}", path, e);
                false
            }
        },
        None => {
            println!("{}", text);
            true
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.targets.is_empty() {
        eprintln!("error: at least one target is required (file, URL, or - for stdin)");
        return ExitCode::from(1);
    }

    let scoring = match &args.config {
        Some(path) => match ScoringConfig::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        },
        None => ScoringConfig::default(),
    };

    let extractor = Extractor::builder()
        .content_type(ContentType::from(args.format.as_str()))
        .scoring(scoring)
        .timeout(Duration::from_secs(args.timeout))
        .build();

    let mut had_error = false;

    if args.scores {
        let mut dump = String::new();
        for target in &args.targets {
            match format_scores(&extractor, target) {
                Ok(table) => dump.push_str(&table),
                Err(e) => {
                    eprintln!("error: {}", e);
                    had_error = true;
                }
            }
        }
        if !dump.is_empty() && !emit(&args.output, dump.trim_end()) {
            had_error = true;
        }
        return if had_error { ExitCode::from(1) } else { ExitCode::SUCCESS };
    }

    let mut results: Vec<ContentResult> = Vec::new();
    for target in &args.targets {
        match extractor.extract_target(target) {
            Ok(Some(result)) => {
                log::info!("{}: content root {} ({} words)", target, result.label(), result.word_count);
                results.push(result);
            }
            Ok(None) => eprintln!("no content found in {}", target),
            Err(e) => {
                eprintln!("error: {}", e);
                had_error = true;
            }
        }
    }

    if results.is_empty() {
        return ExitCode::from(1);
    }

    match format_output(&results, args.json_output) {
        Ok(out) => {
            if !emit(&args.output, &out) {
                had_error = true;
            }
        }
        Err(e) => {
            eprintln!("error serializing output: {}", e);
            had_error = true;
        }
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
