use anyhow::{Context, Result, bail};
use cue_config::{Config, OutputFormat};
use cue_engine::{
    Document, ParseOptions,
    outline::{TableOfContents, named_entities},
    parsing::snapshot,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

const USAGE: &str =
    "Usage: cue [--tree|--json|--outline|--names] [--config PATH] [--bench N] FILE...";

#[derive(Debug, Default, PartialEq)]
struct Args {
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    bench: Option<usize>,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tree" => parsed.format = Some(OutputFormat::Tree),
            "--json" => parsed.format = Some(OutputFormat::Json),
            "--outline" => parsed.format = Some(OutputFormat::Outline),
            "--names" => parsed.format = Some(OutputFormat::Names),
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--bench" => {
                let count = args.next().context("--bench needs a count")?;
                let count: usize = count
                    .parse()
                    .with_context(|| format!("invalid --bench count '{count}'"))?;
                if count == 0 {
                    bail!("--bench count must be at least 1");
                }
                parsed.bench = Some(count);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            file => parsed.files.push(PathBuf::from(file)),
        }
    }

    if parsed.files.is_empty() {
        bail!("no input files");
    }
    Ok(parsed)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file '{}' not found", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Tree => doc.describe(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&snapshot::normalize(doc))?;
            json.push('\n');
            json
        }
        OutputFormat::Outline => TableOfContents::build(doc).render(),
        OutputFormat::Names => named_entities(doc)
            .into_iter()
            .map(|(name, offsets)| {
                let offsets: Vec<String> = offsets.iter().map(ToString::to_string).collect();
                format!("{name}: {}\n", offsets.join(", "))
            })
            .collect(),
    };
    Ok(out)
}

fn parse_file(path: &Path, options: &ParseOptions) -> Result<Document> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    Document::try_parse_with(source, options)
        .with_context(|| format!("failed to parse '{}'", path.display()))
}

/// Re-parses `path` `runs` times and returns the mean parse time.
fn bench_file(path: &Path, options: &ParseOptions, runs: usize) -> Result<Duration> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let mut total = Duration::ZERO;
    for _ in 0..runs {
        let start = Instant::now();
        let doc = Document::try_parse_with(source.as_str(), options)?;
        total += start.elapsed();
        log::trace!("parsed {} nodes", doc.node_count());
    }
    Ok(total / runs as u32)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let options = config.parse_options();
    let format = args.format.unwrap_or(config.output.format);
    log::debug!("parsing {} file(s) as {format:?} with {options:?}", args.files.len());

    let show_names = args.files.len() > 1;
    for path in &args.files {
        if let Some(runs) = args.bench {
            let mean = bench_file(path, &options, runs)?;
            eprintln!("{}: {runs} parses, mean {mean:?}", path.display());
            continue;
        }

        let doc = parse_file(path, &options)?;
        if show_names {
            println!("==> {} <==", path.display());
        }
        print!("{}", render(&doc, format)?);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
