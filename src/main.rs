// SPDX-License-Identifier: MIT
//
// retint — retarget a color theme onto a fixed palette.
//
// This is the thin driver around the library crates:
//
//   retint-color → color formats, parsed colors, distance metrics
//   retint-theme → palette parsing, nearest-color search, substitution
//
// The driver owns everything the libraries deliberately don't: reading the
// palette and theme from disk, picking which metrics to run, naming one
// output file per metric, and writing the results back.
//
//   palette file ─┐
//                 ├─▶ Options { format, metric }.convert() ─▶ theme.<metric>.ext
//   theme file  ──┘                (once per metric)
//
// Output naming puts the metric in front of the theme's final extension:
//
//   dark.xml      → dark.euclidean.xml, dark.manhattan.xml, dark.uniform.xml
//   theme.tar.gz  → theme.tar.euclidean.gz
//   Makefile      → Makefile.euclidean

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::{Level, debug, info};

use retint_color::{ColorFormat, Metric};
use retint_theme::Options;

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "retint",
    about = "Rewrite every color in a theme to the nearest color of a palette",
    version
)]
struct Cli {
    /// Palette file: one hex color (#RRGGBB) per line.
    palette: PathBuf,

    /// Theme file to convert.
    theme: PathBuf,

    /// Color literal format used by the theme.
    #[arg(short, long, env = "RETINT_FORMAT", default_value_t = ColorFormat::Hex)]
    format: ColorFormat,

    /// Distance metric; repeat or comma-separate to run several.
    /// Runs every metric when omitted.
    #[arg(short, long = "metric", env = "RETINT_METRIC", value_delimiter = ',')]
    metrics: Vec<Metric>,

    /// Directory for output files. Defaults to the theme's directory.
    #[arg(short, long, conflicts_with = "stdout")]
    out_dir: Option<PathBuf>,

    /// Print the converted theme instead of writing files (one metric only).
    #[arg(long)]
    stdout: bool,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// The metrics to run, in command-line order, or every metric.
    fn metrics(&self) -> Vec<Metric> {
        if self.metrics.is_empty() {
            Metric::ALL.to_vec()
        } else {
            self.metrics.clone()
        }
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("cannot convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        source: retint_color::Error,
    },

    #[error("--stdout needs exactly one metric, got {0}")]
    StdoutMetrics(usize),
}

impl CliError {
    /// Usage mistakes exit with 2 like clap's own errors; everything else 1.
    const fn exit_code(&self) -> i32 {
        match self {
            Self::StdoutMetrics(_) => 2,
            Self::Read { .. } | Self::Write { .. } | Self::Stdout(_) | Self::Convert { .. } => 1,
        }
    }
}

type Result<T> = std::result::Result<T, CliError>;

// ─── Driver ─────────────────────────────────────────────────────────────────

/// Run the conversion described by `cli`.
///
/// With `--stdout` the single result goes to `out`; otherwise one file per
/// metric is written and their paths are returned in metric order.
fn run(cli: &Cli, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    let palette = read(&cli.palette)?;
    let theme = read(&cli.theme)?;
    let metrics = cli.metrics();
    debug!(format = %cli.format, ?metrics, "loaded palette and theme");

    if cli.stdout {
        let &[metric] = metrics.as_slice() else {
            return Err(CliError::StdoutMetrics(metrics.len()));
        };
        let converted = convert(cli, &theme, &palette, metric)?;
        out.write_all(converted.as_bytes()).map_err(CliError::Stdout)?;
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let converted = convert(cli, &theme, &palette, metric)?;
        let path = output_path(&cli.theme, metric, cli.out_dir.as_deref());
        fs::write(&path, converted).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), %metric, "wrote converted theme");
        written.push(path);
    }
    Ok(written)
}

fn convert(cli: &Cli, theme: &str, palette: &str, metric: Metric) -> Result<String> {
    Options::new(cli.format, metric)
        .convert(theme, palette)
        .map_err(|source| CliError::Convert {
            path: cli.theme.clone(),
            source,
        })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Where the `metric` variant of `theme` is written.
///
/// The metric name goes before the final extension of the file name; a
/// name without one gets the metric appended.
fn output_path(theme: &Path, metric: Metric, out_dir: Option<&Path>) -> PathBuf {
    let name = theme
        .file_name()
        .map_or_else(|| "theme".to_owned(), |name| name.to_string_lossy().into_owned());

    let renamed = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}.{metric}.{ext}"),
        _ => format!("{name}.{metric}"),
    };

    out_dir.map_or_else(|| theme.with_file_name(&renamed), |dir| dir.join(&renamed))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("retint: {e}");
        process::exit(e.exit_code());
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
