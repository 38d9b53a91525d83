//! CLI helpers.

mod bencher;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::bencher::Bencher;
pub(crate) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Solve once and print the output.
    #[default]
    Default,
    /// Run as a benchmark.
    Bench,
}

/// Options parsed from the command line.
#[derive(Default)]
pub struct Opts {
    /// How to run the solution.
    pub mode: Mode,
    /// Enable debug-level logging.
    verbose: bool,
    /// Emit JSON lines instead of plain text.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Sampling period in milliseconds.
    time_limit: Option<u64>,
    /// Fixed number of samples instead of a sampling period.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the stdout logger.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` argument");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(parse_value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(parse_value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(parse_value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set logger: {error}"))?;
        }

        Ok(opts)
    }

    pub(crate) fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Parse the argument following a flag.
fn parse_value<I, T>(it: &mut I, flag: &str) -> Result<T>
where
    I: Iterator<Item = OsString>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{flag}`"))?;

    let Some(value) = value.to_str() else {
        bail!("non-utf8 argument to `{flag}`");
    };

    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{flag}`"))
}

/// Run a solution through the harness.
///
/// The default mode solves once, checks the output against `expected` when
/// one is given, and prints it. Bench mode defers to [`Bencher`].
pub fn run<T, O, C>(opts: &Opts, expected: Option<C>, mut solve: T) -> Result<()>
where
    T: FnMut() -> Result<O>,
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if let Mode::Bench = opts.mode {
        return Bencher::new().iter(opts, expected, solve);
    }

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let start = Instant::now();
    let value = solve()?;
    log::debug!("solved in {:?}", start.elapsed());

    check(&value, &expected)?;
    o.info(format_args!("{value:?}"))?;
    Ok(())
}

/// Check an output against an expected value, if any.
pub(crate) fn check<O, C>(value: &O, expected: &Option<C>) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if let Some(expect) = expected {
        if !value.output_eq(expect) {
            bail!("{value:?} (value) != {expect:?} (expected)");
        }
    }

    Ok(())
}

/// Timing summary over collected samples.
#[derive(Default, Debug, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Build a report over sorted samples.
    pub fn from_samples(samples: &[Duration]) -> Self {
        let count = samples.len();
        let min = samples.first().copied().unwrap_or_default();
        let max = samples.last().copied().unwrap_or_default();

        let avg = if count == 0 {
            Duration::default()
        } else {
            samples.iter().sum::<Duration>() / count as u32
        };

        Self {
            count,
            min,
            max,
            avg,
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
        }
    }
}

/// Pick a percentile out of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples[(samples.len() * p / 100).min(last)]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
