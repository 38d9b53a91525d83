use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::{check, Opts, Output, OutputEq, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default sampling period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    pub fn iter<T, O, C>(&mut self, opts: &Opts, expected: Option<C>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());

        if let Err(e) = self.sample(&mut o, opts, expected, iter) {
            o.error(e)?;
        }

        Ok(())
    }

    fn sample<T, O, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<C>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            loop {
                let value = iter()?;
                check(&value, &expected)?;
                black_box(value);

                if start.elapsed() >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running {count} sample(s)..."))?;

            for _ in 0..count {
                samples.push(sample_once(&mut iter, &expected)?);
            }
        } else {
            let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));
            o.info(format_args!("running samples ({time_limit:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < time_limit {
                samples.push(sample_once(&mut iter, &expected)?);
            }
        }

        samples.sort_unstable();
        o.report(&Report::from_samples(&samples))?;
        Ok(())
    }
}

/// Take one timed sample.
fn sample_once<T, O, C>(iter: &mut T, expected: &Option<C>) -> Result<Duration>
where
    T: FnMut() -> Result<O>,
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    let before = Instant::now();
    let value = iter()?;
    let elapsed = before.elapsed();

    check(&value, expected)?;
    black_box(value);
    Ok(elapsed)
}
