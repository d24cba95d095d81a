use anyhow::Result;
use balance_config::TimingConfig;
use balance_engine::input::random_sequence;
use balance_engine::{find_dip, longest_balanced_span, longest_balanced_span_by_scan};
use clap::Args;
use std::time::{Duration, Instant};

#[derive(Debug, Default, Args)]
pub struct TimingArgs {
    /// Number of values to generate
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for the value generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Skip the quadratic reference scan
    #[arg(long)]
    pub skip_scan: bool,
}

/// Command-line values override the configured ones.
pub fn settings(args: &TimingArgs, config: &TimingConfig) -> TimingConfig {
    TimingConfig {
        size: args.size.unwrap_or(config.size),
        seed: args.seed.unwrap_or(config.seed),
        min_value: args.min.unwrap_or(config.min_value),
        max_value: args.max.unwrap_or(config.max_value),
    }
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = std::hint::black_box(f());
    (result, start.elapsed())
}

pub fn run(args: &TimingArgs, config: &TimingConfig) -> Result<String> {
    let settings = settings(args, config);
    settings.validate()?;

    let input = random_sequence(settings.size, settings.seed, settings.value_range());
    log::debug!(
        "generated {} values in {:?} with seed {}",
        input.len(),
        settings.value_range(),
        settings.seed
    );

    let mut timings = Vec::new();

    let (dip, elapsed) = time(|| find_dip(&input));
    log::debug!("find_dip returned {dip}");
    timings.push(("find dip", elapsed));

    let (span, elapsed) = time(|| longest_balanced_span(&input).map(|s| s.range()));
    log::debug!("longest_balanced_span returned {span:?}");
    timings.push(("longest balanced span", elapsed));

    if !args.skip_scan {
        let (scanned, elapsed) =
            time(|| longest_balanced_span_by_scan(&input).map(|s| s.range()));
        if scanned != span {
            log::warn!(
                "quadratic scan returned {scanned:?}, prefix-sum search returned {span:?}"
            );
        }
        timings.push(("longest balanced span (quadratic scan)", elapsed));
    }

    Ok(render(settings.size, &timings))
}

pub fn render(size: usize, timings: &[(&str, Duration)]) -> String {
    let bar = "-".repeat(79);
    let mut out = format!("{bar}\nn = {size}\n");
    for (label, elapsed) in timings {
        out.push_str(&format!(
            "{bar}\n{label}\nelapsed time={} seconds\n",
            elapsed.as_secs_f64()
        ));
    }
    out.push_str(&bar);
    out.push('\n');
    out
}
