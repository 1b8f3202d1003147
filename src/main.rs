use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use date_sorter::{group_counts, is_sorted_by_rule, DateSorter};

/// Dates sorted when none are given on the command line
const SAMPLE_DATES: [(i32, u32, u32); 4] = [(2004, 7, 1), (2005, 1, 2), (2007, 1, 1), (2032, 5, 3)];

#[derive(Debug, Default)]
struct Options {
    json: bool,
    config: Option<String>,
    dates: Vec<NaiveDate>,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the sorted dates
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let sorter = match &options.config {
        Some(path) => DateSorter::from_file(path)?,
        None => DateSorter::new(),
    };
    info!(version = date_sorter::VERSION, strategy = ?sorter.strategy(), "date sorter ready");

    let dates = if options.dates.is_empty() {
        sample_dates()?
    } else {
        options.dates
    };

    let sorted = sorter.sort(&dates);

    let (with_r, without_r) = group_counts(&sorted);
    info!(with_r, without_r, "sorted {} dates", sorted.len());
    if !is_sorted_by_rule(&sorted) {
        warn!("output does not follow the two-group ordering");
    }

    if options.json {
        println!("{}", serde_json::to_string(&sorted)?);
    } else {
        for date in &sorted {
            println!("{}", date);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                options.config = Some(path.clone());
            }
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            value => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", value))?;
                options.dates.push(date);
            }
        }
    }

    Ok(options)
}

fn sample_dates() -> Result<Vec<NaiveDate>> {
    SAMPLE_DATES
        .iter()
        .map(|&(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .with_context(|| format!("Invalid sample date: {}-{}-{}", y, m, d))
        })
        .collect()
}
