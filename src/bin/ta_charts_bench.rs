//! Benchmark binary for ta-charts.
//!
//! Usage:
//!     ta_charts_bench [candles] [iterations]
//!
//! Times every core operation over a deterministic synthetic OHLCV table and
//! writes a JSON array of results to stdout. Progress goes to stderr through
//! `tracing`; set `RUST_LOG=debug` for per-call details.

use std::env;
use std::error::Error;
use std::time::Instant;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ta_charts::prelude::*;
use ta_charts::synthetic::{ohlcv_from_close, random_walk};

const DEFAULT_CANDLES: usize = 100_000;
const DEFAULT_ITERATIONS: usize = 20;

type BenchResult<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

fn benchmark<F, R>(name: &str, iterations: usize, candles: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut() -> R,
{
    info!(name, "benchmarking");

    let times: Vec<f64> = (0..iterations)
        .map(|_| {
            let start = Instant::now();
            std::hint::black_box(f());
            start.elapsed().as_secs_f64() * 1000.0
        })
        .collect();

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations.max(1) as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (candles as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name: name.to_string(),
        candles,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    }
}

fn parse_arg(args: &[String], index: usize, default: usize) -> BenchResult<usize> {
    match args.get(index) {
        Some(raw) => Ok(raw
            .parse::<usize>()
            .map_err(|e| format!("invalid argument {raw:?}: {e}"))?),
        None => Ok(default),
    }
}

fn main() -> BenchResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let candles = parse_arg(&args, 1, DEFAULT_CANDLES)?;
    let iterations = parse_arg(&args, 2, DEFAULT_ITERATIONS)?;

    let close = random_walk(100.0, 0.5, candles, 42);
    let series = ohlcv_from_close(&close, 0.01, 1_704_067_200, 900);
    let (high, low) = (series.high().as_slice(), series.low().as_slice());
    info!(candles, iterations, "generated synthetic data");

    let slow = ema(&close, 21)?;
    let hourly = group_candles(&series, 4)?;
    let hourly_sma = sma(hourly.close().as_slice(), 14, RollingStat::Mean)?;

    let results = vec![
        benchmark("group_candles(4)", iterations, candles, || {
            group_candles(&series, 4)
        }),
        benchmark("fill_values(4)", iterations, candles, || {
            fill_values(hourly_sma.as_slice(), 4, candles)
        }),
        benchmark("SMA(14)", iterations, candles, || {
            Sma::<f64>::new(SmaConfig::new(14)).calculate(&series)
        }),
        benchmark("SMA(200)", iterations, candles, || {
            Sma::<f64>::new(SmaConfig::new(200)).calculate(&series)
        }),
        benchmark("EMA(14)", iterations, candles, || {
            Ema::<f64>::new(EmaConfig::default()).calculate(&series)
        }),
        benchmark("SDEV(20)", iterations, candles, || sdev(&close, 20)),
        benchmark("ROC(14)", iterations, candles, || {
            Roc::<f64>::new(RocConfig::default()).calculate(&series)
        }),
        benchmark("MACD(8,21,9)", iterations, candles, || {
            Macd::<f64>::new(MacdConfig::default()).calculate(&series)
        }),
        benchmark("RSI(14)", iterations, candles, || {
            Rsi::<f64>::new(RsiConfig::default()).calculate(&series)
        }),
        benchmark("ATR(14)", iterations, candles, || {
            Atr::<f64>::new(AtrConfig::default()).calculate(&series)
        }),
        benchmark("RSI(14) streaming", iterations, candles, || {
            let mut rsi = Rsi::<f64>::new(RsiConfig::default());
            series
                .iter()
                .filter_map(|bar| rsi.update(&bar).ok().flatten())
                .count()
        }),
        benchmark("crossover", iterations, candles, || crossover(&close, slow.as_slice())),
        benchmark("area_between", iterations, candles, || {
            area_between(&close, slow.as_slice())
        }),
        benchmark("maxmin(max)", iterations, candles, || {
            maxmin(ReduceMode::Max, &[high, low, close.as_slice()])
        }),
    ];

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
