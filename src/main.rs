// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tuplebench::benchmark::run_benchmarks;
use tuplebench::cli::BenchCliParser;
use tuplebench::cli::describe_parse_error;
use tuplebench::code::materialize;
use tuplebench::config::Config;
use tuplebench::logging::setup_tracing;
use tuplebench::path::prepare_bench_path;
use tuplebench::sink::SinkSet;

fn main() -> ExitCode {
  let _log_guard = match setup_tracing() {
    Ok(guard) => guard,
    Err(e) => {
      eprintln!("Error: {e:#}");
      return ExitCode::FAILURE;
    }
  };

  let cli = match BenchCliParser::try_parse() {
    Ok(cli) => cli,
    Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
    Err(e) => {
      eprintln!("Error: {}", describe_parse_error(&e));
      return ExitCode::FAILURE;
    }
  };

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::debug!(error = %e, "Benchmark run aborted");
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: BenchCliParser) -> Result<()> {
  let main_span = tracing::info_span!("tuplebench");
  let _enter = main_span.enter();

  let config = Config::try_from(cli).context("Invalid configuration")?;
  tracing::debug!(?config, "Resolved configuration");

  let bench_file = prepare_bench_path(&config.bench_file)?;
  materialize(config.variant, &bench_file)?;

  let mut sinks = SinkSet::open(&config.output_files)?;
  tracing::info!(sinks = config.output_files.len() + 1, sizes = config.sizes.len(), "Initializing Benchmark Run...");

  run_benchmarks(&config, &bench_file, &mut sinks)?;

  Ok(())
}
