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
use crate::command::CompileCommand;
use crate::config::Config;
use crate::error::SinkError;
use crate::sink::SinkSet;
use std::fmt;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// One timed compiler run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
  pub size: usize,
  pub seconds: f64,
}

impl fmt::Display for Sample {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}, {}", self.size, self.seconds)
  }
}

/// Main benchmark loop.
///
/// Sizes run in the configured order, each `repetitions` times back to back.
/// Every run is timed and broadcast as `"<size>, <seconds>"`. The compiler's
/// exit status is only logged: a failed compile is still a sample.
///
/// Returns the number of samples emitted.
pub fn run_benchmarks(
  config: &Config,
  bench_file: &Path,
  sinks: &mut SinkSet,
) -> Result<usize, SinkError> {
  let span = tracing::info_span!(
    "run_benchmarks",
    variant = %config.variant,
    repetitions = config.repetitions.get()
  );
  let _enter = span.enter();

  tracing::info!("--- Starting Benchmark Loop ---");
  let mut emitted = 0;

  for &size in &config.sizes {
    let size_span = tracing::info_span!("run_size", size);
    let _enter = size_span.enter();

    let compile = CompileCommand::new(config, bench_file, size);
    if config.print_command {
      println!("Command: {compile}");
    }

    let mut cmd = compile.to_command();
    tracing::debug!(cmd = ?cmd, "Prepared compiler command");

    for repetition in 0..config.repetitions.get() {
      let seconds = time_compile(&mut cmd, repetition);
      let sample = Sample { size, seconds };
      sinks.broadcast(&format!("{sample}\n"))?;
      emitted += 1;
    }
  }

  tracing::info!(samples = emitted, "--- Benchmark loop complete ---");
  Ok(emitted)
}

/// Runs `cmd` to completion and returns the wall-clock seconds it took.
///
/// The clock brackets only the child process. Launch failures and non-zero
/// exits are logged after the measurement and otherwise ignored.
fn time_compile(cmd: &mut Command, repetition: u32) -> f64 {
  let start = Instant::now();
  let outcome = cmd.status();
  let elapsed = start.elapsed();

  match outcome {
    Ok(status) if !status.success() => {
      tracing::warn!(repetition, code = ?status.code(), "Compiler exited unsuccessfully");
    }
    Ok(_) => {}
    Err(e) => {
      tracing::warn!(repetition, error = %e, "Failed to launch compiler");
    }
  }

  elapsed.as_secs_f64()
}
