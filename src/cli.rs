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
use clap::ArgGroup;
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Times how long a compiler takes to build a tuple of N values, for each requested N"
)]
#[command(group(ArgGroup::new("variant").args(["stdlib", "tuplet"])))]
pub struct BenchCliParser {
  /// Print each compiler command before running it.
  #[arg(long)]
  pub print_command: bool,

  /// Number of timed compiler runs per size.
  #[arg(long, default_value = "1", value_parser = clap::value_parser!(NonZeroU32))]
  pub repetitions: NonZeroU32,

  /// Additional file receiving every result line. May be repeated.
  #[arg(short = 'o', value_name = "FILE")]
  pub output_files: Vec<PathBuf>,

  /// Include directory passed to the compiler [default: tuplet/include]
  #[arg(short = 'I', value_name = "DIR")]
  pub include_dir: Option<String>,

  /// Where the generated source file is written [default: tmp/bench.cpp]
  #[arg(long, value_name = "PATH")]
  pub bench_file: Option<PathBuf>,

  /// Benchmark `std::tuple` (the default).
  #[arg(long)]
  pub stdlib: bool,

  /// Benchmark `tuplet::tuple`.
  #[arg(long)]
  pub tuplet: bool,

  /// Compiler executable [default: g++-10]
  #[arg(long, value_name = "PROGRAM")]
  pub compiler: Option<PathBuf>,

  /// Language standard passed as `-std=` [default: c++20]
  #[arg(long = "std", value_name = "STANDARD")]
  pub standard: Option<String>,

  /// Tuple sizes to benchmark, in order.
  #[arg(value_name = "SIZE")]
  pub sizes: Vec<usize>,
}

/// Reduces a clap error to the single line reported after `Error: `.
///
/// clap renders `error: <message>` followed by usage and hints; only the
/// message is kept.
pub fn describe_parse_error(err: &clap::Error) -> String {
  let rendered = err.to_string();
  let first = rendered.lines().next().unwrap_or_default();
  first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_err(args: &[&str]) -> clap::Error {
    BenchCliParser::try_parse_from(std::iter::once("tuplebench").chain(args.iter().copied()))
      .unwrap_err()
  }

  #[test]
  fn parse_errors_collapse_to_one_line() {
    for args in [
      &["1", "two"][..],
      &["--no-such-flag"][..],
      &["--repetitions", "0"][..],
      &["--stdlib", "--tuplet"][..],
    ] {
      let message = describe_parse_error(&parse_err(args));

      assert!(!message.is_empty(), "{args:?}");
      assert!(!message.contains('\n'), "{args:?}: {message:?}");
      assert!(!message.starts_with("error:"), "{args:?}: {message:?}");
    }
  }

  #[test]
  fn parse_error_keeps_the_offending_value() {
    let message = describe_parse_error(&parse_err(&["1", "two"]));
    assert!(message.contains("'two'"), "{message:?}");
  }
}
