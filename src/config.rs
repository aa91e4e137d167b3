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
use crate::cli::BenchCliParser;
use crate::code::Variant;
use crate::error::ConfigError;
use std::num::NonZeroU32;
use std::path::PathBuf;

// --- Default Values ---
fn default_include_dir() -> String {
  "tuplet/include".to_string()
}

fn default_bench_file() -> PathBuf {
  PathBuf::from("tmp/bench.cpp")
}

fn default_compiler() -> PathBuf {
  PathBuf::from("g++-10")
}

fn default_standard() -> String {
  "c++20".to_string()
}

/// Fully validated and resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
  pub variant: Variant,
  pub sizes: Vec<usize>,
  pub include_dir: String,
  pub bench_file: PathBuf,
  pub output_files: Vec<PathBuf>,
  pub repetitions: NonZeroU32,
  pub print_command: bool,
  pub compiler: PathBuf,
  pub standard: String,
}

impl TryFrom<BenchCliParser> for Config {
  type Error = ConfigError;

  fn try_from(
    BenchCliParser {
      print_command,
      repetitions,
      output_files,
      include_dir,
      bench_file,
      stdlib: _,
      tuplet,
      compiler,
      standard,
      sizes,
    }: BenchCliParser,
  ) -> Result<Self, Self::Error> {
    // clap's group makes the two flags exclusive, so stdlib is just "not tuplet".
    let variant = if tuplet {
      Variant::Tuplet
    } else {
      Variant::Stdlib
    };

    let standard = standard.unwrap_or_else(default_standard);
    if standard.is_empty() {
      return Err(ConfigError::EmptyStandard);
    }

    Ok(Config {
      variant,
      sizes,
      include_dir: include_dir.unwrap_or_else(default_include_dir),
      bench_file: bench_file.unwrap_or_else(default_bench_file),
      output_files,
      repetitions,
      print_command,
      compiler: compiler.unwrap_or_else(default_compiler),
      standard,
    })
  }
}
