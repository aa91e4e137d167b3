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

//! # Tuplebench
//!
//! `tuplebench` measures how long a C++ compiler takes to build a small
//! translation unit that constructs and sums a tuple of N integers, for every
//! requested N. Results are plain `size, seconds` lines, one per compiler run,
//! written to stdout and any number of extra files.
//!
//! ## Core Modules
//!
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`config`]: Resolves parsed arguments and defaults into a `Config`.
//! * [`path`]: Normalizes the generated file's path and creates its parents.
//! * [`code`]: The two fixed source templates and the writer for them.
//! * [`sink`]: `SinkSet`, which copies every result line to every output.
//! * [`command`]: Builds the compiler invocation for one tuple size.
//! * [`benchmark`]: Contains the `run_benchmarks` timing loop.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod benchmark;
pub mod cli;
pub mod code;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod sink;
