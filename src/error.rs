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
use std::path::PathBuf;
use thiserror::Error;

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("--std must not be empty")]
  EmptyStandard,
}

/// Errors related to preparing the generated source path (src/path.rs).
#[derive(Error, Debug)]
pub enum PathError {
  #[error("Failed to resolve the current directory")]
  CurrentDir(#[source] std::io::Error),

  #[error("Expected file but input was a directory: {0}")]
  IsDirectory(PathBuf),

  #[error("Failed to create parent directories for {path}")]
  CreateParent {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Errors related to writing the generated source (src/code.rs).
#[derive(Error, Debug)]
pub enum CodeError {
  #[error("Failed to write bench file {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Errors related to the result sinks (src/sink.rs).
#[derive(Error, Debug)]
pub enum SinkError {
  #[error("Failed to open output file {path}")]
  Open {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write result line to sink #{index}")]
  Write {
    index: usize,
    #[source]
    source: std::io::Error,
  },
}
