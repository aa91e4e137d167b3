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
use crate::config::Config;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

/// Comma-separated `0, 1, ..., size - 1`; empty for zero.
pub fn tuple_values(size: usize) -> String {
  (0..size)
    .map(|v| v.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

/// One compiler invocation for a single tuple size.
///
/// Run as an argument vector, so the `VALUES` definition reaches the
/// compiler as one argument without any shell quoting. `Display` renders
/// the equivalent shell command line.
#[derive(Debug, Clone)]
pub struct CompileCommand {
  compiler: PathBuf,
  standard: String,
  include_dir: String,
  values: String,
  source: PathBuf,
  object: PathBuf,
}

impl CompileCommand {
  pub fn new(config: &Config, source: &Path, size: usize) -> Self {
    let mut object = source.as_os_str().to_owned();
    object.push(".o");

    Self {
      compiler: config.compiler.clone(),
      standard: config.standard.clone(),
      include_dir: config.include_dir.clone(),
      values: tuple_values(size),
      source: source.to_path_buf(),
      object: PathBuf::from(object),
    }
  }

  pub fn args(&self) -> Vec<OsString> {
    vec![
      format!("-std={}", self.standard).into(),
      "-x".into(),
      "c++".into(),
      "-c".into(),
      format!("-I{}", self.include_dir).into(),
      format!("-DVALUES={}", self.values).into(),
      self.source.clone().into_os_string(),
      "-o".into(),
      self.object.clone().into_os_string(),
    ]
  }

  /// A ready-to-run process. Stdout is discarded so compiler chatter never
  /// mixes with result lines; stderr stays attached to the terminal.
  pub fn to_command(&self) -> Command {
    let mut cmd = Command::new(&self.compiler);
    cmd
      .args(self.args())
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::inherit());
    cmd
  }
}

impl fmt::Display for CompileCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} -std={} -x c++ -c -I{} -DVALUES='{}' {} -o {}",
      self.compiler.display(),
      self.standard,
      self.include_dir,
      self.values,
      self.source.display(),
      self.object.display()
    )
  }
}
