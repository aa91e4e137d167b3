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
use crate::error::SinkError;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Every destination that receives result lines.
///
/// The primary writer (stdout in the CLI) is always first; output files
/// follow in the order they were added.
pub struct SinkSet {
  sinks: Vec<Box<dyn Write>>,
}

impl SinkSet {
  /// Stdout plus one truncated file per path. Fails on the first file that
  /// cannot be opened, before anything is written.
  pub fn open(output_files: &[PathBuf]) -> Result<Self, SinkError> {
    let mut set = Self::with_primary(io::stdout());
    for path in output_files {
      set.add_file(path)?;
    }
    Ok(set)
  }

  pub fn with_primary<W: Write + 'static>(primary: W) -> Self {
    Self {
      sinks: vec![Box::new(primary)],
    }
  }

  pub fn add_file(&mut self, path: &Path) -> Result<(), SinkError> {
    let file = File::create(path).map_err(|source| SinkError::Open {
      path: path.to_path_buf(),
      source,
    })?;
    tracing::debug!(path = %path.display(), "Opened output file");
    self.sinks.push(Box::new(file));
    Ok(())
  }

  #[cfg(test)]
  fn len(&self) -> usize {
    self.sinks.len()
  }

  /// Writes `line` to every sink, adding a trailing newline when missing.
  /// Each sink is flushed so finished samples survive a later hang.
  pub fn broadcast(&mut self, line: &str) -> Result<(), SinkError> {
    let newline = if line.ends_with('\n') { "" } else { "\n" };

    for (index, sink) in self.sinks.iter_mut().enumerate() {
      write_line(sink.as_mut(), line, newline).map_err(|source| SinkError::Write { index, source })?;
    }
    Ok(())
  }
}

fn write_line(sink: &mut dyn Write, line: &str, newline: &str) -> io::Result<()> {
  sink.write_all(line.as_bytes())?;
  sink.write_all(newline.as_bytes())?;
  sink.flush()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::sync::Arc;
  use std::sync::Mutex;
  use tempfile::tempdir;

  /// Cloneable in-memory writer so the test can read what the set wrote.
  #[derive(Clone, Default)]
  struct SharedBuf(Arc<Mutex<Vec<u8>>>);

  impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  impl SharedBuf {
    fn contents(&self) -> String {
      String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
  }

  #[test]
  fn broadcast_reaches_every_sink_in_order() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, "stale content\n").unwrap();

    let primary = SharedBuf::default();
    let mut sinks = SinkSet::with_primary(primary.clone());
    sinks.add_file(&a).unwrap();
    sinks.add_file(&b).unwrap();
    assert_eq!(sinks.len(), 3);

    sinks.broadcast("0, 0.5\n").unwrap();
    sinks.broadcast("2, 0.25").unwrap();
    drop(sinks);

    let expected = "0, 0.5\n2, 0.25\n";
    assert_eq!(primary.contents(), expected);
    assert_eq!(fs::read_to_string(&a).unwrap(), expected);
    assert_eq!(fs::read_to_string(&b).unwrap(), expected);
  }

  #[test]
  fn unopenable_file_is_reported_with_its_path() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("no/such/dir/out.txt");

    let mut sinks = SinkSet::with_primary(SharedBuf::default());
    let err = sinks.add_file(&missing).unwrap_err();

    assert!(matches!(err, SinkError::Open { ref path, .. } if *path == missing));
    assert_eq!(sinks.len(), 1);
  }
}
