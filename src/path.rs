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
use crate::error::PathError;
use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Resolves the destination of the generated source file.
///
/// Relative paths are anchored at the current directory and the result is
/// lexically normalized. Fails if the path names an existing directory.
/// Missing parent directories are created; the file itself is not touched.
pub fn prepare_bench_path(path: &Path) -> Result<PathBuf, PathError> {
  let absolute = if path.is_relative() {
    env::current_dir().map_err(PathError::CurrentDir)?.join(path)
  } else {
    path.to_path_buf()
  };
  let path = normalize_lexically(&absolute);

  if path.is_dir() {
    return Err(PathError::IsDirectory(path));
  }

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|source| PathError::CreateParent {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  tracing::debug!(path = %path.display(), "Prepared bench file path");
  Ok(path)
}

/// Removes `.` components and folds `..` into the preceding component,
/// without consulting the filesystem. `..` never climbs above the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        let last = out.components().next_back();
        match last {
          Some(Component::Normal(_)) => {
            out.pop();
          }
          Some(Component::RootDir | Component::Prefix(_)) => {}
          _ => out.push(".."),
        }
      }
      other => out.push(other.as_os_str()),
    }
  }

  if out.as_os_str().is_empty() {
    out.push(".");
  }
  out
}
