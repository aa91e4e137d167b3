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
use crate::error::CodeError;
use std::fmt;
use std::fs;
use std::path::Path;

const STDLIB_TUPLE_CODE: &str = r#"
#include <tuple>

int my_func() {
    auto tup = std::tuple { VALUES };
    auto sum = [](auto... values) { return (values + ...); };
    return std::apply(sum, tup);
}
"#;

const TUPLET_TUPLE_CODE: &str = r#"
#include <tuplet/tuplet.hpp>

int my_func() {
    auto tup = tuplet::tuple { VALUES };
    auto sum = [](auto... values) { return (values + ...); };
    return tuplet::apply(sum, tup);
}
"#;

/// Which tuple implementation the generated translation unit exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
  Stdlib,
  Tuplet,
}

impl Variant {
  /// The fixed source text for this variant. `VALUES` is left for the
  /// compiler's `-DVALUES=...` definition to fill in.
  pub const fn source(self) -> &'static str {
    match self {
      Variant::Stdlib => STDLIB_TUPLE_CODE,
      Variant::Tuplet => TUPLET_TUPLE_CODE,
    }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Variant::Stdlib => f.write_str("stdlib"),
      Variant::Tuplet => f.write_str("tuplet"),
    }
  }
}

/// Writes the variant's source to `path`, replacing any previous content.
pub fn materialize(variant: Variant, path: &Path) -> Result<(), CodeError> {
  fs::write(path, variant.source()).map_err(|source| CodeError::Write {
    path: path.to_path_buf(),
    source,
  })?;

  tracing::info!(%variant, path = %path.display(), "Wrote bench file");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn templates_differ_only_in_the_library() {
    for variant in [Variant::Stdlib, Variant::Tuplet] {
      let source = variant.source();
      assert!(source.starts_with("\n#include <"));
      assert_eq!(source.matches("VALUES").count(), 1);
      assert!(source.contains("int my_func()"));
    }
    assert!(Variant::Stdlib.source().contains("std::apply(sum, tup)"));
    assert!(Variant::Tuplet.source().contains("tuplet::apply(sum, tup)"));
  }

  #[test]
  fn templates_match_the_fixed_text() {
    assert_eq!(
      Variant::Stdlib.source(),
      "\n#include <tuple>\n\nint my_func() {\n    auto tup = std::tuple { VALUES };\n    auto sum = [](auto... values) { return (values + ...); };\n    return std::apply(sum, tup);\n}\n"
    );
    assert_eq!(
      Variant::Tuplet.source(),
      "\n#include <tuplet/tuplet.hpp>\n\nint my_func() {\n    auto tup = tuplet::tuple { VALUES };\n    auto sum = [](auto... values) { return (values + ...); };\n    return tuplet::apply(sum, tup);\n}\n"
    );
  }

  #[test]
  fn materialize_truncates_existing_content() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bench.cpp");
    fs::write(&path, "x".repeat(4096)).unwrap();

    materialize(Variant::Tuplet, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), TUPLET_TUPLE_CODE);
  }
}
