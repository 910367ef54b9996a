// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Path of the packaging manifest under a workspace root.
pub fn manifest_path(workspace: &Path, file: Option<&Path>) -> PathBuf {
    workspace.join(file.unwrap_or_else(|| Path::new(MANIFEST_FILENAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path() {
        assert_eq!(
            manifest_path(Path::new("/work"), None),
            PathBuf::from("/work/pyproject.toml")
        );
        assert_eq!(
            manifest_path(Path::new("/work"), Some(Path::new("pkg/pyproject.toml"))),
            PathBuf::from("/work/pkg/pyproject.toml")
        );
    }
}
