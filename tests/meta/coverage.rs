//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// File names that only declare modules and need no mirror
    const MODULE_ROOTS: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    fn crate_path(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    fn is_module_root(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| MODULE_ROOTS.contains(&name))
    }

    /// Every `.rs` file below `root`, relative to `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    /// Files in `from` with no counterpart in `to`, module roots excluded
    fn unmatched(from: &BTreeSet<PathBuf>, to: &BTreeSet<PathBuf>) -> Vec<String> {
        from.iter()
            .filter(|path| !is_module_root(path) && !to.contains(*path))
            .map(|path| format!("  - {}", path.display()))
            .collect()
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/algorithm/changelog.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = rust_files(&crate_path("src")).unwrap();
        let unit = rust_files(&crate_path("tests/unit")).unwrap();

        let missing = unmatched(&sources, &unit);
        assert!(
            missing.is_empty(),
            "source files without tests under tests/unit:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the source file it covers
    // Verified by adding tests/unit/spatial/extension.rs
    #[test]
    fn test_every_unit_test_file_has_source() {
        let sources = rust_files(&crate_path("src")).unwrap();
        let unit = rust_files(&crate_path("tests/unit")).unwrap();

        let orphaned = unmatched(&unit, &sources);
        assert!(
            orphaned.is_empty(),
            "unit test files without a source file under src:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-root test file declares at least one test
    // Verified by emptying the module of tests/unit/io/render.rs
    #[test]
    fn test_test_files_contain_tests() {
        let root = crate_path("tests");
        let files = rust_files(&root).unwrap();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| !is_module_root(path))
            .filter(|path| {
                fs::read_to_string(root.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
