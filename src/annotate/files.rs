//! Java source file discovery.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source suffix of files to annotate.
pub const SOURCE_EXTENSION: &str = "java";

/// Build output and tooling directories never worth descending into.
const SKIPPED_DIRS: &[&str] = &["target", "build", "out", "node_modules"];

/// Compile exclusion glob patterns into one matcher.
pub fn exclusion_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclusion pattern {:?}: {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Collect every `.java` file under `root`, sorted by path.
///
/// A file path is returned as-is. Hidden directories, build output
/// directories and paths matching `excluded` are skipped. Entries the
/// walk cannot read are reported on stderr and skipped.
pub fn collect_files(root: &Path, excluded: &GlobSet) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !SKIPPED_DIRS.contains(&name.as_ref())
        })
    {
        // A dangling link or unreadable directory costs only that entry.
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != SOURCE_EXTENSION {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if excluded.is_match(relative) || excluded.is_match(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
