//! Hygiene: scans production sources for patterns the crate keeps out.
//!
//! Browser builds cannot surface a panic to the user in any useful way, so
//! library code propagates or logs instead. Test modules (`*_test.rs`) are
//! exempt.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "dbg!(", max: 0 },
    Budget { pattern: "println!(", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "let _ =", max: 0 },
];

fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rust && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    production_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

#[test]
fn sources_are_found() {
    assert!(sources().iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = sources();
    let mut violations = Vec::new();
    for budget in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(budget.pattern))
                    .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
            })
            .collect();
        if hits.len() > budget.max {
            violations.push(format!("`{}` found {} (max {}):\n{}", budget.pattern, hits.len(), budget.max, hits.join("\n")));
        }
    }
    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}

#[test]
fn test_module_paths_exist() {
    let mut missing = Vec::new();
    for (path, content) in sources() {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        for line in content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(file) = rest.split('"').next() else {
                continue;
            };
            if !dir.join(file).exists() {
                missing.push(format!("{} -> {file}", path.display()));
            }
        }
    }
    assert!(missing.is_empty(), "missing test modules:\n{}", missing.join("\n"));
}
