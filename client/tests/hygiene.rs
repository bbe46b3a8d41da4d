//! Hygiene: coding standards for the UI crate, enforced at test time.
//!
//! Production sources under `src/` (test modules excluded) are scanned for
//! patterns that either abort the WASM module or swallow errors in the
//! browser where nobody sees them. Every budget is zero.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics abort the WASM module" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics abort the WASM module" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "panics abort the WASM module" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "errors must be inspected" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "errors must be inspected" };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" };

/// `(path, contents)` of every non-test `.rs` file under `src/`.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
            (path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert!(
        found <= budget.max,
        "`{}` budget exceeded ({}): found {found}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max,
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
