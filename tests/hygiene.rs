//! Source hygiene for `src/`, the `hydrate`-only browser files included.
//!
//! Comment lines are ignored; `*_test.rs` modules are skipped. Budgets only
//! ever go down.

use std::fs;
use std::path::{Path, PathBuf};

const BRIDGE: &str = "src/browser.rs";
const WEB_DOM: &str = "src/dom/web.rs";

/// Closures handed to JS for the page lifetime: DOMContentLoaded, the
/// per-listener callbacks and the resize callback.
const MAX_BRIDGE_FORGETS: usize = 3;
/// `Date::now()` and `innerWidth`, both floats coming out of JS.
const MAX_BRIDGE_CASTS: usize = 2;

const NUMERIC_TYPES: [&str; 14] =
    ["u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize", "f32", "f64"];

struct Line {
    file: PathBuf,
    number: usize,
    code: String,
}

impl Line {
    fn is_in(&self, file: &str) -> bool {
        self.file.ends_with(file)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.number, self.code)
    }
}

/// Every non-comment line of production source, depth first.
fn code_lines() -> Vec<Line> {
    let mut pending = vec![PathBuf::from("src")];
    let mut lines = Vec::new();
    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir)
            .unwrap_or_else(|err| panic!("read {}: {err}", dir.display()))
            .map(|entry| entry.expect("dir entry").path())
            .collect::<Vec<_>>();
        entries.sort();
        for path in entries {
            if path.is_dir() {
                pending.push(path);
            } else if is_production_source(&path) {
                let text = fs::read_to_string(&path).expect("readable source");
                lines.extend(
                    text.lines()
                        .enumerate()
                        .filter(|(_, line)| !line.trim_start().starts_with("//"))
                        .map(|(index, line)| Line { file: path.clone(), number: index + 1, code: line.trim().to_owned() }),
                );
            }
        }
    }
    lines
}

fn is_production_source(path: &Path) -> bool {
    let name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
    name.ends_with(".rs") && !name.ends_with("_test.rs")
}

fn offending<'a>(lines: &'a [Line], hit: impl Fn(&Line) -> bool) -> Vec<&'a Line> {
    lines.iter().filter(|line| hit(line)).collect()
}

fn listing(hits: &[&Line]) -> String {
    hits.iter().map(|line| format!("  {line}")).collect::<Vec<_>>().join("\n")
}

/// Whether the line contains `as <numeric type>`.
fn has_numeric_cast(code: &str) -> bool {
    code.match_indices(" as ").any(|(at, _)| {
        let target = code[at + 4..].split(|c: char| !c.is_ascii_alphanumeric()).next().unwrap_or_default();
        NUMERIC_TYPES.contains(&target)
    })
}

// =============================================================
// Whole tree
// =============================================================

#[test]
fn production_source_includes_browser_files() {
    let lines = code_lines();
    for file in [BRIDGE, WEB_DOM, "src/page.rs"] {
        assert!(lines.iter().any(|line| line.is_in(file)), "{file} was not scanned");
    }
}

#[test]
fn nothing_panics() {
    let lines = code_lines();
    for needle in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        let hits = offending(&lines, |line| line.code.contains(needle));
        assert!(hits.is_empty(), "`{needle}` in production code:\n{}", listing(&hits));
    }
}

#[test]
fn no_error_is_discarded_unseen() {
    let lines = code_lines();
    for needle in ["let _ =", ".ok()", "#[allow(dead_code)]", "#[allow(unused"] {
        let hits = offending(&lines, |line| line.code.contains(needle));
        assert!(hits.is_empty(), "`{needle}` in production code:\n{}", listing(&hits));
    }
}

// =============================================================
// Casts
// =============================================================

#[test]
fn numeric_casts_stay_in_the_bridge() {
    let lines = code_lines();
    let outside = offending(&lines, |line| !line.is_in(BRIDGE) && has_numeric_cast(&line.code));
    assert!(outside.is_empty(), "use `try_from` outside {BRIDGE}:\n{}", listing(&outside));

    let inside = offending(&lines, |line| line.is_in(BRIDGE) && has_numeric_cast(&line.code));
    assert!(
        inside.len() <= MAX_BRIDGE_CASTS,
        "{BRIDGE} casts: found {}, max {MAX_BRIDGE_CASTS}\n{}",
        inside.len(),
        listing(&inside)
    );
}

#[test]
fn cast_detector_matches_only_numeric_targets() {
    assert!(has_numeric_cast("let width = width as u32;"));
    assert!(has_numeric_cast("js_sys::Date::now() as u64"));
    assert!(!has_numeric_cast("use web_sys::Node as DomNode;"));
    assert!(!has_numeric_cast("let alias = value as_str();"));
}

// =============================================================
// JS interop
// =============================================================

#[test]
fn closures_are_leaked_only_by_the_bridge() {
    let lines = code_lines();
    let outside = offending(&lines, |line| !line.is_in(BRIDGE) && line.code.contains(".forget()"));
    assert!(outside.is_empty(), "`.forget()` outside {BRIDGE}:\n{}", listing(&outside));

    let inside = offending(&lines, |line| line.is_in(BRIDGE) && line.code.contains(".forget()"));
    assert!(
        inside.len() <= MAX_BRIDGE_FORGETS,
        "{BRIDGE} leaks {} closures, max {MAX_BRIDGE_FORGETS}\n{}",
        inside.len(),
        listing(&inside)
    );
}

#[test]
fn page_is_never_borrowed_with_a_panicking_call() {
    let lines = code_lines();
    let hits = offending(&lines, |line| {
        (line.is_in(BRIDGE) || line.is_in(WEB_DOM)) && (line.code.contains(".borrow_mut()") || line.code.contains(".borrow()"))
    });
    assert!(hits.is_empty(), "use `try_borrow_mut` in JS callbacks:\n{}", listing(&hits));
}

#[test]
fn every_page_borrow_in_the_bridge_handles_contention() {
    let lines = code_lines();
    let borrows = offending(&lines, |line| line.is_in(BRIDGE) && line.code.contains("try_borrow_mut()"));
    assert!(!borrows.is_empty(), "{BRIDGE} no longer borrows the page");
    for borrow in borrows {
        assert!(borrow.code.starts_with("let ") || borrow.code.starts_with("match "), "unhandled borrow result: {borrow}");
    }
}
