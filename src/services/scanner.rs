//! Import extraction for Python sources.
//!
//! `ScanStrategy::Ast` parses every file and walks all statement bodies, so
//! imports nested in functions, classes, `try`/`if` blocks and `match` arms are
//! found. `ScanStrategy::Regex` is the older line-pattern scan: it misses
//! imports continued across lines and can match `import` text inside
//! multi-line strings.

use crate::cli::ScanStrategy;
use regex::Regex;
use rustpython_parser::ast::{self, Stmt};
use rustpython_parser::Parse;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

pub const SOURCE_EXTENSION: &str = "py";

#[derive(Debug, Default)]
pub struct ScanResult {
    pub modules: BTreeSet<String>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_]\w*$").expect("valid identifier regex"))
}

/// First dotted segment, if it is a valid identifier.
fn top_level(dotted: &str) -> Option<String> {
    let first = dotted.split('.').next()?.trim();
    identifier_re().is_match(first).then(|| first.to_string())
}

#[allow(irrefutable_let_patterns)]
fn handler_body(handler: &ast::ExceptHandler) -> &[Stmt] {
    if let ast::ExceptHandler::ExceptHandler(h) = handler {
        &h.body
    } else {
        &[]
    }
}

fn collect_from_body(body: &[Stmt], out: &mut BTreeSet<String>) {
    for stmt in body {
        match stmt {
            Stmt::Import(import) => {
                out.extend(import.names.iter().filter_map(|a| top_level(a.name.as_str())));
            }
            Stmt::ImportFrom(from) => {
                let relative = from.level.as_ref().map(|l| l.to_u32() > 0).unwrap_or(false);
                if relative {
                    continue;
                }
                if let Some(module) = &from.module {
                    out.extend(top_level(module.as_str()));
                }
            }
            Stmt::FunctionDef(def) => collect_from_body(&def.body, out),
            Stmt::AsyncFunctionDef(def) => collect_from_body(&def.body, out),
            Stmt::ClassDef(def) => collect_from_body(&def.body, out),
            Stmt::If(s) => {
                collect_from_body(&s.body, out);
                collect_from_body(&s.orelse, out);
            }
            Stmt::For(s) => {
                collect_from_body(&s.body, out);
                collect_from_body(&s.orelse, out);
            }
            Stmt::AsyncFor(s) => {
                collect_from_body(&s.body, out);
                collect_from_body(&s.orelse, out);
            }
            Stmt::While(s) => {
                collect_from_body(&s.body, out);
                collect_from_body(&s.orelse, out);
            }
            Stmt::With(s) => collect_from_body(&s.body, out),
            Stmt::AsyncWith(s) => collect_from_body(&s.body, out),
            Stmt::Match(s) => {
                for case in &s.cases {
                    collect_from_body(&case.body, out);
                }
            }
            Stmt::Try(s) => {
                collect_from_body(&s.body, out);
                for handler in &s.handlers {
                    collect_from_body(handler_body(handler), out);
                }
                collect_from_body(&s.orelse, out);
                collect_from_body(&s.finalbody, out);
            }
            Stmt::TryStar(s) => {
                collect_from_body(&s.body, out);
                for handler in &s.handlers {
                    collect_from_body(handler_body(handler), out);
                }
                collect_from_body(&s.orelse, out);
                collect_from_body(&s.finalbody, out);
            }
            _ => {}
        }
    }
}

/// Parses `source` and returns its top-level imported module names.
/// Errors when the source is not valid Python.
pub fn imports_from_ast(source: &str, path: &str) -> anyhow::Result<BTreeSet<String>> {
    let suite = ast::Suite::parse(source, path).map_err(|e| anyhow::anyhow!("{}", e))?;
    let mut out = BTreeSet::new();
    collect_from_body(&suite, &mut out);
    Ok(out)
}

fn import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*import\s+(.+?)\s*(?:#.*)?$").expect("valid import regex")
    })
}

fn from_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*from\s+([A-Za-z_][\w.]*)\s+import\b").expect("valid from regex")
    })
}

pub fn imports_from_regex(source: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let statements = source
        .lines()
        .filter_map(|line| line.split('#').next())
        .flat_map(|code| code.split(';'));
    for stmt in statements {
        if let Some(c) = from_re().captures(stmt) {
            out.extend(top_level(&c[1]));
        } else if let Some(c) = import_re().captures(stmt) {
            for item in c[1].split(',') {
                let name = item.split_whitespace().next().unwrap_or("");
                out.extend(top_level(name));
            }
        }
    }
    out
}

/// Extracts imports from one file. `None` means the file was skipped.
pub fn scan_file(path: &Path, strategy: ScanStrategy) -> Option<BTreeSet<String>> {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("skipping unreadable {}: {}", path.display(), e);
            return None;
        }
    };
    match strategy {
        ScanStrategy::Ast => match imports_from_ast(&source, &path.to_string_lossy()) {
            Ok(found) => Some(found),
            Err(e) => {
                log::debug!("skipping {} (syntax error): {}", path.display(), e);
                None
            }
        },
        ScanStrategy::Regex => Some(imports_from_regex(&source)),
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

pub fn scan_project(root: &Path, strategy: ScanStrategy) -> ScanResult {
    let mut result = ScanResult::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("walk error: {}", err);
                None
            }
        });
    for entry in walker {
        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }
        match scan_file(entry.path(), strategy) {
            Some(found) => {
                result.files_scanned += 1;
                result.modules.extend(found);
            }
            None => result.files_skipped += 1,
        }
    }
    log::debug!(
        "scanned {} files ({} skipped), {} distinct imports",
        result.files_scanned,
        result.files_skipped,
        result.modules.len()
    );
    result
}
