use crate::cli::StdlibSource;
use std::collections::{BTreeSet, HashSet};
use std::process::Command;

/// `sys.stdlib_module_names` of CPython 3.11.
pub const EMBEDDED_STDLIB: &[&str] = &[
    "__future__", "_abc", "_aix_support", "_ast", "_asyncio", "_bisect", "_blake2",
    "_bootsubprocess", "_bz2", "_codecs", "_codecs_cn", "_codecs_hk", "_codecs_iso2022",
    "_codecs_jp", "_codecs_kr", "_codecs_tw", "_collections", "_collections_abc", "_compat_pickle",
    "_compression", "_contextvars", "_crypt", "_csv", "_ctypes", "_curses", "_curses_panel",
    "_datetime", "_dbm", "_decimal", "_elementtree", "_frozen_importlib",
    "_frozen_importlib_external", "_functools", "_gdbm", "_hashlib", "_heapq", "_imp", "_io",
    "_json", "_locale", "_lsprof", "_lzma", "_markupbase", "_md5", "_msi", "_multibytecodec",
    "_multiprocessing", "_opcode", "_operator", "_osx_support", "_overlapped", "_pickle",
    "_posixshmem", "_posixsubprocess", "_py_abc", "_pydecimal", "_pyio", "_queue", "_random",
    "_scproxy", "_sha1", "_sha256", "_sha3", "_sha512", "_signal", "_sitebuiltins", "_socket",
    "_sqlite3", "_sre", "_ssl", "_stat", "_statistics", "_string", "_strptime", "_struct",
    "_symtable", "_thread", "_threading_local", "_tkinter", "_tokenize", "_tracemalloc", "_typing",
    "_uuid", "_warnings", "_weakref", "_weakrefset", "_winapi", "_zoneinfo", "abc", "aifc",
    "antigravity", "argparse", "array", "ast", "asynchat", "asyncio", "asyncore", "atexit",
    "audioop", "base64", "bdb", "binascii", "bisect", "builtins", "bz2", "cProfile", "calendar",
    "cgi", "cgitb", "chunk", "cmath", "cmd", "code", "codecs", "codeop", "collections", "colorsys",
    "compileall", "concurrent", "configparser", "contextlib", "contextvars", "copy", "copyreg",
    "crypt", "csv", "ctypes", "curses", "dataclasses", "datetime", "dbm", "decimal", "difflib",
    "dis", "distutils", "doctest", "email", "encodings", "ensurepip", "enum", "errno",
    "faulthandler", "fcntl", "filecmp", "fileinput", "fnmatch", "fractions", "ftplib", "functools",
    "gc", "genericpath", "getopt", "getpass", "gettext", "glob", "graphlib", "grp", "gzip",
    "hashlib", "heapq", "hmac", "html", "http", "idlelib", "imaplib", "imghdr", "imp", "importlib",
    "inspect", "io", "ipaddress", "itertools", "json", "keyword", "lib2to3", "linecache", "locale",
    "logging", "lzma", "mailbox", "mailcap", "marshal", "math", "mimetypes", "mmap",
    "modulefinder", "msilib", "msvcrt", "multiprocessing", "netrc", "nis", "nntplib", "nt",
    "ntpath", "nturl2path", "numbers", "opcode", "operator", "optparse", "os", "ossaudiodev",
    "pathlib", "pdb", "pickle", "pickletools", "pipes", "pkgutil", "platform", "plistlib",
    "poplib", "posix", "posixpath", "pprint", "profile", "pstats", "pty", "pwd", "py_compile",
    "pyclbr", "pydoc", "pydoc_data", "pyexpat", "queue", "quopri", "random", "re", "readline",
    "reprlib", "resource", "rlcompleter", "runpy", "sched", "secrets", "select", "selectors",
    "shelve", "shlex", "shutil", "signal", "site", "smtpd", "smtplib", "sndhdr", "socket",
    "socketserver", "spwd", "sqlite3", "sre_compile", "sre_constants", "sre_parse", "ssl", "stat",
    "statistics", "string", "stringprep", "struct", "subprocess", "sunau", "symtable", "sys",
    "sysconfig", "syslog", "tabnanny", "tarfile", "telnetlib", "tempfile", "termios", "textwrap",
    "this", "threading", "time", "timeit", "tkinter", "token", "tokenize", "tomllib", "trace",
    "traceback", "tracemalloc", "tty", "turtle", "turtledemo", "types", "typing", "unicodedata",
    "unittest", "urllib", "uu", "uuid", "venv", "warnings", "wave", "weakref", "webbrowser",
    "winreg", "winsound", "wsgiref", "xdrlib", "xml", "xmlrpc", "zipapp", "zipfile", "zipimport",
    "zlib", "zoneinfo",
];

const RUNTIME_QUERY: &str = "import sys; print(chr(10).join(sorted(sys.stdlib_module_names)))";

#[derive(Debug, Clone)]
pub struct StdlibFilter {
    names: HashSet<String>,
}

impl StdlibFilter {
    pub fn embedded() -> Self {
        Self {
            names: EMBEDDED_STDLIB.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Embedded names plus whatever the interpreter reports about itself.
    pub fn with_runtime(python: &str) -> anyhow::Result<Self> {
        let out = Command::new(python).args(["-c", RUNTIME_QUERY]).output()?;
        if !out.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                python,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        let mut filter = Self::embedded();
        filter.names.extend(
            String::from_utf8_lossy(&out.stdout)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        );
        Ok(filter)
    }

    pub fn load(source: StdlibSource, python: &str) -> Self {
        match source {
            StdlibSource::Embedded => Self::embedded(),
            StdlibSource::Runtime => Self::with_runtime(python).unwrap_or_else(|e| {
                log::warn!("stdlib query via {} failed, using embedded list: {}", python, e);
                Self::embedded()
            }),
        }
    }

    pub fn is_stdlib(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Drops stdlib and empty names.
    pub fn filter<'a>(&self, names: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
        names
            .into_iter()
            .filter(|n| !n.is_empty() && !self.is_stdlib(n))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{StdlibFilter, EMBEDDED_STDLIB};
    use crate::cli::StdlibSource;
    use std::collections::BTreeSet;

    #[test]
    fn embedded_list_covers_common_modules() {
        let f = StdlibFilter::embedded();
        for name in ["os", "sys", "json", "asyncio", "typing", "urllib", "__future__"] {
            assert!(f.is_stdlib(name), "{} should be stdlib", name);
        }
        assert!(!f.is_stdlib("requests"));
        assert!(!f.is_stdlib("numpy"));
    }

    #[test]
    fn embedded_list_is_sorted_and_unique() {
        let mut sorted = EMBEDDED_STDLIB.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, EMBEDDED_STDLIB);
    }

    #[test]
    fn filter_drops_stdlib_and_empty_names() {
        let raw: BTreeSet<String> = ["os", "", "requests", "re", "yaml"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let kept = StdlibFilter::embedded().filter(&raw);
        assert_eq!(
            kept.into_iter().collect::<Vec<_>>(),
            vec!["requests".to_string(), "yaml".to_string()]
        );
    }

    #[test]
    fn unusable_interpreter_falls_back_to_embedded() {
        let f = StdlibFilter::load(StdlibSource::Runtime, "/nonexistent/python-for-reqscan");
        assert!(f.is_stdlib("os"));
    }
}
