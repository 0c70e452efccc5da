// seqnfa-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use seqnfa_core::input::split_shorthand;
use seqnfa_core::{Input, Symbol};
use seqnfa_engine::SequenceStore;

/// Environment variable naming the default store file.
pub const STORE_PATH_ENV: &str = "SEQNFA_STORE_PATH";

/// Environment variable overriding the default predictive round budget.
pub const MAX_STEPS_ENV: &str = "SEQNFA_MAX_STEPS";

/// Default store file name looked up in the search directories.
const STORE_FILE: &str = "store.txt";

/// Initialize logging. `RUST_LOG` controls verbosity (default: warnings).
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

/// Search for a store file and load it.
///
/// Search order:
/// 1. `store_path` argument (if provided)
/// 2. `SEQNFA_STORE_PATH` environment variable (a file, or a directory
///    containing `store.txt`)
/// 3. `~/.seqnfa/store.txt`
/// 4. `store.txt` in the current working directory
pub fn load_store(store_path: Option<&str>) -> Result<SequenceStore, String> {
    let candidates = build_search_paths(store_path);

    for path in &candidates {
        if path.is_file() {
            log::debug!("loading store from {}", path.display());
            return SequenceStore::load(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a sequence store in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate store files.
fn build_search_paths(store_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = store_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(STORE_PATH_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(STORE_FILE));
    }

    if let Some(home) = std::env::var("HOME").ok().map(PathBuf::from) {
        paths.push(home.join(".seqnfa").join(STORE_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(STORE_FILE));
    }

    paths
}

/// Pull `--name=VALUE` or `--name VALUE` (or `-s VALUE` for the short
/// form) out of `args`.
///
/// Returns `(value, remaining_args)`.
pub fn take_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || Some(arg.as_str()) == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a numeric option value, exiting on garbage.
pub fn parse_count(name: &str, value: &str) -> usize {
    value
        .trim()
        .parse()
        .unwrap_or_else(|_| fatal(&format!("{name} expects a non-negative integer, got {value:?}")))
}

/// Interpret a command-line argument or input line as a pattern or sequence.
///
/// With `items`, the text is a comma-joined atom list (`1,|,3`); otherwise
/// it is plain text.
pub fn to_input(text: &str, items: bool) -> Input {
    if items {
        Input::Items(split_shorthand(text))
    } else {
        Input::from(text)
    }
}

/// Symbols of a `--head` argument.
pub fn head_symbols(text: &str, items: bool) -> Vec<Symbol> {
    to_input(text, items).to_symbols()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Remove a boolean flag from `args`, reporting whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn option_forms() {
        let (v, rest) = take_option(&strings(&["--limit=3", "pat"]), "--limit", None);
        assert_eq!(v.as_deref(), Some("3"));
        assert_eq!(rest, strings(&["pat"]));

        let (v, rest) = take_option(&strings(&["-s", "words.txt", "pat"]), "--store", Some("-s"));
        assert_eq!(v.as_deref(), Some("words.txt"));
        assert_eq!(rest, strings(&["pat"]));

        let (v, rest) = take_option(&strings(&["pat"]), "--store", Some("-s"));
        assert_eq!(v, None);
        assert_eq!(rest, strings(&["pat"]));
    }

    #[test]
    fn flags() {
        let mut args = strings(&["--json", "pat", "-i"]);
        assert!(take_flag(&mut args, &["--json"]));
        assert!(take_flag(&mut args, &["--items", "-i"]));
        assert!(!take_flag(&mut args, &["--json"]));
        assert_eq!(args, strings(&["pat"]));
    }

    #[test]
    fn inputs() {
        assert_eq!(to_input("ab", false), Input::from("ab"));
        assert_eq!(
            to_input("1,|,3", true).to_symbols(),
            vec![Symbol::Int(1), Symbol::Char('|'), Symbol::Int(3)]
        );
        assert_eq!(head_symbols("wh", false), vec![Symbol::Char('w'), Symbol::Char('h')]);
    }

    #[test]
    fn explicit_store_path_comes_first() {
        let paths = build_search_paths(Some("/tmp/x.txt"));
        assert_eq!(paths[0], PathBuf::from("/tmp/x.txt"));
    }
}
