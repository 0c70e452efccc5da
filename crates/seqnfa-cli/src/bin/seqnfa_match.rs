// seqnfa-match: Test sequences against a pattern.
//
// Compiles PATTERN once and prints one line per sequence: `M: seq` when the
// whole sequence is accepted, `N: seq` otherwise.
//
// Usage:
//   seqnfa-match [-i] PATTERN [SEQUENCE...]
//
// Options:
//   -i, --items   Treat the pattern and sequences as comma-joined atom lists
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use seqnfa_engine::Nfa;

fn main() {
    seqnfa_cli::init_logging();
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if seqnfa_cli::wants_help(&args) {
        println!("seqnfa-match: Test sequences against a pattern.");
        println!();
        println!("Usage: seqnfa-match [-i] PATTERN [SEQUENCE...]");
        println!();
        println!("If SEQUENCE arguments are given, tests each one.");
        println!("Otherwise reads sequences from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -i, --items   Treat input as comma-joined atom lists (1,|,3)");
        println!("  -h, --help    Print this help");
        return;
    }

    let items = seqnfa_cli::take_flag(&mut args, &["-i", "--items"]);
    let Some((pattern, sequences)) = args.split_first() else {
        seqnfa_cli::fatal("missing PATTERN (see --help)");
    };

    let nfa = Nfa::new(seqnfa_cli::to_input(pattern, items))
        .unwrap_or_else(|e| seqnfa_cli::fatal(&format!("invalid pattern {pattern:?}: {e}")));
    log::debug!("compiled {pattern:?} into {} states", nfa.state_count());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut check = |line: &str| {
        let tag = if nfa.match_one(seqnfa_cli::to_input(line, items)) { 'M' } else { 'N' };
        let _ = writeln!(out, "{tag}: {line}");
    };

    if sequences.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            check(line.trim_end_matches('\r'));
        }
    } else {
        for seq in sequences {
            check(seq);
        }
    }
}
