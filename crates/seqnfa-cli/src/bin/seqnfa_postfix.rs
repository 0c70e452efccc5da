// seqnfa-postfix: Show how a pattern is parsed and compiled.
//
// Prints the postfix token stream of each pattern and, with --nfa, the
// compiled automaton's state listing.
//
// Usage:
//   seqnfa-postfix [-i] [--nfa] [PATTERN...]
//
// Options:
//   -i, --items   Treat patterns as comma-joined atom lists
//       --nfa     Also dump the compiled automaton
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use seqnfa_engine::compile::compile;
use seqnfa_engine::postfix::{normalize, render_postfix};

fn main() {
    seqnfa_cli::init_logging();
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if seqnfa_cli::wants_help(&args) {
        println!("seqnfa-postfix: Show how a pattern is parsed and compiled.");
        println!();
        println!("Usage: seqnfa-postfix [-i] [--nfa] [PATTERN...]");
        println!();
        println!("If PATTERN arguments are given, shows each one.");
        println!("Otherwise reads patterns from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -i, --items   Treat patterns as comma-joined atom lists");
        println!("      --nfa     Also dump the compiled automaton");
        println!("  -h, --help    Print this help");
        return;
    }

    let items = seqnfa_cli::take_flag(&mut args, &["-i", "--items"]);
    let show_nfa = seqnfa_cli::take_flag(&mut args, &["--nfa"]);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    let mut show = |pattern: &str| {
        let postfix = match normalize(&seqnfa_cli::to_input(pattern, items)) {
            Ok(tokens) => tokens,
            Err(e) => {
                let _ = writeln!(out, "{pattern}: error: {e}");
                failed = true;
                return;
            }
        };
        let _ = writeln!(out, "{pattern}: {}", render_postfix(&postfix));
        if show_nfa {
            match compile(&postfix) {
                Ok(nfa) => {
                    let _ = writeln!(out, "  {} states: {}", nfa.state_count(), nfa.dump());
                }
                Err(e) => {
                    let _ = writeln!(out, "  error: {e}");
                    failed = true;
                }
            }
        }
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            show(line.trim_end_matches('\r'));
        }
    } else {
        for pattern in &args {
            show(pattern);
        }
    }

    drop(show);
    drop(out);
    if failed {
        std::process::exit(1);
    }
}
