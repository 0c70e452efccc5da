// seqnfa-predict: Find stored sequences accepted by a pattern.
//
// Runs a predictive search over a sequence store file, querying it only for
// prefixes the pattern can still extend.
//
// Usage:
//   seqnfa-predict [-s STORE] [OPTIONS] PATTERN
//
// Options:
//   -s, --store PATH     Store file (one sequence per line)
//   -i, --items          Treat the pattern and head as comma-joined atom lists
//       --head SEQ       Fixed prefix context for the first query
//       --limit N        Keep at most N candidate prefixes per round
//       --max-steps N    Round budget (default: $SEQNFA_MAX_STEPS or 10)
//       --json           Print the outcome as JSON; sequences are atom lists
//                        (`["w","h","o"]`, `[1,2,3]`)
//   -h, --help           Print help

use std::io::{self, Write};

use seqnfa_core::{Item, render_sequence};
use seqnfa_engine::{DEFAULT_MAX_STEPS, SearchConfig, SearchOutcome};

fn main() {
    seqnfa_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if seqnfa_cli::wants_help(&args) {
        println!("seqnfa-predict: Find stored sequences accepted by a pattern.");
        println!();
        println!("Usage: seqnfa-predict [-s STORE] [OPTIONS] PATTERN");
        println!();
        println!("Options:");
        println!("  -s, --store PATH     Store file (default: ${})", seqnfa_cli::STORE_PATH_ENV);
        println!("  -i, --items          Treat pattern and head as comma-joined atom lists");
        println!("      --head SEQ       Fixed prefix context for the first query");
        println!("      --limit N        Keep at most N candidate prefixes per round");
        println!(
            "      --max-steps N    Round budget (default: ${} or {DEFAULT_MAX_STEPS})",
            seqnfa_cli::MAX_STEPS_ENV
        );
        println!("      --json           Print the outcome as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let (store_path, args) = seqnfa_cli::take_option(&args, "--store", Some("-s"));
    let (head, args) = seqnfa_cli::take_option(&args, "--head", None);
    let (limit, args) = seqnfa_cli::take_option(&args, "--limit", None);
    let (max_steps, mut args) = seqnfa_cli::take_option(&args, "--max-steps", None);
    let json = seqnfa_cli::take_flag(&mut args, &["--json"]);
    let items = seqnfa_cli::take_flag(&mut args, &["-i", "--items"]);

    let pattern = match args.as_slice() {
        [pattern] => pattern,
        [] => seqnfa_cli::fatal("missing PATTERN (see --help)"),
        _ => seqnfa_cli::fatal("expected exactly one PATTERN (see --help)"),
    };

    let mut config = SearchConfig::new();
    if let Some(head) = head {
        config = config.with_head(seqnfa_cli::head_symbols(&head, items));
    }
    if let Some(limit) = limit {
        config = config.with_limit(seqnfa_cli::parse_count("--limit", &limit));
    }
    let max_steps = max_steps.or_else(|| std::env::var(seqnfa_cli::MAX_STEPS_ENV).ok());
    if let Some(steps) = max_steps {
        config = config.with_max_steps(seqnfa_cli::parse_count("--max-steps", &steps));
    }

    let store = seqnfa_cli::load_store(store_path.as_deref())
        .unwrap_or_else(|e| seqnfa_cli::fatal(&e));
    log::info!("loaded {} stored sequences", store.len());

    let outcome = seqnfa_engine::predict(seqnfa_cli::to_input(pattern, items), &store, &config)
        .unwrap_or_else(|e| seqnfa_cli::fatal(&format!("invalid pattern {pattern:?}: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let status = match &outcome {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::StepLimit => "step_limit",
        };
        let sequences: Vec<Vec<Item>> = outcome
            .sequences()
            .iter()
            .map(|seq| seq.iter().map(Item::from).collect())
            .collect();
        let value = serde_json::json!({
            "outcome": status,
            "sequences": sequences,
        });
        let _ = writeln!(out, "{value}");
        return;
    }

    match &outcome {
        SearchOutcome::Found(_) => {
            for seq in outcome.sequences() {
                let _ = writeln!(out, "{}", render_sequence(&seq));
            }
        }
        SearchOutcome::Exhausted => eprintln!("no stored sequence matches"),
        SearchOutcome::StepLimit => {
            eprintln!("gave up after {} rounds (raise --max-steps)", config.max_steps)
        }
    }
}
