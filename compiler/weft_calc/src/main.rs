//! `weft-calc <expr>...`: evaluate each argument and print `expr = value`.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=weft=trace`) to see the parser at work.

use rayon::prelude::*;
use weft_calc::{evaluate, expression_grammar};

fn main() {
    init_tracing();

    let exprs: Vec<String> = std::env::args().skip(1).collect();
    if exprs.is_empty() {
        eprintln!("Usage: weft-calc <expr>...");
        eprintln!();
        eprintln!("Example: weft-calc '1+2*3' '(1+2)^2'");
        std::process::exit(1);
    }

    let grammar = match expression_grammar() {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let results: Vec<_> = exprs
        .par_iter()
        .map(|expr| evaluate(&grammar, expr))
        .collect();

    let mut failed = false;
    for (expr, result) in exprs.iter().zip(results) {
        match result {
            Ok(value) => println!("{expr} = {value}"),
            Err(e) => {
                eprintln!("{expr}: {e}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Install a hierarchical log subscriber, only if `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};
    use tracing_tree::HierarchicalLayer;

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(HierarchicalLayer::new(2).with_targets(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
