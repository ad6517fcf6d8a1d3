// Runs the full verification suite over the scheduling space S_n.
//
// This is the CLI equivalent of the integration tests: each claim prints one
// line, and the exit code is nonzero if anything failed.
//
// Try:
//   cargo run --bin=check
//   cargo run --bin=check 4
//   cargo run --bin=check 4 --json

use symsched::suite::Suite;

const USAGE: &str = "Usage: cargo run --bin=check [n] [--json]";

// The degrees verified when none is given on the command line.
const DEFAULT_DEGREES: [usize; 5] = [2, 3, 4, 5, 6];

fn main() {
    // Parse command line arguments
    let mut degrees: Vec<usize> = DEFAULT_DEGREES.to_vec();
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
            continue;
        }
        match arg.parse::<usize>() {
            Ok(n) => degrees = vec![n],
            Err(_) => {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            }
        }
    }

    let mut failures = 0;
    let mut suite = Suite::new();
    let result = suite.run(&degrees, &mut |event| {
        match event.outcome {
            Some(true) => println!("  [ok]   {}", event.message),
            Some(false) => {
                failures += 1;
                println!("  [FAIL] {}", event.message);
            }
            None => {
                if !event.message.is_empty() {
                    println!("{}", event.message);
                }
            }
        }
        if let Some((done, total)) = event.progress {
            if done == total {
                println!("{}/{} degrees checked", done, total);
            }
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    }

    if failures > 0 || !report.all_passed {
        println!("FAILED");
        std::process::exit(1);
    }
    println!("OK");
}
