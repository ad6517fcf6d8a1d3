// Prints the structural summary, the per-schedule classification table, and
// the coset decomposition of the mutex subgroup for a small scheduling space.
//
// Try:
//   cargo run --bin=classify 3

use symsched::scheduler::SchedulerModel;

const USAGE: &str = "Usage: cargo run --bin=classify [n]";

fn main() {
    // Parse command line arguments
    let args = std::env::args();
    let n = match args.len() {
        1 => 3,
        2 => match std::env::args().skip(1).next().unwrap().parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let model = match SchedulerModel::new(n) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    println!("{}", model.summary());
    println!("Classification of all schedules in S_{}:", n);
    println!("{}", model.classification_table());
    println!("{}", model.coset_table());
}
