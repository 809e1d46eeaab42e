use maxclique::bench::{self, AlgorithmKind, BenchError, BenchResult};
use maxclique::load;
use std::fs::File;

fn main() {
    let mut algorithms: Vec<AlgorithmKind> = AlgorithmKind::ALL.to_vec();
    let mut seed = 42u64;
    let mut csv_path: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--algos" => {
                let list = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                algorithms = list
                    .split(',')
                    .map(|name| {
                        AlgorithmKind::parse(name.trim()).unwrap_or_else(|| {
                            eprintln!("Unknown algorithm: {name}");
                            usage_and_exit(2)
                        })
                    })
                    .collect();
                i += 2;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                seed = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--csv" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                csv_path = Some(v.clone());
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            flag if flag.starts_with("--") => usage_and_exit(2),
            file => {
                files.push(file.to_string());
                i += 1;
            }
        }
    }

    if files.is_empty() {
        usage_and_exit(2);
    }

    // One CSV file for the whole run: header once, then every dataset's rows
    // appended, so multi-file runs concatenate instead of overwriting.
    let mut csv_file = match &csv_path {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            });
            if let Err(e) = bench::write_csv_header(&file) {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
            Some(file)
        }
        None => None,
    };

    let mut exit_code = 0;
    for file in &files {
        if let Err(e) = benchmark_file(file, &algorithms, seed, csv_file.as_mut()) {
            eprintln!("{file}: {e}");
            exit_code = 1;
        }
    }
    if let Some(path) = &csv_path {
        println!("CSV written to {path}");
    }
    std::process::exit(exit_code);
}

fn benchmark_file(
    path: &str,
    algorithms: &[AlgorithmKind],
    seed: u64,
    csv_file: Option<&mut File>,
) -> Result<(), String> {
    println!("--------------------------------------------------");
    println!("Loading graph from: {path}");
    let g = load::load_edge_list(path).map_err(|e| e.to_string())?;
    let degeneracy = g.degeneracy();

    println!(
        "Graph: {} vertices, {} edges, density {:.6}, degeneracy {}",
        g.num_vertices(),
        g.num_edges(),
        g.density(),
        degeneracy
    );
    println!("--------------------------------------------------");

    let mut results: Vec<BenchResult> = Vec::with_capacity(algorithms.len());
    for (i, &algorithm) in algorithms.iter().enumerate() {
        println!("[{}/{}] {} ...", i + 1, algorithms.len(), algorithm.name());
        let result = bench::run_one(&g, algorithm, seed);
        print_result(&result);
        results.push(result);
    }

    print_summary(&results);

    if let Some(file) = csv_file {
        bench::write_csv_rows(file, path, &g, degeneracy, &results).map_err(|e| e.to_string())?;
    }

    // Any invalid result is a solver bug; fail this input loudly.
    for r in &results {
        if r.error == Some(BenchError::InvalidClique) {
            return Err(format!("{} returned an invalid clique", r.algorithm.name()));
        }
    }

    Ok(())
}

fn print_result(r: &BenchResult) {
    match &r.error {
        Some(e) => println!("      FAILED: {e}"),
        None => println!(
            "      size {:>4}   time {:>12.6} s   valid {}",
            r.clique_size,
            r.elapsed.as_secs_f64(),
            if r.valid { "yes" } else { "NO" }
        ),
    }
}

fn print_summary(results: &[BenchResult]) {
    println!("--------------------------------------------------");
    println!("{:<16} {:>6} {:>14} {:>7}", "algorithm", "size", "time (s)", "valid");
    for r in results {
        if r.error.is_some() && !r.valid {
            println!("{:<16} {:>6} {:>14} {:>7}", r.algorithm.name(), "-", "-", "error");
        } else {
            println!(
                "{:<16} {:>6} {:>14.6} {:>7}",
                r.algorithm.name(),
                r.clique_size,
                r.elapsed.as_secs_f64(),
                if r.valid { "yes" } else { "NO" }
            );
        }
    }
    println!("--------------------------------------------------");
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  maxclique [--algos LIST] [--seed SEED] [--csv FILE] GRAPH...\n\nOptions:\n  --algos LIST   Comma-separated algorithms to run (default: all)\n                 greedy, local-search, annealing, bron-kerbosch,\n                 tomita, degeneracy, ostergard, bitset\n  --seed SEED    Base seed for the randomized heuristics (default: 42)\n  --csv FILE     Write per-algorithm results as CSV\n  --help, -h     Show this help\n\nGRAPH files are SNAP or DIMACS edge lists.\n"
    );
    std::process::exit(code)
}
