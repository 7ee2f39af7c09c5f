//! Thin CLI test driver: self-test, throughput benchmark, or a one-off
//! digest of a raw string argument. No algorithmic logic lives here — only
//! argument parsing and calls into the library.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--test") => run_self_test(),
        Some("--benchmark") => {
            run_benchmark();
            ExitCode::SUCCESS
        }
        Some(s) => {
            println!("{}", harmonia::v2::hex(s.as_bytes()));
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("usage: harmonia [--test | --benchmark | <string>]");
            ExitCode::FAILURE
        }
    }
}

fn run_self_test() -> ExitCode {
    let results = [
        ("v2", harmonia::selftest::v2().map_err(|e| e.to_string())),
        ("fast", harmonia::selftest::fast().map_err(|e| e.to_string())),
        ("ng", harmonia::selftest::ng().map_err(|e| e.to_string())),
    ];

    let mut ok = true;
    for (name, result) in results {
        match result {
            Ok(()) => println!("{name}: PASS"),
            Err(msg) => {
                println!("{name}: FAIL ({msg})");
                ok = false;
            }
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_benchmark() {
    const SIZES: [usize; 3] = [64, 1024, 1024 * 1024];

    for &size in &SIZES {
        let data = vec![0u8; size];

        let start = Instant::now();
        let iters = if size < 1024 { 20_000 } else { 200 };
        for _ in 0..iters {
            let _ = harmonia::v2::oneshot(&data);
        }
        let v2_elapsed = start.elapsed();

        let start = Instant::now();
        for _ in 0..iters {
            let _ = harmonia::fast::oneshot(&data);
        }
        let fast_elapsed = start.elapsed();

        let start = Instant::now();
        for _ in 0..iters {
            let _ = harmonia::ng::oneshot(&data);
        }
        let ng_elapsed = start.elapsed();

        println!(
            "{size:>8} bytes x {iters:<6} : v2 {:>10.3?}  fast {:>10.3?}  ng {:>10.3?}",
            v2_elapsed / iters as u32,
            fast_elapsed / iters as u32,
            ng_elapsed / iters as u32,
        );
    }
}
