#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;

use minnow_sat::{
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

mod misc;
mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli().get_matches();
    let config = parse::config_from_args(&matches);

    let mut the_context = match matches.get_one::<u64>("seed") {
        Some(seed) => Context::from_config_with_seed(config, *seed),
        None => Context::from_config(config),
    };

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    println!("c Reading DIMACS file from {path:?}");
    match misc::load_dimacs(&mut the_context, path) {
        Ok(info) => {
            if let (Some(atoms), Some(clauses)) = (info.expected_atoms, info.expected_clauses) {
                println!("c Expected {atoms} atoms and {clauses} clauses");
            }
            println!("c Parsed {} atoms and {} clauses", info.atoms, info.clauses);
        }

        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if matches.get_flag("stats") {
        misc::print_stats(&the_context);
    }

    match report {
        Report::Satisfiable => println!("s SATISFIABLE"),
        Report::Unsatisfiable => println!("s UNSATISFIABLE"),
        Report::Unknown => println!("s UNKNOWN"),
    }

    if report == Report::Satisfiable && matches.get_flag("model") {
        if let Ok(model) = the_context.model() {
            let literals = model
                .iter()
                .enumerate()
                .map(|(atom, value)| CLiteral::new(atom as _, *value).to_string())
                .collect::<Vec<_>>();
            println!("v {} 0", literals.join(" "));
        }
    }

    std::process::exit(report.code());
}
