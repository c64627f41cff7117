use std::{fs::File, io::BufReader, path::PathBuf};

use minnow_sat::{
    builder::DimacsInfo,
    context::Context,
    types::err::{self},
};

/// Reads the DIMACS file at `path` into the context, decompressing xz files if supported.
pub fn load_dimacs(context: &mut Context, path: &PathBuf) -> Result<DimacsInfo, err::ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file {path:?}");
            std::process::exit(1);
        }
    };

    match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if *extension == "xz" => {
            println!("c Reading xz compressed files requires the xz feature");
            std::process::exit(1);
        }

        _ => context.read_dimacs(BufReader::new(&file)),
    }
}

/// Prints statistics of a solve, as comment lines.
pub fn print_stats(context: &Context) {
    let counters = &context.counters;

    println!("c restarts              : {}", counters.restarts);
    println!("c conflicts             : {}", counters.conflicts);
    println!("c decisions             : {}", counters.decisions);
    println!("c propagations          : {}", counters.propagations);

    let deleted = match counters.max_literals {
        0 => 0.0,
        max => (max - counters.tot_literals) as f64 * 100.0 / max as f64,
    };
    println!(
        "c conflict literals     : {} ({deleted:.2} % deleted)",
        counters.tot_literals
    );
    println!("c time                  : {:.3}s", counters.time.as_secs_f64());
}
