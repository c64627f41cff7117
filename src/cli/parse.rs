use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

use minnow_sat::config::{Config, Minimization, PolarityLean, RandomDecisionBias};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("minnow_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse, optionally xz compressed."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .num_args(0)
            .action(clap::ArgAction::SetTrue)
            .help("Display a model on finding the formula is satisfiable."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .num_args(0)
            .action(clap::ArgAction::SetTrue)
            .help("Display statistics of the solve."))

        .arg(Arg::new("minimization")
            .long("minimization")
            .value_parser(clap::builder::ValueParser::new(minimization_parser))
            .required(false)
            .num_args(1)
            .help(format!("The minimization to apply to learnt clauses: none, cheap, or recursive.
Default: {}", defaults.minimization.value)))

        .arg(Arg::new("no_restarts")
            .long("no-restart")
            .num_args(0)
            .action(clap::ArgAction::SetTrue)
            .help("Prevent choices from being forgotten."))

        .arg(Arg::new("restart_first")
            .long("restart-first")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help(format!("The count of conflicts before the first restart.
Default: {}

Later intervals follow the luby sequence, scaled by this count.", defaults.restart_first.value)))

        .arg(Arg::new("restart_inc")
            .long("restart-inc")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The base of the luby sequence of restart intervals.
Default: {}", defaults.restart_inc.value)))

        .arg(Arg::new("conflict_limit")
            .long("conflict-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The count of conflicts after which a solve gives up, with zero for no limit."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The chance of choosing to value an atom true, without phase saving or before the first value.
Default: {}", defaults.polarity_lean.value)))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .value_parser(value_parser!(RandomDecisionBias))
            .required(false)
            .num_args(1)
            .help(format!("The chance of choosing an atom at random rather than by activity.
Default: {}", defaults.random_decision_bias.value)))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .num_args(0)
            .action(clap::ArgAction::SetTrue)
            .help("Value atoms by polarity lean rather than by the previous value."))

        .arg(Arg::new("no_simplify")
            .long("no-simplify")
            .num_args(0)
            .action(clap::ArgAction::SetTrue)
            .help("Prevent simplification of the clause database at level zero."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A seed for the source of randomness."))
}

fn minimization_parser(arg: &str) -> Result<Minimization, String> {
    arg.parse::<Minimization>()
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(minimization)) = args.try_get_one::<Minimization>("minimization") {
        the_config.minimization.value = *minimization
    };

    if args.get_flag("no_restarts") {
        the_config.restart.value = false
    };

    if let Ok(Some(first)) = args.try_get_one::<u32>("restart_first") {
        the_config.restart_first.set_checked(*first);
    };

    if let Ok(Some(inc)) = args.try_get_one::<f64>("restart_inc") {
        the_config.restart_inc.set_checked(*inc);
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("conflict_limit") {
        the_config.conflict_limit.set_checked(*limit);
    };

    if let Ok(Some(lean)) = args.try_get_one::<PolarityLean>("polarity_lean") {
        the_config.polarity_lean.set_checked(*lean);
    };

    if let Ok(Some(bias)) = args.try_get_one::<RandomDecisionBias>("random_decision_bias") {
        the_config.random_decision_bias.set_checked(*bias);
    };

    if args.get_flag("no_phase_saving") {
        the_config.phase_saving.value = false
    };

    if args.get_flag("no_simplify") {
        the_config.simplify.value = false
    };

    the_config
}
