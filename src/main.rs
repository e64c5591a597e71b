use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

use cidr_random_ip::cli::{self, Opt};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let opt = Opt::parse();
    init_logging(opt.verbose);
    log::info!("#Start main()");

    if let Err(e) = cli::run(&opt) {
        log::error!("run failed: {e}");
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

/// Initialize log4rs from log4rs.yml when present, otherwise log to stderr.
/// `--verbose` skips the file and forces debug-level stderr logging.
fn init_logging(verbose: bool) {
    if !verbose && log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("Error building log config");
    log4rs::init_config(config).expect("Error initializing logger");
}
