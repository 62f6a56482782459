//! Report abrupt rank changes found in a node log.
//!
//! Every line containing `Node <id> rank: <rank>` is a rank report. A report differing from the
//! previous one of the same node by more than the threshold is printed as an anomaly.

use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use env_logger::Builder;
use getopts::Options;
use log::LevelFilter;

use rpl_secof::rpl::consts::DEFAULT_RANK_ANOMALY_THRESHOLD;
use rpl_secof::rpl::{parse_rank_report, RankMonitor};

const DEFAULT_LOG_FILE: &str = "contiki_log.txt";
/// Number of nodes tracked. Must be a power of two.
const MONITOR_SIZE: usize = 4096;

fn setup_logging(filter: &str) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "\x1b[37m[{}]\x1b[0m {}",
                record.target(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_filters(filter)
        .parse_env("RUST_LOG")
        .init();
}

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {program} [options] [LOG_FILE]");
    opts.usage(&brief)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt(
        "t",
        "threshold",
        &format!("rank change reported as an anomaly (default: {DEFAULT_RANK_ANOMALY_THRESHOLD})"),
        "THRESHOLD",
    );
    opts.optopt("", "log-filter", "log filter, as in RUST_LOG", "FILTER");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", usage(&program, &opts));
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print!("{}", usage(&program, &opts));
        process::exit(0);
    }

    setup_logging(matches.opt_str("log-filter").as_deref().unwrap_or(""));

    let threshold = match matches.opt_get_default("t", DEFAULT_RANK_ANOMALY_THRESHOLD) {
        Ok(threshold) => threshold,
        Err(e) => {
            eprintln!("invalid threshold: {e}");
            process::exit(1);
        }
    };

    let path = matches
        .free
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    if let Err(e) = run(&path, threshold) {
        eprintln!("{path}: {e}");
        process::exit(1);
    }
}

fn run(path: &str, threshold: u16) -> io::Result<()> {
    let reader = BufReader::new(File::open(path)?);
    let mut monitor = RankMonitor::<MONITOR_SIZE>::with_threshold(threshold);
    let mut untracked = HashSet::new();
    let mut reports = 0usize;

    for line in reader.lines() {
        let Some((node, rank)) = parse_rank_report(&line?) else {
            continue;
        };
        reports += 1;

        if monitor.is_full() && !monitor.is_tracked(node) && untracked.insert(node) {
            eprintln!(
                "warning: more than {} nodes, node {node} is not monitored",
                monitor.capacity()
            );
        }

        if let Some(anomaly) = monitor.observe(node, rank) {
            println!("Anomaly detected! {anomaly}");
        }
    }

    log::info!("{reports} rank reports from {} nodes", monitor.len());

    Ok(())
}
