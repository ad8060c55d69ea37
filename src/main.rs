use clap::{App, AppSettings, Arg, ErrorKind};
use condsat::formula::encoding::{parse_signed_clause, EncodingError};
use condsat::*;

const SAMPLE: &[&str] = &["1,2", "1,-2,-3,4", "1,-3,-4", "-1,2,-3", "-1,2,-4", "-1,3,4", "-2,3"];

fn main() {
    env_logger::init();

    let matches = match app().get_matches_safe() {
        Ok(matches) => matches,
        Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => e.exit(),
        Err(e) => {
            eprintln!("{}", e.message);
            std::process::exit(-1);
        }
    };

    let clauses = match matches.values_of("CLAUSE") {
        Some(values) => parse_clauses(values),
        None => parse_clauses(SAMPLE.iter().copied()),
    };

    let mut config = SolverConfig::default();
    if matches.is_present("backtrack") {
        config = config.strategy(Strategy::Backtracking);
    }
    if matches.is_present("keep-empty-clauses") {
        config = config.empty_clauses(EmptyClausePolicy::Ignore);
    }

    match clauses {
        Ok(clauses) => {
            let f = Formula::new(clauses);
            println!("{}", f);

            let exit_code = match Solver::with_config(&f, config).solve() {
                SatResult::Satisfiable(assignment) => {
                    println!("{}", assignment);
                    0
                }
                SatResult::Failed => {
                    println!("failed");
                    1
                }
            };
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    }
}

fn parse_clauses<'a>(values: impl Iterator<Item = &'a str>) -> Result<Vec<Clause<u32>>, EncodingError> {
    values.map(parse_signed_clause).collect()
}

fn app() -> App<'static, 'static> {
    App::new("condsat")
        // clauses such as -1,2 start with a hyphen
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("CLAUSE")
                .help("clause as comma-separated signed literals, e.g. 1,-2,3 (default: a built-in sample)")
                .multiple(true),
        )
        .arg(
            Arg::with_name("backtrack")
                .long("backtrack")
                .help("revisit earlier decisions when both polarities of a variable conflict"),
        )
        .arg(
            Arg::with_name("keep-empty-clauses")
                .long("keep-empty-clauses")
                .help("do not treat clauses with no literals left as conflicts"),
        )
}
