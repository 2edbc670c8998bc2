use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use redeem_matrix::{ComputeConfig, DeterminantMethod, PowerStrategy};
use redeem_matrix_cli as cli;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "REDEEM_MATRIX_LOG",
            "error,redeem_matrix=info,redeem_matrix_cli=info",
        ))
        .init();

    let matches = Command::new("redeem-matrix")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Dense matrix tools for the ReDeeM binary matrix format")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("identity")
                .about("Write an identity matrix")
                .arg(
                    Arg::new("order")
                        .help("Number of rows and columns")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(output_arg().required(true)),
        )
        .subcommand(
            Command::new("fill")
                .about("Write a matrix with every element set to one value")
                .arg(
                    Arg::new("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(output_arg().required(true)),
        )
        .subcommand(
            Command::new("show")
                .about("Print a stored matrix")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("decimals")
                        .short('p')
                        .long("decimals")
                        .default_value("4")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("edge")
                        .long("edge")
                        .help("Show at most this many rows/columns from each end")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            with_compute_args(
                Command::new("det")
                    .about("Print the determinant of a stored square matrix")
                    .arg(input_arg("input")),
            ),
        )
        .subcommand(
            with_compute_args(
                Command::new("inverse")
                    .about("Invert a stored square matrix")
                    .arg(input_arg("input"))
                    .arg(output_arg().required(true)),
            ),
        )
        .subcommand(
            with_compute_args(
                Command::new("power")
                    .about("Raise a stored square matrix to an integer power")
                    .arg(input_arg("input"))
                    .arg(
                        Arg::new("exponent")
                            .required(true)
                            .allow_negative_numbers(true)
                            .value_parser(clap::value_parser!(i32)),
                    )
                    .arg(output_arg().required(true)),
            ),
        )
        .subcommand(
            Command::new("multiply")
                .about("Multiply two stored matrices")
                .arg(input_arg("left"))
                .arg(input_arg("right"))
                .arg(output_arg().required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Convert a JSON matrix to the binary format")
                .arg(input_arg("json"))
                .arg(output_arg().required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Convert a binary matrix to JSON")
                .arg(input_arg("input"))
                .arg(output_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("identity", sub_m)) => {
            let order: usize = *sub_m.get_one("order").unwrap();
            let m = cli::identity(order)?;
            cli::write_matrix(&m, output_path(sub_m))
        }
        Some(("fill", sub_m)) => {
            let rows: usize = *sub_m.get_one("rows").unwrap();
            let cols: usize = *sub_m.get_one("cols").unwrap();
            let value: f64 = *sub_m.get_one("value").unwrap();
            let m = cli::fill(rows, cols, value)?;
            cli::write_matrix(&m, output_path(sub_m))
        }
        Some(("show", sub_m)) => {
            let m = cli::read_matrix(input_path(sub_m, "input"))?;
            let decimals: usize = *sub_m.get_one("decimals").unwrap();
            let edge = sub_m.get_one::<usize>("edge").copied();
            println!("{}", cli::describe(&m, decimals, edge));
            Ok(())
        }
        Some(("det", sub_m)) => {
            let config = compute_config(sub_m)?;
            let m = cli::read_matrix(input_path(sub_m, "input"))?;
            println!("{}", cli::determinant(&m, &config)?);
            Ok(())
        }
        Some(("inverse", sub_m)) => {
            let config = compute_config(sub_m)?;
            let m = cli::read_matrix(input_path(sub_m, "input"))?;
            let inv = cli::inverse(&m, &config)?;
            cli::write_matrix(&inv, output_path(sub_m))
        }
        Some(("power", sub_m)) => {
            let config = compute_config(sub_m)?;
            let m = cli::read_matrix(input_path(sub_m, "input"))?;
            let exponent: i32 = *sub_m.get_one("exponent").unwrap();
            let p = cli::power(&m, exponent, &config)?;
            cli::write_matrix(&p, output_path(sub_m))
        }
        Some(("multiply", sub_m)) => {
            let a = cli::read_matrix(input_path(sub_m, "left"))?;
            let b = cli::read_matrix(input_path(sub_m, "right"))?;
            let p = cli::multiply(&a, &b)?;
            cli::write_matrix(&p, output_path(sub_m))
        }
        Some(("import", sub_m)) => {
            let m = cli::import_json(input_path(sub_m, "json"))?;
            cli::write_matrix(&m, output_path(sub_m))
        }
        Some(("export", sub_m)) => {
            let m = cli::read_matrix(input_path(sub_m, "input"))?;
            let json = cli::export_json(&m)?;
            match sub_m.get_one::<PathBuf>("output_file") {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output_file")
        .short('o')
        .long("output_file")
        .help("File path that the result will be written to")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn with_compute_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Path to a JSON compute configuration")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("method")
            .short('m')
            .long("method")
            .help("Determinant method: cofactor or lu. Overrides the configuration file.")
            .value_parser(|s: &str| s.parse::<DeterminantMethod>()),
    )
    .arg(
        Arg::new("strategy")
            .short('s')
            .long("strategy")
            .help("Power strategy: linear or squaring. Overrides the configuration file.")
            .value_parser(|s: &str| s.parse::<PowerStrategy>()),
    )
}

fn compute_config(matches: &ArgMatches) -> Result<ComputeConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[ReDeeM::Matrix] Using config: {:?}", path);
            cli::load_compute_config(path)?
        }
        None => ComputeConfig::default(),
    };
    if let Some(method) = matches.get_one::<DeterminantMethod>("method") {
        config.determinant = *method;
    }
    if let Some(strategy) = matches.get_one::<PowerStrategy>("strategy") {
        config.power = *strategy;
    }
    Ok(config)
}

fn input_path<'a>(matches: &'a ArgMatches, name: &str) -> &'a PathBuf {
    matches.get_one::<PathBuf>(name).unwrap()
}

fn output_path(matches: &ArgMatches) -> &PathBuf {
    matches.get_one::<PathBuf>("output_file").unwrap()
}
