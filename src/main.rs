use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use qr_eig::io::{
    load_eigen_config, read_matrix_json, read_vectors_json, BasisReport, EigenReport, QrReport,
};
use qr_eig::{decompose, eigen, orthogonalize, EigenConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("QR_EIG_LOG", "error,qr_eig=info"))
        .init();

    let matches = Command::new("qr-eig")
        .version(clap::crate_version!())
        .about("Gram-Schmidt, QR decomposition and QR-algorithm eigenvalues for dense matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("eigen")
                .about("Approximate eigenvalues and eigenvectors with the QR algorithm")
                .arg(
                    Arg::new("matrix")
                        .help("Path to a JSON file holding the square matrix as an array of rows")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON eigen configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("absolute_tol")
                        .long("absolute-tol")
                        .help("Absolute stopping tolerance. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("relative_tol")
                        .long("relative-tol")
                        .help("Relative stopping tolerance. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max_iterations")
                        .long("max-iterations")
                        .help("Maximum number of QR steps. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("qr")
                .about("Decompose a square matrix into Q and R")
                .arg(
                    Arg::new("matrix")
                        .help("Path to a JSON file holding the square matrix as an array of rows")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("gram-schmidt")
                .about("Orthogonalize a list of vectors")
                .arg(
                    Arg::new("vectors")
                        .help("Path to a JSON file holding the vectors as an array of arrays")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("normalize")
                        .short('n')
                        .long("normalize")
                        .help("Scale every basis vector to unit length.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("eigen", sub_m)) => handle_eigen(sub_m),
        Some(("qr", sub_m)) => handle_qr(sub_m),
        Some(("gram-schmidt", sub_m)) => handle_gram_schmidt(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match outcome {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            log::error!("qr-eig failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn eigen_config_from_arguments(matches: &ArgMatches) -> Result<EigenConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_eigen_config(path)?,
        None => EigenConfig::default(),
    };
    if let Some(&tol) = matches.get_one::<f64>("absolute_tol") {
        config.absolute_tol = tol;
    }
    if let Some(&tol) = matches.get_one::<f64>("relative_tol") {
        config.relative_tol = tol;
    }
    if let Some(&n) = matches.get_one::<usize>("max_iterations") {
        config.max_iterations = n;
    }
    Ok(config)
}

fn handle_eigen(matches: &ArgMatches) -> Result<String> {
    let matrix_path = required_path(matches, "matrix")?;
    log::info!("[qr-eig::eigen] Reading matrix from {:?}", matrix_path);

    let matrix = read_matrix_json(matrix_path)?;
    let config = eigen_config_from_arguments(matches)?;
    let result = eigen(&matrix, &config)?;
    Ok(serde_json::to_string_pretty(&EigenReport::from(&result))?)
}

fn handle_qr(matches: &ArgMatches) -> Result<String> {
    let matrix_path = required_path(matches, "matrix")?;
    log::info!("[qr-eig::qr] Reading matrix from {:?}", matrix_path);

    let matrix = read_matrix_json(matrix_path)?;
    let qr = decompose(&matrix)?;
    Ok(serde_json::to_string_pretty(&QrReport::from(&qr))?)
}

fn handle_gram_schmidt(matches: &ArgMatches) -> Result<String> {
    let vectors_path = required_path(matches, "vectors")?;
    log::info!("[qr-eig::gram-schmidt] Reading vectors from {:?}", vectors_path);

    let vectors = read_vectors_json(vectors_path)?;
    let basis = orthogonalize(&vectors, matches.get_flag("normalize"))?;
    Ok(serde_json::to_string_pretty(&BasisReport::from(
        basis.as_slice(),
    ))?)
}

fn required_path<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a PathBuf> {
    matches
        .get_one::<PathBuf>(id)
        .ok_or_else(|| anyhow::anyhow!("missing required argument: {}", id))
}
