mod convert;
mod project;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "txcoord";
    pub const BIN_NAME: &str = "txcoord";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Convert transcript coordinates to genome coordinates using CIGAR alignments.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug). Ignored when RUST_LOG is set"),
        )
        .subcommand(convert::cli::create_convert_cli())
        .subcommand(project::cli::create_project_cli())
}

fn init_logging(verbosity: u8) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        log_builder.filter_level(level);
    }
    log_builder.format_module_path(false).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // CONVERT
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            convert::handlers::run_convert(matches)?;
        }

        //
        // PROJECT
        //
        Some((project::cli::PROJECT_CMD, matches)) => {
            project::handlers::run_project(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_parse_convert_args() {
        let matches = build_parser()
            .try_get_matches_from(["txcoord", "-vv", "convert", "-t", "map.tsv", "-q", "q.tsv"])
            .unwrap();

        assert_eq!(matches.get_count("verbose"), 2);

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, convert::cli::CONVERT_CMD);
        assert_eq!(sub.get_one::<String>("mapping_file").unwrap(), "map.tsv");
        assert_eq!(sub.get_one::<String>("queries").unwrap(), "q.tsv");
        assert!(sub.get_one::<String>("output").is_none());
    }

    #[test]
    fn test_parse_project_args() {
        let matches = build_parser()
            .try_get_matches_from([
                "txcoord",
                "project",
                "--cigar",
                "8M7D6M2I2M11D7M",
                "--start",
                "-3",
                "--coordinate",
                "4",
            ])
            .unwrap();

        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(*sub.get_one::<i64>("start").unwrap(), -3);
        assert_eq!(*sub.get_one::<u64>("coordinate").unwrap(), 4);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(build_parser().try_get_matches_from(["txcoord"]).is_err());
    }
}
