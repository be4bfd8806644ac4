use clap::{Arg, Command};

pub const PROJECT_CMD: &str = "project";

pub fn create_project_cli() -> Command {
    Command::new(PROJECT_CMD)
        .author("Databio")
        .about("Project a single transcript coordinate onto the genome and print it.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("cigar")
                .long("cigar")
                .short('c')
                .help("CIGAR string of the transcript alignment (M, I and D operations only)")
                .required(true),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Genome coordinate of the first aligned base")
                .required(true),
        )
        .arg(
            Arg::new("coordinate")
                .long("coordinate")
                .short('p')
                .value_parser(clap::value_parser!(u64))
                .help("Transcript coordinate to project")
                .required(true),
        )
}
