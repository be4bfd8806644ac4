use clap::{Arg, Command};

pub const CONVERT_CMD: &str = "convert";

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .author("Databio")
        .about("Convert the transcript coordinates of a query file to genome coordinates.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("mapping_file")
                .long("mapping_file")
                .visible_alias("mapping-file")
                .short('t')
                .help("Path to a mapping file containing the transcript ID, chromosome, genome start coordinate and CIGAR string")
                .required(true),
        )
        .arg(
            Arg::new("queries")
                .long("queries")
                .short('q')
                .help("Path to a query file containing transcript IDs and transcript coordinates")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file. Defaults to <queries stem>_genome_coordinates<ext> next to the query file")
                .required(false),
        )
}
