//! # DNAPROT CLI - nucleotide to protein utilities
//!
//! A command-line interface for segmenting, translating and scoring
//! sequences with `dnaprot-core`.
//!
//! ## Usage
//!
//! ```bash
//! # Cut a flat-file record on the default Shine-Dalgarno motif
//! dnaprot segment -i record.txt -o sections.txt
//!
//! # Translate every frame of a FASTA file, both strands
//! dnaprot translate -i genome.fasta --fasta --both-strands
//!
//! # Translate with a custom codon table, three-letter output
//! dnaprot translate -i record.txt -g genetic_code.txt --three-letter
//!
//! # Score a protein
//! dnaprot score -p MSLVDRLL
//! ```
//!
//! ## Subcommands
//!
//! - `segment`: cut a sequence into sections at each motif occurrence
//!   - `-i, --input <FILE>`: Input record file
//!   - `-o, --output <FILE>`: Output file (default: stdout)
//!   - `-s, --shine-dalgarno <MOTIF>`: Motif to cut on (default: AGGAGG)
//!   - `--fasta`: Read the input as FASTA
//! - `translate`: translate from every start codon
//!   - `-i, --input <FILE>`: Input record file
//!   - `-o, --output <FILE>`: Output file (default: stdout)
//!   - `-g, --codon-table <FILE>`: Codon table file (default: standard code)
//!   - `--three-letter`: Report residues as three-letter codes
//!   - `--both-strands`: Also translate the reverse complement
//!   - `--fasta`: Read the input as FASTA
//! - `score`: print every residue score of a protein
//!   - `-p, --protein <PROTEIN>`: One-letter protein sequence
//!
//! Every subcommand accepts `-q, --quiet` to hide informational logs.
//! `RUST_LOG` overrides the log level.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use dnaprot_core::config::{DnaProtConfig, InputFormat, ResidueNotation};
use dnaprot_core::output::{write_segmentation, write_translation};
use dnaprot_core::results::ProteinProfile;
use dnaprot_core::DnaProtAnalyzer;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Input record file")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (default: stdout)")
}

fn fasta_arg() -> Arg {
    Arg::new("fasta")
        .long("fasta")
        .action(ArgAction::SetTrue)
        .help("Read the input as FASTA")
}

fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Quiet mode")
}

fn cli() -> Command {
    Command::new("dnaprot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Nucleotide to protein utilities")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("segment")
                .about("Cut a sequence into sections at each Shine-Dalgarno motif")
                .arg(input_arg())
                .arg(output_arg())
                .arg(
                    Arg::new("shine-dalgarno")
                        .short('s')
                        .long("shine-dalgarno")
                        .value_name("MOTIF")
                        .help("Motif to cut on (default: AGGAGG)"),
                )
                .arg(fasta_arg())
                .arg(quiet_arg()),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate a sequence from every start codon")
                .arg(input_arg())
                .arg(output_arg())
                .arg(
                    Arg::new("codon-table")
                        .short('g')
                        .long("codon-table")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("Codon table file (default: standard genetic code)"),
                )
                .arg(
                    Arg::new("three-letter")
                        .long("three-letter")
                        .action(ArgAction::SetTrue)
                        .help("Report residues as three-letter codes"),
                )
                .arg(
                    Arg::new("both-strands")
                        .long("both-strands")
                        .action(ArgAction::SetTrue)
                        .help("Also translate the reverse complement"),
                )
                .arg(fasta_arg())
                .arg(quiet_arg()),
        )
        .subcommand(
            Command::new("score")
                .about("Print every residue score of a protein")
                .arg(
                    Arg::new("protein")
                        .short('p')
                        .long("protein")
                        .value_name("PROTEIN")
                        .required(true)
                        .help("One-letter protein sequence"),
                )
                .arg(quiet_arg()),
        )
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn open_output(matches: &ArgMatches) -> Result<Box<dyn Write>, io::Error> {
    Ok(match matches.get_one::<PathBuf>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn input_format(matches: &ArgMatches) -> InputFormat {
    if matches.get_flag("fasta") {
        InputFormat::Fasta
    } else {
        InputFormat::FlatFile
    }
}

fn run_segment(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = DnaProtConfig {
        input_format: input_format(matches),
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };
    if let Some(motif) = matches.get_one::<String>("shine-dalgarno") {
        config.shine_dalgarno = motif.clone();
    }

    let analyzer = DnaProtAnalyzer::new(config)?;
    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or("Missing input file")?;
    let results = analyzer.segment_file(input)?;

    let mut writer = open_output(matches)?;
    write_segmentation(&mut writer, &results)?;
    writer.flush()?;

    debug!(sections = results.sections.len(), "segment complete");
    Ok(())
}

fn run_translate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = DnaProtConfig {
        codon_table: matches.get_one::<PathBuf>("codon-table").cloned(),
        input_format: input_format(matches),
        notation: if matches.get_flag("three-letter") {
            ResidueNotation::ThreeLetter
        } else {
            ResidueNotation::OneLetter
        },
        both_strands: matches.get_flag("both-strands"),
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    let analyzer = DnaProtAnalyzer::new(config)?;
    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or("Missing input file")?;
    let results = analyzer.translate_file(input)?;

    let mut writer = open_output(matches)?;
    write_translation(&mut writer, &results, analyzer.config.notation)?;
    writer.flush()?;

    debug!(proteins = results.protein_count(), "translate complete");
    Ok(())
}

fn write_profile<W: Write>(writer: &mut W, profile: &ProteinProfile) -> io::Result<()> {
    let configuration = &profile.configuration;
    writeln!(writer, "Hydrophobicity: {:.2}", profile.hydrophobicity)?;
    writeln!(writer, "Molecular weight: {:.2}", profile.molecular_weight)?;
    writeln!(writer, "Beta-sheet: {:.2}", configuration.beta_sheet)?;
    writeln!(writer, "Alpha-helix: {:.2}", configuration.alpha_helix)?;
    writeln!(writer, "Beta-turn: {:.2}", configuration.beta_turn)?;
    writeln!(
        writer,
        "Most likely structure: {} ({:.2})",
        configuration.most_likely, configuration.highest_score
    )?;
    writeln!(
        writer,
        "Retention coefficient: {:.2}",
        profile.retention_coefficient
    )?;
    writeln!(writer, "Polarity: {:.2}", profile.polarity)
}

fn run_score(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let protein = matches
        .get_one::<String>("protein")
        .ok_or("Missing protein")?;
    let profile = ProteinProfile::from_protein(protein)?;

    let mut writer = BufWriter::new(io::stdout());
    write_profile(&mut writer, &profile)?;
    writer.flush()?;
    Ok(())
}

/// Main entry point for the DNAPROT CLI application.
///
/// Parses command-line arguments, runs the requested subcommand and
/// reports failures on stderr with a non-zero exit status.
fn main() -> ExitCode {
    let matches = cli().get_matches();
    let Some((name, sub_matches)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    init_logging(sub_matches.get_flag("quiet"));

    let outcome = match name {
        "segment" => run_segment(sub_matches),
        "translate" => run_translate(sub_matches),
        "score" => run_score(sub_matches),
        other => Err(format!("Unknown subcommand: {other}").into()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
