use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dnaprot_core::DnaProtAnalyzer;
use dnaprot_core::config::DnaProtConfig;
use dnaprot_core::scoring::{calculate_configuration_likelihoods, calculate_hydrophobicity};
use dnaprot_core::sequence::{cut_sequence, filter_dna_sequence};
use dnaprot_core::translation::CodonTable;
use std::hint::black_box;
use std::io::Write;
use tempfile::NamedTempFile;

use criterion_config::configure_criterion;

const SEQUENCE_LENGTHS: [usize; 3] = [1_000, 10_000, 100_000];

// Deterministic sequence with a motif and a start codon every 60 bases
fn synthetic_sequence(length: usize) -> String {
    const BLOCK: &str = "CCAGGAGGTTTATGAAATGCCCGGTACGATCGTTAGCATCGGCTAGCTTACGATGCCCTAG";
    BLOCK.chars().cycle().take(length).collect()
}

fn synthetic_protein(length: usize) -> String {
    "ARNDCQEGHILKMFPSTWYV".chars().cycle().take(length).collect()
}

// Flat-file record with 60 bases per line, numbered like an annotation file
fn synthetic_record(length: usize) -> NamedTempFile {
    let sequence = synthetic_sequence(length).to_lowercase();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ID   BENCH; linear; genomic DNA").unwrap();
    writeln!(file, " SQ   Sequence {length} BP;").unwrap();
    for (i, line) in sequence.as_bytes().chunks(60).enumerate() {
        let blocks: Vec<&str> = line
            .chunks(10)
            .map(|block| std::str::from_utf8(block).unwrap())
            .collect();
        writeln!(file, "     {} {:>9}", blocks.join(" "), (i + 1) * 60).unwrap();
    }
    writeln!(file, "//").unwrap();
    file.flush().unwrap();
    file
}

fn benchmark_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    for length in SEQUENCE_LENGTHS {
        let sequence = synthetic_sequence(length);
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::new("filter", length), &sequence, |b, seq| {
            b.iter(|| filter_dna_sequence(black_box(seq)));
        });
        group.bench_with_input(BenchmarkId::new("cut", length), &sequence, |b, seq| {
            b.iter(|| cut_sequence(black_box(seq), black_box("AGGAGG")));
        });
    }
    group.finish();
}

fn benchmark_translation(c: &mut Criterion) {
    let table = CodonTable::standard();
    let mut group = c.benchmark_group("translation");
    for length in SEQUENCE_LENGTHS {
        let sequence = synthetic_sequence(length);
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(
            BenchmarkId::new("first_frame", length),
            &sequence,
            |b, seq| {
                b.iter(|| table.translate(black_box(seq)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("all_frames", length),
            &sequence,
            |b, seq| {
                b.iter(|| table.translate_all_frames(black_box(seq)));
            },
        );
    }
    group.finish();
}

fn benchmark_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    for length in [100, 1_000, 10_000] {
        let protein = synthetic_protein(length);
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(
            BenchmarkId::new("hydrophobicity", length),
            &protein,
            |b, protein| {
                b.iter(|| calculate_hydrophobicity(black_box(protein)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("configuration", length),
            &protein,
            |b, protein| {
                b.iter(|| calculate_configuration_likelihoods(black_box(protein)));
            },
        );
    }
    group.finish();
}

fn benchmark_file_pipeline(c: &mut Criterion) {
    let analyzer = DnaProtAnalyzer::new(DnaProtConfig {
        both_strands: true,
        ..Default::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("file_pipeline");
    for length in SEQUENCE_LENGTHS {
        let record = synthetic_record(length);
        let path = record.path().to_path_buf();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        group.throughput(Throughput::Bytes(file_size));
        group.bench_with_input(
            BenchmarkId::new("segment_file", length),
            &path,
            |b, path| {
                b.iter(|| analyzer.segment_file(black_box(path)).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("translate_file", length),
            &path,
            |b, path| {
                b.iter(|| analyzer.translate_file(black_box(path)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets = benchmark_segmentation,
    benchmark_translation,
    benchmark_scoring,
    benchmark_file_pipeline
);
criterion_main!(benches);
