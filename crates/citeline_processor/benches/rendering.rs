use citeline_core::{CitationFormat, StyleOptions};
use citeline_processor::{layout_references, parser, InputFormat, Processor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_bibtex(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "@article{{ref{i},\n  author = {{Author{i} Smith and Coauthor{i} Doe}},\n  \
                 title = {{A Fairly Long Title About Topic Number {i} With Several Words}},\n  \
                 journal = {{Journal of Things}},\n  year = {{{year}}},\n  volume = {{{v}}},\n  \
                 number = {{2}},\n  pages = {{10-20}}\n}}\n",
                year = 1950 + i % 70,
                v = i % 40,
            )
        })
        .collect()
}

fn bench_rendering(c: &mut Criterion) {
    let bib = synthetic_bibtex(200);

    c.bench_function("Parse BibTeX (200 entries)", |b| {
        b.iter(|| parser::parse(black_box(&bib), InputFormat::Bibtex).unwrap())
    });

    let entries = parser::parse(&bib, InputFormat::Bibtex).unwrap();
    for format in [CitationFormat::Apa, CitationFormat::Ieee] {
        let processor = Processor::new(StyleOptions {
            format,
            ..Default::default()
        });
        c.bench_function(&format!("Format + layout ({}, 200 entries)", format), |b| {
            b.iter(|| {
                let refs: Vec<&_> = entries.entries.iter().collect();
                let formatted = processor.format_entries(black_box(&refs));
                layout_references(&formatted, &processor.options)
            })
        });
    }
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
