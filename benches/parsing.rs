use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_vdf::parse;

fn app_manifest(entries: usize) -> String {
    let mut text = String::from("\"AppState\"\n{\n");
    text.push_str("\t\"appid\"\t\t\"440\"\n");
    text.push_str("\t\"name\"\t\t\"Team Fortress 2\" // the important one\n");
    text.push_str("\t\"InstalledDepots\"\n\t{\n");
    for i in 0..entries {
        text.push_str(&format!(
            "\t\t\"{}\"\n\t\t{{\n\t\t\t\"manifest\"\t\"{}\"\n\t\t\t\"size\"\t\"{}\"\n\t\t}}\n",
            441 + i,
            7707646073076487740u64 + i as u64,
            1024 * i
        ));
    }
    text.push_str("\t}\n}\n");
    text
}

fn benchmark_parse_small(c: &mut Criterion) {
    let text = app_manifest(4);

    c.bench_function("parse_small_manifest", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_parse_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_manifest");

    for size in [10, 50, 100, 500].iter() {
        let text = app_manifest(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_comment_heavy(c: &mut Criterion) {
    let mut text = String::from("\"root\"\n{\n");
    for i in 0..200 {
        text.push_str(&format!("\t// filler comment number {}\n", i));
        text.push_str(&format!("\t\"key{}\" \"value{}\"\n", i, i));
    }
    text.push_str("}\n");

    c.bench_function("parse_comment_heavy", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_by_size,
    benchmark_parse_comment_heavy
);
criterion_main!(benches);
