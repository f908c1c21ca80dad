//! Benchmarks for the bossc pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bossc::parser::tokenize;
use bossc::{compile_source, emit, CompileOptions, EmitOptions, FsAtlasSource};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A large file of `count` complete bosses without atlases.
fn generated_source(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        if i % 50 == 0 {
            out.push_str(&format!(">>>sheet {}\n", i / 50));
        }
        out.push_str(&format!(
            "[boss {i}]\naims 2\nspeed 4 anime=2\nhp {hp}\ntype {i}\nscore 100\ndamage 5\n\
             flags 0\npath BossData::ASTAR\nbullet algo=0 speed=2 9\n\
             distance chase=10 pursuit=20\ncolor hp=0xff0000 name=0xffffff\n\
             is_goal false\nshow_details true\nhitbox 0 0 32 32\n\
             moving 4\nattack 2\nhurt 1\ndeath 3\nidle @moving\n\n",
            hp = 100 + i
        ));
    }
    out
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let large = generated_source(500);

    group.bench_function("tokenize_large", |b| {
        b.iter(|| tokenize(black_box(&large)).count())
    });

    group.bench_function("compile_large", |b| {
        b.iter(|| {
            compile_source(
                black_box(&large),
                FsAtlasSource::new("."),
                &CompileOptions::default(),
            )
            .unwrap()
        })
    });

    let fixture = load_fixture("bosses.ini");
    group.bench_function("compile_fixture_with_atlases", |b| {
        b.iter(|| {
            compile_source(
                black_box(&fixture),
                FsAtlasSource::new(fixtures_dir()),
                &CompileOptions::default(),
            )
            .unwrap()
        })
    });

    group.finish();
}

// -- Emission benchmarks --

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");

    let compilation = compile_source(
        &generated_source(500),
        FsAtlasSource::new("."),
        &CompileOptions::default(),
    )
    .unwrap();
    let options = EmitOptions::default();

    group.bench_function("emit_large", |b| {
        b.iter(|| emit(black_box(&compilation), &options))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_emission);
criterion_main!(benches);
