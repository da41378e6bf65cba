//! Benchmark table generation and the binary codec.

use criterion::{criterion_group, criterion_main, Criterion};

use pl2::{Palette, Pl2, Rgb};

/// A palette with more chromatic spread than the greyscale default, so that
/// the nearest-color search does real work.
fn chromatic_palette() -> Vec<Rgb> {
    (0..Palette::SIZE)
        .map(|index| {
            let index = index as u8;
            Rgb::new(index, index.wrapping_mul(7), index.wrapping_mul(13))
        })
        .collect()
}

fn generation(c: &mut Criterion) {
    let colors = chromatic_palette();

    c.bench_function("regenerate", |b| {
        let mut pl2 = Pl2::new();
        pl2.set_base_palette(&colors);
        b.iter(|| pl2.regenerate());
    });
}

fn codec(c: &mut Criterion) {
    let pl2 = Pl2::with_palette(&chromatic_palette());
    let bytes = pl2.to_bytes().unwrap();

    c.bench_function("encode", |b| b.iter(|| pl2.to_bytes().unwrap()));
    c.bench_function("decode", |b| b.iter(|| Pl2::from_bytes(&bytes).unwrap()));
}

criterion_group!(benches, generation, codec);
criterion_main!(benches);
