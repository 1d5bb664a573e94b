use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kr_hand_history::batch::convert_batch;
use kr_hand_history::test_util::{heads_up_unit, multiway_unit, side_pot_unit};
use kr_hand_history::{convert_hand, ConverterConfig, HandUnit};

fn bench_convert_hand(c: &mut Criterion) {
    let config = ConverterConfig::default();
    let mut group = c.benchmark_group("convert_hand");
    let fixtures = [
        ("heads_up", heads_up_unit("1-1")),
        ("multiway", multiway_unit("1-2")),
        ("side_pot", side_pot_unit("1-3")),
    ];
    for (name, unit) in &fixtures {
        group.bench_with_input(BenchmarkId::from_parameter(name), unit, |b, unit| {
            b.iter(|| convert_hand(std::hint::black_box(unit), &config))
        });
    }
    group.finish();
}

fn bench_convert_batch(c: &mut Criterion) {
    let config = ConverterConfig::default();
    let mut group = c.benchmark_group("convert_batch");
    for num_hands in [16usize, 256, 4096] {
        let units: Vec<HandUnit> = (0..num_hands)
            .map(|i| {
                let round_id = format!("{}-{}", i / 10, i % 10);
                match i % 3 {
                    0 => heads_up_unit(&round_id),
                    1 => multiway_unit(&round_id),
                    _ => side_pot_unit(&round_id),
                }
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(num_hands), &units, |b, units| {
            b.iter(|| convert_batch(std::hint::black_box(units), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert_hand, bench_convert_batch);
criterion_main!(benches);
