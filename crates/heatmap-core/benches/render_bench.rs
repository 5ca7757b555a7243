use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatmap_core::{Dataset, HeatMap, MonthRecord, RenderOptions};

fn build_dataset(years: usize) -> Dataset {
    let mut records = Vec::with_capacity(years * 12);
    for y in 0..years {
        for month in 1..=12u32 {
            let i = (y * 12 + month as usize) as f64;
            records.push(MonthRecord {
                year: 1750 + y as i32,
                month,
                variance: (i * 0.01).sin() * 2.0,
            });
        }
    }
    Dataset { base_temperature: 8.66, monthly_variance: records }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[50usize, 250usize] {
        group.bench_function(format!("years_{n}"), |b| {
            let chart = HeatMap::new(build_dataset(n)).expect("valid dataset");
            let opts = RenderOptions::default();
            b.iter(|| {
                let svg = chart.render_svg(&opts);
                black_box(svg);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
