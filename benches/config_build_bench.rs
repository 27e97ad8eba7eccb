use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use table_chart::api::{BuildOptions, ChartConfigBuilder};
use table_chart::core::{ChartArea, ChartKind, TableElement, TableParser, TableRow};
use table_chart::render::PaintContext;

fn wide_table(rows: usize, columns: usize) -> TableElement {
    let mut titles = vec!["Period".to_owned()];
    titles.extend((0..columns).map(|c| format!("Series {c}")));
    let mut table = TableElement::new("bench").with_head(TableRow::headers(titles.as_slice()));
    for r in 0..rows {
        let values: Vec<String> = (0..columns)
            .map(|c| format!("{:.2}", (r * columns + c) as f64 * 0.37))
            .collect();
        table = table.with_body_row(TableRow::labeled(
            &format!("Quarter {r} of the fiscal year"),
            values.as_slice(),
        ));
    }
    table
}

fn bench_parse_table_1k_rows(c: &mut Criterion) {
    let table = wide_table(1_000, 8);

    c.bench_function("parse_table_1k_rows", |b| {
        b.iter(|| {
            let _ = TableParser::parse(black_box(&table), ChartKind::Line).expect("parse");
        })
    });
}

fn bench_build_stacked_config_1k_rows(c: &mut Criterion) {
    let table = wide_table(1_000, 8);
    let parsed = TableParser::parse(&table, ChartKind::Stacked).expect("parse");
    let builder = ChartConfigBuilder::default();
    let options = BuildOptions::default();

    c.bench_function("build_stacked_config_1k_rows", |b| {
        b.iter(|| {
            let _ = builder
                .build(black_box(&parsed), ChartKind::Stacked, &options)
                .expect("build");
        })
    });
}

fn bench_resolve_fills_8k_elements(c: &mut Criterion) {
    let table = wide_table(1_000, 8);
    let parsed = TableParser::parse(&table, ChartKind::Bar).expect("parse");
    let config = ChartConfigBuilder::default()
        .build(&parsed, ChartKind::Bar, &BuildOptions::default())
        .expect("build");
    let area = Some(ChartArea::from_size(1600.0, 900.0));

    c.bench_function("resolve_fills_8k_elements", |b| {
        b.iter(|| {
            for dataset_index in 0..8 {
                for element_index in 0..1_000 {
                    let _ = black_box(config.resolve_fill(PaintContext {
                        dataset_index,
                        element_index,
                        chart_area: area,
                    }));
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_table_1k_rows,
    bench_build_stacked_config_1k_rows,
    bench_resolve_fills_8k_elements
);
criterion_main!(benches);
