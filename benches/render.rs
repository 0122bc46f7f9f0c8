use criterion::{criterion_group, criterion_main, Criterion};
use tsvtable::schema::Schema;
use tsvtable::table::Table;

fn build_table(rows: usize) -> Table {
    let schema = Schema::new(&["id", "name", "score"], &["id"], false).unwrap();
    let mut table = Table::new(schema);
    for i in 0..rows {
        let mut record = table.new_record();
        record
            .update([
                ("id", i.to_string()),
                ("name", format!("row-{i}")),
                ("score", (i * 7 % 100).to_string()),
            ])
            .unwrap();
        table.add(record).unwrap();
    }
    table
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build 10k rows", |b| b.iter(|| build_table(10_000)));

    let table = build_table(10_000);
    c.bench_function("render 10k rows", |b| b.iter(|| table.render()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
