use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pearl_tierlist::tiers::{filter, parse};

fn long_sheet(rows: usize) -> String {
    let mut s = String::from("Tier,Player,Region\n");
    for i in 0..rows {
        s.push_str(&format!("Tier {},Player {},{}\n", i % 6, i, if i % 3 == 0 { "EU" } else { "" }));
    }
    s
}

fn wide_sheet(rows: usize) -> String {
    let mut s = String::from("Tier 1,Tier 2,Tier 3,Tier 4,Tier 5\n");
    for i in 0..rows {
        s.push_str(&format!("A{i},B{i},\"C, {i}\",,E{i}\n"));
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let long = long_sheet(300);
    let wide = wide_sheet(100);

    c.bench_function("parse_long_300", |b| {
        b.iter(|| black_box(parse(black_box(&long))).len())
    });

    c.bench_function("parse_wide_100", |b| {
        b.iter(|| black_box(parse(black_box(&wide))).len())
    });

    let tiers = parse(&long);
    c.bench_function("filter_long_300", |b| {
        b.iter(|| filter(black_box(&tiers), black_box("er 1")).len())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
