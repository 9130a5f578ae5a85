use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use yamlet_core::Parser;
use yamlet_test_bench::consts::{
    FLOW_NESTED_EVENTS, FLOW_NESTED_INPUT, FOLDED_MORE_INDENTED_EVENTS,
    FOLDED_MORE_INDENTED_INPUT,
};
use yamlet_test_bench::{assert_eq_event, write_str_from_event};

const BLOCK_INPUT: &str = r"
--- &seq
- [name        , hr, avg  ]
- [Mark McGwire, 65, 0.278]
- [Sammy Sosa  , 63, 0.288]
";

fn bench_folded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yaml");
    group.throughput(Throughput::Bytes(FOLDED_MORE_INDENTED_INPUT.len() as u64));
    group.bench_function("bench_folded", |b| {
        b.iter(|| {
            assert_eq_event(
                black_box(FOLDED_MORE_INDENTED_INPUT),
                black_box(FOLDED_MORE_INDENTED_EVENTS),
            );
        });
    });
    group.finish();
}

fn bench_flow_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yaml");
    group.throughput(Throughput::Bytes(FLOW_NESTED_INPUT.len() as u64));
    group.bench_function("bench_flow_simple", |b| {
        b.iter(|| assert_eq_event(black_box(FLOW_NESTED_INPUT), black_box(FLOW_NESTED_EVENTS)));
    });
    group.finish();
}

fn bench_block_throughput(c: &mut Criterion) {
    let input = BLOCK_INPUT.repeat(512);
    let mut buff = String::with_capacity(input.len() * 2);
    let mut group = c.benchmark_group("throughput");
    group
        .sample_size(10)
        .throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("block_sequences", |b| {
        b.iter(|| {
            buff.clear();
            let mut parser = Parser::from_str(black_box(&input));
            let err = write_str_from_event(&mut buff, &mut parser, false);
            assert!(err.is_none());
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.01).sample_size(500).warm_up_time(Duration::from_millis(10));
    targets = bench_flow_simple, bench_folded, bench_block_throughput
}
criterion_main!(benches);
