use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rasterfuzz_harness::decode_request;
use rasterfuzz_tests::{WireBuffer, golden_input};

fn bench_decode_minimal(c: &mut Criterion) {
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 64, 64])
        .rect([0, 0, 64, 64])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(0)
        .build();

    c.bench_function("decode_minimal", |b| {
        b.iter(|| decode_request(&input).unwrap());
    });
}

fn bench_decode_all_fields(c: &mut Criterion) {
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 1024, 1024])
        .rect([0, 0, 512, 512])
        .tile_size(256)
        .tile_offset(3, 4)
        .dirty_flag(1)
        .rect([0, 0, 128, 128])
        .output_len(4096)
        .payload(&[0x5C; 64])
        .build();

    c.bench_function("decode_all_fields", |b| {
        b.iter(|| decode_request(&input).unwrap());
    });
}

fn bench_decode_golden(c: &mut Criterion) {
    let input = golden_input();

    let mut group = c.benchmark_group("decode_golden");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("golden_72_bytes", |b| {
        b.iter(|| decode_request(&input).unwrap());
    });
    group.finish();
}

fn bench_decode_large_payload(c: &mut Criterion) {
    // Decode cost must stay flat in the payload size: the payload is
    // captured as a borrow, not copied.
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 2048, 2048])
        .rect([0, 0, 2048, 2048])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(0)
        .payload(&vec![0x9E; 1024 * 1024])
        .build();

    let mut group = c.benchmark_group("decode_large_payload");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("payload_1mib", |b| {
        b.iter(|| decode_request(&input).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_minimal,
    bench_decode_all_fields,
    bench_decode_golden,
    bench_decode_large_payload
);
criterion_main!(benches);
