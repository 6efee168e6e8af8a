//! benches/pass.rs
//! Full passes into an in-memory target (no fsync cost)
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prngbb_rs::{derive_key_from_str, BoundedBufferWriter, Keystream, RegionConfig};
use std::io::Cursor;

fn bench_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("pass_1MiB");
    group.sample_size(20);

    for &chunk_blocks in &[1usize, 32, 256, 2048] {
        let config = RegionConfig::from_kib(chunk_blocks, 0, 1024).unwrap();
        let target = Cursor::new(vec![0u8; config.buffer_size() as usize]);
        let mut writer =
            BoundedBufferWriter::new(target, config, Keystream::new(&derive_key_from_str("0")));

        group.throughput(Throughput::Bytes(config.buffer_size()));
        group.bench_with_input(
            BenchmarkId::new("chunk_blocks", chunk_blocks),
            &chunk_blocks,
            |b, _| {
                b.iter(|| writer.run_pass().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pass);
criterion_main!(benches);
