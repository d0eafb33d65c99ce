use binary_encoding::{read, write, Binary, BinaryType, ByteOrder};
use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};
use criterion::measurement::WallTime;
use std::hint::black_box;
use std::io::{self, Read};

const COUNT: usize = 1000;

/// Source that fills nothing, so reads measure decoding rather than copying
struct FakeReader;

impl Read for FakeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(buf.len())
    }
}

#[allow(clippy::unwrap_used)]
fn bench_sequence<T>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str)
where
    T: Binary + BinaryType + Default + Clone,
{
    let mut slice = vec![T::default(); COUNT];
    group.throughput(Throughput::Bytes((COUNT * std::mem::size_of::<T>()) as u64));

    group.bench_function(format!("write_{COUNT}_{name}"), |b| {
        b.iter(|| write(io::sink(), ByteOrder::BigEndian, black_box(slice.as_slice())).unwrap())
    });
    group.bench_function(format!("read_{COUNT}_{name}"), |b| {
        b.iter(|| read(FakeReader, ByteOrder::BigEndian, black_box(slice.as_mut_slice())).unwrap())
    });
}

fn bench_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");
    bench_sequence::<i8>(&mut group, "i8");
    bench_sequence::<u8>(&mut group, "u8");
    bench_sequence::<i16>(&mut group, "i16");
    bench_sequence::<u16>(&mut group, "u16");
    bench_sequence::<i32>(&mut group, "i32");
    bench_sequence::<u32>(&mut group, "u32");
    bench_sequence::<i64>(&mut group, "i64");
    bench_sequence::<u64>(&mut group, "u64");
    group.finish();
}

criterion_group!(benches, bench_slices);
criterion_main!(benches);
