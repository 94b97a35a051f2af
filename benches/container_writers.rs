use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hdr_capture_rs::hdr_pipeline::{ContainerWriter, HdrBinWriter, OpenExrWriter, PixelBuffer};

fn generate_pixel_buffer(width: u32, height: u32) -> PixelBuffer {
    let samples: Vec<f32> = (0..width * height * 4)
        .map(|i| (i % 1024) as f32 / 256.0)
        .collect();
    PixelBuffer::new(width, height, samples).unwrap()
}

fn benchmark_writers_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_write_by_size");

    let sizes = vec![(256, 256, "256x256"), (1024, 768, "1024x768"), (1920, 1080, "1920x1080")];

    for (width, height, label) in sizes {
        let buffer = generate_pixel_buffer(width, height);

        group.bench_with_input(BenchmarkId::new("hdrbin", label), &buffer, |b, buffer| {
            b.iter(|| {
                let mut out = Vec::new();
                HdrBinWriter.write(black_box(buffer), &mut out).unwrap();
                out
            });
        });

        group.bench_with_input(BenchmarkId::new("openexr", label), &buffer, |b, buffer| {
            b.iter(|| {
                let mut out = Vec::new();
                OpenExrWriter.write(black_box(buffer), &mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_writers_by_size);
criterion_main!(benches);
