use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use see3cam_pixel_rs::pixel_pipeline::{ConversionSession, NegotiatedFormat, PixelFormat};

fn generate_packed_y12(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3 / 2).map(|i| (i % 256) as u8).collect()
}

fn generate_y16(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 1024) as u16;
            data.extend_from_slice(&value.to_le_bytes());
        }
    }
    data
}

fn benchmark_y12_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("y12_preview");

    let sizes = vec![
        (320, 240, "320x240"),
        (640, 480, "640x480"),
        (1280, 720, "1280x720"),
    ];

    for (width, height, label) in sizes {
        let packed = generate_packed_y12(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &packed,
            |b, data| {
                let format = NegotiatedFormat::builder()
                    .pixel_format(PixelFormat::Y12)
                    .width(width)
                    .height(height)
                    .build();
                let mut session = ConversionSession::new(format, "See3CAM_CU55").unwrap();

                b.iter(|| {
                    let _ = session.convert_frame(black_box(data));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_y16_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("y16_variants");
    let raw = generate_y16(640, 480);

    let devices = vec![
        ("See3CAM_20CUG", "20cug_scale"),
        ("See3CAM_CU40", "cu40_demosaic"),
        ("Generic Y16 Camera", "generic_scale"),
    ];

    for (device, label) in devices {
        group.bench_with_input(BenchmarkId::from_parameter(label), &raw, |b, data| {
            let format = NegotiatedFormat::builder()
                .pixel_format(PixelFormat::Y16)
                .width(640)
                .height(480)
                .build();
            let mut session = ConversionSession::new(format, device).unwrap();

            b.iter(|| {
                let _ = session.convert_frame(black_box(data));
            });
        });
    }

    group.finish();
}

fn benchmark_still_padding(c: &mut Criterion) {
    let packed = generate_packed_y12(640, 480);
    let format = NegotiatedFormat::builder()
        .pixel_format(PixelFormat::Y12)
        .width(640)
        .height(480)
        .build();
    let session = ConversionSession::new(format, "See3CAM_CU55").unwrap();

    c.bench_function("y12_still_padding", |b| {
        b.iter(|| {
            let _ = session.convert_y12_for_still(black_box(&packed));
        });
    });
}

criterion_group!(
    benches,
    benchmark_y12_preview,
    benchmark_y16_variants,
    benchmark_still_padding
);
criterion_main!(benches);
