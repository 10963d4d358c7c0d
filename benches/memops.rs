use criterion::{Criterion, black_box, criterion_group, criterion_main};
use memops::{compare_bytes, copy_bytes, fill_bytes};

const EXTENTS: [usize; 3] = [64, 1024, 16 * 1024];

fn bench_compare(c: &mut Criterion) {
    for extent in EXTENTS {
        c.bench_function(&format!("compare/{extent}"), |b| {
            let x = vec![0xA5u8; extent];
            let y = vec![0xA5u8; extent];

            b.iter(|| compare_bytes(black_box(&x), black_box(&y)));
        });

        c.bench_function(&format!("compare_core/{extent}"), |b| {
            let x = vec![0xA5u8; extent];
            let y = vec![0xA5u8; extent];

            b.iter(|| black_box(&x) == black_box(&y));
        });
    }
}

fn bench_copy(c: &mut Criterion) {
    for extent in EXTENTS {
        c.bench_function(&format!("copy/{extent}"), |b| {
            let src = vec![0x3Cu8; extent];
            let mut dst = vec![0u8; extent];

            b.iter(|| copy_bytes(black_box(&src), black_box(&mut dst)));
        });

        c.bench_function(&format!("copy_core/{extent}"), |b| {
            let src = vec![0x3Cu8; extent];
            let mut dst = vec![0u8; extent];

            b.iter(|| dst.copy_from_slice(black_box(&src)));
        });
    }
}

fn bench_fill(c: &mut Criterion) {
    for extent in EXTENTS {
        c.bench_function(&format!("fill/{extent}"), |b| {
            let mut buf = vec![0u8; extent];

            b.iter(|| fill_bytes(black_box(&mut buf), 0x42));
        });

        c.bench_function(&format!("fill_core/{extent}"), |b| {
            let mut buf = vec![0u8; extent];

            b.iter(|| black_box(&mut buf).fill(0x42));
        });
    }
}

criterion_group!(benches, bench_compare, bench_copy, bench_fill);
criterion_main!(benches);
