use criterion::{Criterion, criterion_group, criterion_main};
use frdm_hid_protocol::{
    MAX_STRING_LEN, decode_string, encode_command, encode_string, with_report_id,
};

fn benchmark_string_frames(c: &mut Criterion) {
    let short = "B";
    let full = "x".repeat(MAX_STRING_LEN);

    c.bench_function("encode_string 1 char", |b| {
        b.iter(|| std::hint::black_box(encode_string(std::hint::black_box(short)).ok()));
    });

    c.bench_function("encode_string 63 chars", |b| {
        b.iter(|| std::hint::black_box(encode_string(std::hint::black_box(&full)).ok()));
    });

    let report = encode_string(&full).unwrap_or([0u8; 64]);
    c.bench_function("decode_string 63 chars", |b| {
        b.iter(|| std::hint::black_box(decode_string(std::hint::black_box(&report))));
    });
}

fn benchmark_command_frames(c: &mut Criterion) {
    c.bench_function("encode_command + report id", |b| {
        b.iter(|| {
            let report = encode_command(std::hint::black_box(1));
            std::hint::black_box(with_report_id(&report))
        });
    });
}

criterion_group!(benches, benchmark_string_frames, benchmark_command_frames);
criterion_main!(benches);
