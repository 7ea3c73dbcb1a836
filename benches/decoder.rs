//! Frame and command decoding benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gridcast::protocol::{Command, FrameDecoder};
use gridcast::surface::NullSurface;
use gridcast::Session;

/// A long, valid stream: setup, then alternating draw commands, then END
fn build_stream(frames: usize) -> Vec<u8> {
    let mut stream = Command::Setup {
        width: 200,
        height: 100,
        color_mode: 1,
    }
    .encode();

    for i in 0..frames {
        let cmd = match i % 3 {
            0 => Command::DrawChar {
                x: (i % 200) as u8,
                y: (i % 100) as u8,
                attr: 2,
                glyph: b'x',
            },
            1 => Command::RenderText {
                x: 10,
                y: (i % 100) as u8,
                attr: 3,
                text: b"benchmark".to_vec(),
            },
            _ => Command::MoveCursor {
                x: (i % 200) as u8,
                y: (i % 100) as u8,
            },
        };
        stream.extend(cmd.encode());
    }

    stream.extend(Command::End.encode());
    stream
}

fn bench_frame_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");

    let stream = build_stream(10_000);
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("frames", |b| {
        b.iter(|| {
            let count = FrameDecoder::new(black_box(&stream))
                .filter(|f| f.is_ok())
                .count();
            black_box(count)
        })
    });

    group.bench_function("commands", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for frame in FrameDecoder::new(black_box(&stream)) {
                let cmd = Command::decode(&frame.unwrap()).unwrap();
                count += black_box(cmd.id()) as usize;
            }
            black_box(count)
        })
    });

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    let stream = build_stream(10_000);
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("full_session", |b| {
        b.iter(|| {
            let mut session = Session::new(NullSurface);
            session.replay(black_box(&stream)).unwrap();
            black_box(session.screen().is_some())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_frame_decoding, bench_replay);
criterion_main!(benches);
