use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use splitsen::{SentenceSegmenter, SplitFlags};

const SIMPLE_TEXT: &str = "Hello world. This is a test. How are you?";
const COMPLEX_TEXT: &str = r#"
    "Mr. & Mrs. Smith," she said, "went to Washington, D.C. last week."
    He replied, 'I saw them there.' It was a surprise!

    Last week, former director of the F.B.I. James B. Comey was fired.
    Mr. Comey was not available for comment. (See the appendix.) More soon!
"#;

fn bench_split(c: &mut Criterion) {
    let segmenter = SentenceSegmenter::with_default_rules().expect("default rules");

    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(SIMPLE_TEXT.len() as u64));
    group.bench_function("simple", |b| {
        b.iter(|| segmenter.split(black_box(SIMPLE_TEXT), SplitFlags::NONE))
    });
    group.throughput(Throughput::Bytes(COMPLEX_TEXT.len() as u64));
    group.bench_function("complex", |b| {
        b.iter(|| segmenter.split(black_box(COMPLEX_TEXT), SplitFlags::NONE))
    });
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let segmenter = SentenceSegmenter::with_default_rules().expect("default rules");
    let long_text = COMPLEX_TEXT.repeat(64);

    let mut group = c.benchmark_group("count");
    group.throughput(Throughput::Bytes(long_text.len() as u64));
    group.bench_function("long", |b| b.iter(|| segmenter.count(black_box(&long_text))));
    group.finish();
}

criterion_group!(benches, bench_split, bench_count);
criterion_main!(benches);
