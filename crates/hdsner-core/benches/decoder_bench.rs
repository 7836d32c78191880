use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdsner_core::{convert_str, decode_spans};

fn bench_decode_spans(c: &mut Criterion) {
    let tags = [
        "O", "B-PERS", "I-PERS", "I-PERS", "O", "O", "B-LOC", "O", "I-LOC", "B-LOC", "I-LOC",
        "O", "B-PERS", "B-PERS", "O", "O",
    ];
    let long: Vec<&str> = tags.iter().copied().cycle().take(4096).collect();

    c.bench_function("decode_spans_sentence", |b| {
        b.iter(|| decode_spans(black_box(tags)));
    });

    c.bench_function("decode_spans_4096", |b| {
        b.iter(|| decode_spans(black_box(&long).iter().copied()));
    });
}

fn bench_convert_str(c: &mut Criterion) {
    let sentence = "Em\tO\n1755\tO\no\tO\nMarquês\tB-PERS\nde\tI-PERS\nPombal\tI-PERS\nreconstruiu\tO\nLisboa\tB-LOC\n.\tO\n\n";
    let text = sentence.repeat(500);

    c.bench_function("convert_str_500_sentences", |b| {
        b.iter(|| convert_str(black_box(&text)).unwrap());
    });
}

criterion_group!(benches, bench_decode_spans, bench_convert_str);
criterion_main!(benches);
