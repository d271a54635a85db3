use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xlacs::corpus::{Opinion, Polarity, Sentence};
use xlacs::marking::{Marker, Stripper, Transform};

fn gen_sentences() -> Vec<Sentence> {
    (0..64)
        .map(|i| {
            let words: Vec<String> = (0..8).map(|w| format!("word{}{}", i, w)).collect();
            let text = words.join(" ");
            let mut offset = 0;
            let opinions = words
                .iter()
                .map(|word| {
                    let len = word.chars().count();
                    let opinion = Opinion::new(
                        word.clone(),
                        "FOOD#QUALITY",
                        Polarity::Neutral,
                        offset,
                        offset + len,
                    );
                    offset += len + 1;
                    opinion
                })
                .collect();
            Sentence::new(format!("s{}", i), text, opinions)
        })
        .collect()
}

pub fn mark_strip(c: &mut Criterion) {
    let sentences = gen_sentences();
    let marker = Marker::default();
    let stripper = Stripper::default();

    c.bench_function("mark_strip_roundtrip", |b| {
        b.iter(|| {
            for sentence in sentences.clone() {
                let marked = marker.transform_own(black_box(sentence));
                let _ = stripper.transform_own(marked);
            }
        })
    });
}

criterion_group!(benches, mark_strip);
criterion_main!(benches);
