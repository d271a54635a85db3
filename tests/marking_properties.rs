//! Properties of the marking/recovery/code-switching core, checked
//! over whole sentences rather than single stages.
use xlacs::corpus::{Opinion, Polarity, Sentence, SpanStatus};
use xlacs::error::Error;
use xlacs::marking::{CodeSwitcher, Marker, Recoverer, Stripper, Transform};

fn gen_sentence() -> Sentence {
    Sentence::new(
        "s1",
        "The food was great but service was slow",
        vec![
            Opinion::new("food", "FOOD#QUALITY", Polarity::Positive, 4, 8),
            Opinion::new("service", "SERVICE#GENERAL", Polarity::Negative, 23, 30),
        ],
    )
}

/// Every resolved opinion points at its own target text.
fn assert_correspondence(sentence: &Sentence) {
    for opinion in sentence.opinions() {
        if opinion.status() == SpanStatus::Resolved {
            assert_eq!(
                sentence.slice(opinion.start(), opinion.end()),
                Some(opinion.target()),
                "correspondence broken in {:?}",
                sentence.text()
            );
        }
    }
}

#[test]
fn test_mark_scenario_offsets() {
    let marked = Marker::default().transform_own(gen_sentence());

    assert_eq!(marked.text(), "The [food] was great but {service} was slow");
    assert_eq!(marked.opinions()[0].extent(), (5, 9));
    assert_eq!(marked.opinions()[1].extent(), (26, 33));
    assert_correspondence(&marked);
}

#[test]
fn test_roundtrip_identity() {
    let original = gen_sentence();
    let marked = Marker::default().transform_own(original.clone());
    let stripped = Stripper::default().transform_own(marked);

    assert_eq!(stripped.text(), original.text());
    for (restored, source) in stripped.opinions().iter().zip(original.opinions()) {
        assert_eq!(restored.extent(), source.extent());
        assert_eq!(restored.target(), source.target());
    }
}

#[test]
fn test_correspondence_after_every_stage() {
    let marked = Marker::default().transform_own(gen_sentence());
    assert_correspondence(&marked);

    let translation = "Het [eten] was geweldig maar de {bediening} was traag".to_string();
    let recovered = Recoverer::default().recover(marked.clone(), translation);
    assert_correspondence(&recovered);

    let (switched_source, switched_translated) =
        CodeSwitcher::default().switch(marked.clone(), recovered.clone());
    assert_correspondence(&switched_source);
    assert_correspondence(&switched_translated);

    for sentence in [marked, recovered, switched_source, switched_translated] {
        let stripped = Stripper::default().transform_own(sentence);
        assert_correspondence(&stripped);
    }
}

#[test]
fn test_capacity_degradation() {
    // ten distinct extents against the default nine-pair alphabet
    let words: Vec<String> = (0..10).map(|i| format!("w{}", i)).collect();
    let text = words.join(" ");
    let opinions: Vec<Opinion> = (0..10)
        .map(|i| {
            Opinion::new(
                words[i].clone(),
                "FOOD#QUALITY",
                Polarity::Neutral,
                3 * i,
                3 * i + 2,
            )
        })
        .collect();
    let sentence = Sentence::new("s1", text, opinions);

    let marked = Marker::default().transform_own(sentence);

    let nulls: Vec<&Opinion> = marked.opinions().iter().filter(|o| o.is_null()).collect();
    assert_eq!(nulls.len(), 1);
    // the lowest-priority extent by the ascending-start tie-break loses
    assert_eq!(nulls[0].target(), "w9");
    assert_eq!(
        marked
            .opinions()
            .iter()
            .filter(|o| o.status() == SpanStatus::Resolved)
            .count(),
        9
    );
    assert_correspondence(&marked);
}

#[test]
fn test_duplicate_group_propagation() {
    let sentence = Sentence::new(
        "s1",
        "The food was great but service was slow",
        vec![
            Opinion::new("food", "FOOD#QUALITY", Polarity::Positive, 4, 8),
            Opinion::new("food", "FOOD#PRICES", Polarity::Negative, 4, 8),
            Opinion::new("service", "SERVICE#GENERAL", Polarity::Negative, 23, 30),
        ],
    );

    let assert_siblings_agree = |s: &Sentence| {
        assert_eq!(s.opinions()[0].extent(), s.opinions()[1].extent());
        assert_eq!(s.opinions()[0].target(), s.opinions()[1].target());
        assert_eq!(s.opinions()[0].status(), s.opinions()[1].status());
    };

    let marked = Marker::default().transform_own(sentence);
    assert_siblings_agree(&marked);

    let translation = "Het [eten] was geweldig maar de {bediening} was traag".to_string();
    let recovered = Recoverer::default().recover(marked.clone(), translation);
    assert_siblings_agree(&recovered);

    let (switched_source, switched_translated) =
        CodeSwitcher::default().switch(marked, recovered);
    assert_siblings_agree(&switched_source);
    assert_siblings_agree(&switched_translated);

    let stripped = Stripper::default().transform_own(switched_source);
    assert_siblings_agree(&stripped);
}

#[test]
fn test_delimiter_loss_hits_only_its_group() {
    let marked = Marker::default().transform_own(gen_sentence());

    // the curly pair vanished, the square pair survived
    let translation = "The meal was great but [food] service was slow".to_string();
    let recovered = Recoverer::default().recover(marked, translation);

    assert_eq!(recovered.opinions()[0].status(), SpanStatus::Resolved);
    assert_eq!(recovered.opinions()[0].target(), "food");
    assert_eq!(recovered.opinions()[1].status(), SpanStatus::Null);
    assert_correspondence(&recovered);
}

#[test]
fn test_recover_tolerates_reordered_close() {
    let marked = Marker::default().transform_own(gen_sentence());

    // translation moved the close bracket further right; rfind picks it up
    let translation = "Het [eten was] geweldig maar de {bediening} was traag".to_string();
    let recovered = Recoverer::default().recover(marked, translation);

    assert_eq!(recovered.opinions()[0].status(), SpanStatus::Resolved);
    assert_eq!(recovered.opinions()[0].target(), "eten was");
    assert_correspondence(&recovered);
}

#[test]
fn test_identical_delimiter_pair_never_zero_width() {
    // force the same-char '%' pair onto the only aspect
    let alphabet = xlacs::marking::Alphabet::new(vec![xlacs::marking::SymbolPair::new('%', '%')]);
    let sentence = Sentence::new(
        "s1",
        "The food was great",
        vec![Opinion::new(
            "food",
            "FOOD#QUALITY",
            Polarity::Positive,
            4,
            8,
        )],
    );
    let marked = Marker::new(alphabet.clone()).transform_own(sentence);
    assert_eq!(marked.text(), "The %food% was great");

    let translation = "Het %eten% was geweldig".to_string();
    let recovered = Recoverer::new(alphabet).recover(marked, translation);

    assert_eq!(recovered.opinions()[0].target(), "eten");
    assert_correspondence(&recovered);
}

#[test]
fn test_switch_documents_mismatch_is_fatal() {
    let marked = Marker::default().transform_own(gen_sentence());
    let recovered = Recoverer::default().recover(
        marked.clone(),
        "Het [eten] was geweldig maar de {bediening} was traag".to_string(),
    );

    let source = vec![xlacs::corpus::Review::new("R1", vec![marked.clone(), marked])];
    let translated = vec![xlacs::corpus::Review::new("R1", vec![recovered])];

    let result = CodeSwitcher::default().switch_documents(source, translated);
    match result {
        Err(Error::Alignment {
            review_id,
            source_sentences,
            translated_sentences,
        }) => {
            assert_eq!(review_id, "R1");
            assert_eq!(source_sentences, 2);
            assert_eq!(translated_sentences, 1);
        }
        other => panic!("expected alignment error, got {:?}", other),
    }
}
