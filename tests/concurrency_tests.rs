//! Concurrency and thread safety tests for winnowfp

use std::sync::Arc;
use std::thread;

use winnowfp::{Fingerprint, FingerprintConfig, Fingerprinter};

fn small() -> Fingerprinter {
    Fingerprinter::new(FingerprintConfig::new().with_kgram_len(5).with_window_len(4))
        .expect("valid config")
}

fn corpus() -> Vec<String> {
    (0..64)
        .map(|i| {
            format!(
                "Document {i}: a do run run run, a do run run. Entry number {} of the batch, \
                 with a little filler text to make windows interesting ({}).",
                i * 7,
                "xyz".repeat(i % 5)
            )
        })
        .collect()
}

#[test]
fn fingerprinter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Fingerprinter>();
}

#[test]
fn concurrent_generate_same_fingerprinter() {
    let fp = Arc::new(small());
    let text = "Concurrent fingerprinting test text, repeated often enough to winnow";

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let fp = Arc::clone(&fp);
            thread::spawn(move || fp.generate(text))
        })
        .collect();

    let results: Vec<Vec<Fingerprint>> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    let first = &results[0];
    assert!(!first.is_empty());
    for (i, result) in results.iter().enumerate().skip(1) {
        assert_eq!(result, first, "thread {i} produced different fingerprints");
    }
}

#[test]
fn scoped_threads_borrow_one_fingerprinter() {
    let fp = small();
    let docs = corpus();
    let expected: Vec<_> = docs.iter().map(|d| fp.generate(d)).collect();

    let shared = &fp;
    let actual: Vec<Vec<Fingerprint>> = thread::scope(|scope| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| scope.spawn(move || shared.generate(doc)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    assert_eq!(actual, expected);
}

#[test]
fn batch_preserves_input_order() {
    let fp = small();
    let docs = corpus();
    let batch = fp.generate_batch(&docs);

    assert_eq!(batch.len(), docs.len());
    for (doc, prints) in docs.iter().zip(&batch) {
        assert_eq!(prints, &fp.generate(doc));
    }
}

#[test]
fn batch_accepts_str_slices_and_empty_input() {
    let fp = small();
    let docs = ["a do run run run", "", "a do run run"];
    let batch = fp.generate_batch(&docs);
    assert_eq!(batch.len(), 3);
    assert!(batch[1].is_empty());

    let none: [&str; 0] = [];
    assert!(fp.generate_batch(&none).is_empty());
}

#[test]
fn concurrent_template_derivation() {
    let fp = Arc::new(Fingerprinter::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let fp = Arc::clone(&fp);
            thread::spawn(move || {
                fp.derive_from_template("abcdefghij klmnopqrst")
                    .expect("template has words")
            })
        })
        .collect();

    for handle in handles {
        let derived = handle.join().expect("thread panicked");
        assert_eq!(derived.config().kgram_len, 5);
        assert_eq!(derived.config().window_len, 5);
    }
}
