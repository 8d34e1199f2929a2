use winnowfp::{FingerprintConfig, Fingerprinter, WinnowConfig, KgramHasher, winnow};

const ESSAY: &str = "The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs! \
                     How vexingly quick daft zebras jump; see http://example.org/zebras for more.";

fn small() -> Fingerprinter {
    Fingerprinter::new(FingerprintConfig::new().with_kgram_len(5).with_window_len(4))
        .expect("valid config")
}

#[test]
fn fingerprints_equivalent_inputs_match() {
    let fp = small();

    // Case, punctuation and URLs are all sanitized away.
    let a = fp.generate(" A do run run run,   a do run run!! ");
    let b = fp.generate("a DO RUN run RUN a do https://example.com/x run run");

    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn repeated_calls_are_identical() {
    let fp = small();
    let first = fp.fingerprint_document(ESSAY);
    for _ in 0..5 {
        assert_eq!(fp.fingerprint_document(ESSAY), first);
    }
}

#[test]
fn separate_instances_agree() {
    let cfg = FingerprintConfig::new().with_kgram_len(7).with_window_len(5);
    let a = Fingerprinter::new(cfg).unwrap();
    let b = Fingerprinter::new(cfg).unwrap();
    assert_eq!(a.generate(ESSAY), b.generate(ESSAY));
}

#[test]
fn stages_compose_to_generate() {
    let fp = small();
    let sanitized = fp.sanitize(ESSAY);
    let hasher = KgramHasher::new(&fp.config().winnow_config()).unwrap();
    let hashes = hasher.hash_text(&sanitized);
    assert_eq!(winnow(&hashes, 4), fp.generate(ESSAY));
}

#[test]
fn rolling_hash_matches_direct_hash() {
    let cfg = WinnowConfig::new().with_kgram_len(6).with_modulo(1_000_000_007);
    let hasher = KgramHasher::new(&cfg).unwrap();
    let sanitized = small().sanitize(ESSAY);

    let rolled = hasher.hash_text(&sanitized);
    let direct = hasher.hash_kgrams(&winnowfp::kgrams(&sanitized, 6));
    assert_eq!(rolled, direct);
}

#[test]
fn modulo_changes_the_output() {
    let a = small();
    let b = Fingerprinter::new(a.config().with_modulo(1_000_003)).unwrap();
    assert_ne!(a.generate(ESSAY), b.generate(ESSAY));
    assert!(b.generate(ESSAY).iter().all(|f| f.hash < 1_000_003));
}
