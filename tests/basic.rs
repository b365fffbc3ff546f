//! Integration tests covering the filter's externally observable guarantees.

use bloomtrace::hash::{hash_to_index, DigestAlgorithm, DIGEST_ALGORITHMS};
use bloomtrace::tune::least_collision_hash_count;
use bloomtrace::TrackedBloomFilter;

#[test]
fn test_basic_insert_and_find() {
    let mut filter = TrackedBloomFilter::new(128, 3).unwrap();

    filter.insert("test-item");

    assert!(
        filter.contains("test-item"),
        "Should find the item we just added"
    );
}

#[test]
fn test_no_false_negatives_ever() {
    let mut filter = TrackedBloomFilter::new(256, 3).unwrap();
    let items: Vec<String> = (0..100).map(|i| format!("item-{}", i)).collect();

    for item in &items {
        filter.insert(item);

        // Permanent: everything inserted so far must still test positive
        for earlier in &items[..=items.iter().position(|x| x == item).unwrap()] {
            assert!(filter.contains(earlier), "False negative for {}", earlier);
        }
    }
}

#[test]
fn test_idempotent_insert_full_state() {
    let mut once = TrackedBloomFilter::new(128, 3).unwrap();
    once.insert("dup");

    let mut twice = TrackedBloomFilter::new(128, 3).unwrap();
    twice.insert("dup");
    twice.insert("dup");

    assert_eq!(once.count_set_bits(), twice.count_set_bits());
    assert_eq!(once.entries(), twice.entries());
}

#[test]
fn test_hash_determinism_across_instances() {
    // Same (value, algorithm, size) must agree across separate filters;
    // verified through the public derivation function and through filters
    // of equal size behaving identically.
    for algorithm in DIGEST_ALGORITHMS {
        assert_eq!(
            hash_to_index("stable-input", algorithm, 512),
            hash_to_index("stable-input", algorithm, 512)
        );
    }

    let mut a = TrackedBloomFilter::new(512, 3).unwrap();
    let mut b = TrackedBloomFilter::new(512, 3).unwrap();
    a.insert("same");
    b.insert("same");
    assert_eq!(a.count_set_bits(), b.count_set_bits());
}

#[test]
fn test_monotonic_bit_array() {
    let mut filter = TrackedBloomFilter::new(64, 2).unwrap();
    let mut previous_count = 0;

    for i in 0..40 {
        filter.insert(&format!("w{}", i));

        // The set of 1-bits never shrinks: the count is non-decreasing and
        // every earlier insert still tests positive.
        let count = filter.count_set_bits();
        assert!(count >= previous_count, "set-bit count shrank");
        previous_count = count;

        for j in 0..=i {
            assert!(filter.contains(&format!("w{}", j)));
        }
    }
}

#[test]
fn test_word_scenario_size_six() {
    // Concrete scenario from the original: tiny array, three words.
    let mut filter = TrackedBloomFilter::new(6, 3).unwrap();
    filter.insert("word1");
    filter.insert("word2");
    filter.insert("word3");

    assert!(filter.contains("word1"));
    assert!(filter.contains("word2"));
    assert!(filter.contains("word3"));

    // A never-added word may or may not collide on a 6-bit array; the
    // answer just has to be a boolean, so only exercise the call.
    let _ = filter.contains("neverAdded");
}

#[test]
fn test_fresh_filter_rarely_false_positive() {
    // All-zero bits make a false positive before any insert impossible in
    // a given instance; across fresh instances the query must essentially
    // always come back negative.
    let mut negatives = 0;
    for _ in 0..50 {
        let filter = TrackedBloomFilter::new(128, 3).unwrap();
        if !filter.contains("x") {
            negatives += 1;
        }
    }
    assert_eq!(negatives, 50, "fresh filters must have no bits set");
}

#[test]
fn test_diagnose_consistency() {
    // If diagnose("a") lists "b" at a position, then "b" must hash to that
    // position under one of the configured algorithms.
    let mut filter = TrackedBloomFilter::new(4, 3).unwrap();
    for word in ["a", "b", "c", "d", "e"] {
        filter.insert(word);
    }

    let report = filter.diagnose("a");
    for record in &report.records {
        for collider in &record.colliders {
            assert!(
                DIGEST_ALGORITHMS
                    .iter()
                    .take(filter.hash_count())
                    .any(|&alg| hash_to_index(collider, alg, filter.size()) == record.position),
                "{} listed at bit {} without mapping there",
                collider,
                record.position
            );
        }
    }
}

#[test]
fn test_diagnose_rendering_lines() {
    let mut filter = TrackedBloomFilter::new(6, 2).unwrap();
    filter.insert("word1");
    filter.insert("word2");

    let rendered = filter.diagnose("word1").to_string();
    assert_eq!(rendered.lines().count(), 2, "one line per hash position");
    assert!(rendered.contains("sha1 -> bit "));
    assert!(rendered.contains("sha256 -> bit "));
}

#[test]
fn test_tuner_prefers_one_hash_when_sparse() {
    // Statistical, not deterministic: with 5 elements in 4096 bits a single
    // hash function should almost always avoid collisions entirely.
    let mut ones = 0;
    for _ in 0..20 {
        if least_collision_hash_count(5, 4096).unwrap() == 1 {
            ones += 1;
        }
    }
    assert!(
        ones >= 15,
        "expected k=1 in most sparse runs, got {}/20",
        ones
    );
}

#[test]
fn test_tuner_validates_before_building() {
    assert!(least_collision_hash_count(0, 4096).is_err());
    assert!(least_collision_hash_count(5, 0).is_err());
}

#[test]
fn test_tuner_result_configures_a_working_filter() {
    let k = least_collision_hash_count(20, 1280).unwrap();
    let mut filter = TrackedBloomFilter::new(1280, k).unwrap();

    filter.insert("configured-from-tuner");
    assert!(filter.contains("configured-from-tuner"));
    assert_eq!(filter.hash_count(), k);
}

#[test]
fn test_hash_functions_are_registry_prefix() {
    let filter = TrackedBloomFilter::new(128, 2).unwrap();
    assert_eq!(
        filter.algorithms(),
        &[DigestAlgorithm::Sha1, DigestAlgorithm::Sha256]
    );
}
