use fixture_core::{verify, Alphabet};

use crate::add_test;
use crate::common::{Fixture, OUTPUT_NAME};
use crate::MB;

// Test that a run creates a one-mebibyte fixture
add_test!(creates_one_mebibyte_file, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(fixture.file_exists(OUTPUT_NAME));

    assert_eq!(fixture.read(OUTPUT_NAME).len(), MB);
});

// Test that every byte is an ASCII letter or digit, with no trailing newline
add_test!(contains_only_alphanumerics, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(output.status.success());

    let contents = fixture.read(OUTPUT_NAME);
    assert!(contents.iter().all(u8::is_ascii_alphanumeric));
    assert_ne!(contents.last(), Some(&b'\n'));
});

// Test that every symbol appears close to its expected share
add_test!(symbols_are_evenly_spread, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(output.status.success());

    let contents = String::from_utf8(fixture.read(OUTPUT_NAME)).unwrap();
    let report = verify(&contents, &Alphabet::alphanumeric(), MB).unwrap();

    // Unseeded output: allow a margin far beyond sampling noise.
    for (&count, expected) in report.counts().iter().zip(report.expected()) {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(deviation < 0.25, "count {count} vs expected {expected:.0}");
    }
});

// Test that a second run replaces the first fixture
add_test!(second_run_overwrites, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(output.status.success());
    let first = fixture.read(OUTPUT_NAME);

    let output = fixture.run(&[]).await;
    assert!(output.status.success());
    let second = fixture.read(OUTPUT_NAME);

    assert_eq!(second.len(), MB);
    assert_ne!(first, second);
    assert_eq!(fixture.entries(), vec![OUTPUT_NAME.to_string()]);
});

// Test that a larger existing file is truncated, not appended to
add_test!(truncates_larger_existing_file, async {
    let previous = vec![b'#'; 3 * MB];
    let fixture = Fixture::with_file(OUTPUT_NAME, &previous);

    let output = fixture.run(&[]).await;
    assert!(output.status.success());

    let contents = fixture.read(OUTPUT_NAME);
    assert_eq!(contents.len(), MB);
    assert!(!contents.contains(&b'#'));
});

// Test that a smaller existing file is replaced in full
add_test!(replaces_smaller_existing_file, async {
    let fixture = Fixture::with_file(OUTPUT_NAME, b"stale");

    let output = fixture.run(&[]).await;
    assert!(output.status.success());
    assert_eq!(fixture.read(OUTPUT_NAME).len(), MB);
});
