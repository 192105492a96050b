use crate::add_test;
use crate::common::{Fixture, OUTPUT_NAME};
use crate::KB;

// Test that an unwritable output path fails cleanly with a message
add_test!(output_path_is_directory, async {
    let fixture = Fixture::with_dir(OUTPUT_NAME);

    let output = fixture.run(&[]).await;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("fill-file: "));
    assert!(output.stderr.contains(OUTPUT_NAME));
    assert!(!output.stderr.contains("panicked"));

    // The directory is left in place
    assert!(fixture.root_dir_path().join(OUTPUT_NAME).is_dir());
});

// Test that unrelated files in the working directory are left alone
add_test!(leaves_other_files_untouched, async {
    let neighbour = vec![b'n'; KB];
    let fixture = Fixture::with_file("neighbour.txt", &neighbour);

    let output = fixture.run(&[]).await;
    assert!(output.status.success());

    assert_eq!(fixture.read("neighbour.txt"), neighbour);
    assert_eq!(
        fixture.entries(),
        vec!["neighbour.txt".to_string(), OUTPUT_NAME.to_string()]
    );
});

// Test that a successful run is silent
add_test!(successful_run_is_silent, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&[]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
});

// Test that arguments are ignored by the zero-argument entry point
add_test!(arguments_are_ignored, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&["other.txt", "--length", "10"]).await;
    assert!(output.status.success());
    assert!(fixture.file_exists(OUTPUT_NAME));
    assert!(!fixture.file_exists("other.txt"));
    assert_eq!(fixture.read(OUTPUT_NAME).len(), 1024 * KB);
});
