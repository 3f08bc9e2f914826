use crate::add_test;
use crate::common::Fixture;

// Test failure reporting on both channels
add_test!(fail_reports_on_both_channels, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["fail", "Really delete {{.Name}}?", "-s", "Name=app"])
        .await;
    assert_eq!(output.code(), 1);
    assert_eq!(output.stderr, "Really delete app?\n");
    assert_eq!(output.stdout, "FAILED\n");
});

// Test translated failure reporting
add_test!(fail_translated, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&[
            "--locale",
            "de_DE.UTF-8",
            "fail",
            "Really delete {{.Name}}?",
            "-s",
            "Name=app",
        ])
        .await;
    assert_eq!(output.code(), 1);
    assert_eq!(output.stderr, "app wirklich löschen?\n");
    assert_eq!(output.stdout, "FEHLGESCHLAGEN\n");
});

// Test the failure marker with forced color
add_test!(fail_colored_marker, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["--color", "always", "fail", "boom"]).await;
    assert_eq!(output.code(), 1);
    assert_eq!(output.stderr, "boom\n");
    assert!(output.stdout.contains("\x1b[31m"));
    assert!(output.stdout.contains("FAILED"));
});
