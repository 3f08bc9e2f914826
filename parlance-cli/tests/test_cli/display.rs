use crate::add_test;
use crate::common::Fixture;

// Test plain text with a substitution value
add_test!(text_with_value, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["text", "Hello {{.Name}}", "-s", "Name=demo"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Hello demo\n");
    assert_eq!(output.stderr, "");
});

// Test that unknown placeholders survive untouched
add_test!(text_unknown_placeholder, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["text", "{{.Who}} met {{.Name}}", "--set", "Name=demo"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "{{.Who}} met demo\n");
});

// Test key-value pair output
add_test!(pair_line, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["pair", "Status", "{{.State}}", "-s", "State=running"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Status: running\n");
});

// Test that piped output is never colored in auto mode
add_test!(auto_color_on_pipe_is_plain, async {
    let fixture = Fixture::new();
    for args in [
        &["ok"][..],
        &["header", "USAGE:"][..],
        &["flavor", "Hello {{.Name}}", "-s", "Name=demo"][..],
    ] {
        let output = fixture.run(args).await;
        assert!(output.status.success());
        assert!(!output.stdout_raw.contains(&0x1b), "{args:?}");
    }
});

// Test the success marker
add_test!(ok_plain, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["ok"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "OK\n");
});

// Test forced color on the success marker
add_test!(ok_forced_color, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["--color", "always", "ok"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("\x1b[32m"));
    assert!(output.stdout.contains("\x1b[1m"));
    assert!(output.stdout.contains("OK"));
    assert!(output.stdout.ends_with('\n'));
});

// Test color from the environment
add_test!(color_from_env, async {
    let mut fixture = Fixture::new();
    fixture.set_env("PARLANCE_COLOR", "always");
    let output = fixture.run(&["ok"]).await;
    assert!(output.stdout.contains('\x1b'));

    // The flag wins over the environment.
    let output = fixture.run(&["--color", "never", "ok"]).await;
    assert_eq!(output.stdout, "OK\n");
});

// Test that an invalid color setting is rejected before any output
add_test!(invalid_color_env, async {
    let mut fixture = Fixture::new();
    fixture.set_env("PARLANCE_COLOR", "sometimes");
    let output = fixture.run(&["ok"]).await;
    assert_eq!(output.code(), 2);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("parlance: "));
    assert!(output.stderr.contains("sometimes"));
});

// Test flavored values with forced color
add_test!(flavor_styles_values, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["--color", "always", "flavor", "Hello {{.Name}}", "-s", "Name=demo"])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("Hello \x1b["));
    assert!(output.stdout.contains("\x1b[36m"));
    assert!(output.stdout.contains("demo"));
});

// Test blank line output
add_test!(newline, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["newline"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "\n");
});

// Test that warnings go to stderr in order
add_test!(warnings_on_stderr, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["warn", "w1", "w2"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "w1\nw2\n");
});

// Test that a malformed substitution is a usage error
add_test!(malformed_value_pair, async {
    let fixture = Fixture::new();
    let output = fixture.run(&["text", "x", "-s", "novalue"]).await;
    assert_eq!(output.code(), 2);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("expected NAME=VALUE"));
});
