use crate::add_test;
use crate::common::Fixture;

// Test the two-column layout with a prefix
add_test!(table_with_prefix, async {
    let fixture = Fixture::new();
    let output = fixture
        .run_with_stdin(
            &["table", "--prefix", "> ", "--padding", "2"],
            b"a\tbb\nccc\td\n",
        )
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "> a    bb\n> ccc  d\n");
});

// Test the default padding and CRLF input
add_test!(table_default_padding, async {
    let fixture = Fixture::new();
    let output = fixture
        .run_with_stdin(&["table"], b"Name\tStatus\r\nweb\trunning\r\n")
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Name  Status\nweb   running\n");
});

// Test that empty input renders nothing
add_test!(table_empty_input, async {
    let fixture = Fixture::new();
    let output = fixture.run_with_stdin(&["table"], b"").await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "");
});

// Test that unreadable rows are reported
add_test!(table_invalid_utf8, async {
    let fixture = Fixture::new();
    let output = fixture.run_with_stdin(&["table"], &[0xff, 0xfe, b'\n']).await;
    assert_eq!(output.code(), 2);
    assert!(output.stderr.starts_with("Failed to read table rows: "));
    assert_eq!(output.stdout, "FAILED\n");
});
