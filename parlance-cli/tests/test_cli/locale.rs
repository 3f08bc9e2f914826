use crate::add_test;
use crate::common::Fixture;

// Test locale selection from LANG
add_test!(locale_from_lang, async {
    let mut fixture = Fixture::new();
    fixture.set_env("LANG", "fr_FR.UTF-8");
    let output = fixture
        .run(&["text", "Hello {{.Name}}", "-s", "Name=demo"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Bonjour demo\n");
});

// Test precedence of the locale sources
add_test!(locale_precedence, async {
    let mut fixture = Fixture::new();
    fixture.set_env("LANG", "fr_FR.UTF-8");
    fixture.set_env("PARLANCE_LOCALE", "es_ES");
    let output = fixture.run(&["fail", "x"]).await;
    assert_eq!(output.stdout, "FALLÓ\n");

    let output = fixture.run(&["--locale", "de-DE", "fail", "x"]).await;
    assert_eq!(output.stdout, "FEHLGESCHLAGEN\n");
});

// Test fallback for a locale without a catalog
add_test!(locale_unknown_falls_back, async {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["--locale", "ja_JP.UTF-8", "text", "Hello {{.Name}}", "-s", "Name=x"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Hello x\n");
});

// Test a user-supplied catalog directory
add_test!(catalog_dir_translates, async {
    let fixture = Fixture::new();
    fixture.write_catalog(
        "it-it",
        &[("OK", "Bene"), ("Hello {{.Name}}", "Ciao {{ .Name }}")],
    );
    let dir = fixture.catalog_dir();

    let output = fixture
        .run(&["--catalog-dir", &dir, "--locale", "it_IT", "ok"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Bene\n");

    let output = fixture
        .run(&[
            "--catalog-dir",
            &dir,
            "--locale",
            "it",
            "text",
            "Hello {{.Name}}",
            "-s",
            "Name=Ada",
        ])
        .await;
    assert_eq!(output.stdout, "Ciao Ada\n");
});

// Test that a directory without a matching catalog means identity translation
add_test!(catalog_dir_without_match, async {
    let fixture = Fixture::new();
    fixture.write_catalog("it-it", &[("OK", "Bene")]);
    let dir = fixture.catalog_dir();
    let output = fixture
        .run(&["--catalog-dir", &dir, "--locale", "fr_FR", "fail", "x"])
        .await;
    assert_eq!(output.stdout, "FAILED\n");
});

// Test that a corrupt catalog prevents startup
add_test!(catalog_dir_corrupt, async {
    let fixture = Fixture::new();
    fixture.write_file("it-it.all.json", b"{ not json");
    assert!(fixture.root_dir_path().join("it-it.all.json").is_file());
    let dir = fixture.catalog_dir();

    let output = fixture
        .run(&["--catalog-dir", &dir, "--locale", "it-IT", "ok"])
        .await;
    assert_eq!(output.code(), 2);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("parlance: "));
    assert!(output.stderr.contains("it-it"));
});

// Test that a missing catalog directory prevents startup
add_test!(catalog_dir_missing, async {
    let fixture = Fixture::new();
    let dir = fixture.root_dir_path().join("no-such-dir");
    let dir = dir.display().to_string();

    let output = fixture
        .run(&["--catalog-dir", &dir, "--locale", "fr_FR", "ok"])
        .await;
    assert_eq!(output.code(), 2);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("parlance: "));
    assert!(output.stderr.contains("no-such-dir"));
});

// Test a catalog file named with the POSIX locale spelling
add_test!(catalog_dir_posix_file_name, async {
    let fixture = Fixture::new();
    fixture.write_catalog("fr_FR", &[("OK", "Daccord")]);
    let dir = fixture.catalog_dir();

    let output = fixture
        .run(&["--catalog-dir", &dir, "--locale", "fr_FR.UTF-8", "ok"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Daccord\n");
});
