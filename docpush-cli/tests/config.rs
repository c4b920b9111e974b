use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn style_from_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.md");
    fs::write(&input, "- [x] done\n- item\n").unwrap();

    let config_path = dir.path().join("docpush.toml");
    fs::write(
        &config_path,
        r#"[style]
checked_symbol = "[x]"
bullet_preset = "BULLET_ARROW_DIAMOND_DISC"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.arg(&input)
        .arg("--to")
        .arg("listing")
        .arg("--config")
        .arg(&config_path);

    let output_pred = predicate::str::contains(r#""[x] done\n""#)
        .and(predicate::str::contains("BULLET_ARROW_DIAMOND_DISC"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("note.md"), "- item\n").unwrap();
    fs::write(
        dir.path().join("docpush.toml"),
        "[style]\nbullet_preset = \"BULLET_STAR_CIRCLE_SQUARE\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.current_dir(dir.path())
        .arg("note.md")
        .arg("--to")
        .arg("listing");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BULLET_STAR_CIRCLE_SQUARE"));
}

#[test]
fn extra_flags_override_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.md");
    fs::write(&input, "ping @lee\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.arg(&input)
        .arg("--to")
        .arg("listing")
        .arg("--extra-mention-color")
        .arg("1,0,0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bold rgb(1, 0, 0)"));
}

#[test]
fn invalid_color_override_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.md");
    fs::write(&input, "ping @lee\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.arg(&input).arg("--extra-footer-color").arg("grey");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--extra-footer-color"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.md");
    fs::write(&input, "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.arg(&input)
        .arg("--config")
        .arg(dir.path().join("absent.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn extra_values_may_start_with_a_dash() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.md");
    fs::write(&input, "- [ ] todo\n").unwrap();

    let mut cmd = cargo_bin_cmd!("docpush");
    cmd.arg(&input)
        .arg("--to")
        .arg("listing")
        .arg("--extra-unchecked-symbol=-");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""- todo\n""#));
}
