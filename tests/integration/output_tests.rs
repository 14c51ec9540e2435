use clap::Parser;
use dupefind::cli::Cli;
use dupefind::duplicates::FinderError;
use dupefind::error::ExitCode;
use dupefind::output::{AlwaysOverwrite, OutputError, OverwritePolicy};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

struct Decline;

impl OverwritePolicy for Decline {
    fn confirm_overwrite(&self, _path: &Path) -> Result<bool, OutputError> {
        Ok(false)
    }
}

fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"hello").unwrap();
    fs::write(dir.path().join("b"), b"hello").unwrap();
    fs::write(dir.path().join("c"), b"world").unwrap();
    fs::write(dir.path().join("d"), b"hi").unwrap();
    dir
}

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["dupefind", "--no-progress"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_text_report_written_to_file() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.txt");

    let code = dupefind::run_app_with(
        cli(&[path_str(data.path()), "-o", path_str(&report)]),
        &AlwaysOverwrite,
    )
    .unwrap();

    assert_eq!(code, ExitCode::Success);
    let content = fs::read_to_string(&report).unwrap();
    let expected = format!(
        "[ {} {} ]\n",
        data.path().join("a").display(),
        data.path().join("b").display()
    );
    assert_eq!(content, expected);
}

#[test]
fn test_no_duplicates_exit_code() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x"), b"1").unwrap();
    fs::write(dir.path().join("y"), b"22").unwrap();
    let report = dir.path().join("out.txt");

    let code = dupefind::run_app_with(
        cli(&[path_str(dir.path()), "-o", path_str(&report)]),
        &AlwaysOverwrite,
    )
    .unwrap();

    assert_eq!(code, ExitCode::NoDuplicates);
    assert_eq!(fs::read_to_string(&report).unwrap(), "");
}

#[test]
fn test_declined_overwrite_skips_scan() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.txt");
    fs::write(&report, "previous results").unwrap();

    let code = dupefind::run_app_with(
        cli(&[path_str(data.path()), "-o", path_str(&report)]),
        &Decline,
    )
    .unwrap();

    assert_eq!(code, ExitCode::Success);
    assert_eq!(fs::read_to_string(&report).unwrap(), "previous results");
}

#[test]
fn test_declined_overwrite_happens_before_root_validation() {
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.txt");
    fs::write(&report, "keep").unwrap();
    let missing = out_dir.path().join("missing");

    let code = dupefind::run_app_with(
        cli(&[path_str(&missing), "-o", path_str(&report)]),
        &Decline,
    )
    .unwrap();

    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_yes_flag_overwrites_without_prompt() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.txt");
    fs::write(&report, "stale").unwrap();

    let code = dupefind::run_app(cli(&[
        path_str(data.path()),
        "-o",
        path_str(&report),
        "--yes",
    ]))
    .unwrap();

    assert_eq!(code, ExitCode::Success);
    assert!(fs::read_to_string(&report).unwrap().starts_with("[ "));
}

#[test]
fn test_json_report() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.json");

    dupefind::run_app_with(
        cli(&[path_str(data.path()), "-o", path_str(&report), "-f", "json"]),
        &AlwaysOverwrite,
    )
    .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let duplicates = parsed["duplicates"].as_array().unwrap();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0]["size"], 5);
    assert_eq!(duplicates[0]["files"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["summary"]["total_files"], 4);
    assert_eq!(parsed["summary"]["exit_code_name"], "DF000");
}

#[test]
fn test_invalid_root_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let report = dir.path().join("out.txt");

    let err = dupefind::run_app_with(
        cli(&[path_str(&missing), "-o", path_str(&report)]),
        &AlwaysOverwrite,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FinderError>(),
        Some(FinderError::InvalidRoot(_))
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::GeneralError);
}

#[test]
fn test_unwritable_output_is_error() {
    let data = fixture();
    let report = data.path().join("no/such/dir/report.txt");

    let err = dupefind::run_app_with(
        cli(&[path_str(data.path()), "-o", path_str(&report)]),
        &AlwaysOverwrite,
    )
    .unwrap_err();

    assert!(err.downcast_ref::<OutputError>().is_some());
}

#[test]
fn test_config_file_applies() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let config = out_dir.path().join("dupefind.toml");
    fs::write(&config, "format = \"json\"\nio_threads = 1\n").unwrap();
    let report = out_dir.path().join("report.json");

    dupefind::run_app_with(
        cli(&[
            path_str(data.path()),
            "-o",
            path_str(&report),
            "--config",
            path_str(&config),
        ]),
        &AlwaysOverwrite,
    )
    .unwrap();

    let content = fs::read_to_string(&report).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
}

#[test]
fn test_cli_format_overrides_config_file() {
    let data = fixture();
    let out_dir = tempdir().unwrap();
    let config = out_dir.path().join("dupefind.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();
    let report = out_dir.path().join("report.txt");

    dupefind::run_app_with(
        cli(&[
            path_str(data.path()),
            "-o",
            path_str(&report),
            "--config",
            path_str(&config),
            "-f",
            "text",
        ]),
        &AlwaysOverwrite,
    )
    .unwrap();

    assert!(fs::read_to_string(&report).unwrap().starts_with("[ "));
}

#[test]
fn test_missing_config_file_is_error() {
    let data = fixture();
    let result = dupefind::run_app_with(
        cli(&[path_str(data.path()), "--config", "/nonexistent/dupefind.toml"]),
        &AlwaysOverwrite,
    );
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_skipped_files_give_partial_success() {
    let data = fixture();
    std::os::unix::fs::symlink(data.path().join("gone"), data.path().join("dangling")).unwrap();
    let out_dir = tempdir().unwrap();
    let report = out_dir.path().join("report.txt");

    let code = dupefind::run_app_with(
        cli(&[path_str(data.path()), "-o", path_str(&report)]),
        &AlwaysOverwrite,
    )
    .unwrap();

    assert_eq!(code, ExitCode::PartialSuccess);
    assert_eq!(fs::read_to_string(&report).unwrap().lines().count(), 1);
}
