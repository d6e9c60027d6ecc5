use std::path::PathBuf;
use std::process::{Command, Output};

//===========================================================================//

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpu16dis"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn cpu16dis")
}

fn write_temp(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("cpu16dis-cli-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

//===========================================================================//

#[test]
fn help_exits_zero() {
    for flag in ["-h", "--help", "-?", "--usage"] {
        let output = run(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{flag}");
        assert!(!output.stdout.is_empty(), "{flag}");
    }
}

#[test]
fn missing_arguments_exit_one() {
    assert_eq!(run(&[]).status.code(), Some(1));
    assert_eq!(run(&["--no-such-flag", "x"]).status.code(), Some(1));
}

#[test]
fn unopenable_file_exits_two() {
    let path = std::env::temp_dir().join("cpu16dis-cli-no-such-file.bin");
    let output = run(&[path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn listing_goes_to_stdout() {
    let path = write_temp("ok.bin", b"\x00\xab\x37\x00\xff");
    let output = run(&[path.to_str().expect("utf8 path")]);
    let _ = std::fs::remove_file(&path);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "00000000: 00ab             com [%x]+0xab\n\n\
         00000002: 3700             coma\n\n"
    );
}

#[test]
fn decode_error_exits_six_after_all_files() {
    let bad = write_temp("bad.bin", b"\x17\x00\x12");
    let good = write_temp("good.bin", b"\x37\x00");
    let output = run(&[
        bad.to_str().expect("utf8 path"),
        good.to_str().expect("utf8 path"),
    ]);
    let _ = std::fs::remove_file(&bad);
    let _ = std::fs::remove_file(&good);
    assert_eq!(output.status.code(), Some(6));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "00000000: 3700             coma\n\n"
    );
    assert!(!output.stderr.is_empty());
}

#[test]
fn resync_continues_past_errors() {
    let path = write_temp("resync.bin", b"\x00\x10\x37\xb5\x12");
    let output = run(&["--resync", path.to_str().expect("utf8 path")]);
    let _ = std::fs::remove_file(&path);
    assert_eq!(output.status.code(), Some(6));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("com [%x]+0x10"));
    assert!(stdout.contains("bcs 0x12"));
}

//===========================================================================//
