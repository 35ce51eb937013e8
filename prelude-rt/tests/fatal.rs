use std::{env, process::Command};

const CHILD_ENV: &str = "PRELUDE_RT_FATAL_CHILD";

/// Re-runs a single test of this binary in a child process with `CHILD_ENV` set
fn run_in_child(test_name: &str) -> (Option<i32>, String) {
    let output = Command::new(env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    (
        output.status.code(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

#[test]
fn fatal_error_prints_diagnostic_and_exits_with_one() {
    if in_child() {
        prelude_rt::fatal_error("disk full");
    }

    let (status, stdout) = run_in_child("fatal_error_prints_diagnostic_and_exits_with_one");
    assert_eq!(status, Some(1));
    assert!(stdout.contains("FATAL ERROR: disk full\n"), "{stdout}");
}

#[test]
fn c_entry_point_terminates_the_same_way() {
    if in_child() {
        prelude_rt::ffi::rt_fatal_error("out of memory".into());
        unreachable!("rt_fatal_error returned");
    }

    let (status, stdout) = run_in_child("c_entry_point_terminates_the_same_way");
    assert_eq!(status, Some(1));
    assert!(stdout.contains("FATAL ERROR: out of memory\n"), "{stdout}");
}
