use assert_cmd::Command;
use predicates::prelude::*;

fn assistant() -> Command {
    let mut cmd = Command::cargo_bin("bridge-assistant").unwrap();
    cmd.env_remove("BRIDGE_POSITION")
        .env_remove("BRIDGE_DEALER")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_opening_recommendation() {
    assistant()
        .args(["--position", "s", "--dealer", "s"])
        .write_stdin("16 4 4 3 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bid 1 NT"))
        .stdout(predicate::str::contains("15-18 HCP, balanced"));
}

#[test]
fn test_prompts_for_seats() {
    assistant()
        .write_stdin("s\nn\n5 6 3 2 2\n1nt\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your position: "))
        .stdout(predicate::str::contains("First player to bid: "))
        .stdout(predicate::str::contains("Partner has 15-17 HCP"))
        .stdout(predicate::str::contains("Bid 2 Hearts then Pass"));
}

#[test]
fn test_rebid_is_information_only() {
    assistant()
        .args(["--position", "s", "--dealer", "s"])
        .write_stdin("14 5 3 3 2\n1s\np\n2s\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Partner has"))
        .stdout(predicate::str::contains("not implemented"));
}

#[test]
fn test_json_output() {
    assistant()
        .args(["--position", "n", "--dealer", "n", "--json"])
        .write_stdin("4 4 3 3 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""call":"Pass""#))
        .stdout(predicate::str::contains(r#""kind":"Recommendation""#));
}

#[test]
fn test_json_prompts_stay_off_stdout() {
    let assert = assistant()
        .args(["--position", "s", "--dealer", "n", "--json"])
        .write_stdin("5 6 3 2 2\n1nt\np\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Partner's bid: "));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.is_empty());
    for line in stdout.lines().filter(|line| !line.is_empty()) {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
}

#[test]
fn test_trace_lists_rules() {
    assistant()
        .args(["--position", "n", "--dealer", "n", "--trace"])
        .write_stdin("16 4 4 3 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] opening: too few high-card points"))
        .stdout(predicate::str::contains("[x] opening: one no-trump"));
}

#[test]
fn test_rejects_bad_seat_argument() {
    assistant()
        .args(["--position", "q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("n/e/s/w"));
}
