use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_independent_counter_sequences() {
    Command::cargo_bin("closures")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1st call: 1\n2nd call: 2\nNew closure instance first call: 1\nOld closure instance next call: 3\n",
        ));
}

#[test]
fn capturing_closures_keep_separate_tallies() {
    Command::cargo_bin("closures")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New capturing closure first call: 1\nOld capturing closure next call: 3\n",
        ));
}

#[test]
fn shared_counter_sees_every_parallel_call() {
    Command::cargo_bin("closures")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared counter after 100 parallel calls: 100"));
}
