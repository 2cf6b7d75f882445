use assert_cmd::Command;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
