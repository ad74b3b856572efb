use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_message(root: &Path, rel: &str, id: &str, from: &str, to: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        path,
        format!("Message-ID: <{id}.JavaMail.evans@thyme>\nFrom: {from}\nTo: {to}\nX-From: x\n\nbody\n"),
    )
    .unwrap();
}

fn setup_corpus(root: &Path) {
    write_message(root, "maildir/allen-p/sent/1.", "1", "alice@enron.com", "bob@enron.com, alice@enron.com");
    write_message(root, "maildir/allen-p/sent/2.", "2", "alice@enron.com", "bob@enron.com");
    write_message(root, "maildir/belden-t/inbox/1.", "2", "alice@enron.com", "bob@enron.com");
    write_message(root, "maildir/belden-t/sent/1.", "3", "bob@enron.com", "<alice@enron.com>, not-an-email@x");
}

#[allow(deprecated)]
fn mailgraph(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mailgraph").expect("binary");
    cmd.current_dir(workdir)
        .env_remove("MAILGRAPH_ROOT")
        .env_remove("MAILGRAPH_OUTPUT");
    cmd
}

#[test]
fn default_paths_produce_adjacency_csv() {
    let temp = tempdir().unwrap();
    setup_corpus(temp.path());

    mailgraph(temp.path()).assert().success();

    let csv = fs::read_to_string(temp.path().join("email_adjacency.csv")).unwrap();
    assert_eq!(
        csv,
        "source,target,count\nalice@enron.com,bob@enron.com,2\nbob@enron.com,alice@enron.com,1\n"
    );
}

#[test]
fn json_summary_reports_counts() {
    let temp = tempdir().unwrap();
    setup_corpus(temp.path());

    let output = mailgraph(temp.path())
        .args(["maildir", "-o", "out/edges.csv", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(summary["edges"], 2);
    assert_eq!(summary["total_messages"], 3);
    assert_eq!(summary["dropped_self_loops"], 1);
    assert_eq!(summary["stats"]["files_scanned"], 4);
    assert_eq!(summary["stats"]["duplicates"], 1);
    assert_eq!(summary["stats"]["rejected_recipients"], 1);
    assert_eq!(summary["heaviest"][0]["source"], "alice@enron.com");
    assert!(temp.path().join("out/edges.csv").is_file());
}

#[test]
fn legacy_dedup_flag_changes_counts() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("corpus");
    write_message(&root, "a/1.", "9", "alice@enron.com", "bob@enron.com");
    write_message(&root, "b/1.", "9", "alice@enron.com", "bob@enron.com");

    mailgraph(temp.path())
        .args(["corpus", "-o", "legacy.csv", "--legacy-dedup"])
        .assert()
        .success();
    mailgraph(temp.path())
        .args(["corpus", "-o", "strict.csv"])
        .assert()
        .success();

    let legacy = fs::read_to_string(temp.path().join("legacy.csv")).unwrap();
    let strict = fs::read_to_string(temp.path().join("strict.csv")).unwrap();
    assert!(legacy.contains("alice@enron.com,bob@enron.com,2"));
    assert!(strict.contains("alice@enron.com,bob@enron.com,1"));
}

#[test]
fn json_format_writes_rows() {
    let temp = tempdir().unwrap();
    setup_corpus(temp.path());

    mailgraph(temp.path())
        .args(["--format", "json", "-o", "edges.json"])
        .assert()
        .success();

    let rows: Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("edges.json")).unwrap())
            .unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["count"], 2);
}

#[test]
fn config_file_sets_sender_domain() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("corpus");
    write_message(&root, "1.", "1", "trader@example.org", "desk@example.org");
    fs::write(temp.path().join("mailgraph.toml"), "sender_domain = \"@example.org\"\n").unwrap();

    mailgraph(temp.path())
        .args(["corpus", "--config", "mailgraph.toml", "-o", "edges.csv"])
        .assert()
        .success();

    let csv = fs::read_to_string(temp.path().join("edges.csv")).unwrap();
    assert!(csv.contains("trader@example.org,desk@example.org,1"));
}

#[test]
fn root_from_environment() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("elsewhere");
    write_message(&root, "1.", "1", "alice@enron.com", "bob@enron.com");

    mailgraph(temp.path())
        .env("MAILGRAPH_ROOT", &root)
        .env("MAILGRAPH_OUTPUT", temp.path().join("env.csv"))
        .assert()
        .success();

    assert!(temp.path().join("env.csv").is_file());
}

#[test]
fn missing_root_fails() {
    let temp = tempdir().unwrap();

    mailgraph(temp.path())
        .arg("no-such-maildir")
        .assert()
        .failure()
        .stderr(contains("Invalid corpus path"));

    assert!(!temp.path().join("email_adjacency.csv").exists());
}

#[test]
fn bad_sender_domain_is_rejected() {
    let temp = tempdir().unwrap();
    setup_corpus(temp.path());

    mailgraph(temp.path())
        .args(["--sender-domain", "enron.com"])
        .assert()
        .failure()
        .stderr(contains("Invalid parser configuration"));
}
