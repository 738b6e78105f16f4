//! Сквозной сценарий сравнения: два снапшота с разошедшимся пакетом и
//! переменной окружения.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use EnvSnap::{compare, resolve_name, Snapshot, SnapshotStore};

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("envsnap-{prefix}-{pid}-{t}"))
}

fn snapshot(packages: &[&str], foo: &str) -> Snapshot {
    let mut env_vars = BTreeMap::new();
    env_vars.insert("FOO".to_string(), foo.to_string());
    Snapshot {
        // Одинаковый момент у обоих, чтобы различия давали только пакеты и FOO.
        timestamp: "2026-08-04T10:00:00.000000".to_string(),
        python_version: "Python 3.11.4".to_string(),
        virtualenv: "none".to_string(),
        packages: packages.iter().map(|s| s.to_string()).collect(),
        git_branch: "main".to_string(),
        env_vars,
    }
}

#[test]
fn package_and_env_divergence_reports_exactly_three_keys() -> Result<()> {
    let root = unique_root("diff-e2e");
    let store = SnapshotStore::open_at(&root);

    store.write("a", &snapshot(&["x==1", "y==2"], "bar"))?;
    store.write("b", &snapshot(&["x==1", "y==3"], "baz"))?;

    let diff = compare(&store.read("a")?, &store.read("b")?);

    // Каждый пакет — собственный ключ, поэтому смена версии y видна как
    // два односторонних ключа; плюс разошедшаяся env_vars:FOO.
    let keys: Vec<&str> = diff.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["env_vars:FOO", "package:y==2", "package:y==3"]);

    assert_eq!(diff[0].left, "bar");
    assert_eq!(diff[0].right, "baz");

    assert_eq!(diff[1].left, "installed");
    assert_eq!(diff[1].right, "<missing>");

    assert_eq!(diff[2].left, "<missing>");
    assert_eq!(diff[2].right, "installed");

    // Общий пакет различием не считается.
    assert!(!keys.contains(&"package:x==1"));
    Ok(())
}

#[test]
fn misspelled_names_resolve_against_the_store() -> Result<()> {
    let root = unique_root("diff-resolve");
    let store = SnapshotStore::open_at(&root);

    store.write("production", &snapshot(&["x==1"], "bar"))?;
    store.write("staging", &snapshot(&["x==1"], "bar"))?;

    let names = store.list_names()?;
    assert_eq!(resolve_name("prodction", &names), "production");
    assert_eq!(resolve_name("stagign", &names), "staging");

    // Исправленное имя читается из store как обычно.
    let resolved = resolve_name("prodction", &names);
    assert!(store.read(&resolved).is_ok());
    Ok(())
}
