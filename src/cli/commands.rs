//! Реализация подкоманд. Живёт в библиотеке, чтобы интеграционные тесты
//! могли вызывать команды напрямую, без спавна бинарника.

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::collect::{Collector, EnvScope};
use crate::compare;
use crate::config::EnvSnapConfig;
use crate::report;
use crate::resolve::resolve_name;
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;

/// Исправить опечатку в имени по существующим записям.
/// Листинг недоступен → кандидатов нет, имя проходит как есть.
fn resolved(store: &SnapshotStore, name: &str) -> String {
    let names = store.list_names().unwrap_or_default();
    let r = resolve_name(name, &names);
    if r != name {
        debug!("resolved snapshot name '{name}' -> '{r}'");
    }
    r
}

pub fn cmd_save(cfg: &EnvSnapConfig, name: &str, full_env: bool) -> Result<()> {
    let scope = if full_env {
        EnvScope::Full
    } else {
        EnvScope::AllowList
    };
    let snap = Collector::from_config(cfg).collect(scope);
    let store = SnapshotStore::open(cfg);
    let path = store.write(name, &snap)?;
    println!("Saved snapshot '{}' -> {}", name, path.display());
    Ok(())
}

#[derive(Serialize)]
struct ListEntry {
    name: String,
    timestamp: String,
}

pub fn cmd_list(cfg: &EnvSnapConfig, json: bool) -> Result<()> {
    let store = SnapshotStore::open(cfg);
    let names = store.list_names()?;

    if json {
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let snap = store.read(&name)?;
            entries.push(ListEntry {
                name,
                timestamp: snap.timestamp,
            });
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for name in names {
        let snap = store.read(&name)?;
        println!("{}", report::render_list_line(&name, &snap));
    }
    Ok(())
}

pub fn cmd_view(cfg: &EnvSnapConfig, name: &str, json: bool) -> Result<()> {
    let store = SnapshotStore::open(cfg);
    let name = resolved(&store, name);
    let snap = store.read(&name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", report::render_view(&name, &snap));
    }
    Ok(())
}

pub fn cmd_diff(cfg: &EnvSnapConfig, name1: &str, name2: &str, json: bool) -> Result<()> {
    let store = SnapshotStore::open(cfg);
    let name1 = resolved(&store, name1);
    let name2 = resolved(&store, name2);
    let snap1 = store.read(&name1)?;
    let snap2 = store.read(&name2)?;

    let diff = compare::compare(&snap1, &snap2);
    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", report::render_diff(&name1, &name2, &diff));
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportSummary {
    name: String,
    timestamp: String,
    python_version: String,
    git_branch: String,
    virtualenv: String,
    env_var_count: usize,
    package_count: usize,
}

impl ReportSummary {
    fn new(name: String, snap: &Snapshot) -> Self {
        Self {
            name,
            timestamp: snap.timestamp.clone(),
            python_version: snap.python_version.clone(),
            git_branch: snap.git_branch.clone(),
            virtualenv: snap.virtualenv.clone(),
            env_var_count: snap.env_vars.len(),
            package_count: snap.packages.len(),
        }
    }
}

pub fn cmd_report(cfg: &EnvSnapConfig, name: &str, json: bool) -> Result<()> {
    let store = SnapshotStore::open(cfg);
    let name = resolved(&store, name);
    let snap = store.read(&name)?;

    if json {
        let summary = ReportSummary::new(name, &snap);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_report(&name, &snap));
    }
    Ok(())
}

pub fn cmd_restore(cfg: &EnvSnapConfig, name: &str, env_vars: bool) -> Result<()> {
    // Осознанный no-op без флага: restore сам ничего не меняет,
    // переменные применяет внешний шелл через eval вывода.
    if !env_vars {
        println!("nothing to do: pass --env-vars to emit export lines for '{name}'");
        return Ok(());
    }

    let store = SnapshotStore::open(cfg);
    let name = resolved(&store, name);
    let snap = store.read(&name)?;
    print!("{}", report::render_exports(&snap));
    Ok(())
}
