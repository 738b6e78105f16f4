//! compare — сведение записи к одноуровневой карте и diff двух записей.
//!
//! Правила flatten:
//! - каждый пакет p            → "package:<p>" = "installed"
//! - каждая переменная k=v     → "env_vars:<k>" = v
//! - скалярные поля            → имя поля = значение
//!
//! Namespacing "<поле>:<ключ>" делает ключи инъективными: разные пары
//! (поле, ключ) не склеиваются.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::consts::SENTINEL_MISSING;
use crate::snapshot::Snapshot;

/// Одноуровневое представление записи.
pub fn flatten(snap: &Snapshot) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    out.insert("timestamp".to_string(), snap.timestamp.clone());
    out.insert("python_version".to_string(), snap.python_version.clone());
    out.insert("virtualenv".to_string(), snap.virtualenv.clone());
    out.insert("git_branch".to_string(), snap.git_branch.clone());
    for p in &snap.packages {
        out.insert(format!("package:{p}"), "installed".to_string());
    }
    for (k, v) in &snap.env_vars {
        out.insert(format!("env_vars:{k}"), v.clone());
    }
    out
}

/// Один различающийся ключ; отсутствующая сторона несёт "<missing>".
#[derive(Debug, Clone, Serialize)]
pub struct DiffEntry {
    pub key: String,
    pub left: String,
    pub right: String,
}

/// Все ключи, значения которых различаются между двумя записями,
/// в лексикографическом порядке. Пусто тогда и только тогда, когда
/// flatten-представления идентичны.
pub fn compare(a: &Snapshot, b: &Snapshot) -> Vec<DiffEntry> {
    let fa = flatten(a);
    let fb = flatten(b);

    let keys: BTreeSet<&String> = fa.keys().chain(fb.keys()).collect();

    let mut out = Vec::new();
    for key in keys {
        let left = fa.get(key).map(String::as_str).unwrap_or(SENTINEL_MISSING);
        let right = fb.get(key).map(String::as_str).unwrap_or(SENTINEL_MISSING);
        if left != right {
            out.push(DiffEntry {
                key: key.clone(),
                left: left.to_string(),
                right: right.to_string(),
            });
        }
    }
    out
}
