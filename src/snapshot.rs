//! Snapshot — единственная сущность: слепок окружения на момент save.
//!
//! Формат файла (pretty JSON, один объект на снапшот):
//! {
//!   "timestamp": "2026-08-04T12:34:56.789012",
//!   "python_version": "Python 3.11.4",
//!   "virtualenv": "/home/user/venv"            | "none",
//!   "packages": ["name==version", ...],
//!   "git_branch": "main"                       | "none",
//!   "env_vars": { "PATH": "...", ... }
//! }
//!
//! Имя снапшота в записи не хранится — это file stem.
//! Все поля имеют serde default, поэтому запись со старым/усечённым набором
//! полей читается с документированными sentinel-значениями, а не падает.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{SENTINEL_NONE, SENTINEL_UNKNOWN};

fn default_none() -> String {
    SENTINEL_NONE.to_string()
}

fn default_unknown() -> String {
    SENTINEL_UNKNOWN.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Момент создания, ISO-8601, локальное время. Неизменяем после save.
    #[serde(default)]
    pub timestamp: String,

    /// Первая строка version-баннера интерпретатора.
    #[serde(default = "default_unknown")]
    pub python_version: String,

    /// Путь активного virtualenv или "none".
    #[serde(default = "default_none")]
    pub virtualenv: String,

    /// Пакеты в формате name==version, порядок как у pip freeze.
    #[serde(default)]
    pub packages: Vec<String>,

    /// Текущая ветка или "none".
    #[serde(default = "default_none")]
    pub git_branch: String,

    /// Сохранённые переменные окружения.
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
}
