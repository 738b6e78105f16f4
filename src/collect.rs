//! collect — сбор текущего состояния окружения в Snapshot.
//!
//! Внешние инструменты смоделированы как capability-трейты с двумя
//! реализациями: настоящей (shell out) и null (пустой результат), чтобы
//! graceful degradation проверялся без pip/git.
//!
//! Политика отказов: capture не падает никогда. Недоступный pip → пустой
//! список пакетов, недоступный git → "none", недоступный интерпретатор →
//! "unknown". Деградация логируется на debug и не является ошибкой.

use std::collections::BTreeMap;
use std::process::Command;

use log::debug;

use crate::config::EnvSnapConfig;
use crate::consts::{ENV_ALLOW_LIST, SENTINEL_NONE, SENTINEL_UNKNOWN};
use crate::snapshot::Snapshot;

// ---------------------- capability traits ----------------------

pub trait PackageLister {
    /// Список установленных пакетов (name==version), порядок инструмента.
    fn list_packages(&self) -> Vec<String>;
}

pub trait BranchProvider {
    /// Текущая ветка или None, если недоступна/не репозиторий.
    fn current_branch(&self) -> Option<String>;
}

/// Настоящий листер: `<python> -m pip freeze`.
pub struct PipPackageLister {
    python: String,
}

impl PipPackageLister {
    pub fn new<S: Into<String>>(python: S) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl PackageLister for PipPackageLister {
    fn list_packages(&self) -> Vec<String> {
        match Command::new(&self.python).args(["-m", "pip", "freeze"]).output() {
            Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
                .lines()
                .map(|l| l.trim_end().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
            Ok(out) => {
                debug!("collect: pip freeze exited with {}", out.status);
                Vec::new()
            }
            Err(e) => {
                debug!("collect: pip freeze failed to spawn: {e}");
                Vec::new()
            }
        }
    }
}

pub struct NullPackageLister;

impl PackageLister for NullPackageLister {
    fn list_packages(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Настоящий провайдер ветки: `git rev-parse --abbrev-ref HEAD`.
pub struct GitBranchProvider;

impl BranchProvider for GitBranchProvider {
    fn current_branch(&self) -> Option<String> {
        let out = Command::new("git")
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .output()
            .ok()?;
        if !out.status.success() {
            debug!("collect: git rev-parse exited with {}", out.status);
            return None;
        }
        let branch = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if branch.is_empty() {
            None
        } else {
            Some(branch)
        }
    }
}

pub struct NullBranchProvider;

impl BranchProvider for NullBranchProvider {
    fn current_branch(&self) -> Option<String> {
        None
    }
}

// ---------------------- env scope ----------------------

/// Какие переменные окружения попадают в снапшот.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvScope {
    /// Фиксированный allow-list (ENV_ALLOW_LIST); отсутствующие — "".
    AllowList,
    /// Всё окружение процесса. Только по явному запросу: может содержать секреты.
    Full,
}

// ---------------------- collector ----------------------

pub struct Collector<P: PackageLister, B: BranchProvider> {
    python: String,
    packages: P,
    branches: B,
}

impl Collector<PipPackageLister, GitBranchProvider> {
    /// Коллектор с настоящими probe-инструментами из конфигурации.
    pub fn from_config(cfg: &EnvSnapConfig) -> Self {
        Self {
            python: cfg.python.clone(),
            packages: PipPackageLister::new(&cfg.python),
            branches: GitBranchProvider,
        }
    }
}

impl<P: PackageLister, B: BranchProvider> Collector<P, B> {
    pub fn new<S: Into<String>>(python: S, packages: P, branches: B) -> Self {
        Self {
            python: python.into(),
            packages,
            branches,
        }
    }

    /// Собрать снапшот. Не падает: каждый недоступный источник деградирует
    /// до пустого/sentinel-значения.
    pub fn collect(&self, scope: EnvScope) -> Snapshot {
        Snapshot {
            timestamp: now_iso8601(),
            python_version: self.python_version(),
            virtualenv: std::env::var("VIRTUAL_ENV")
                .unwrap_or_else(|_| SENTINEL_NONE.to_string()),
            packages: self.packages.list_packages(),
            git_branch: self
                .branches
                .current_branch()
                .unwrap_or_else(|| SENTINEL_NONE.to_string()),
            env_vars: capture_env(scope),
        }
    }

    /// Первая строка version-баннера. Python 3 печатает его в stdout,
    /// старые интерпретаторы — в stderr; берём что есть.
    fn python_version(&self) -> String {
        let out = match Command::new(&self.python).arg("--version").output() {
            Ok(out) if out.status.success() => out,
            Ok(out) => {
                debug!("collect: {} --version exited with {}", self.python, out.status);
                return SENTINEL_UNKNOWN.to_string();
            }
            Err(e) => {
                debug!("collect: {} --version failed to spawn: {e}", self.python);
                return SENTINEL_UNKNOWN.to_string();
            }
        };
        let banner = if out.stdout.iter().any(|b| !b.is_ascii_whitespace()) {
            String::from_utf8_lossy(&out.stdout).into_owned()
        } else {
            String::from_utf8_lossy(&out.stderr).into_owned()
        };
        match banner.lines().next().map(str::trim) {
            Some(line) if !line.is_empty() => line.to_string(),
            _ => SENTINEL_UNKNOWN.to_string(),
        }
    }
}

fn capture_env(scope: EnvScope) -> BTreeMap<String, String> {
    match scope {
        EnvScope::AllowList => ENV_ALLOW_LIST
            .iter()
            .map(|k| (k.to_string(), std::env::var(k).unwrap_or_default()))
            .collect(),
        EnvScope::Full => std::env::vars().collect(),
    }
}

/// Локальное время в ISO-8601 с микросекундами (как datetime.isoformat()).
fn now_iso8601() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn null_collector() -> Collector<NullPackageLister, NullBranchProvider> {
        // Заведомо несуществующий интерпретатор: версия должна деградировать.
        Collector::new("envsnap-no-such-python", NullPackageLister, NullBranchProvider)
    }

    #[test]
    fn null_probes_degrade_to_sentinels() {
        let snap = null_collector().collect(EnvScope::AllowList);
        assert!(snap.packages.is_empty(), "null lister must yield no packages");
        assert_eq!(snap.git_branch, SENTINEL_NONE);
        assert_eq!(snap.python_version, SENTINEL_UNKNOWN);
    }

    #[test]
    fn allow_list_scope_captures_exactly_the_listed_names() {
        let snap = null_collector().collect(EnvScope::AllowList);
        let keys: Vec<&str> = snap.env_vars.keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = ENV_ALLOW_LIST.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected, "allow-list capture must match the fixed set");
    }

    #[test]
    fn full_scope_includes_arbitrary_vars() {
        std::env::set_var("ENVSNAP_TEST_MARKER", "here");
        let snap = null_collector().collect(EnvScope::Full);
        assert_eq!(
            snap.env_vars.get("ENVSNAP_TEST_MARKER").map(String::as_str),
            Some("here")
        );
        std::env::remove_var("ENVSNAP_TEST_MARKER");
    }

    #[test]
    fn timestamps_are_monotonic_in_string_order() {
        let a = null_collector().collect(EnvScope::AllowList).timestamp;
        let b = null_collector().collect(EnvScope::AllowList).timestamp;
        // ISO-8601 сортируется лексикографически.
        assert!(b >= a, "later capture must not sort before earlier: {a} vs {b}");
    }
}
