//! report — чистое текстовое представление записей.
//!
//! Никакого I/O: функции строят String, печатает вызывающая сторона.
//! Списки пакетов во view и report обрезаются до PACKAGE_DISPLAY_LIMIT
//! с маркером усечения, когда пакетов больше.

use crate::compare::DiffEntry;
use crate::consts::PACKAGE_DISPLAY_LIMIT;
use crate::snapshot::Snapshot;

/// Полный вид одной записи.
pub fn render_view(name: &str, snap: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Snapshot '{name}'\n"));
    out.push_str(&format!("  timestamp      = {}\n", snap.timestamp));
    out.push_str(&format!("  python_version = {}\n", snap.python_version));
    out.push_str(&format!("  virtualenv     = {}\n", snap.virtualenv));
    out.push_str(&format!("  git_branch     = {}\n", snap.git_branch));
    out.push_str(&format!("  env_vars ({}):\n", snap.env_vars.len()));
    for (k, v) in &snap.env_vars {
        out.push_str(&format!("    {k} = {v}\n"));
    }
    out.push_str(&format!("  packages ({} installed):\n", snap.packages.len()));
    push_packages(&mut out, &snap.packages);
    out
}

/// Сводный отчёт: скаляры + счётчики + верх списка пакетов.
pub fn render_report(name: &str, snap: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Summary report for '{name}'\n"));
    out.push_str(&format!("  timestamp      = {}\n", snap.timestamp));
    out.push_str(&format!("  python_version = {}\n", snap.python_version));
    out.push_str(&format!("  git_branch     = {}\n", snap.git_branch));
    out.push_str(&format!("  virtualenv     = {}\n", snap.virtualenv));
    out.push_str(&format!("  env_vars       = {}\n", snap.env_vars.len()));
    out.push_str(&format!("  packages       = {}\n", snap.packages.len()));
    out.push_str("  top packages:\n");
    push_packages(&mut out, &snap.packages);
    out
}

/// Строка для `list`: имя + момент создания.
pub fn render_list_line(name: &str, snap: &Snapshot) -> String {
    format!("{name:<20} {}", snap.timestamp)
}

/// Отчёт о различиях двух записей.
pub fn render_diff(name1: &str, name2: &str, diff: &[DiffEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Comparing '{name1}' vs '{name2}':\n"));
    if diff.is_empty() {
        out.push_str("  no differences\n");
        return out;
    }
    for entry in diff {
        out.push_str(&format!("{}\n", entry.key));
        out.push_str(&format!("  - {name1}: {}\n", entry.left));
        out.push_str(&format!("  - {name2}: {}\n", entry.right));
    }
    out
}

/// Строки `export K=V` для restore --env-vars (для eval во внешнем шелле;
/// сами мы окружение не трогаем).
pub fn render_exports(snap: &Snapshot) -> String {
    let mut out = String::new();
    for (k, v) in &snap.env_vars {
        out.push_str(&format!("export {k}={v}\n"));
    }
    out
}

fn push_packages(out: &mut String, packages: &[String]) {
    for pkg in packages.iter().take(PACKAGE_DISPLAY_LIMIT) {
        out.push_str(&format!("    - {pkg}\n"));
    }
    if packages.len() > PACKAGE_DISPLAY_LIMIT {
        out.push_str(&format!(
            "    ... ({} more)\n",
            packages.len() - PACKAGE_DISPLAY_LIMIT
        ));
    }
}
