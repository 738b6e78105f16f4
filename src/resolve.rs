//! resolve — исправление опечаток в именах снапшотов.
//!
//! Best-effort и без побочных эффектов: берём имя с наилучшим посимвольным
//! сходством, если оно не ниже RESOLVE_CUTOFF, иначе возвращаем ввод как
//! есть. Несовпадение не ошибка — решение "not found" остаётся за store.

use similar::TextDiff;

use crate::consts::RESOLVE_CUTOFF;

/// Подобрать ближайшее существующее имя или вернуть `input` без изменений.
/// При равном сходстве побеждает более ранний кандидат.
pub fn resolve_name(input: &str, candidates: &[String]) -> String {
    let mut best: Option<(f32, &str)> = None;
    for cand in candidates {
        let ratio = TextDiff::from_chars(input, cand.as_str()).ratio();
        match best {
            Some((r, _)) if ratio <= r => {}
            _ => best = Some((ratio, cand)),
        }
    }
    match best {
        Some((ratio, name)) if ratio >= RESOLVE_CUTOFF => name.to_string(),
        _ => input.to_string(),
    }
}
