//! Общие константы хранилища, коллектора и отображения.

// -------- Store --------
pub const SNAPSHOT_EXT: &str = "json";
pub const DEFAULT_STORE_DIRNAME: &str = ".envsnap";

// -------- Sentinels --------
/// virtualenv/git_branch при отсутствии значения.
pub const SENTINEL_NONE: &str = "none";
/// python_version, если интерпретатор недоступен.
pub const SENTINEL_UNKNOWN: &str = "unknown";
/// Отсутствующий ключ в diff.
pub const SENTINEL_MISSING: &str = "<missing>";

// -------- Collector --------
pub const DEFAULT_PYTHON: &str = "python3";
/// Переменные окружения, попадающие в снапшот по умолчанию.
/// Полное окружение — только по явному --full-env (может содержать секреты).
pub const ENV_ALLOW_LIST: &[&str] = &["PATH", "DEBUG", "API_KEY", "SECRET_KEY"];

// -------- Resolver --------
/// Минимальное сходство (0..1), при котором имя считается исправимой опечаткой.
pub const RESOLVE_CUTOFF: f32 = 0.3;

// -------- Display --------
/// view/report показывают не более этого числа пакетов.
pub const PACKAGE_DISPLAY_LIMIT: usize = 10;
