//! Типизированные ошибки хранилища.
//!
//! Бинарник различает их по downcast и выбирает код выхода:
//! NotFound → 2, всё остальное → 1.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Запрошенного снапшота нет на диске.
    #[error("snapshot '{name}' not found")]
    NotFound { name: String },

    /// Файл снапшота существует, но не разбирается как JSON нужной формы.
    #[error("corrupt snapshot record {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Имя содержит небезопасные для файловой системы символы.
    #[error("invalid snapshot name '{name}'")]
    InvalidName { name: String },
}
