#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod config;
pub mod error;
pub mod snapshot;

// Операции над снапшотами
pub mod store;    // src/store.rs — <store_dir>/<name>.json
pub mod collect;  // src/collect.rs — probes + Collector
pub mod resolve;  // src/resolve.rs — исправление опечаток в именах
pub mod compare;  // src/compare.rs — flatten + diff
pub mod report;   // src/report.rs — текстовый вывод

// CLI (команды живут в библиотеке, чтобы их видели интеграционные тесты)
pub mod cli;      // src/cli.rs + src/cli/commands.rs

// Удобные реэкспорты
pub use config::EnvSnapConfig;
pub use error::StoreError;
pub use snapshot::Snapshot;
pub use store::SnapshotStore;
pub use collect::{
    BranchProvider, Collector, EnvScope, GitBranchProvider, NullBranchProvider,
    NullPackageLister, PackageLister, PipPackageLister,
};
pub use compare::{compare, flatten, DiffEntry};
pub use resolve::resolve_name;
