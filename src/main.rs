use env_logger::{Builder, Env};
use log::error;

use EnvSnap::StoreError;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug envsnap save dev
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = EnvSnap::cli::run() {
        // Ненайденный снапшот — ожидаемый исход: одна строка и код 2.
        if let Some(nf @ StoreError::NotFound { .. }) = e.downcast_ref::<StoreError>() {
            eprintln!("{nf}");
            std::process::exit(2);
        }
        error!("{:?}", e);
        std::process::exit(1);
    }
}
