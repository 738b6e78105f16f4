//! store — отображение имени снапшота на <store_dir>/<name>.json.
//!
//! Каталог создаётся лениво и идемпотентно при первой записи; чтение и
//! листинг при отсутствующем каталоге просто сообщают "ничего нет".
//! Запись — pretty JSON через tmp+rename (перезапись существующего имени
//! является сознательной заменой целиком). Блокировок нет: одновременные
//! save одного имени разрешаются по принципу «последний победил».

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::consts::SNAPSHOT_EXT;
use crate::error::StoreError;
use crate::snapshot::Snapshot;

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Привязать хранилище к каталогу из конфигурации. Без I/O.
    pub fn open(cfg: &crate::config::EnvSnapConfig) -> Self {
        Self {
            dir: cfg.resolve_store_dir(),
        }
    }

    /// Привязать хранилище к явному каталогу. Без I/O.
    pub fn open_at<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Корневой каталог хранилища.
    pub fn dir_path(&self) -> &Path {
        &self.dir
    }

    /// Детерминированный путь записи: <store_dir>/<name>.json.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SNAPSHOT_EXT}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Сериализовать запись (pretty JSON) и атомарно положить под именем.
    /// Существующий файл перезаписывается.
    pub fn write(&self, name: &str, snap: &Snapshot) -> Result<PathBuf> {
        validate_name(name)?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("create store dir {}", self.dir.display()))?;
        }

        let path = self.path_for(name);
        let tmp = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(snap).context("serialize snapshot record")?;
        {
            let mut f = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp)
                .with_context(|| format!("open tmp record {}", tmp.display()))?;
            f.write_all(json.as_bytes())?;
            let _ = f.sync_all();
        }
        fs::rename(&tmp, &path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
        Ok(path)
    }

    /// Прочитать запись по имени.
    ///
    /// Отсутствующий файл → StoreError::NotFound, невалидный JSON →
    /// StoreError::Corrupt (оба различимы через downcast).
    pub fn read(&self, name: &str) -> Result<Snapshot> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            }
            .into());
        }
        let buf = fs::read_to_string(&path)
            .with_context(|| format!("read snapshot record {}", path.display()))?;
        let snap: Snapshot = serde_json::from_str(&buf).map_err(|e| StoreError::Corrupt {
            path: path.clone(),
            source: e,
        })?;
        Ok(snap)
    }

    /// Все имена с сохранённой записью (по файлам в каталоге).
    /// Порядок — как вернул каталог, не гарантируется.
    pub fn list_names(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for e in
            fs::read_dir(&self.dir).with_context(|| format!("read_dir {}", self.dir.display()))?
        {
            let p = e?.path();
            if p.extension().map(|ext| ext == SNAPSHOT_EXT).unwrap_or(false) {
                if let Some(stem) = p.file_stem().and_then(|s| s.to_str()) {
                    out.push(stem.to_string());
                }
            }
        }
        Ok(out)
    }
}

/// Имя должно быть безопасным токеном файловой системы. Другой валидации нет.
fn validate_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..");
    if bad {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert!(validate_name("dev").is_ok());
        assert!(validate_name("dev-2026_08").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(".hidden").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("a..b").is_err());
    }
}
