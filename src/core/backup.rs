use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::store::StudentStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or with `compress` write it
    /// into a .zip archive next to `dest_file`.
    ///
    /// Returns the path of the final artifact, or `None` when the user
    /// declined to overwrite an existing file.
    pub fn backup(
        store: &StudentStore,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = crate::utils::path::absolutize(dest_file)?;

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Final artifact: the copy itself, or its .zip sibling
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };

        if same_file(src, &target)? {
            return Err(AppError::Other(format!(
                "Backup destination is the database itself: {}",
                target.display()
            )));
        }

        // 3️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        // 4️⃣ Existing destination → ask, unless forced
        if target.exists()
            && !force
            && !confirm(format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            ))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 5️⃣ Copy database, or stream it straight into the archive
        let final_path = if compress {
            let entry_name = if dest == target {
                crate::utils::path::display_name(src)
            } else {
                crate::utils::path::display_name(&dest)
            };
            compress_backup(src, &target, &entry_name)?
        } else {
            fs::copy(src, &target)?;
            target
        };
        success(format!("Backup created: {}", final_path.display()));

        // 6️⃣ Log in DB
        ttlog_soft(
            &store.pool().conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// `true` when `dest` already exists and is the same file as `src`.
fn same_file(src: &Path, dest: &Path) -> AppResult<bool> {
    if !dest.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(src)? == fs::canonicalize(dest)?)
}

/// Write `src` into a new .zip archive at `zip_path` as a single entry.
fn compress_backup(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<PathBuf> {
    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
