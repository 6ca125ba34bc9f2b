use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

pub mod jsonl;
pub mod text;

/// Create `<out_dir>/<name>_<YYYYmmdd_HHMMSS>.<ext>` without touching an
/// existing file: a taken name gets a `_2`, `_3`, ... suffix.
pub fn create_timestamped(
    out_dir: &Path,
    name: &str,
    ext: &str,
    at: NaiveDateTime,
) -> anyhow::Result<(PathBuf, File)> {
    std::fs::create_dir_all(out_dir)?;

    let stem = format!("{name}_{}", at.format("%Y%m%d_%H%M%S"));
    let mut suffix = 1u32;
    loop {
        let file_name = if suffix == 1 {
            format!("{stem}.{ext}")
        } else {
            format!("{stem}_{suffix}.{ext}")
        };
        let path = out_dir.join(file_name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => suffix += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn taken_names_get_a_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();

        let (first, _) = create_timestamped(dir.path(), "s", "txt", at).unwrap();
        std::fs::write(&first, "keep me").unwrap();
        let (second, _) = create_timestamped(dir.path(), "s", "txt", at).unwrap();
        let (third, _) = create_timestamped(dir.path(), "s", "txt", at).unwrap();

        assert_eq!(first, dir.path().join("s_20240309_140507.txt"));
        assert_eq!(second, dir.path().join("s_20240309_140507_2.txt"));
        assert_eq!(third, dir.path().join("s_20240309_140507_3.txt"));
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "keep me");
    }
}
