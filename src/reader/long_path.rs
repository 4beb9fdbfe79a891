//! 長いパスの回避
//!
//! Windowsでは拡張長パス形式（`\\?\`、UNCは `\\?\UNC\`）でアクセスし、
//! 短い名前でスクラッチディレクトリへ退避コピーしてから読み込む。

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 拡張長パス形式に変換
pub fn extended_length_form(path: &str) -> String {
    if path.starts_with(r"\\?\") {
        path.to_string()
    } else if let Some(rest) = path.strip_prefix(r"\\") {
        format!(r"\\?\UNC\{}", rest)
    } else {
        format!(r"\\?\{}", path)
    }
}

/// 再試行時にアクセスするパス（Windows以外はそのまま）
fn retry_source(path: &Path) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(extended_length_form(&path.to_string_lossy()))
    } else {
        path.to_path_buf()
    }
}

/// 退避コピー用の一時ディレクトリ（破棄時に中身ごと削除）
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("geomech-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを退避コピー
    ///
    /// コピー名は `<index>.<拡張子>`。拡張子は形式判定のため維持する。
    pub fn copy_aside(&self, index: usize, path: &Path) -> io::Result<PathBuf> {
        let name = match path.extension() {
            Some(ext) => format!("{:06}.{}", index, ext.to_string_lossy().to_lowercase()),
            None => format!("{:06}", index),
        };
        let target = self.dir.path().join(name);
        std::fs::copy(retry_source(path), &target)?;
        Ok(target)
    }

    /// 明示的に削除（エラーを返す）
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}
