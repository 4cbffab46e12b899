// ============================================================
// Layer 6: Array Dump Writer
// ============================================================
// Writes one rendered array followed by a newline to a file.
//
// Two modes:
//   Truncate (default) → the file holds exactly this run's dump
//   Append             → the dump is added after whatever the
//                        file already contains, so running twice
//                        leaves two concatenated dumps
//
// The file is created if it does not exist in either mode, and
// is closed again as soon as the dump is written.

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use crate::domain::traits::ArrayText;
use crate::error::{ConvertError, ConvertResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

impl WriteMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            Self::Append
        } else {
            Self::Truncate
        }
    }
}

pub struct ArrayWriter {
    mode: WriteMode,
    max_line_width: usize,
}

impl ArrayWriter {
    pub fn new(mode: WriteMode, max_line_width: usize) -> Self {
        Self { mode, max_line_width }
    }

    /// Render `array` and write it, plus a trailing newline, to `path`.
    pub fn write(&self, path: impl AsRef<Path>, array: &impl ArrayText) -> ConvertResult<()> {
        let path = path.as_ref();

        if self.mode == WriteMode::Append && path.metadata().map(|m| m.len() > 0).unwrap_or(false) {
            tracing::warn!(
                "Appending to non-empty '{}'; the file will hold more than one dump",
                path.display()
            );
        }

        let text = array.array_text(self.max_line_width);

        let mut options = OpenOptions::new();
        options.create(true);
        match self.mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };

        let file = options
            .open(path)
            .map_err(|e| ConvertError::io(path, e))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{text}").map_err(|e| ConvertError::io(path, e))?;
        out.flush().map_err(|e| ConvertError::io(path, e))?;

        tracing::debug!(
            "Wrote {} bytes to '{}' ({:?})",
            text.len() + 1,
            path.display(),
            self.mode
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::LabelVector;
    use std::fs;

    #[test]
    fn test_truncate_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.txt");
        let writer = ArrayWriter::new(WriteMode::Truncate, 80);

        writer.write(&path, &LabelVector::from(vec![0, 1, 2])).unwrap();
        writer.write(&path, &LabelVector::from(vec![2, 2])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[2,2]\n");
    }

    #[test]
    fn test_append_concatenates_dumps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.txt");
        let writer = ArrayWriter::new(WriteMode::Append, 80);

        writer.write(&path, &LabelVector::from(vec![0, 1])).unwrap();
        writer.write(&path, &LabelVector::from(vec![0, 1])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[0,1]\n[0,1]\n");
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("y.txt");
        let writer = ArrayWriter::new(WriteMode::default(), 80);

        let err = writer.write(&path, &LabelVector::new()).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn test_append_flag() {
        assert_eq!(WriteMode::from_append_flag(true), WriteMode::Append);
        assert_eq!(WriteMode::from_append_flag(false), WriteMode::Truncate);
    }
}
