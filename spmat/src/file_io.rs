//! File I/O for matrix text files
//!
//! This module reads and writes the line-oriented text layout defined in
//! [`spmat_core::format`]. Files are opened, fully consumed or written, and
//! closed before each call returns.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use spmat_core::format::{self, ParsedMatrix};
use spmat_core::SparseMatrix;
use tracing::debug;

use crate::error::{Error, Result};

/// Reader and writer for matrix text files
pub struct MatrixFile;

impl MatrixFile {
    /// Read and parse a matrix file without building the matrix
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<ParsedMatrix> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let parsed = format::parse_str(&text)?;
        debug!(
            path = %path.display(),
            rows = parsed.rows,
            cols = parsed.cols,
            entries = parsed.entries.len(),
            "parsed matrix file"
        );
        Ok(parsed)
    }

    /// Load a matrix from `path`
    pub fn read<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
        Ok(Self::parse(path)?.into_matrix()?)
    }

    /// Write `matrix` to `path`, replacing any existing file
    pub fn write<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(format::to_text(matrix).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(path, e))?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "wrote matrix file"
        );
        Ok(())
    }
}

/// File-backed construction and persistence for [`SparseMatrix`]
pub trait SparseMatrixFileExt: Sized {
    /// Load a matrix from a text file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save this matrix as a text file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl SparseMatrixFileExt for SparseMatrix {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        MatrixFile::read(path)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        MatrixFile::write(self, path)
    }
}
