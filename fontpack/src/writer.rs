/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::{Error, Result};

pub fn write_to<W: Write>(mut writer: W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}

/// Creates or truncates `path` and writes `bytes` to it.
///
/// Nothing is cleaned up if a write fails halfway.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    write_to(BufWriter::new(file), bytes).map_err(io_err)
}
