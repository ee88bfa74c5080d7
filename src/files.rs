use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Path argument meaning stdin or stdout.
pub const STDIO: &str = "-";

/// Where JSON input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl From<&str> for Input {
    fn from(arg: &str) -> Self {
        if arg == STDIO {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{path:?}"),
        }
    }
}

impl Input {
    /// Read the whole input into `strbuf`, replacing its contents.
    pub fn read_to_buf(&self, strbuf: &mut String) -> Result<()> {
        strbuf.clear();
        match self {
            Self::Stdin => {
                io::stdin().lock().read_to_string(strbuf)?;
            }
            Self::File(path) => {
                let cap = fs::metadata(path)?.len() as usize;
                if cap > strbuf.capacity() {
                    strbuf.reserve(cap);
                }
                let mut f = fs::File::open(path)?;
                f.read_to_string(strbuf)?;
            }
        }
        Ok(())
    }

    /// Read and decode a JSON value, using `strbuf` as scratch space.
    pub fn read_json<T: DeserializeOwned>(&self, strbuf: &mut String) -> Result<T> {
        self.read_to_buf(strbuf)
            .with_context(|| format!("while reading {self}"))?;
        let val = serde_json::from_str(strbuf)
            .with_context(|| format!("while decoding JSON from {self}"))?;
        Ok(val)
    }
}

/// Where JSON output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl From<Option<&str>> for Output {
    fn from(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STDIO) => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

impl Output {
    /// Encode `val` as JSON followed by a newline.
    pub fn write_json<T: Serialize>(&self, val: &T, pretty: bool) -> Result<()> {
        match self {
            Self::Stdout => write_json_to(&mut io::stdout().lock(), val, pretty),
            Self::File(path) => {
                let f = fs::File::create(path)
                    .with_context(|| format!("while creating output file {path:?}"))?;
                let mut writer = io::BufWriter::new(f);
                write_json_to(&mut writer, val, pretty)?;
                writer.flush()?;
                Ok(())
            }
        }
    }
}

fn write_json_to<W: Write, T: Serialize>(writer: &mut W, val: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, val)?;
    } else {
        serde_json::to_writer(&mut *writer, val)?;
    }
    writeln!(writer)?;
    Ok(())
}
