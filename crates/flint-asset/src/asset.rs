//! Readable and writable asset handles

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::types::WriteMode;

/// An opened asset that can be read at arbitrary offsets
pub trait Asset: Send + Sync {
    /// Size of the asset in bytes
    fn size(&self) -> u64;

    /// Read into `buf` starting at `offset`, returning the number of bytes read
    fn read(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;

    /// Read the whole asset
    fn buffer(&self) -> io::Result<Vec<u8>> {
        let mut data = vec![0u8; self.size() as usize];
        let mut filled = 0;
        while filled < data.len() {
            let n = self.read(&mut data[filled..], filled as u64)?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        data.truncate(filled);
        Ok(data)
    }
}

/// An opened asset that can be written at arbitrary offsets
pub trait WritableAsset: Send + Sync {
    /// Write `buf` at `offset`, returning the number of bytes written
    fn write(&self, buf: &[u8], offset: u64) -> io::Result<usize>;

    /// Flush everything to the underlying storage
    fn close(&self) -> io::Result<()>;
}

/// Asset backed by a file on disk
pub struct FileAsset {
    file: Mutex<File>,
    size: u64,
}

impl FileAsset {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            file: Mutex::new(file),
            size,
        })
    }
}

impl Asset for FileAsset {
    fn size(&self) -> u64 {
        self.size
    }

    fn read(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "asset lock poisoned"))?;
        file.seek(SeekFrom::Start(offset))?;
        file.read(buf)
    }
}

/// Writable asset backed by a file on disk
pub struct FileWritableAsset {
    file: Mutex<File>,
}

impl FileWritableAsset {
    /// Open `path` for writing, creating parent directories as needed
    pub fn create<P: AsRef<Path>>(path: P, mode: WriteMode) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(mode == WriteMode::Replace)
            .open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl WritableAsset for FileWritableAsset {
    fn write(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "asset lock poisoned"))?;
        file.seek(SeekFrom::Start(offset))?;
        file.write(buf)
    }

    fn close(&self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "asset lock poisoned"))?;
        file.flush()?;
        file.sync_all()
    }
}
