use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const INPUT_PROMPT: &str = "Please enter the path to the file containing IPs: ";

/// Asks for the input path on `writer` and reads one trimmed line.
pub fn prompt_input_path<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> std::io::Result<String> {
    write!(writer, "{}", INPUT_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
