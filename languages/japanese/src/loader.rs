use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use vibrato::Dictionary;
use yomu_core::AnalyzerError;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load a compiled vibrato system dictionary, decompressing `.zst` files
    pub fn load_from_file(path: &Path) -> Result<Dictionary, AnalyzerError> {
        tracing::info!("Loading system dictionary from: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalyzerError::DictionaryNotFound(path.display().to_string()),
            _ => io_error(path, e),
        })?;

        let dict = if is_zstd(path) {
            let decoder = zstd::Decoder::new(file).map_err(|e| io_error(path, e))?;
            Dictionary::read(decoder)
        } else {
            Dictionary::read(BufReader::new(file))
        }
        .map_err(|e| AnalyzerError::InvalidDictionary(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded system dictionary from {}", path.display());
        Ok(dict)
    }
}

fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

fn io_error(path: &Path, e: std::io::Error) -> AnalyzerError {
    AnalyzerError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
