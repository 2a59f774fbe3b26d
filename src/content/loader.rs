//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, GameplayConfig, LevelDef};
use super::library::LevelLibrary;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load all content from assets/data into a LevelLibrary plus gameplay
/// tuning. Returns errors for any files that fail to load; callers decide
/// whether to fall back to compiled defaults.
pub fn load_all_content(
    base_path: &Path,
) -> (LevelLibrary, GameplayConfig, Vec<ContentLoadError>) {
    let mut library = LevelLibrary::default();
    let mut errors = Vec::new();

    match load_data_file::<LevelDef>(&base_path.join("levels.ron")) {
        Ok(levels) => {
            for level in levels {
                library.levels.insert(level.id, level);
            }
        }
        Err(e) => errors.push(e),
    }

    let gameplay = match load_single_file::<GameplayConfig>(&base_path.join("gameplay.ron")) {
        Ok(config) => config,
        Err(e) => {
            errors.push(e);
            GameplayConfig::default()
        }
    };

    (library, gameplay, errors)
}
