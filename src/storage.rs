use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use nanoserde::{DeJson, SerJson};
use std::fs::{create_dir_all, read_to_string};
use std::path::{Path, PathBuf};
use std::{fs, io};

pub trait Storage {
    fn get_value<T: DeJson>(&self, file_name: impl AsRef<Path>) -> Option<T>;
    fn save_value<T: SerJson>(&self, file_name: impl AsRef<Path>, to_save: &T) -> io::Result<()>;
    fn config_dir(&self) -> &Path;
}

pub struct FileStorage {
    config_dir: PathBuf,
}

impl FileStorage {
    /// Storage backed by the per user configuration directory.
    pub fn new() -> anyhow::Result<FileStorage> {
        let project_dirs =
            ProjectDirs::from("", "Hirtol", "Oledpong").ok_or_else(|| anyhow!("No valid home directory found"))?;
        FileStorage::at(project_dirs.config_dir())
    }

    /// Storage backed by an arbitrary directory, which is created if it doesn't exist yet.
    pub fn at(directory: impl AsRef<Path>) -> anyhow::Result<FileStorage> {
        let config_dir = directory.as_ref().to_path_buf();
        create_dir_all(&config_dir).with_context(|| format!("Couldn't create {:?}", config_dir))?;
        Ok(FileStorage { config_dir })
    }
}

impl Storage for FileStorage {
    fn get_value<T: DeJson>(&self, file_name: impl AsRef<Path>) -> Option<T> {
        let json = read_to_string(self.config_dir.join(file_name)).ok()?;
        T::deserialize_json(json.as_str()).ok()
    }

    fn save_value<T: SerJson>(&self, file_name: impl AsRef<Path>, to_save: &T) -> io::Result<()> {
        let json = T::serialize_json(to_save);
        fs::write(self.config_dir.join(file_name), json)
    }

    fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
