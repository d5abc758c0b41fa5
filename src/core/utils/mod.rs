use std::path::PathBuf;

pub mod trace;

/// Activity data directory, it may not exist yet
pub fn data_path() -> Result<PathBuf, anyhow::Error> {
   Ok(std::env::current_dir()?.join("data"))
}

/// Activity data directory, created if needed
pub fn data_dir() -> Result<PathBuf, anyhow::Error> {
   let dir = data_path()?;

   if !dir.exists() {
      std::fs::create_dir_all(dir.clone())?;
   }

   Ok(dir)
}
