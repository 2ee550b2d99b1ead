use std::path::{Path, PathBuf};

/// Configuration for the splitting process
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Path of the JSON document to read
    pub input_path: PathBuf,

    /// Directory the output files are placed in
    pub output_dir: PathBuf,

    /// Prefix for output file names
    pub output_prefix: String,

    /// Suffix for output file names
    pub output_suffix: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            input_path: PathBuf::from("data.json"),
            output_dir: PathBuf::from("."),
            output_prefix: String::from("data_"),
            output_suffix: String::from(".csv"),
        }
    }
}

impl SplitConfig {
    /// Destination path for one category's output file:
    /// `<output_dir>/<prefix><category><suffix>`
    pub fn category_path(&self, category: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}{}{}",
            self.output_prefix, category, self.output_suffix
        ))
    }

    /// Replace the output directory, keeping the other fields
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SplitConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data.json"));
        assert_eq!(
            config.category_path("Default"),
            PathBuf::from("./data_Default.csv")
        );
    }

    #[test]
    fn test_custom_prefix_and_dir() {
        let mut config = SplitConfig::default().with_output_dir("/tmp/out");
        config.output_prefix = String::from("export-");
        config.output_suffix = String::from(".txt");
        assert_eq!(
            config.category_path("Users"),
            PathBuf::from("/tmp/out/export-Users.txt")
        );
    }
}
