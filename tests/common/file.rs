use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write `content` to `name` inside `dir` and return `name`, the argument to
/// pass to a command running in `dir`.
pub fn write_named(dir: &Path, name: &str, content: &str) -> String {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    name.to_string()
}

pub fn write_generated_lines(dir: &Path, name: &str, lines_count: usize) -> (String, Vec<String>) {
    use fake::{Fake, faker::lorem::en::Words};

    let lines = (0..lines_count)
        .map(|_| Words(3..6).fake::<Vec<String>>().join(" "))
        .collect::<Vec<_>>();
    let content = lines.iter().map(|line| format!("{line}\n")).collect::<String>();

    (write_named(dir, name, &content), lines)
}
