//! Fake downloader: a shell script that records its argv and exits with a fixed code.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct FakeTool {
    pub program: PathBuf,
    args_file: PathBuf,
}

impl FakeTool {
    /// Writes `<dir>/yt-dlp`, which stores each argument NUL-terminated in
    /// `<dir>/args.bin` and exits with `exit_code`.
    pub fn install(dir: &Path, exit_code: i32) -> Self {
        let program = dir.join("yt-dlp");
        let args_file = dir.join("args.bin");
        let script = format!(
            "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\0' \"$a\"; done > '{}'\nexit {}\n",
            args_file.display(),
            exit_code
        );
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
        Self { program, args_file }
    }

    /// Arguments from the last run, or None if the tool never ran.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let raw = fs::read(&self.args_file).ok()?;
        let text = String::from_utf8(raw).unwrap();
        Some(
            text.split_terminator('\0')
                .map(str::to_string)
                .collect(),
        )
    }
}
