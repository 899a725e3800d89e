use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run triage commands with an isolated config directory
pub struct TriageTest {
    pub temp_dir: TempDir,
}

impl TriageTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TriageTest { temp_dir }
    }

    /// Path to the compiled binary under test
    pub fn binary() -> &'static str {
        env!("CARGO_BIN_EXE_triage")
    }

    /// Where the config file ends up with XDG_CONFIG_HOME pointed at the
    /// temp directory
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("triage").join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(Self::binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            // Redirect the config lookup into the temp directory and make
            // sure no ambient override leaks in
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env_remove("TRIAGE_API_URL")
            .output()
            .expect("Failed to execute triage command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
