#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Demix output for a Delta/Omicron mix
pub const DEMIX: &str = "\tsample.tsv\n\
summarized\t[('Delta', 0.7), ('Omicron', 0.3)]\n\
lineages\tB.1.617.2 AY.4 BA.1 BA.2\n\
abundances\t0.60 0.10 0.20 0.10\n\
resid\t1.2\n\
coverage\t98.5\n";

/// Bootstrap percentiles matching `DEMIX`, plus an Alpha column the point
/// estimates do not have
pub const BOOTSTRAP: &str = ",B.1.617.2,AY.4,BA.1,BA.2,B.1.1.7\n\
0.025,0.55,0.07,0.16,0.07,0.00\n\
0.25,0.58,0.09,0.19,0.09,0.00\n\
0.5,0.60,0.10,0.20,0.10,0.01\n\
0.75,0.62,0.11,0.21,0.11,0.02\n\
0.975,0.65,0.13,0.24,0.13,0.03\n";

/// Same as `BOOTSTRAP` without the 0.75 row
pub const BOOTSTRAP_NO_P75: &str = ",B.1.617.2,AY.4,BA.1,BA.2\n\
0.025,0.55,0.07,0.16,0.07\n\
0.25,0.58,0.09,0.19,0.09\n\
0.5,0.60,0.10,0.20,0.10\n\
0.975,0.65,0.13,0.24,0.13\n";

pub fn varscope_cmd() -> Command {
    Command::cargo_bin("varscope").unwrap()
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");

        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            temp_dir,
            input_dir,
            output_dir,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the default sample pair and return (demix, bootstrap)
    pub fn sample(&self) -> Result<(PathBuf, PathBuf)> {
        Ok((
            self.create_input_file("sample.demix.tsv", DEMIX)?,
            self.create_input_file("sample_lineages.csv", BOOTSTRAP)?,
        ))
    }

    /// A command with VARSCOPE_HOME pointed at the temp dir so no user
    /// config leaks into the test
    pub fn cmd(&self) -> Command {
        let mut cmd = varscope_cmd();
        cmd.env("VARSCOPE_HOME", self.home()).env_remove("VARSCOPE_LOG");
        cmd
    }
}
