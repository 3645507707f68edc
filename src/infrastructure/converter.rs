//! External converters between GDX files and their text dumps

use crate::error::{Result, SplitError};
use crate::infrastructure::ToolConfig;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Conversion between a structured file and its line-oriented text dump
pub trait Converter {
    /// Render `source` as text into `output`
    fn dump(&self, source: &Path, output: &Path) -> Result<()>;

    /// Rebuild a structured file at `output` from the text in `text`
    fn build(&self, text: &Path, output: &Path) -> Result<()>;
}

/// Converter backed by the GAMS `gdxdump` and `gams` binaries
#[derive(Debug, Clone)]
pub struct GamsConverter {
    config: ToolConfig,
}

impl GamsConverter {
    pub fn new(config: ToolConfig) -> Self {
        GamsConverter { config }
    }

    /// Build the command for a tool, routed through the launcher if set
    fn command(&self, tool: &Path, args: Vec<OsString>) -> Command {
        let mut cmd = match &self.config.launcher {
            Some(launcher) => {
                let mut cmd = Command::new(launcher);
                cmd.arg(tool);
                cmd
            }
            None => Command::new(tool),
        };
        cmd.args(args);

        if self.config.isolate_env {
            cmd.env_clear();
        }
        cmd.envs(&self.config.env);
        cmd
    }

    fn run(&self, name: &str, tool: &Path, args: Vec<OsString>, output: &Path) -> Result<()> {
        let mut cmd = self.command(tool, args);
        debug!(command = ?cmd, "running {}", name);

        let status = cmd.status().map_err(|e| {
            SplitError::Converter(format!("Failed to launch {} '{}': {}", name, tool.display(), e))
        })?;

        if !status.success() {
            return Err(SplitError::Converter(format!(
                "{} exited with {}",
                name, status
            )));
        }

        if !output.exists() {
            return Err(SplitError::Converter(format!(
                "{} finished but did not produce {}",
                name,
                output.display()
            )));
        }

        Ok(())
    }
}

fn keyed_arg(key: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(key);
    arg.push(path.as_os_str());
    arg
}

impl Converter for GamsConverter {
    fn dump(&self, source: &Path, output: &Path) -> Result<()> {
        info!(source = %source.display(), output = %output.display(), "dumping");
        let args = vec![source.as_os_str().to_owned(), keyed_arg("Output=", output)];
        self.run("gdxdump", &self.config.gdxdump_path(), args, output)
    }

    fn build(&self, text: &Path, output: &Path) -> Result<()> {
        info!(text = %text.display(), output = %output.display(), "building");
        let args = vec![text.as_os_str().to_owned(), keyed_arg("GDX=", output)];
        self.run("gams", &self.config.gams_path(), args, output)
    }
}
