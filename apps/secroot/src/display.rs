//! Output rendering

use secroot_config::SecurityEnv;
use secroot_types::SecurityOptions;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Output renderer for command results
pub struct OutputRenderer {
    json_output: bool,
}

#[derive(Serialize)]
struct RootReport<'a> {
    context: &'a str,
    root_path: &'a Path,
}

impl OutputRenderer {
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    pub fn render_root(&self, context: &str, root: &Path) -> Result<(), crate::error::CliError> {
        if self.json_output {
            let report = RootReport {
                context,
                root_path: root,
            };
            self.write_json(&report)
        } else {
            writeln!(io::stdout().lock(), "{}", root.display())?;
            Ok(())
        }
    }

    pub fn render_options(&self, options: &SecurityOptions) -> Result<(), crate::error::CliError> {
        if self.json_output {
            return self.write_json(options);
        }
        let mut out = io::stdout().lock();
        writeln!(out, "enforce:   {}", options.enforce())?;
        match options.root_path() {
            Some(root) => writeln!(out, "root_path: {}", root.display())?,
            None => writeln!(out, "root_path: <none>")?,
        }
        Ok(())
    }

    pub fn render_env(&self, snapshot: &SecurityEnv) -> Result<(), crate::error::CliError> {
        if self.json_output {
            return self.write_json(snapshot);
        }
        let mut out = io::stdout().lock();
        for (name, value) in snapshot.entries() {
            writeln!(out, "{name}={}", value.unwrap_or("<unset>"))?;
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), crate::error::CliError> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout().lock(), "{json}")?;
        Ok(())
    }
}
