use std::{
    path::{Path, PathBuf},
    process::Command,
};

use serde::Deserialize;

use super::{LegacyBackend, LegacyError, LegacyHandle, LegacyParams};

/// [`LegacyBackend`] running the [oppai-ng] command line tool.
///
/// Every calculation spawns the executable once and reads its JSON report.
///
/// [oppai-ng]: https://github.com/Francesco149/oppai-ng
#[derive(Copy, Clone, Debug, Default)]
pub struct OppaiCli;

impl LegacyBackend for OppaiCli {
    fn acquire(&self, tool_path: &Path) -> Result<Box<dyn LegacyHandle>, LegacyError> {
        Ok(Box::new(OppaiHandle {
            tool: tool_path.to_owned(),
            args: None,
            report: None,
        }))
    }
}

struct OppaiHandle {
    tool: PathBuf,
    args: Option<Vec<String>>,
    report: Option<OppaiReport>,
}

#[derive(Debug, Default, Deserialize)]
struct OppaiReport {
    #[serde(default)]
    stars: Option<f64>,
    #[serde(default)]
    pp: Option<f64>,
}

impl LegacyHandle for OppaiHandle {
    fn configure(&mut self, params: &LegacyParams) {
        self.args = Some(oppai_args(params));
        self.report = None;
    }

    fn calculate(&mut self, beatmap_path: &Path) -> Result<(), LegacyError> {
        let args = self.args.as_ref().ok_or(LegacyError::NotConfigured)?;

        let output = Command::new(&self.tool)
            .arg(beatmap_path)
            .args(args)
            .output()
            .map_err(|source| LegacyError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LegacyError::ExitStatus {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        self.report = Some(serde_json::from_slice(&output.stdout)?);

        Ok(())
    }

    fn total_value(&self) -> f64 {
        self.report
            .as_ref()
            .and_then(|report| report.pp)
            .unwrap_or(f64::NAN)
    }

    fn star_rating(&self) -> f64 {
        self.report
            .as_ref()
            .and_then(|report| report.stars)
            .unwrap_or(f64::NAN)
    }

    fn release(&mut self) {
        self.args = None;
        self.report = None;
    }
}

fn oppai_args(params: &LegacyParams) -> Vec<String> {
    let mut args = Vec::with_capacity(6);

    args.push(format!("{:.2}%", params.accuracy));

    if !params.mods.is_empty() {
        args.push(format!("+{}", params.mods));
    }

    args.push(format!("{}x", params.max_combo));
    args.push(format!("{}m", params.n_misses));
    args.push(format!("-m{}", params.mode));
    args.push("-ojson".to_owned());

    args
}
