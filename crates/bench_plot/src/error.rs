// Per-file errors of the plotting front end.

use std::path::PathBuf;

use bench_log::LogError;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{}: cannot read log: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Log { path: PathBuf, source: LogError },
    #[error("{}: {source}", path.display())]
    Render { path: PathBuf, source: RenderError },
}
