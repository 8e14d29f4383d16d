use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

#[cfg(test)]
use mockall::automock;

use error_stack::{IntoReport, Result, ResultExt};

pub struct DesktopProvider;

#[derive(Debug)]
pub struct DesktopError;

impl Display for DesktopError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str("Desktop folder error")
    }
}

impl Error for DesktopError {}

pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg_attr(test, automock)]
pub trait DesktopThings {
    fn desktop_dir(&self) -> DesktopResult<PathBuf>;
}

impl DesktopThings for DesktopProvider {
    fn desktop_dir(&self) -> DesktopResult<PathBuf> {
        dirs::desktop_dir()
            .ok_or(DesktopError)
            .report()
            .attach_printable("Could not resolve the user Desktop special folder")
    }
}
