use std::{
    error::Error,
    fmt::{self},
    path::PathBuf,
};

use crate::{descriptor::ShortcutDescriptor, desktop::DesktopThings, utils::mslink::LinkThings};
use error_stack::Result;

pub type ResultManagerErr<T> = Result<T, ShortcutManagerError>;

pub struct ShortcutManager {
    pub descriptor: ShortcutDescriptor,
    pub desktop_provider: Box<dyn DesktopThings>,
    pub link_provider: Box<dyn LinkThings>,
    pub state: ShortcutManagerState,
}

impl fmt::Debug for ShortcutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutManager")
            .field("descriptor", &self.descriptor)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// The one-shot flow. Steps chain and every failure is fatal for the
/// whole run, there is nothing to retry.
pub trait ShortcutThings {
    fn resolve_desktop(&mut self) -> ResultManagerErr<&mut Self>;
    fn compose_lnk_path(&mut self) -> ResultManagerErr<&mut Self>;
    fn persist_lnk(&mut self) -> ResultManagerErr<&mut Self>;
    fn announce(&self) -> &Self;
}

#[derive(Debug, Default)]
pub enum ShortcutManagerError {
    DesktopFolderUnresolvable,
    FailedToCreateMsLink(String),
    LnkPathMissing,
    #[default]
    Other,
}

impl fmt::Display for ShortcutManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutManagerError::DesktopFolderUnresolvable => {
                write!(f, "DesktopFolderUnresolvable")
            }
            ShortcutManagerError::FailedToCreateMsLink(info) => {
                write!(f, "FailedToCreateMsLink {}", info)
            }
            ShortcutManagerError::LnkPathMissing => write!(f, "LnkPathMissing"),
            ShortcutManagerError::Other => write!(f, "Other"),
        }
    }
}

impl Error for ShortcutManagerError {}

#[derive(Default, Debug)]
pub struct ShortcutManagerState {
    pub desktop_dir: Option<PathBuf>,
    pub lnk_path: Option<PathBuf>,
    pub lnk_created: bool,
}
