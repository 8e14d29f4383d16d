use error_stack::{Report, ResultExt};
use log::{debug, info};

use crate::{
    descriptor::ShortcutDescriptor,
    desktop::DesktopThings,
    utils::mslink::LinkThings,
};

use super::shortcut_manager_header::{
    ResultManagerErr, ShortcutManager, ShortcutManagerError, ShortcutManagerState, ShortcutThings,
};

impl ShortcutManager {
    pub fn new(
        descriptor: ShortcutDescriptor,
        desktop_provider: Box<dyn DesktopThings>,
        link_provider: Box<dyn LinkThings>,
    ) -> Self {
        Self {
            descriptor,
            desktop_provider,
            link_provider,
            state: ShortcutManagerState::default(),
        }
    }
}

impl ShortcutThings for ShortcutManager {
    fn resolve_desktop(&mut self) -> ResultManagerErr<&mut Self> {
        let desktop_dir = self
            .desktop_provider
            .desktop_dir()
            .change_context(ShortcutManagerError::DesktopFolderUnresolvable)?;
        debug!("Desktop folder resolved to {}", desktop_dir.display());
        self.state.desktop_dir = Some(desktop_dir);
        Ok(self)
    }

    fn compose_lnk_path(&mut self) -> ResultManagerErr<&mut Self> {
        let desktop_dir = self
            .state
            .desktop_dir
            .as_ref()
            .ok_or_else(|| Report::new(ShortcutManagerError::DesktopFolderUnresolvable))?;
        let lnk_path = desktop_dir.join(&self.descriptor.file_name);
        debug!("Ms link path composed {}", lnk_path.display());
        self.state.lnk_path = Some(lnk_path);
        Ok(self)
    }

    fn persist_lnk(&mut self) -> ResultManagerErr<&mut Self> {
        let lnk_path = self
            .state
            .lnk_path
            .as_ref()
            .ok_or_else(|| Report::new(ShortcutManagerError::LnkPathMissing))?;

        self.link_provider
            .create_ms_lnk(lnk_path, &self.descriptor)
            .or_else(|err| {
                Err(Report::new(ShortcutManagerError::FailedToCreateMsLink(
                    format!(
                        "Ms Link path {} target {} args {}",
                        lnk_path.display(),
                        self.descriptor.target_path,
                        self.descriptor.arguments
                    ),
                )))
                .attach_printable(format!("{:?}", err))
            })?;

        info!(
            "Ms link created for {} at {}",
            self.descriptor.description,
            lnk_path.display()
        );
        self.state.lnk_created = true;
        Ok(self)
    }

    fn announce(&self) -> &Self {
        if let Some(lnk_path) = &self.state.lnk_path {
            println!("Created shortcut: {}", lnk_path.display());
        }
        self
    }
}
