use clap::Parser;

use args::ArgsClap;
use desktop::DesktopProvider;
use error_stack::Result;
use shortcut_manager::shortcut_manager_header::{
    ShortcutManager, ShortcutManagerError, ShortcutThings,
};
use utils::init_logger::init_logger;
use utils::mslink::LinkProvider;

mod utils {
    pub mod init_logger;
    pub mod mslink;
}

pub mod shortcut_manager {
    pub mod shortcut_manager;
    pub mod shortcut_manager_header;
}

mod args;
mod descriptor;
mod desktop;


static TARGET_EXE: &str = r"C:\Python311\pythonw.exe";
static GUI_SCRIPT: &str = r"C:\Tools\email_pipeline\gui.py";
static PROJECT_DIR: &str = r"C:\Tools\email_pipeline";

static LNK_FILENAME: &str = "Email Pipeline.lnk";
static LNK_DESCRIPTION: &str = "Investment Email Pipeline GUI";

fn main() -> Result<(), ShortcutManagerError> {
    let args = ArgsClap::parse();
    init_logger(args.level.as_level_filter());

    let desktop_provider = Box::new(DesktopProvider);
    let link_provider = Box::new(LinkProvider);
    let mut manager = ShortcutManager::new(
        descriptor::ShortcutDescriptor::email_pipeline(),
        desktop_provider,
        link_provider,
    );

    manager
        .resolve_desktop()?
        .compose_lnk_path()?
        .persist_lnk()?
        .announce();
    Ok(())
}
