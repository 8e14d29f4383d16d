use crate::{GUI_SCRIPT, LNK_DESCRIPTION, LNK_FILENAME, PROJECT_DIR, TARGET_EXE};

/// Everything a shortcut records: what to launch, with what argument
/// string, from where, plus the tooltip text and the file name the
/// shortcut itself is saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutDescriptor {
    pub target_path: String,
    pub arguments: String,
    pub working_directory: String,
    pub description: String,
    pub file_name: String,
}

impl ShortcutDescriptor {
    /// The one descriptor this tool ships: launch gui.py through pythonw
    /// so no console window pops up next to the GUI.
    pub fn email_pipeline() -> Self {
        ShortcutDescriptor {
            target_path: TARGET_EXE.to_string(),
            arguments: format!("\"{}\"", GUI_SCRIPT),
            working_directory: PROJECT_DIR.to_string(),
            description: LNK_DESCRIPTION.to_string(),
            file_name: LNK_FILENAME.to_string(),
        }
    }
}
