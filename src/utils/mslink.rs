use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::Path,
};

#[cfg(test)]
use mockall::automock;

use error_stack::{Report, Result, ResultExt};
use mslnk::ShellLink;

use crate::descriptor::ShortcutDescriptor;

pub struct LinkProvider;

#[derive(Debug)]
pub struct LinkError;

impl Display for LinkError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str("Ms link error")
    }
}

impl Error for LinkError {}

pub type LinkResult<T> = Result<T, LinkError>;

#[cfg_attr(test, automock)]
pub trait LinkThings {
    fn create_ms_lnk(&self, lnk_name: &Path, descriptor: &ShortcutDescriptor) -> LinkResult<()>;
}

impl LinkThings for LinkProvider {
    fn create_ms_lnk(&self, lnk_name: &Path, descriptor: &ShortcutDescriptor) -> LinkResult<()> {
        let mut sl = ShellLink::new(&descriptor.target_path).or_else(|err| {
            Err(Report::new(LinkError)).attach_printable(format!(
                "ShellLink for target {} {:?}",
                descriptor.target_path, err
            ))
        })?;
        sl.set_arguments(Some(descriptor.arguments.clone()));
        sl.set_working_dir(Some(descriptor.working_directory.clone()));
        sl.set_name(Some(descriptor.description.clone()));
        sl.create_lnk(lnk_name).or_else(|err| {
            Err(Report::new(LinkError)).attach_printable(format!(
                "create_lnk {} {:?}",
                lnk_name.display(),
                err
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    // First 4 bytes of every ShellLink file: HeaderSize = 0x0000004C.
    const LNK_HEADER_MAGIC: [u8; 4] = [0x4C, 0x00, 0x00, 0x00];

    fn fake_pythonw(dir: &Path) -> PathBuf {
        let exe = dir.join("pythonw.exe");
        fs::write(&exe, b"MZ fake interpreter").unwrap();
        exe
    }

    fn descriptor_for(target: &Path) -> ShortcutDescriptor {
        ShortcutDescriptor {
            target_path: target.to_str().unwrap().to_string(),
            arguments: format!("\"{}\"", crate::GUI_SCRIPT),
            working_directory: crate::PROJECT_DIR.to_string(),
            description: crate::LNK_DESCRIPTION.to_string(),
            file_name: crate::LNK_FILENAME.to_string(),
        }
    }

    fn as_utf16le(needle: &str) -> Vec<u8> {
        needle.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    // String data may be stored as UTF-16LE or as the code-page variant
    // depending on the header flags, so accept either.
    fn contains_str(haystack: &[u8], needle: &str) -> bool {
        contains(haystack, &as_utf16le(needle)) || contains(haystack, needle.as_bytes())
    }

    #[test]
    fn creates_one_lnk_file_with_shell_link_header() {
        let tmp = TempDir::new().unwrap();
        let exe = fake_pythonw(tmp.path());
        let lnk_path = tmp.path().join(crate::LNK_FILENAME);

        LinkProvider
            .create_ms_lnk(&lnk_path, &descriptor_for(&exe))
            .unwrap();

        let bytes = fs::read(&lnk_path).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[0..4], &LNK_HEADER_MAGIC);
    }

    #[test]
    fn stored_fields_match_the_descriptor() {
        let tmp = TempDir::new().unwrap();
        let exe = fake_pythonw(tmp.path());
        let descriptor = descriptor_for(&exe);
        let lnk_path = tmp.path().join(crate::LNK_FILENAME);

        LinkProvider.create_ms_lnk(&lnk_path, &descriptor).unwrap();

        let bytes = fs::read(&lnk_path).unwrap();
        assert!(contains_str(&bytes, "pythonw.exe"));
        assert!(contains_str(&bytes, &descriptor.arguments));
        assert!(contains_str(&bytes, &descriptor.working_directory));
        assert!(contains_str(&bytes, &descriptor.description));
    }

    #[test]
    fn rewriting_the_same_lnk_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let exe = fake_pythonw(tmp.path());
        let descriptor = descriptor_for(&exe);
        let lnk_path = tmp.path().join(crate::LNK_FILENAME);

        LinkProvider.create_ms_lnk(&lnk_path, &descriptor).unwrap();
        let first = fs::read(&lnk_path).unwrap();

        LinkProvider.create_ms_lnk(&lnk_path, &descriptor).unwrap();
        let second = fs::read(&lnk_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn fails_when_destination_folder_is_missing() {
        let tmp = TempDir::new().unwrap();
        let exe = fake_pythonw(tmp.path());
        let lnk_path = tmp
            .path()
            .join("no_such_folder")
            .join(crate::LNK_FILENAME);

        let result = LinkProvider.create_ms_lnk(&lnk_path, &descriptor_for(&exe));

        assert!(result.is_err());
        assert!(!lnk_path.exists());
    }
}
