//! The meta module surfaces the packaging metadata to the running program.
//! The name, version and one-line description come straight from the manifest
//! through the Cargo environment; the long description is assembled by the
//! build script from README.md and CHANGELOG.md, the same two files the
//! published package presents.

/// The name of the package, which doubles as the name of the installed
/// command.
pub(crate) const NAME: &str = env!("CARGO_PKG_NAME");

/// The version of the package.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The one-line description of the game from the manifest.
pub(crate) const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// The long description of the distribution: the readme, a blank line, then
/// the changelog. The build script refuses to build the package without both
/// files, so the embedding here never sees a partial assembly.
pub(crate) const LONG_DESCRIPTION: &str =
    include_str!(concat!(env!("OUT_DIR"), "/long_description.md"));

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{DESCRIPTION, LONG_DESCRIPTION, NAME, VERSION};

    #[test]
    fn test_packaging_files_present() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));

        assert!(
            root.join("README.md").is_file(),
            "README.md must ship next to the manifest"
        );
        assert!(
            root.join("CHANGELOG.md").is_file(),
            "CHANGELOG.md must ship next to the manifest"
        );
    }

    #[test]
    fn test_long_description_layout() {
        assert!(
            LONG_DESCRIPTION.starts_with("# Yet Another Adventure Game"),
            "the long description must open with the readme title"
        );

        let changelog_at = LONG_DESCRIPTION
            .find("# Changelog")
            .expect("the long description must contain the changelog heading");

        assert!(
            changelog_at > 0,
            "the readme must come before the changelog"
        );
        assert!(
            LONG_DESCRIPTION.contains("## 0.0.1"),
            "the changelog must record the released version"
        );
    }

    #[test]
    fn test_manifest_metadata() {
        assert_eq!(NAME, "yaag_mme");
        assert_eq!(VERSION, "0.0.1");
        assert!(
            DESCRIPTION.contains("text based adventure game"),
            "the description must carry the game's one-line pitch"
        );
    }
}
