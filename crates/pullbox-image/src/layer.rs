//! Layer blob download and extraction.
//!
//! Each layer is streamed into a uniquely-named temporary archive inside
//! the target root, verified against its digest, and unpacked in-process
//! as a gzip-compressed tar. The temporary archive lives only for the
//! duration of one layer; its guard removes it on success and on every
//! failure path.

use std::path::Path;

use pullbox_common::error::PullboxError;
use pullbox_common::types::{AuthToken, ImageReference};

use crate::error::LayerError;

/// Downloads one layer blob and extracts it into `root`.
///
/// Files already present at matching paths are overwritten, which is
/// how later layers shadow earlier ones.
///
/// # Errors
///
/// Returns a `LayerError` describing which step failed: the blob
/// request, storing the body, digest verification, or extraction.
pub fn fetch_layer(
    http: &reqwest::blocking::Client,
    reference: &ImageReference,
    token: &AuthToken,
    digest: &str,
    registry_endpoint: &str,
    root: &Path,
) -> Result<(), LayerError> {
    let url = format!("{registry_endpoint}/{}/blobs/{digest}", reference.name());
    tracing::debug!(digest, "downloading layer blob");

    let mut response = http
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, token.bearer())
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)?;

    // Staged inside the root so the later rename-free extract reads and
    // writes on the same filesystem. Removed when the guard drops.
    let mut archive = tempfile::Builder::new()
        .prefix("layer-")
        .suffix(".tar.gz")
        .tempfile_in(root)
        .map_err(|source| LayerError::Store {
            path: root.to_path_buf(),
            source,
        })?;

    let written =
        std::io::copy(&mut response, archive.as_file_mut()).map_err(|source| LayerError::Store {
            path: archive.path().to_path_buf(),
            source,
        })?;
    tracing::debug!(digest, bytes = written, "layer blob stored");

    crate::hash::verify_digest(archive.path(), digest).map_err(LayerError::Verify)?;

    extract_archive(archive.path(), root).map_err(LayerError::Extract)?;
    tracing::debug!(digest, "layer extracted");
    Ok(())
}

/// Extracts a gzip-compressed tar archive into the target directory.
///
/// Existing files at conflicting paths are overwritten; parent
/// directories are created as needed.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or unpacked.
pub fn extract_archive(archive_path: &Path, target: &Path) -> pullbox_common::error::Result<()> {
    let file = std::fs::File::open(archive_path).map_err(|e| PullboxError::io(archive_path, e))?;
    let decoder = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(decoder);
    archive.set_overwrite(true);
    archive
        .unpack(target)
        .map_err(|e| PullboxError::io(target, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
        let file = std::fs::File::create(path).expect("failed to create archive");
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, *data)
                .expect("failed to append entry");
        }
        let encoder = builder.into_inner().expect("failed to finish tar");
        let _ = encoder.finish().expect("failed to finish gzip");
    }

    #[test]
    fn extract_creates_files_and_parent_dirs() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let archive = dir.path().join("layer.tar.gz");
        write_tar_gz(&archive, &[("usr/local/bin/tool", b"#!/bin/sh\n")]);

        let root = dir.path().join("root");
        std::fs::create_dir_all(&root).expect("mkdir failed");
        extract_archive(&archive, &root).expect("extract failed");

        let content =
            std::fs::read_to_string(root.join("usr/local/bin/tool")).expect("read failed");
        assert_eq!(content, "#!/bin/sh\n");
    }

    #[test]
    fn later_archive_overwrites_conflicting_path() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let base = dir.path().join("base.tar.gz");
        let upper = dir.path().join("upper.tar.gz");
        write_tar_gz(&base, &[("etc/msg", b"from base"), ("etc/only-base", b"keep")]);
        write_tar_gz(&upper, &[("etc/msg", b"from upper")]);

        let root = dir.path().join("root");
        std::fs::create_dir_all(&root).expect("mkdir failed");
        extract_archive(&base, &root).expect("base extract failed");
        extract_archive(&upper, &root).expect("upper extract failed");

        let msg = std::fs::read_to_string(root.join("etc/msg")).expect("read failed");
        assert_eq!(msg, "from upper");
        assert!(root.join("etc/only-base").exists());
    }

    #[test]
    fn extract_corrupt_archive_returns_error() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let archive = dir.path().join("broken.tar.gz");
        std::fs::write(&archive, b"definitely not gzip").expect("write failed");

        let root = dir.path().join("root");
        std::fs::create_dir_all(&root).expect("mkdir failed");
        assert!(extract_archive(&archive, &root).is_err());
    }

    #[test]
    fn extract_missing_archive_returns_error() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        assert!(extract_archive(&dir.path().join("missing.tar.gz"), dir.path()).is_err());
    }
}
