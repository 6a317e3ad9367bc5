// SPDX-FileCopyrightText: 2026 Graphbench Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `graphbench fetch` command implementation.
//!
//! Downloads `.tar.gz` (or plain `.tar`) archives listed in
//! `[[datasets.entries]]` and copies the Matrix Market files they contain
//! into the dataset directory.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use flate2::read::GzDecoder;
use graphbench_config::GraphbenchConfig;
use graphbench_core::GraphbenchError;
use tracing::info;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Args, Debug, Default, Clone)]
pub struct FetchArgs {
    /// Datasets to download.
    #[arg(value_name = "NAME", required_unless_present = "all")]
    pub names: Vec<String>,

    /// Download every configured dataset that has a URL.
    #[arg(long)]
    pub all: bool,

    /// Download again even when the file already exists.
    #[arg(long)]
    pub force: bool,
}

pub async fn run_fetch(config: &GraphbenchConfig, args: &FetchArgs) -> Result<(), GraphbenchError> {
    let datasets = &config.datasets;
    let names: Vec<String> = if args.all {
        datasets
            .entries
            .iter()
            .filter(|e| e.url.is_some())
            .map(|e| e.name.clone())
            .collect()
    } else {
        args.names.clone()
    };

    for name in &names {
        let entry = datasets
            .entry(name)
            .ok_or_else(|| GraphbenchError::dataset(name, "no [[datasets.entries]] entry"))?;
        let url = entry
            .url
            .as_deref()
            .ok_or_else(|| GraphbenchError::dataset(name, "no download url configured"))?;

        let dest = datasets.resolve_path(name);
        if dest.exists() && !args.force {
            println!("{name}: already present at {}", dest.display());
            continue;
        }

        let dest_dir = dest.parent().map(Path::to_path_buf).unwrap_or_default();
        tokio::fs::create_dir_all(&dest_dir).await?;

        info!(dataset = %name, %url, "downloading dataset");
        let archive = download(url).await?;
        let written = unpack_matrices(&archive, url, &dest, &dest_dir)?;
        for path in &written {
            println!("{name}: wrote {}", path.display());
        }
    }
    Ok(())
}

async fn download(url: &str) -> Result<Vec<u8>, GraphbenchError> {
    let fetch_error = |message: String| GraphbenchError::Fetch {
        url: url.to_string(),
        message,
    };

    let response = reqwest::get(url)
        .await
        .map_err(|e| fetch_error(format!("request failed: {e}")))?;
    if !response.status().is_success() {
        return Err(fetch_error(format!("server returned {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_error(format!("cannot read response body: {e}")))?;
    Ok(bytes.to_vec())
}

/// Extract every `.mtx` member of `archive`. A lone matrix is written to
/// `dest`; several are written into `dest_dir` under their own file names.
pub fn unpack_matrices(
    archive: &[u8],
    url: &str,
    dest: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, GraphbenchError> {
    let matrices = if archive.starts_with(&GZIP_MAGIC) {
        read_matrices(GzDecoder::new(archive))
    } else {
        read_matrices(archive)
    }
    .map_err(|e| GraphbenchError::Fetch {
        url: url.to_string(),
        message: format!("cannot unpack archive: {e}"),
    })?;

    match matrices.as_slice() {
        [] => Err(GraphbenchError::Fetch {
            url: url.to_string(),
            message: "archive contains no .mtx file".to_string(),
        }),
        [(_, contents)] => {
            std::fs::write(dest, contents)?;
            Ok(vec![dest.to_path_buf()])
        }
        many => {
            let mut written = Vec::with_capacity(many.len());
            for (file_name, contents) in many {
                let path = dest_dir.join(file_name);
                std::fs::write(&path, contents)?;
                written.push(path);
            }
            Ok(written)
        }
    }
}

/// `(file name, contents)` of every `.mtx` file in a tar stream.
fn read_matrices<R: Read>(reader: R) -> std::io::Result<Vec<(String, Vec<u8>)>> {
    let mut archive = tar::Archive::new(reader);
    let mut matrices = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let path = entry.path()?.into_owned();
        let is_matrix = path.extension().is_some_and(|ext| ext == "mtx");
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !is_matrix {
            continue;
        }

        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        matrices.push((file_name, contents));
    }

    matrices.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(matrices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    const MTX: &str = "%%MatrixMarket matrix coordinate pattern general\n2 2 1\n1 2\n";

    fn tar_of(files: &[(&str, &str)]) -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        for (path, contents) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, path, contents.as_bytes())
                .unwrap();
        }
        builder.into_inner().unwrap()
    }

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        use std::io::Write;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn single_matrix_is_renamed_to_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let archive = gzip(&tar_of(&[
            ("bus/README", "docs"),
            ("bus/1138_bus.mtx", MTX),
        ]));
        let dest = dir.path().join("1128_bus.mtx");

        let written = unpack_matrices(&archive, "u", &dest, dir.path()).unwrap();
        assert_eq!(written, [dest.clone()]);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), MTX);
    }

    #[test]
    fn several_matrices_keep_their_names() {
        let dir = tempfile::tempdir().unwrap();
        let archive = gzip(&tar_of(&[("g/g.mtx", MTX), ("g/g_coord.mtx", MTX)]));
        let dest = dir.path().join("g.mtx");

        let written = unpack_matrices(&archive, "u", &dest, dir.path()).unwrap();
        assert_eq!(written, [dir.path().join("g.mtx"), dir.path().join("g_coord.mtx")]);
    }

    #[test]
    fn plain_tar_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let archive = tar_of(&[("x.mtx", MTX)]);
        let dest = dir.path().join("x.mtx");
        unpack_matrices(&archive, "u", &dest, dir.path()).unwrap();
        assert!(dest.is_file());
    }

    #[test]
    fn archive_without_matrix_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let archive = gzip(&tar_of(&[("notes.txt", "nothing")]));
        let err = unpack_matrices(&archive, "http://x/a.tar.gz", &dir.path().join("a.mtx"), dir.path())
            .unwrap_err();
        assert!(matches!(err, GraphbenchError::Fetch { ref url, .. } if url == "http://x/a.tar.gz"));
    }

    #[tokio::test]
    async fn unknown_dataset_is_rejected_before_download() {
        let config = GraphbenchConfig::default();
        let args = FetchArgs {
            names: vec!["not-configured".into()],
            ..FetchArgs::default()
        };
        let err = run_fetch(&config, &args).await.unwrap_err();
        assert!(matches!(err, GraphbenchError::Dataset { .. }));
    }

    #[tokio::test]
    async fn present_dataset_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GraphbenchConfig::default();
        config.datasets.dir = dir.path().to_path_buf();
        std::fs::write(dir.path().join("Journals.mtx"), MTX).unwrap();

        let args = FetchArgs {
            names: vec!["Journals".into()],
            ..FetchArgs::default()
        };
        run_fetch(&config, &args).await.unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("Journals.mtx")).unwrap(), MTX);
    }
}
