//! Object storage seam for 3D model binaries.
//!
//! Model files are opaque to the backend; it only moves bytes and a content
//! type. Remote object stores implement [`ObjectStore`] outside this
//! repository; [`DirStore`] is the bundled directory-backed implementation
//! that keeps the binary usable without external infrastructure.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;

#[async_trait]
pub trait ObjectStore: Send + Sync {
	async fn upload(&self, name: &str, content: Bytes, content_type: &str) -> Result<()>;

	/// Stored bytes and content type, or `None` if the object is unknown.
	async fn download(&self, name: &str) -> Result<Option<(Bytes, String)>>;
}

/// Stores each object as a file, with its content type in a `.mime`
/// sidecar next to it.
pub struct DirStore {
	root: PathBuf,
}

impl DirStore {
	pub fn new(root: PathBuf) -> Result<Self> {
		std::fs::create_dir_all(&root).with_context(|| format!("creating model storage directory {root:?}"))?;
		Ok(Self { root })
	}

	/// Object names become file names, so anything that could traverse
	/// directories is rejected.
	fn object_path(&self, name: &str) -> Result<PathBuf> {
		if name.is_empty()
			|| !name
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
			|| name.starts_with('.')
		{
			bail!("invalid object name: {name:?}");
		}
		Ok(self.root.join(name))
	}

	fn sidecar_path(path: &PathBuf) -> PathBuf {
		let mut sidecar = path.clone().into_os_string();
		sidecar.push(".mime");
		PathBuf::from(sidecar)
	}
}

#[async_trait]
impl ObjectStore for DirStore {
	async fn upload(&self, name: &str, content: Bytes, content_type: &str) -> Result<()> {
		let path = self.object_path(name)?;
		fs::write(&path, &content)
			.await
			.with_context(|| format!("writing object {name:?}"))?;
		fs::write(Self::sidecar_path(&path), content_type.as_bytes()).await?;
		log::info!("stored object '{name}' ({} bytes, {content_type})", content.len());
		Ok(())
	}

	async fn download(&self, name: &str) -> Result<Option<(Bytes, String)>> {
		let path = self.object_path(name)?;
		let content = match fs::read(&path).await {
			Ok(content) => Bytes::from(content),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(error) => return Err(error).with_context(|| format!("reading object {name:?}")),
		};
		let content_type = match fs::read_to_string(Self::sidecar_path(&path)).await {
			Ok(content_type) => content_type,
			Err(_) => mime_guess::from_path(&path).first_or_octet_stream().to_string(),
		};
		Ok(Some((content, content_type)))
	}
}
