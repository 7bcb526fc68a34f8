//! Static asset catalog and icon fallback rendering.
//!
//! Sections reference icons and images by fixed public path (`/icons/...`).
//! The catalog records which of those paths exist under the static directory
//! so the renderer can substitute an inline glyph instead of emitting an
//! `<img>` that would break the layout.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::ui::html::escape;

/// Set of public asset paths available under the static directory.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    paths: HashSet<String>,
}

impl AssetCatalog {
    /// Index every file under `root`. A missing directory yields an empty catalog.
    pub fn scan(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let paths: HashSet<String> = WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(root).ok()?;
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                Some(format!("/{}", parts.join("/")))
            })
            .collect();

        info!(
            name: "assets.scanned",
            root = %root.display(),
            count = paths.len(),
            "Static assets indexed"
        );

        Self { paths }
    }

    /// A catalog with an explicit set of paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether a public path such as `/icons/warehousing.svg` exists.
    pub fn resolves(&self, public_path: &str) -> bool {
        let normalized = public_path.split(['?', '#']).next().unwrap_or_default();
        self.paths.contains(normalized)
    }

    /// URL under which a public path is served.
    pub fn url(public_path: &str) -> String {
        format!("/static{public_path}")
    }
}

/// Render an icon, or `fallback` as an inline glyph when the path is missing.
pub fn render_icon(
    catalog: &AssetCatalog,
    path: &str,
    alt: &str,
    fallback: &str,
    class: &str,
) -> String {
    if catalog.resolves(path) {
        format!(
            r#"<img src="{}" alt="{}" width="32" height="32" class="{}" loading="lazy">"#,
            escape(&AssetCatalog::url(path)),
            escape(alt),
            escape(class)
        )
    } else {
        debug!(path, "Icon not found; rendering fallback glyph");
        format!(
            r#"<span class="icon-fallback text-2xl" role="img" aria-label="{}">{}</span>"#,
            escape(alt),
            escape(fallback)
        )
    }
}
