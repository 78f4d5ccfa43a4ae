//! Android mipmap output layout
//!
//! This module enumerates every file the generator produces, relative to an Android `res`
//! directory, and materializes them. The plan is plain data so it can be listed as JSON
//! without touching the filesystem.

use crate::icon_gen::{self, IconVariant};
use crate::palette;
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// Density buckets as (name, legacy size, adaptive size).
///
/// Adaptive layers are 108dp; legacy icons are 48dp.
pub const DENSITIES: [(&str, u32, u32); 5] = [
    ("mdpi", 48, 108),
    ("hdpi", 72, 162),
    ("xhdpi", 96, 216),
    ("xxhdpi", 144, 324),
    ("xxxhdpi", 192, 432),
];

pub const STORE_ICON_SIZE: u32 = 512;
pub const STORE_ICON_PATH: &str = "playstore-icon.png";
pub const COLOR_RESOURCE_PATH: &str = "values/ic_launcher_background.xml";

/// Name of the color constant declared in the color resource
pub const COLOR_RESOURCE_NAME: &str = "ic_launcher_background";

/// What an artifact contains
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactKind {
    /// A rendered PNG
    Image { variant: IconVariant, size: u32 },
    /// The static color-definition resource
    ColorResource,
}

/// One file of the output plan
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output root, always with `/` separators
    pub path: String,

    /// Density bucket the file belongs to; `None` for shared files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,

    #[serde(flatten)]
    pub kind: ArtifactKind,
}

impl Artifact {
    fn image(path: String, density: Option<&str>, variant: IconVariant, size: u32) -> Self {
        Self {
            path,
            density: density.map(str::to_string),
            kind: ArtifactKind::Image { variant, size },
        }
    }
}

/// Ordered list of every file to generate
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub artifacts: Vec<Artifact>,
}

impl OutputPlan {
    /// The launcher icon set: three images per density, the store icon, and the color resource
    pub fn android() -> Self {
        let mut artifacts = Vec::new();

        for (density, legacy_size, adaptive_size) in DENSITIES {
            let dir = format!("mipmap-{density}");
            artifacts.push(Artifact::image(
                format!("{dir}/ic_launcher.png"),
                Some(density),
                IconVariant::Legacy,
                legacy_size,
            ));
            artifacts.push(Artifact::image(
                format!("{dir}/ic_launcher_round.png"),
                Some(density),
                IconVariant::Round,
                legacy_size,
            ));
            artifacts.push(Artifact::image(
                format!("{dir}/ic_launcher_foreground.png"),
                Some(density),
                IconVariant::Foreground,
                adaptive_size,
            ));
        }

        artifacts.push(Artifact::image(
            STORE_ICON_PATH.to_string(),
            None,
            IconVariant::Legacy,
            STORE_ICON_SIZE,
        ));

        artifacts.push(Artifact {
            path: COLOR_RESOURCE_PATH.to_string(),
            density: None,
            kind: ArtifactKind::ColorResource,
        });

        Self { artifacts }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize output plan")
    }

    /// Write every artifact under `root`, returning the written paths in plan order
    ///
    /// Directories are created as needed and existing files are overwritten. The first
    /// failure aborts the run; files written before it stay on disk.
    pub fn execute(&self, root: &Path) -> Result<Vec<PathBuf>> {
        create_dir_all(root)
            .with_context(|| format!("Can't create output directory {}", root.display()))?;

        let mut written = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let path = root.join(&artifact.path);
            if let Some(parent) = path.parent() {
                create_dir_all(parent)
                    .with_context(|| format!("Can't create directory {}", parent.display()))?;
            }

            match artifact.kind {
                ArtifactKind::Image { variant, size } => {
                    let image = icon_gen::render(variant, size);
                    icon_gen::save_png(&image, &path)?;
                    println!("  ✓ Generated {} ({variant}, {size}x{size})", path.display());
                }
                ArtifactKind::ColorResource => {
                    write_color_resource(&path)?;
                    println!("  ✓ Updated {}", path.display());
                }
            }

            written.push(path);
        }

        Ok(written)
    }
}

/// Render and write the full launcher icon set under `root`
pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>> {
    println!("Generating launcher icons in {}...", root.display());
    OutputPlan::android().execute(root)
}

/// Android resource XML declaring the background color
pub fn color_resource_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="{COLOR_RESOURCE_NAME}">{}</color>
</resources>
"#,
        palette::to_hex(palette::BACKGROUND)
    )
}

fn write_color_resource(path: &Path) -> Result<()> {
    std::fs::write(path, color_resource_xml())
        .with_context(|| format!("Failed to write {}", path.display()))
}
