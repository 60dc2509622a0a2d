//! Startup assets
//!
//! The HUD font and the object shader pair are read once at startup. A missing
//! font aborts initialization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

pub const FONT_FILE: &str = "Inconsolata-Medium.ttf";
pub const VERTEX_SHADER_FILE: &str = "objects.vert";
pub const FRAGMENT_SHADER_FILE: &str = "objects.frag";

/// Loaded asset bytes, handed to the host renderer
#[derive(Debug, Clone)]
pub struct Assets {
    pub font: Vec<u8>,
    pub vertex_shader: String,
    pub fragment_shader: String,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Self> {
        let font_path = dir.join(FONT_FILE);
        let font = fs::read(&font_path)
            .with_context(|| format!("Cannot load font file {}", font_path.display()))?;
        if font.is_empty() {
            bail!("Cannot load font file {}: file is empty", font_path.display());
        }

        let vertex_shader = read_shader(&dir.join(VERTEX_SHADER_FILE))?;
        let fragment_shader = read_shader(&dir.join(FRAGMENT_SHADER_FILE))?;

        log::info!(
            "Loaded assets from {} (font {} bytes)",
            dir.display(),
            font.len()
        );

        Ok(Self {
            font,
            vertex_shader,
            fragment_shader,
        })
    }
}

fn read_shader(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot load shader {}", path.display()))
}
