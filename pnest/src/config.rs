use serde::{Deserialize, Serialize};

use panel_nest::io::svg::SvgDrawOptions;
use panel_nest::util::PackerConfig;

/// Configuration of a nesting run from the command line
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NestConfig {
    /// Configuration of the rectangle packer
    #[serde(default)]
    pub packer: PackerConfig,
    /// Write an SVG drawing of every panel next to the JSON solution
    #[serde(default = "default_write_svg")]
    pub write_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_write_svg() -> bool {
    true
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            packer: PackerConfig::default(),
            write_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
