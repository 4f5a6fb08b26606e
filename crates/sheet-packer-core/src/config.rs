use serde::{Deserialize, Serialize};

/// Packing and compositing configuration.
/// Key notes:
///   - `padding` is applied on every side of every item before fitting, so
///     two neighbors end up at least `2 * padding` pixels apart
///   - `aligned` rounds the reported sheet dimensions up to powers of two and
///     biases growth decisions toward the smaller rounded canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Pixels reserved around every item on each side.
    pub padding: u32,
    /// Round final sheet dimensions up to powers of two.
    pub aligned: bool,
    /// Canvas fill color (RGBA) applied before compositing.
    #[serde(default = "default_background_color")]
    pub background_color: [u8; 4],
    /// Draw red outlines around occupied slots (debug).
    #[serde(default)]
    pub outlines: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            padding: 0,
            aligned: false,
            background_color: default_background_color(),
            outlines: false,
        }
    }
}

impl PackerConfig {
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_background_color() -> [u8; 4] {
    // mid-gray, fully opaque
    [127, 127, 127, 255]
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.cfg.padding = v;
        self
    }
    pub fn aligned(mut self, v: bool) -> Self {
        self.cfg.aligned = v;
        self
    }
    pub fn background_color(mut self, v: [u8; 4]) -> Self {
        self.cfg.background_color = v;
        self
    }
    pub fn outlines(mut self, v: bool) -> Self {
        self.cfg.outlines = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
