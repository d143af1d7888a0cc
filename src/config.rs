use std::path::PathBuf;

/// Base names of the launcher assets written into each density folder.
pub const ICON_NAMES: [&str; 2] = ["ic_launcher", "ic_launcher_round"];

/// Extensions removed before new icons are written, so the resource loader
/// never picks up an old `.webp` or adaptive `.xml` over the fresh PNG.
pub const STALE_EXTENSIONS: [&str; 3] = ["webp", "png", "xml"];

pub const OUTPUT_EXTENSION: &str = "png";

/// Standard Android launcher densities, in table order.
pub const DEFAULT_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// A density folder paired with the square edge length of its icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Density {
    pub folder: String,
    pub size: u32,
}

impl Density {
    pub fn new(folder: impl Into<String>, size: u32) -> Self {
        Self {
            folder: folder.into(),
            size,
        }
    }

    pub fn defaults() -> Vec<Density> {
        DEFAULT_DENSITIES
            .iter()
            .map(|&(folder, size)| Density::new(folder, size))
            .collect()
    }
}

/// What to do when a density folder can't be created or a stale icon can't be removed.
///
/// Resize and write failures are always contained to their own density entry;
/// this policy only covers the folder preparation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure on that entry and move on to the next one.
    SkipEntry,
}

#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Source image, decoded once per run.
    pub source: PathBuf,
    /// Android `res` directory holding the `mipmap-*` folders.
    pub output_root: PathBuf,
    pub densities: Vec<Density>,
    pub setup_failure: FailurePolicy,
}

impl IconConfig {
    pub fn new(source: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_root: output_root.into(),
            densities: Density::defaults(),
            setup_failure: FailurePolicy::default(),
        }
    }

    pub fn with_densities(mut self, densities: Vec<Density>) -> Self {
        self.densities = densities;
        self
    }

    pub fn with_setup_failure(mut self, policy: FailurePolicy) -> Self {
        self.setup_failure = policy;
        self
    }
}
