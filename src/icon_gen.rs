use crate::config::{
    Density, FailurePolicy, IconConfig, ICON_NAMES, OUTPUT_EXTENSION, STALE_EXTENSIONS,
};
use crate::error::IconError;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    error::{ParameterError, ParameterErrorKind},
    imageops::FilterType,
    io::Reader as ImageReader,
    ColorType, DynamicImage, ImageEncoder, ImageError,
};
use std::{
    error::Error,
    fs::{self, create_dir_all},
    io,
    path::{Path, PathBuf},
};

/// Result of processing a single density folder.
#[derive(Debug)]
pub struct DensityOutcome {
    pub folder: String,
    pub size: u32,
    pub dir: PathBuf,
    /// Stale icons deleted before writing.
    pub removed: Vec<PathBuf>,
    /// Written icon paths, or the error that stopped this entry.
    pub result: Result<Vec<PathBuf>, IconError>,
}

impl DensityOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<DensityOutcome>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &DensityOutcome> {
        self.outcomes.iter().filter(|o| o.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &DensityOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// True when every density entry produced its icons.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(DensityOutcome::is_ok)
    }
}

/// Regenerate the launcher icons for every density in `config`.
///
/// A missing or undecodable source fails before any folder is touched.
/// Folder preparation failures follow `config.setup_failure`; resize and
/// write failures are reported on the entry's outcome and never abort the run.
pub fn generate(config: &IconConfig) -> Result<GenerationReport, IconError> {
    let source = load_image(&config.source)?;

    println!(
        "Generating Android launcher icons from {}...",
        config.source.display()
    );

    let mut report = GenerationReport::default();
    for density in &config.densities {
        let outcome = generate_density(
            &source,
            &config.output_root,
            density,
            config.setup_failure,
        )?;
        report.outcomes.push(outcome);
    }

    Ok(report)
}

fn load_image(path: &Path) -> Result<DynamicImage, IconError> {
    let not_found = || IconError::SourceNotFound {
        path: path.to_path_buf(),
    };
    let decode_failed = |source: ImageError| IconError::SourceDecode {
        path: path.to_path_buf(),
        source,
    };

    if !path.is_file() {
        return Err(not_found());
    }

    // Sniff the content first so a mislabelled file still decodes.
    ImageReader::open(path)
        .map_err(|_| not_found())?
        .with_guessed_format()
        .map_err(|e| decode_failed(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_failed)
}

fn generate_density(
    source: &DynamicImage,
    output_root: &Path,
    density: &Density,
    policy: FailurePolicy,
) -> Result<DensityOutcome, IconError> {
    let dir = output_root.join(&density.folder);
    let mut outcome = DensityOutcome {
        folder: density.folder.clone(),
        size: density.size,
        dir: dir.clone(),
        removed: Vec::new(),
        result: Ok(Vec::new()),
    };

    if let Err(err) = prepare_dir(&dir).and_then(|()| remove_stale_icons(&dir, &mut outcome.removed))
    {
        match policy {
            FailurePolicy::Abort => return Err(err),
            FailurePolicy::SkipEntry => {
                println!("  ✗ Skipping {}: {}", density.folder, error_chain(&err));
                outcome.result = Err(err);
                return Ok(outcome);
            }
        }
    }

    outcome.result =
        write_icons(source, &dir, density.size).map_err(|source| IconError::ResizeOrWrite {
            folder: density.folder.clone(),
            source,
        });
    if let Err(err) = &outcome.result {
        println!(
            "  ✗ Error processing {}: {}",
            density.folder,
            error_chain(err)
        );
    }

    Ok(outcome)
}

fn prepare_dir(dir: &Path) -> Result<(), IconError> {
    if !dir.exists() {
        create_dir_all(dir).map_err(|source| IconError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
        println!("Created directory: {}", dir.display());
    }
    Ok(())
}

/// Delete every `{ic_launcher,ic_launcher_round}.{webp,png,xml}` in `dir`.
fn remove_stale_icons(dir: &Path, removed: &mut Vec<PathBuf>) -> Result<(), IconError> {
    for name in ICON_NAMES {
        for ext in STALE_EXTENSIONS {
            let path = dir.join(format!("{name}.{ext}"));
            if !path.exists() {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    println!("  Removed {}", path.display());
                    removed.push(path);
                }
                // Gone already; same outcome as a successful delete.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => return Err(IconError::Cleanup { path, source }),
            }
        }
    }
    Ok(())
}

/// Resize once, encode once, and write the same bytes under both icon names.
fn write_icons(source: &DynamicImage, dir: &Path, size: u32) -> Result<Vec<PathBuf>, ImageError> {
    if size == 0 {
        return Err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::Generic("icon size must be greater than zero".to_string()),
        )));
    }

    let resized = source.resize_exact(size, size, FilterType::Lanczos3);
    let png = encode_png(&resized)?;

    let mut written = Vec::with_capacity(ICON_NAMES.len());
    for name in ICON_NAMES {
        let path = dir.join(format!("{name}.{OUTPUT_EXTENSION}"));
        fs::write(&path, &png)?;
        println!("  ✓ Saved {}", path.display());
        written.push(path);
    }
    Ok(written)
}

// Encode image data as PNG with compression
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let rgba = image.to_rgba8();
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(rgba.as_raw(), rgba.width(), rgba.height(), ColorType::Rgba8)?;
    Ok(buf)
}

fn error_chain(err: &IconError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
