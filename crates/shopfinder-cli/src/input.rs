//! Product input collection and validation.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use shopfinder_core::ProductInput;
use thiserror::Error;

/// How the product is described. `--image` switches to image mode.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct InputArgs {
    /// Free-text product description, e.g. "Nike Air Max 270 shoes, size 10"
    #[arg(long)]
    pub text: Option<String>,
    /// Path to a product photo
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

/// User-facing validation failures. No search is made when one occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter your location")]
    MissingLocation,
    #[error("Please upload an image")]
    MissingImage,
    #[error("Please enter product details")]
    MissingDetails,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Image(PathBuf),
}

pub fn require_location(location: Option<&str>) -> Result<&str, InputError> {
    location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or(InputError::MissingLocation)
}

pub fn input_source(args: &InputArgs) -> Result<InputSource, InputError> {
    if let Some(path) = &args.image {
        if path.as_os_str().is_empty() {
            return Err(InputError::MissingImage);
        }
        return Ok(InputSource::Image(path.clone()));
    }

    match args.text.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(InputSource::Text(text.to_string())),
        _ => Err(InputError::MissingDetails),
    }
}

/// Reads the image file for image input.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or [`InputError::MissingImage`]
/// if it is empty.
pub async fn load_product_input(source: InputSource) -> anyhow::Result<ProductInput> {
    match source {
        InputSource::Text(text) => Ok(ProductInput::Text(text)),
        InputSource::Image(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read image {}", path.display()))?;
            if bytes.is_empty() {
                return Err(InputError::MissingImage.into());
            }
            Ok(ProductInput::Image(bytes))
        }
    }
}
