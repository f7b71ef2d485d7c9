use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
    DynamicImage, ExtendedColorType,
};

use crate::{
    structs::{format::TargetFormat, request::ConversionRequest},
    types::{ConversionOutcome, ConvertError},
};

/// Windows expects icons to carry these resolutions regardless of the
/// source image's native size.
const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Converts every source file in the request, in list order, writing one
/// output per source into the output directory. Existing files at the
/// destination paths are overwritten. The first decode/encode/IO error
/// aborts the batch; outputs already written stay on disk.
pub fn convert(request: &ConversionRequest) -> ConversionOutcome {
    let mut converted = 0;

    for source in &request.sources {
        if let Err(error) = convert_file(source, request) {
            log::error!("failed to convert '{}': {}", source.display(), error);
            return ConversionOutcome::Failure {
                source: source.clone(),
                error,
            };
        }
        converted += 1;
    }

    log::info!(
        "converted {} file(s) to {} in '{}'",
        converted,
        request.format,
        request.output_dir.display()
    );
    ConversionOutcome::Success { converted }
}

fn convert_file(source: &Path, request: &ConversionRequest) -> Result<(), ConvertError> {
    let img = image::open(source)?;
    let destination = destination_path(source, request)?;
    let data = encode_image(img, request.format)?;

    fs::write(&destination, data)?;
    Ok(())
}

/// `<output_dir>/<source stem>.<target extension>`.
fn destination_path(source: &Path, request: &ConversionRequest) -> Result<PathBuf, ConvertError> {
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or(ConvertError::InvalidFileName)?;

    let file_name = format!("{}.{}", stem, request.format.extension());
    Ok(request.output_dir.join(file_name))
}

fn encode_image(img: DynamicImage, format: TargetFormat) -> Result<Vec<u8>, ConvertError> {
    match format {
        TargetFormat::Ico => encode_ico(&img),

        // JPEG has no alpha channel and the encoder rejects alpha modes,
        // so flatten to plain RGB first. Palette sources are already
        // expanded to RGB/RGBA at decode time.
        TargetFormat::Jpeg => {
            let img = if img.color().has_alpha() {
                DynamicImage::ImageRgb8(img.to_rgb8())
            } else {
                img
            };

            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), format.image_format())?;
            Ok(buf)
        }

        // No mode conversion, the source's color mode is kept.
        TargetFormat::Png | TargetFormat::Bmp | TargetFormat::Gif => {
            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), format.image_format())?;
            Ok(buf)
        }
    }
}

/// Builds an ICO container with one PNG-compressed RGBA frame per entry in
/// [`ICO_SIZES`], resampling the source to each square resolution.
fn encode_ico(img: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
    let mut frames = Vec::with_capacity(ICO_SIZES.len());

    for size in ICO_SIZES {
        let resized = img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
        let frame = IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)?;
        frames.push(frame);
    }

    let mut buf = Vec::new();
    IcoEncoder::new(Cursor::new(&mut buf)).encode_images(&frames)?;
    Ok(buf)
}
