use image::ImageFormat;

/// The user-selected output container/codec.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TargetFormat {
    Ico,
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 5] = [
        TargetFormat::Ico,
        TargetFormat::Jpeg,
        TargetFormat::Png,
        TargetFormat::Bmp,
        TargetFormat::Gif,
    ];

    /// Extension appended to the source file stem.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Ico => "ico",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Bmp => "bmp",
            TargetFormat::Gif => "gif",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            TargetFormat::Ico => ImageFormat::Ico,
            TargetFormat::Jpeg => ImageFormat::Jpeg,
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Bmp => ImageFormat::Bmp,
            TargetFormat::Gif => ImageFormat::Gif,
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetFormat::Ico => write!(f, "ICO"),
            TargetFormat::Jpeg => write!(f, "JPG"),
            TargetFormat::Png => write!(f, "PNG"),
            TargetFormat::Bmp => write!(f, "BMP"),
            TargetFormat::Gif => write!(f, "GIF"),
        }
    }
}
