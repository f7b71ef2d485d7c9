use std::path::PathBuf;

use super::format::TargetFormat;
use crate::types::ValidationError;

/// Everything one batch needs, captured at the moment Convert is clicked.
/// Built through [`ConversionRequest::new`] so an empty selection is caught
/// before any file is touched.
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub sources: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub format: TargetFormat,
}

impl ConversionRequest {
    pub fn new(
        sources: Vec<PathBuf>,
        output_dir: PathBuf,
        format: TargetFormat,
    ) -> Result<Self, ValidationError> {
        if sources.is_empty() {
            return Err(ValidationError::NoSourceFiles);
        }
        if output_dir.as_os_str().is_empty() {
            return Err(ValidationError::NoOutputDirectory);
        }

        Ok(Self {
            sources,
            output_dir,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_source_list() {
        let result = ConversionRequest::new(Vec::new(), PathBuf::from("out"), TargetFormat::Png);
        assert_eq!(result.unwrap_err(), ValidationError::NoSourceFiles);
    }

    #[test]
    fn rejects_empty_output_directory() {
        let result = ConversionRequest::new(
            vec![PathBuf::from("a.png")],
            PathBuf::new(),
            TargetFormat::Png,
        );
        assert_eq!(result.unwrap_err(), ValidationError::NoOutputDirectory);
    }
}
