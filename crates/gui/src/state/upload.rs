//! User model upload: accepts an IFC file path, records its metadata, and
//! substitutes a default spec for visualization (no IFC parsing happens).

use std::path::Path;

use shared::BuildingSpec;

#[derive(Debug)]
pub enum UploadError {
    /// File extension is not .ifc
    NotIfc(String),
    /// File missing or unreadable
    Io(String, std::io::Error),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::NotIfc(name) => write!(f, "'{}' is not an IFC file", name),
            UploadError::Io(name, err) => write!(f, "Cannot read '{}': {}", name, err),
        }
    }
}

impl std::error::Error for UploadError {}

/// Metadata of one accepted upload
#[derive(Debug, Clone)]
pub struct UploadedModel {
    pub id: String,
    pub file_name: String,
    pub size_bytes: u64,
    /// Visualization stand-in; the file contents are never parsed
    pub spec: BuildingSpec,
}

/// Validate and register an uploaded file
pub fn register_upload(path: &Path) -> Result<UploadedModel, UploadError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let is_ifc = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("ifc"))
        .unwrap_or(false);
    if !is_ifc {
        return Err(UploadError::NotIfc(file_name));
    }

    let meta =
        std::fs::metadata(path).map_err(|e| UploadError::Io(file_name.clone(), e))?;

    let upload = UploadedModel {
        id: uuid::Uuid::new_v4().to_string(),
        file_name,
        size_bytes: meta.len(),
        spec: BuildingSpec::default(),
    };
    tracing::info!(id = %upload.id, file = %upload.file_name, bytes = upload.size_bytes, "upload registered");
    Ok(upload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_ifc_extension() {
        let err = register_upload(Path::new("/tmp/model.obj")).unwrap_err();
        assert!(matches!(err, UploadError::NotIfc(_)));
        assert!(register_upload(Path::new("/tmp/noext")).is_err());
    }

    #[test]
    fn test_accepts_ifc_and_substitutes_default_spec() {
        let dir = std::env::temp_dir();
        let path = dir.join("upload_test_model.ifc");
        std::fs::write(&path, b"ISO-10303-21;").unwrap();

        let upload = register_upload(&path).unwrap();
        assert_eq!(upload.file_name, "upload_test_model.ifc");
        assert_eq!(upload.size_bytes, 13);
        assert_eq!(upload.spec, BuildingSpec::default());
        assert!(!upload.id.is_empty());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = register_upload(Path::new("/nonexistent/model.ifc")).unwrap_err();
        assert!(matches!(err, UploadError::Io(_, _)));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let dir = std::env::temp_dir();
        let path = dir.join("upload_test_model_upper.IFC");
        std::fs::write(&path, b"x").unwrap();
        assert!(register_upload(&path).is_ok());
        let _ = std::fs::remove_file(&path);
    }
}
