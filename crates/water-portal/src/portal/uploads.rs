use serde::{Deserialize, Serialize};

const MIB: u64 = 1024 * 1024;

/// Metadata of a file the citizen attached. Contents never reach the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Where an upload is headed; each destination has its own size ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Document,
    MeterPhoto,
}

impl UploadKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "document" | "doc" => Some(Self::Document),
            "meter-photo" | "photo" => Some(Self::MeterPhoto),
            _ => None,
        }
    }
}

/// Client-side acceptance rule: images or PDF, capped per destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    kind: UploadKind,
    max_bytes: u64,
}

impl UploadPolicy {
    pub const fn for_kind(kind: UploadKind) -> Self {
        let max_bytes = match kind {
            UploadKind::Document => 2 * MIB,
            UploadKind::MeterPhoto => 5 * MIB,
        };
        Self { kind, max_bytes }
    }

    pub const fn documents() -> Self {
        Self::for_kind(UploadKind::Document)
    }

    pub const fn meter_photos() -> Self {
        Self::for_kind(UploadKind::MeterPhoto)
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Type is checked before size, so an oversized executable reports the type problem.
    pub fn check(&self, upload: &UploadDescriptor) -> Result<(), UploadRejection> {
        if !is_accepted_type(&upload.content_type) {
            tracing::info!(
                file = %upload.file_name,
                content_type = %upload.content_type,
                "upload rejected for type"
            );
            return Err(UploadRejection::FileWrongType {
                file_name: upload.file_name.clone(),
                content_type: upload.content_type.clone(),
            });
        }

        if upload.size_bytes > self.max_bytes {
            tracing::info!(
                file = %upload.file_name,
                size_bytes = upload.size_bytes,
                max_bytes = self.max_bytes,
                "upload rejected for size"
            );
            return Err(UploadRejection::FileTooLarge {
                file_name: upload.file_name.clone(),
                size_bytes: upload.size_bytes,
                max_mib: self.max_bytes / MIB,
            });
        }

        Ok(())
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }
}

fn is_accepted_type(content_type: &str) -> bool {
    match content_type.trim().parse::<mime::Mime>() {
        Ok(parsed) => {
            parsed.type_() == mime::IMAGE
                || (parsed.type_() == mime::APPLICATION && parsed.subtype() == mime::PDF)
        }
        Err(_) => false,
    }
}

/// User-facing upload rejection. Never a fault, always a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Please upload an image or PDF file ({file_name} is {content_type})")]
    FileWrongType {
        file_name: String,
        content_type: String,
    },
    #[error("File size must be less than {max_mib}MB ({file_name} is {size_bytes} bytes)")]
    FileTooLarge {
        file_name: String,
        size_bytes: u64,
        max_mib: u64,
    },
}
