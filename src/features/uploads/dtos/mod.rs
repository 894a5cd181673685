mod upload_dto;

pub use upload_dto::{
    extension_for, UploadImageDto, UploadPreset, UploadResponseDto, ALLOWED_IMAGE_TYPES,
    MAX_IMAGE_SIZE,
};
