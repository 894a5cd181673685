mod upload_service;

pub use upload_service::UploadService;

#[cfg(test)]
pub(crate) use upload_service::tests::FakeImageStore;
