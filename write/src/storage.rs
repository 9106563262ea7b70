use futures::Future;
use rusoto_core::{Region, RusotoError};
use rusoto_s3::{PutObjectError, PutObjectOutput, PutObjectRequest, S3Client, S3};
use serde::Serialize;
use std::fmt;

/// Key every invocation writes to
pub const KEY: &str = "testFile.txt";
/// Contents every invocation writes
pub const BODY: &str = "I am a test text file";

pub type PutFuture<E> = Box<dyn Future<Item = PutReceipt, Error = E> + Send>;

/// A place objects can be written to
pub trait ObjectStore {
    type Error: fmt::Display + fmt::Debug + Send + 'static;

    fn put_object(&self, object: PutObject) -> PutFuture<Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub body: String,
}

impl PutObject {
    /// The hard-coded test object, addressed to `bucket`
    pub fn fixed(bucket: impl Into<String>) -> Self {
        PutObject {
            bucket: bucket.into(),
            key: KEY.into(),
            body: BODY.into(),
        }
    }
}

/// Metadata the store reports back for a successful write
///
/// Displays as a compact JSON object holding only the fields present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PutReceipt {
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "VersionId", skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(rename = "Expiration", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(
        rename = "ServerSideEncryption",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_side_encryption: Option<String>,
}

impl From<PutObjectOutput> for PutReceipt {
    fn from(output: PutObjectOutput) -> Self {
        PutReceipt {
            e_tag: output.e_tag,
            version_id: output.version_id,
            expiration: output.expiration,
            server_side_encryption: output.server_side_encryption,
        }
    }
}

impl fmt::Display for PutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(region: Region) -> Self {
        S3Store {
            client: S3Client::new(region),
        }
    }
}

impl ObjectStore for S3Store {
    type Error = RusotoError<PutObjectError>;

    fn put_object(&self, object: PutObject) -> PutFuture<Self::Error> {
        Box::new(
            self.client
                .put_object(PutObjectRequest {
                    bucket: object.bucket,
                    key: object.key,
                    body: Some(object.body.into_bytes().into()),
                    content_type: Some("text/plain".into()),
                    ..PutObjectRequest::default()
                })
                .map(PutReceipt::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusoto_core::signature::{SignedRequest, SignedRequestPayload};
    use rusoto_mock::{MockCredentialsProvider, MockRequestDispatcher};

    fn s3_store(dispatcher: MockRequestDispatcher) -> S3Store {
        S3Store {
            client: S3Client::new_with(dispatcher, MockCredentialsProvider, Region::UsEast1),
        }
    }

    #[test]
    fn fixed_object_targets_bucket() {
        assert_eq!(
            PutObject::fixed("uploads"),
            PutObject {
                bucket: "uploads".into(),
                key: "testFile.txt".into(),
                body: "I am a test text file".into(),
            }
        );
    }

    #[test]
    fn receipt_keeps_output_metadata() {
        let receipt = PutReceipt::from(PutObjectOutput {
            e_tag: Some("\"xyz\"".into()),
            version_id: Some("3".into()),
            ..PutObjectOutput::default()
        });
        assert_eq!(receipt.e_tag.as_ref().map(String::as_str), Some("\"xyz\""));
        assert_eq!(receipt.version_id.as_ref().map(String::as_str), Some("3"));
        assert_eq!(receipt.expiration, None);
    }

    #[test]
    fn receipt_displays_present_fields_only() {
        let receipt = PutReceipt {
            e_tag: Some("xyz".into()),
            ..PutReceipt::default()
        };
        assert_eq!(receipt.to_string(), r#"{"ETag":"xyz"}"#);
        assert_eq!(PutReceipt::default().to_string(), "{}");
    }

    #[test]
    fn s3_store_puts_fixed_object() {
        let store = s3_store(
            MockRequestDispatcher::default()
                .with_request_checker(|request: &SignedRequest| {
                    assert_eq!(request.method, "PUT");
                    assert_eq!(request.path, "/uploads/testFile.txt");
                    assert_eq!(
                        request.headers.get("content-type"),
                        Some(&vec![b"text/plain".to_vec()])
                    );
                    match &request.payload {
                        Some(SignedRequestPayload::Stream(stream)) => {
                            assert_eq!(stream.size_hint(), Some(BODY.len()))
                        }
                        _ => panic!("expected a streamed body"),
                    }
                })
                .with_header("ETag", "\"xyz\""),
        );
        let receipt = store
            .put_object(PutObject::fixed("uploads"))
            .wait()
            .expect("put failed");
        assert_eq!(receipt.e_tag.as_ref().map(String::as_str), Some("\"xyz\""));
    }

    #[test]
    fn s3_store_surfaces_service_errors() {
        let store = s3_store(MockRequestDispatcher::with_status(404));
        assert!(store.put_object(PutObject::fixed("uploads")).wait().is_err());
    }
}
