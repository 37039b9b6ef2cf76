//! Conversion service boundary and ingestion controller
//!
//! A source paper (normally a PDF) is handed to a conversion service that
//! answers with a status and a JSON body. `ingest` turns that answer into a
//! normalized `Document`; `IngestionController` adds the loading state that
//! rejects a second request while one is in flight.

use crate::{IngestError, IngestResult, RawPaper, Result, StoreError};
use exam_model::{Document, Header};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A file selected for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a source file from disk
    pub async fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StoreError::FileNotFound(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }

    fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }

    fn is_json(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

/// Status and body of a conversion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that converts a source paper into the structured JSON shape
pub trait ConversionService {
    /// Convert one file. Transport failures are errors; service-side
    /// failures come back as a non-success status.
    fn convert(&self, source: SourceFile) -> impl Future<Output = IngestResult<ServiceResponse>> + Send;
}

/// Convert `source` and normalize the result into a document
pub async fn ingest<S: ConversionService>(
    service: &S,
    source: SourceFile,
    defaults: &Header,
) -> IngestResult<Document> {
    let name = source.name.clone();
    let response = service.convert(source).await?;

    if !response.is_success() {
        tracing::warn!("Conversion of {} failed with status {}", name, response.status);
        return Err(IngestError::Service {
            status: response.status,
            body: response.body,
        });
    }

    let document = RawPaper::from_json(&response.body)?.into_document_with(defaults);
    tracing::info!(
        "Ingested {}: {} sections, {} questions",
        name,
        document.sections.len(),
        document.question_count()
    );
    Ok(document)
}

/// Whether an ingestion call is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Resets the loading flag when the call resolves, rejects or is dropped
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one ingestion at a time against a conversion service
#[derive(Debug)]
pub struct IngestionController<S> {
    service: S,
    defaults: Header,
    timeout: Duration,
    loading: AtomicBool,
}

impl<S: ConversionService> IngestionController<S> {
    pub fn new(service: S, defaults: Header, timeout: Duration) -> Self {
        Self {
            service,
            defaults,
            timeout,
            loading: AtomicBool::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> LoadState {
        if self.loading.load(Ordering::Acquire) {
            LoadState::Loading
        } else {
            LoadState::Idle
        }
    }

    /// Convert and normalize one paper.
    ///
    /// Fails with `IngestError::Busy` while another call is loading. A call
    /// exceeding the timeout fails as a transport error.
    pub async fn load(&self, source: SourceFile) -> IngestResult<Document> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Rejecting {} while another paper is loading", source.name);
            return Err(IngestError::Busy);
        }
        let _guard = LoadingGuard(&self.loading);

        match tokio::time::timeout(self.timeout, ingest(&self.service, source, &self.defaults)).await {
            Ok(result) => result,
            Err(_) => Err(IngestError::Transport(format!(
                "no response within {} seconds",
                self.timeout.as_secs()
            ))),
        }
    }
}

/// Serves payloads that were converted ahead of time.
///
/// A `.json` source is its own payload. Any other source `name.ext` is
/// answered with `<payload_dir>/name.json`, or a 404 when that is missing.
#[derive(Debug, Clone)]
pub struct FileConversionService {
    payload_dir: PathBuf,
}

impl FileConversionService {
    pub fn new(payload_dir: impl Into<PathBuf>) -> Self {
        Self {
            payload_dir: payload_dir.into(),
        }
    }

    pub fn payload_dir(&self) -> &Path {
        &self.payload_dir
    }
}

impl ConversionService for FileConversionService {
    async fn convert(&self, source: SourceFile) -> IngestResult<ServiceResponse> {
        if source.is_json() {
            return Ok(ServiceResponse::ok(String::from_utf8_lossy(&source.bytes)));
        }

        let payload = self.payload_dir.join(format!("{}.json", source.stem()));
        match tokio::fs::read_to_string(&payload).await {
            Ok(body) => Ok(ServiceResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ServiceResponse {
                status: 404,
                body: format!("No converted payload for {}", source.name),
            }),
            Err(e) => Err(IngestError::Transport(e.to_string())),
        }
    }
}
