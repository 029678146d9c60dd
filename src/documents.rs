//! 표준 문서(PDF) 제공.
//!
//! 파일이 없거나 읽기/쓰기에 실패하면 해당 문서 하나만 실패로 처리한다.
//! 호출 측은 오류를 그 항목 옆에 표시하고 나머지 화면은 계속 그린다.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::DocumentRef;

/// 문서 단위 오류.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("standard document not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// 메모리에 올린 문서.
#[derive(Debug, Clone)]
pub struct Document {
    pub reference: &'static DocumentRef,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn file_name(&self) -> &'static str {
        self.reference.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.reference.mime
    }
}

/// 문서 파일이 모여 있는 디렉터리.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, doc: &DocumentRef) -> PathBuf {
        self.root.join(doc.file_name)
    }

    pub fn is_available(&self, doc: &DocumentRef) -> bool {
        self.path_for(doc).is_file()
    }

    pub fn load(&self, doc: &'static DocumentRef) -> Result<Document, DocumentError> {
        let path = self.path_for(doc);
        let bytes = fs::read(&path).map_err(|source| read_error(path, source))?;
        tracing::debug!(file = doc.file_name, bytes = bytes.len(), "standard document loaded");
        Ok(Document {
            reference: doc,
            bytes,
        })
    }

    /// 문서를 `dest`로 복사한다. `dest`가 디렉터리면 원래 파일 이름을 쓴다.
    /// 기록한 바이트 수를 돌려준다.
    pub fn export(&self, doc: &'static DocumentRef, dest: &Path) -> Result<u64, DocumentError> {
        let document = self.load(doc)?;
        let target = if dest.is_dir() {
            dest.join(doc.file_name)
        } else {
            dest.to_path_buf()
        };
        save_bytes(&document, &target)?;
        tracing::info!(file = doc.file_name, target = %target.display(), "standard document exported");
        Ok(document.bytes.len() as u64)
    }
}

/// 이미 읽어 둔 문서를 지정 경로에 쓴다(GUI 저장 대화상자 결과 경로 등).
pub fn save_bytes(document: &Document, target: &Path) -> Result<(), DocumentError> {
    fs::write(target, &document.bytes).map_err(|source| DocumentError::Write {
        path: target.to_path_buf(),
        source,
    })
}

fn read_error(path: PathBuf, source: io::Error) -> DocumentError {
    if source.kind() == io::ErrorKind::NotFound {
        DocumentError::Missing { path }
    } else {
        DocumentError::Read { path, source }
    }
}
