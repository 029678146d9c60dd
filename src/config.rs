use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::documents::DocumentStore;

/// 기본 설정 파일 이름(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 파일에 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(auto/ko/en-us 등)
    pub language: String,
    /// 외부 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    /// 표준 문서(PDF)가 있는 디렉터리
    pub documents_dir: String,
    /// GUI 창 불투명도(0.3~1.0)
    pub window_alpha: f32,
    /// tracing 필터 기본값. RUST_LOG가 있으면 그쪽이 우선한다.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            documents_dir: "standards".into(),
            window_alpha: 1.0,
            log_level: "info".into(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn document_store(&self) -> DocumentStore {
        DocumentStore::new(&self.documents_dir)
    }

    pub fn clamped_alpha(&self) -> f32 {
        self.window_alpha.clamp(0.3, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"ko\"\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.documents_dir, "standards");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn alpha_is_clamped() {
        let cfg = Config {
            window_alpha: 0.1,
            ..Config::default()
        };
        assert_eq!(cfg.clamped_alpha(), 0.3);
    }
}
