use std::path::Path;

use thiserror::Error;

use crate::comparison::{Comparison, Resolution, SetId};
use crate::config::{self, Config, ConfigError};
use crate::documents::DocumentStore;
use crate::i18n::{keys, Translator};
use crate::importance::{self, Property};
use crate::library;
use crate::telemetry;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("알 수 없는 표준 문서: {0}")]
    UnknownDocument(String),
    #[error("알 수 없는 물성: {0}")]
    UnknownProperty(String),
    #[error("표준 문서를 내보내지 못했습니다: {0}")]
    DownloadFailed(String),
}

/// 설정을 읽고 로그 구독자를 설치한다. 설정 파일이 없으면 기본값으로 만든다.
pub fn bootstrap(config_path: &Path) -> Result<Config, ConfigError> {
    let created = !config_path.exists();
    let cfg = config::load_or_default_at(config_path)?;
    start_telemetry(&cfg.log_level);
    if created {
        tracing::info!(path = %config_path.display(), "default configuration written");
    }
    Ok(cfg)
}

/// 로그 구독자를 설치한다. 실패하면 stderr에 알리고 로그 없이 계속한다.
pub fn start_telemetry(log_level: &str) -> bool {
    match telemetry::init(log_level) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 종료 시 설정을 `config_path`에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut tr = tr.clone();
    let mut comparison = Comparison::default();
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::EditSet(id) => ui_cli::handle_condition_set(&tr, &mut comparison, id)?,
            MenuChoice::Compare => ui_cli::handle_compare(&tr, &comparison),
            MenuChoice::Library => ui_cli::handle_library(&tr, &config.document_store())?,
            MenuChoice::Download => ui_cli::handle_download(&tr, &config.document_store())?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    tr = ui_cli::translator_for(config);
                }
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 조건 세트 하나를 라벨로 조회해 출력한다.
pub fn resolve_once(tr: &Translator, temperature: &str, humidity: &str, exercise: &str) {
    let resolution = Resolution::from_labels(temperature, humidity, exercise);
    ui_cli::print_resolution(tr, SetId::First.chart_title(), &resolution);
}

/// 두 세트를 라벨로 조회해 나란히 출력한다.
pub fn compare_once(tr: &Translator, first: [&str; 3], second: [&str; 3]) {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    for (id, [t, h, e]) in [(SetId::First, first), (SetId::Second, second)] {
        let resolution = Resolution::from_labels(t, h, e);
        ui_cli::print_resolution(tr, id.chart_title(), &resolution);
    }
}

/// 조회 테이블 전체를 표로 출력한다.
pub fn print_table(tr: &Translator) {
    let header: Vec<String> = Property::ALL.iter().map(|p| tr.property_name(*p)).collect();
    println!("{:<36} {}", "", header.join(" | "));
    for (key, record) in importance::table() {
        let cells: Vec<String> = header
            .iter()
            .zip(record.iter())
            .map(|(h, (_, v))| format!("{v:>width$}", width = h.chars().count()))
            .collect();
        println!("{:<36} {}", key.to_string(), cells.join(" | "));
    }
}

/// 참고 자료를 출력한다. 물성 이름이 주어지면 그 그룹만.
pub fn print_library(
    tr: &Translator,
    store: &DocumentStore,
    property: Option<&str>,
) -> Result<(), AppError> {
    let only = match property {
        Some(name) => Some(
            Property::from_name(name).ok_or_else(|| AppError::UnknownProperty(name.to_string()))?,
        ),
        None => None,
    };
    println!("{}", tr.t(keys::LIBRARY_HEADING));
    ui_cli::print_library(tr, store, only);
    Ok(())
}

/// 표준 문서 하나를 내보낸다.
pub fn download(
    tr: &Translator,
    store: &DocumentStore,
    file_name: &str,
    dest: &Path,
) -> Result<(), AppError> {
    let doc = library::find_document(file_name)
        .ok_or_else(|| AppError::UnknownDocument(file_name.to_string()))?;
    if ui_cli::export_document(tr, store, doc, dest) {
        Ok(())
    } else {
        Err(AppError::DownloadFailed(doc.file_name.to_string()))
    }
}
