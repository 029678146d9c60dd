use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use materials_testing_hub::app::{self, AppError};
use materials_testing_hub::condition::UNSELECTED_LABEL;
use materials_testing_hub::config::{Config, CONFIG_FILE};
use materials_testing_hub::i18n::{self, keys, Translator};

/// 소재 시험 선택 보조 도구(CLI).
#[derive(Debug, Parser)]
#[command(name = "materials_testing_hub_cli", version, about)]
struct Cli {
    /// UI 언어(auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 조건 세트 하나의 물성 중요도를 조회한다. 빠진 항목은 미선택으로 본다.
    Resolve {
        #[arg(long, short = 't')]
        temperature: Option<String>,
        #[arg(long, short = 'H')]
        humidity: Option<String>,
        #[arg(long, short = 'e')]
        exercise: Option<String>,
    },
    /// Set 1과 Set 2를 비교한다.
    Compare {
        #[arg(long)]
        t1: Option<String>,
        #[arg(long)]
        h1: Option<String>,
        #[arg(long)]
        e1: Option<String>,
        #[arg(long)]
        t2: Option<String>,
        #[arg(long)]
        h2: Option<String>,
        #[arg(long)]
        e2: Option<String>,
    },
    /// 조건별 중요도 테이블 전체를 출력한다.
    Table,
    /// 물성별 시험 방법 참고 자료를 출력한다.
    Library {
        /// 물성 이름(예: "Thermal Hand")
        property: Option<String>,
    },
    /// 표준 문서를 파일로 내보낸다.
    Download {
        /// 문서 파일 이름(예: ASTM_F1868_Standard.pdf)
        file: String,
        /// 저장 경로(파일 또는 디렉터리)
        #[arg(long, short = 'o', default_value = ".")]
        out: PathBuf,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut cfg = match app::bootstrap(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            // 설정을 읽지 못했으므로 CLI 플래그/시스템 언어로만 안내한다
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            return fail(&tr, &AppError::from(err));
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = %lang, config = %cli.config.display(), "cli started");

    match dispatch(cli, &mut cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&tr, &err),
    }
}

fn dispatch(cli: Cli, cfg: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let store = cfg.document_store();
    match cli.command {
        None => app::run(cfg, &cli.config, tr)?,
        Some(Command::Resolve {
            temperature,
            humidity,
            exercise,
        }) => app::resolve_once(tr, label(&temperature), label(&humidity), label(&exercise)),
        Some(Command::Compare {
            t1,
            h1,
            e1,
            t2,
            h2,
            e2,
        }) => app::compare_once(
            tr,
            [label(&t1), label(&h1), label(&e1)],
            [label(&t2), label(&h2), label(&e2)],
        ),
        Some(Command::Table) => app::print_table(tr),
        Some(Command::Library { property }) => app::print_library(tr, &store, property.as_deref())?,
        Some(Command::Download { file, out }) => app::download(tr, &store, &file, &out)?,
    }
    Ok(())
}

fn fail(tr: &Translator, err: &AppError) -> ExitCode {
    eprintln!("{}", error_line(tr, err));
    ExitCode::FAILURE
}

fn error_line(tr: &Translator, err: &AppError) -> String {
    format!("{}: {err}", tr.t(keys::ERROR_PREFIX))
}

fn label(arg: &Option<String>) -> &str {
    arg.as_deref().unwrap_or(UNSELECTED_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_uses_translated_prefix() {
        let err = AppError::UnknownProperty("Stretch".into());
        let en = error_line(&Translator::new("en-us"), &err);
        assert!(en.starts_with("Error: "), "{en}");
        assert!(en.ends_with("Stretch"));
        let ko = error_line(&Translator::new("ko-kr"), &err);
        assert!(ko.starts_with("오류: "), "{ko}");
    }

    #[test]
    fn missing_flags_read_as_unselected() {
        assert_eq!(label(&None), UNSELECTED_LABEL);
        assert_eq!(label(&Some("High".into())), "High");
    }
}
