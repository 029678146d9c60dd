use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::condition::{Category, Selection, UNSELECTED_LABEL};
use crate::importance::Property;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SET_1: &str = "main_menu.set_1";
    pub const MAIN_MENU_SET_2: &str = "main_menu.set_2";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_LIBRARY: &str = "main_menu.library";
    pub const MAIN_MENU_DOWNLOAD: &str = "main_menu.download";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONDITION_HEADING: &str = "condition.heading";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_HUMIDITY: &str = "prompt.humidity";
    pub const PROMPT_EXERCISE: &str = "prompt.exercise";
    pub const CONDITION_CURRENT: &str = "condition.current";
    pub const CONDITION_FALLBACK: &str = "condition.fallback";

    pub const COMPARE_HEADING: &str = "compare.heading";

    pub const LIBRARY_HEADING: &str = "library.heading";
    pub const LIBRARY_PROMPT_GROUP: &str = "library.prompt_group";
    pub const LIBRARY_METRIC: &str = "library.metric";
    pub const LIBRARY_STANDARD: &str = "library.standard";
    pub const LIBRARY_SAMPLE_SIZE: &str = "library.sample_size";
    pub const LIBRARY_SPECIMENS: &str = "library.specimens";
    pub const LIBRARY_DOCUMENT: &str = "library.document";
    pub const LIBRARY_DOCUMENT_MISSING: &str = "library.document_missing";

    pub const DOWNLOAD_HEADING: &str = "download.heading";
    pub const DOWNLOAD_PROMPT_DEST: &str = "download.prompt_dest";
    pub const DOWNLOAD_DONE: &str = "download.done";
    pub const DOWNLOAD_FAILED: &str = "download.failed";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_DOCS_DIR: &str = "settings.current_docs_dir";
    pub const SETTINGS_PROMPT_DOCS_DIR: &str = "settings.prompt_docs_dir";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 언어팩에 있으면 그 값을, 없으면 `default`를 돌려준다.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 드롭다운 항목 표시 문자열.
    pub fn selection_label<T: Category>(&self, sel: Selection<T>) -> String {
        match sel {
            Selection::Unselected => self.text("condition.unselected", UNSELECTED_LABEL),
            Selection::Chosen(v) => self.text(v.i18n_key(), v.label()),
        }
    }

    pub fn property_name(&self, property: Property) -> String {
        self.text(property.i18n_key(), property.name())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or(""),
            Language::En => en(key).unwrap_or(""),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블(점으로 이어 붙임).
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Materials Testing Hub ===",
        MAIN_MENU_SET_1 => "1) Set 1 조건 입력",
        MAIN_MENU_SET_2 => "2) Set 2 조건 입력",
        MAIN_MENU_COMPARE => "3) 중요도 레이더 차트 비교",
        MAIN_MENU_LIBRARY => "4) 소재 물성 시험 방법",
        MAIN_MENU_DOWNLOAD => "5) 표준 문서 내려받기",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CONDITION_HEADING => "\n-- 조건 입력 --",
        PROMPT_TEMPERATURE => "목표 온도는?",
        PROMPT_HUMIDITY => "목표 습도는?",
        PROMPT_EXERCISE => "운동 강도는?",
        CONDITION_CURRENT => "현재 조건:",
        CONDITION_FALLBACK => "기본 중요도(모두 3) 사용:",
        COMPARE_HEADING => "\n-- 중요도 레이더 차트 --",
        LIBRARY_HEADING => "\n-- 소재 물성 시험 방법 --",
        LIBRARY_PROMPT_GROUP => "물성 번호(엔터=전체): ",
        LIBRARY_METRIC => "지표",
        LIBRARY_STANDARD => "관련 표준",
        LIBRARY_SAMPLE_SIZE => "시편 크기",
        LIBRARY_SPECIMENS => "권장 시편 수",
        LIBRARY_DOCUMENT => "표준 문서",
        LIBRARY_DOCUMENT_MISSING => "(파일 없음)",
        DOWNLOAD_HEADING => "\n-- 표준 문서 내려받기 --",
        DOWNLOAD_PROMPT_DEST => "저장 경로(엔터=현재 디렉터리): ",
        DOWNLOAD_DONE => "저장 완료:",
        DOWNLOAD_FAILED => "내려받기 실패:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en, 엔터=유지): ",
        SETTINGS_CURRENT_DOCS_DIR => "표준 문서 디렉터리:",
        SETTINGS_PROMPT_DOCS_DIR => "새 디렉터리(엔터=유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Materials Testing Hub ===",
        MAIN_MENU_SET_1 => "1) Set 1 conditions",
        MAIN_MENU_SET_2 => "2) Set 2 conditions",
        MAIN_MENU_COMPARE => "3) Compare importance radar charts",
        MAIN_MENU_LIBRARY => "4) Materials features (test methods)",
        MAIN_MENU_DOWNLOAD => "5) Download standard documents",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        CONDITION_HEADING => "\n-- Conditions --",
        PROMPT_TEMPERATURE => "What is your target temperature?",
        PROMPT_HUMIDITY => "What is your target humidity?",
        PROMPT_EXERCISE => "What is your exercise level?",
        CONDITION_CURRENT => "Current conditions:",
        CONDITION_FALLBACK => "Using default importance (all 3):",
        COMPARE_HEADING => "\n-- Radar Charts of Importance Levels --",
        LIBRARY_HEADING => "\n-- Materials Features --",
        LIBRARY_PROMPT_GROUP => "Property number (enter = all): ",
        LIBRARY_METRIC => "Metric",
        LIBRARY_STANDARD => "Relevant Standard",
        LIBRARY_SAMPLE_SIZE => "Sample Size",
        LIBRARY_SPECIMENS => "Recommended Number of Specimens",
        LIBRARY_DOCUMENT => "Standard document",
        LIBRARY_DOCUMENT_MISSING => "(file missing)",
        DOWNLOAD_HEADING => "\n-- Download Standard Documents --",
        DOWNLOAD_PROMPT_DEST => "Destination path (enter = current directory): ",
        DOWNLOAD_DONE => "Saved:",
        DOWNLOAD_FAILED => "Download failed:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, enter = keep): ",
        SETTINGS_CURRENT_DOCS_DIR => "Standard documents directory:",
        SETTINGS_PROMPT_DOCS_DIR => "New directory (enter = keep): ",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-gb")), "en-us");
    }

    #[test]
    fn korean_falls_back_to_english_strings() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::SETTINGS_SAVED), "설정을 저장했습니다.");
        assert_eq!(tr.t("no.such.key"), "");
        let en = Translator::new("en-us");
        assert_eq!(en.t(keys::APP_EXIT), "Exiting.");
    }

    #[test]
    fn error_prefix_follows_language() {
        assert_eq!(Translator::new("ko-kr").t(keys::ERROR_PREFIX), "오류");
        assert_eq!(Translator::new("en-us").t(keys::ERROR_PREFIX), "Error");
        assert_eq!(Translator::new("fr").t(keys::ERROR_PREFIX), "Error");
    }

    #[test]
    fn built_in_packs_flatten_nested_tables() {
        let tr = Translator::new_with_pack("ko-kr", Some("/nonexistent-pack-dir"));
        assert!(tr.lookup("gui.nav.app_title").is_some());
        assert!(tr.lookup("property.insulation").is_some());
        assert_eq!(tr.text("gui.no_such_key", "fallback"), "fallback");
    }
}
