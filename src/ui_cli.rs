use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::comparison::{Comparison, Resolution, SetId};
use crate::condition::{Category, Selection};
use crate::config::Config;
use crate::documents::DocumentStore;
use crate::i18n::{self, keys, Translator};
use crate::importance::Property;
use crate::library::{self, TestMethod};
use crate::radar::{self, RadarSeries};

/// 텍스트 막대 폭(중요도 5에 해당하는 칸 수).
const BAR_WIDTH: usize = 20;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditSet(SetId),
    Compare,
    Library,
    Download,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_SET_1,
        keys::MAIN_MENU_SET_2,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_LIBRARY,
        keys::MAIN_MENU_DOWNLOAD,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditSet(SetId::First)),
            "2" => return Ok(MenuChoice::EditSet(SetId::Second)),
            "3" => return Ok(MenuChoice::Compare),
            "4" => return Ok(MenuChoice::Library),
            "5" => return Ok(MenuChoice::Download),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 조건 세트 하나의 드롭다운 세 개를 차례로 입력받는다.
pub fn handle_condition_set(
    tr: &Translator,
    comparison: &mut Comparison,
    id: SetId,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONDITION_HEADING));
    let set = comparison.set_mut(id);
    set.temperature = choose(tr, id, keys::PROMPT_TEMPERATURE, set.temperature)?;
    set.humidity = choose(tr, id, keys::PROMPT_HUMIDITY, set.humidity)?;
    set.exercise = choose(tr, id, keys::PROMPT_EXERCISE, set.exercise)?;
    println!(
        "{}{} {} / {} / {}",
        id.prefix(),
        tr.t(keys::CONDITION_CURRENT),
        tr.selection_label(set.temperature),
        tr.selection_label(set.humidity),
        tr.selection_label(set.exercise)
    );
    Ok(())
}

/// 엔터만 누르면 현재 값을 유지한다.
fn choose<T: Category>(
    tr: &Translator,
    id: SetId,
    prompt_key: &str,
    current: Selection<T>,
) -> Result<Selection<T>, AppError> {
    let options = Selection::<T>::options();
    println!("{}{}", id.prefix(), tr.t(prompt_key));
    let listing: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let mark = if *o == current { "*" } else { "" };
            format!("{i}){mark} {}", tr.selection_label(*o))
        })
        .collect();
    println!("  {}", listing.join("  "));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current);
        }
        if let Some(opt) = sel.parse::<usize>().ok().and_then(|n| options.get(n)) {
            return Ok(*opt);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 두 세트의 중요도를 나란히 출력한다.
pub fn handle_compare(tr: &Translator, comparison: &Comparison) {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    for (id, resolution) in comparison.resolve_all() {
        print_resolution(tr, id.chart_title(), &resolution);
    }
}

/// 조회 결과 하나를 텍스트 차트로 출력한다. 기본값이 쓰였으면 이유를 함께 적는다.
pub fn print_resolution(tr: &Translator, title: &str, resolution: &Resolution) {
    let series = RadarSeries::from_pairs(
        title,
        resolution
            .record
            .iter()
            .map(|(p, v)| (tr.property_name(p), v)),
    );
    print!("{}", radar::render_text(&series, BAR_WIDTH));
    if let Some(reason) = &resolution.fallback {
        tracing::debug!(chart = title, %reason, "importance lookup fell back to defaults");
        println!("  ({} {reason})", tr.t(keys::CONDITION_FALLBACK));
    }
}

/// 물성별 시험 방법을 보여준다.
pub fn handle_library(tr: &Translator, store: &DocumentStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LIBRARY_HEADING));
    for (i, p) in Property::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, tr.property_name(*p));
    }
    let sel = read_line(tr.t(keys::LIBRARY_PROMPT_GROUP))?;
    let filter = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| Property::ALL.get(n).copied());
    print_library(tr, store, filter);
    Ok(())
}

/// 참고 자료를 출력한다. `only`가 있으면 해당 물성만.
pub fn print_library(tr: &Translator, store: &DocumentStore, only: Option<Property>) {
    for group in library::groups() {
        if only.is_some_and(|p| p != group.property) {
            continue;
        }
        println!("\n## {}", tr.property_name(group.property));
        for method in group.methods {
            print_method(tr, store, method);
        }
    }
}

pub fn print_method(tr: &Translator, store: &DocumentStore, method: &TestMethod) {
    println!("- {}", method.name);
    println!("    {}: {}", tr.t(keys::LIBRARY_METRIC), method.metric);
    println!("    {}: {}", tr.t(keys::LIBRARY_STANDARD), method.standard);
    println!("    {}: {}", tr.t(keys::LIBRARY_SAMPLE_SIZE), method.sample_size);
    println!("    {}: {}", tr.t(keys::LIBRARY_SPECIMENS), method.specimens);
    if let Some(doc) = method.document {
        let status = if store.is_available(doc) {
            ""
        } else {
            tr.t(keys::LIBRARY_DOCUMENT_MISSING)
        };
        println!(
            "    {}: {} {status}",
            tr.t(keys::LIBRARY_DOCUMENT),
            doc.file_name
        );
    }
}

/// 표준 문서 목록에서 하나를 골라 저장한다. 실패는 해당 문서에만 국한된다.
pub fn handle_download(tr: &Translator, store: &DocumentStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DOWNLOAD_HEADING));
    let docs = library::documents();
    for (i, doc) in docs.iter().enumerate() {
        let cited_by: Vec<String> = library::methods_citing(doc)
            .into_iter()
            .map(|(p, m)| format!("{} / {}", tr.property_name(p), m.name))
            .collect();
        let status = if store.is_available(doc) {
            ""
        } else {
            tr.t(keys::LIBRARY_DOCUMENT_MISSING)
        };
        println!("{}) {} {status}", i + 1, doc.label);
        println!("     {}", cited_by.join("; "));
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let Some(doc) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| docs.get(n).copied())
    else {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
        return Ok(());
    };
    let dest = read_line(tr.t(keys::DOWNLOAD_PROMPT_DEST))?;
    let dest = dest.trim();
    let dest = if dest.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(dest)
    };
    export_document(tr, store, doc, &dest);
    Ok(())
}

/// 문서 하나를 내보내고 결과를 출력한다. 성공 여부를 돌려준다.
pub fn export_document(
    tr: &Translator,
    store: &DocumentStore,
    doc: &'static library::DocumentRef,
    dest: &Path,
) -> bool {
    match store.export(doc, dest) {
        Ok(bytes) => {
            println!("{} {} ({bytes} bytes)", tr.t(keys::DOWNLOAD_DONE), dest.display());
            true
        }
        Err(err) => {
            tracing::warn!(file = doc.file_name, error = %err, "standard document unavailable");
            println!("{} {err}", tr.t(keys::DOWNLOAD_FAILED));
            false
        }
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let mut language_changed = false;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
        language_changed = true;
    }
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_DOCS_DIR), cfg.documents_dir);
    let dir = read_line(tr.t(keys::SETTINGS_PROMPT_DOCS_DIR))?;
    if !dir.trim().is_empty() {
        cfg.documents_dir = dir.trim().to_string();
    }
    Ok(language_changed)
}

/// 설정의 언어 값으로 번역기를 다시 만든다.
pub fn translator_for(cfg: &Config) -> Translator {
    let lang = i18n::resolve_language(&cfg.language, None);
    Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf)
}
