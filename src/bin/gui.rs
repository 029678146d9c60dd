#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::collections::{HashMap, HashSet};
use std::{fs, path::Path, path::PathBuf};

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use materials_testing_hub::{
    app,
    comparison::{Comparison, SetId},
    condition::{Category, ExerciseLevel, HumidityBand, Selection, TemperatureBand},
    config,
    documents::{self, Document, DocumentStore},
    i18n, importance,
    library::{self, TestMethod},
    radar::RadarSeries,
};

/// 소재 시험 선택 보조 도구(GUI).
#[derive(Debug, Parser)]
#[command(name = "materials_testing_hub", version, about)]
struct GuiArgs {
    /// UI 언어(auto/en-us/ko-kr)
    #[arg(long, short = 'L')]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let mut app_cfg = app::bootstrap(Path::new(config::CONFIG_FILE)).unwrap_or_else(|e| {
        eprintln!("{e}");
        let cfg = config::Config::default();
        app::start_telemetry(&cfg.log_level);
        cfg
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 780.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Materials Testing Hub",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 폰트 바이트를 기본 글꼴 뒤에 폴백으로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts 아래 폰트
/// 2) OS별 시스템 폰트(맑은 고딕, Noto Sans CJK, Apple SD Gothic Neo)
/// 모두 실패하면 기본 폰트를 유지하고 Err를 돌려준다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NotoSansKR-Regular.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(PathBuf::from),
    );
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "hangul_font");
            tracing::debug!(font = %p.display(), "hangul font registered");
            return Ok(());
        }
    }
    Err("Hangul font not found; Korean labels may not render.".into())
}

/// 조건 드롭다운 하나.
fn condition_combo<T: Category>(
    ui: &mut egui::Ui,
    tr: &i18n::Translator,
    id: &str,
    label: &str,
    value: &mut Selection<T>,
) {
    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .selected_text(tr.selection_label(*value))
        .width(220.0)
        .show_ui(ui, |ui| {
            for opt in Selection::<T>::options() {
                ui.selectable_value(value, opt, tr.selection_label(opt));
            }
        });
}

/// 레이더 차트를 그린다. 반지름 축은 0~5 고정.
fn radar_chart(ui: &mut egui::Ui, series: &RadarSeries, accent: egui::Color32) {
    let width = ui.available_width().clamp(220.0, 420.0);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, width * 0.85), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) * 0.5 - 48.0).max(24.0);
    let to_pos = |(x, y): &(f64, f64)| center + egui::vec2(*x as f32, *y as f32);
    let grid = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    let text_color = ui.visuals().text_color();

    for step in 1..=5 {
        let r = radius * step as f32 / 5.0;
        let ring: Vec<egui::Pos2> = series.axis_ends(r as f64).iter().map(to_pos).collect();
        painter.add(egui::Shape::closed_line(ring, grid));
        painter.text(
            center + egui::vec2(3.0, -r),
            egui::Align2::LEFT_BOTTOM,
            step.to_string(),
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }
    for (end, (label, _)) in series.axis_ends(radius as f64).iter().zip(series.axes()) {
        let end = to_pos(end);
        painter.line_segment([center, end], grid);
        let dir = (end - center).normalized();
        painter.text(
            end + dir * 18.0,
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    // 중심에서 부채꼴로 채운다(별 모양 다각형도 올바르게 채워진다).
    let points: Vec<egui::Pos2> = series.vertices(radius as f64).iter().map(to_pos).collect();
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 70);
    let mut mesh = egui::epaint::Mesh::default();
    mesh.colored_vertex(center, fill);
    for p in &points {
        mesh.colored_vertex(*p, fill);
    }
    for i in 0..series.axis_count() as u32 {
        mesh.add_triangle(0, i + 1, i + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
    painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, accent)));
    for p in points.iter().take(series.axis_count()) {
        painter.circle_filled(*p, 3.0, accent);
    }

    let tip: Vec<String> = series.axes().map(|(l, v)| format!("{l}: {v}")).collect();
    response.on_hover_text(tip.join("\n"));
}

/// 문서 제공 항목 하나의 최근 결과.
#[derive(Debug, Clone, PartialEq)]
enum OfferingStatus {
    Saved(PathBuf),
    Failed(String),
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    store: DocumentStore,
    tab: Tab,
    comparison: Comparison,
    /// 체크박스로 펼친 시험 방법 이름
    shown_methods: HashSet<&'static str>,
    /// 시험 방법 이름별 내려받기 결과
    offerings: HashMap<&'static str, OfferingStatus>,
    window_alpha: f32,
    lang_input: String,
    docs_dir_input: String,
    settings_status: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_table_modal: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    ChartsAndFeatures,
    OtherFeatures,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(lang = %lang_code, docs = %config.documents_dir, "gui started");
        Self {
            store: config.document_store(),
            tr,
            tab: Tab::ChartsAndFeatures,
            comparison: Comparison::default(),
            shown_methods: HashSet::new(),
            offerings: HashMap::new(),
            window_alpha: config.clamped_alpha(),
            lang_input: config.language.clone(),
            docs_dir_input: config.documents_dir.clone(),
            settings_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            show_table_modal: false,
            config,
        }
    }

    fn toggle_method(&mut self, method: &'static TestMethod) {
        if !self.shown_methods.remove(method.name) {
            self.shown_methods.insert(method.name);
        }
    }

    /// 문서를 읽는다. 실패하면 해당 항목에만 오류를 기록하고, 성공하면 이전 결과를 지운다.
    fn load_offering(&mut self, method: &'static TestMethod) -> Option<Document> {
        let doc = method.document?;
        match self.store.load(doc) {
            Ok(document) => {
                self.offerings.remove(method.name);
                Some(document)
            }
            Err(err) => {
                tracing::warn!(method = method.name, error = %err, "download offering failed");
                self.offerings
                    .insert(method.name, OfferingStatus::Failed(err.to_string()));
                None
            }
        }
    }

    /// 저장 대화상자를 열어 문서를 복사한다.
    fn download_offering(&mut self, method: &'static TestMethod) {
        let Some(document) = self.load_offering(method) else {
            return;
        };
        let Some(target) = FileDialog::new()
            .set_file_name(document.file_name())
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            return;
        };
        let status = match documents::save_bytes(&document, &target) {
            Ok(()) => OfferingStatus::Saved(target),
            Err(err) => OfferingStatus::Failed(err.to_string()),
        };
        self.offerings.insert(method.name, status);
    }

    fn apply_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.documents_dir = self.docs_dir_input.trim().to_string();
        self.config.window_alpha = self.window_alpha;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.store = self.config.document_store();
        self.offerings.clear();
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.text("gui.settings.saved", "Saved."),
            Err(e) => format!("Save error: {e}"),
        });
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (
                Tab::ChartsAndFeatures,
                txt("gui.tab.charts", "Radar Charts & Features"),
            ),
            (Tab::OtherFeatures, txt("gui.tab.other", "Other Features")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// 조건 세트 하나(드롭다운 세 개 + 레이더 차트).
    fn ui_condition_set(&mut self, ui: &mut egui::Ui, id: SetId) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let prefix = id.prefix();
        let set = self.comparison.set_mut(id);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            condition_combo::<TemperatureBand>(
                ui,
                &tr,
                &format!("{prefix}_temperature"),
                &format!(
                    "{prefix}{}",
                    txt("gui.condition.temperature", "What is your target temperature?")
                ),
                &mut set.temperature,
            );
            condition_combo::<HumidityBand>(
                ui,
                &tr,
                &format!("{prefix}_humidity"),
                &format!(
                    "{prefix}{}",
                    txt("gui.condition.humidity", "What is your target humidity?")
                ),
                &mut set.humidity,
            );
            condition_combo::<ExerciseLevel>(
                ui,
                &tr,
                &format!("{prefix}_exercise"),
                &format!(
                    "{prefix}{}",
                    txt("gui.condition.exercise", "What is your exercise level?")
                ),
                &mut set.exercise,
            );
            if ui
                .small_button(txt("gui.condition.reset", "Reset"))
                .clicked()
            {
                set.clear();
            }
        });

        let resolution = self.comparison.resolve(id);
        let title = txt(
            &format!("gui.chart.title_{}", id.number()),
            id.chart_title(),
        );
        let series = RadarSeries::from_pairs(
            title,
            resolution
                .record
                .iter()
                .map(|(p, v)| (tr.property_name(p), v)),
        );
        ui.label(egui::RichText::new(&series.title).strong());
        let accent = match id {
            SetId::First => egui::Color32::from_rgb(66, 133, 244),
            SetId::Second => egui::Color32::from_rgb(234, 118, 48),
        };
        radar_chart(ui, &series, accent);
        if let Some(reason) = &resolution.fallback {
            ui.small(format!(
                "{} ({reason})",
                txt("gui.chart.default_note", "Showing default importance (all 3).")
            ));
        }
    }

    fn ui_charts_tab(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.heading(txt("gui.nav.app_title", "Materials Testing Hub"));
        ui.add_space(6.0);
        heading_with_tip(
            ui,
            &txt("gui.chart.heading", "Radar Charts of Importance Levels"),
            &txt(
                "gui.chart.tip",
                "Each chart shows how important each material property is (0-5) for the selected conditions.",
            ),
        );
        ui.columns(2, |cols| {
            self.ui_condition_set(&mut cols[0], SetId::First);
            self.ui_condition_set(&mut cols[1], SetId::Second);
        });
        ui.add_space(12.0);
        ui.separator();
        self.ui_features(ui);
    }

    fn ui_features(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        heading_with_tip(
            ui,
            &txt("gui.features.heading", "Materials Features"),
            &txt(
                "gui.features.tip",
                "Tick a test method to see its metric, standard and sample requirements.",
            ),
        );
        for group in library::groups() {
            egui::CollapsingHeader::new(tr.property_name(group.property))
                .id_source(group.property.name())
                .show(ui, |ui| {
                    for method in group.methods {
                        let mut shown = self.shown_methods.contains(method.name);
                        if ui.checkbox(&mut shown, method.name).changed() {
                            self.toggle_method(method);
                        }
                        if shown {
                            self.ui_method_details(ui, method);
                        }
                    }
                });
        }
    }

    fn ui_method_details(&mut self, ui: &mut egui::Ui, method: &'static TestMethod) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.indent(method.name, |ui| {
            for (key, default, value) in [
                ("gui.features.metric", "Metric", method.metric.to_string()),
                ("gui.features.standard", "Relevant Standard", method.standard.to_string()),
                ("gui.features.sample_size", "Sample Size", method.sample_size.to_string()),
                (
                    "gui.features.specimens",
                    "Recommended Number of Specimens",
                    method.specimens.to_string(),
                ),
            ] {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", txt(key, default))).strong());
                    ui.label(value);
                });
            }
            let Some(doc) = method.document else {
                return;
            };
            ui.horizontal(|ui| {
                if ui.button(doc.label).clicked() {
                    self.download_offering(method);
                }
                if !self.store.is_available(doc) {
                    label_with_tip(
                        ui,
                        &txt("gui.features.missing", "(file missing)"),
                        &self.store.path_for(doc).display().to_string(),
                    );
                }
            });
            match self.offerings.get(method.name) {
                Some(OfferingStatus::Saved(path)) => {
                    ui.small(format!(
                        "{} {}",
                        txt("gui.features.saved", "Saved to"),
                        path.display()
                    ));
                }
                Some(OfferingStatus::Failed(msg)) => {
                    ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
                }
                None => {}
            }
        });
    }

    fn ui_other_tab(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.heading(txt("gui.other.heading", "Other Features"));
        ui.label(txt(
            "gui.other.body",
            "This is where you can add more features or tools for the app.",
        ));
        ui.add_space(8.0);
        if ui
            .button(txt("gui.table.button", "Show importance lookup table"))
            .clicked()
        {
            self.show_table_modal = true;
        }
    }

    fn ui_table(&self, ui: &mut egui::Ui) {
        egui::Grid::new("importance_table")
            .striped(true)
            .num_columns(6)
            .show(ui, |ui| {
                ui.label("");
                for p in importance::Property::ALL {
                    ui.label(egui::RichText::new(self.tr.property_name(p)).strong());
                }
                ui.end_row();
                for (key, record) in importance::table() {
                    ui.label(format!(
                        "{} / {} / {}",
                        self.tr.selection_label(Selection::Chosen(key.temperature)),
                        self.tr.selection_label(Selection::Chosen(key.humidity)),
                        self.tr.selection_label(Selection::Chosen(key.exercise))
                    ));
                    for (_, v) in record.iter() {
                        ui.label(v.to_string());
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.label(txt("gui.settings.lang", "Language"));
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(self.lang_input.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut self.lang_input,
                    "auto".into(),
                    txt("gui.settings.lang_auto", "System"),
                );
                ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
            });
        ui.separator();
        ui.label(txt("gui.settings.docs_dir", "Standard documents folder"));
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.docs_dir_input);
            if ui.button(txt("gui.settings.browse", "Browse...")).clicked() {
                if let Some(dir) = FileDialog::new().pick_folder() {
                    self.docs_dir_input = dir.display().to_string();
                }
            }
        });
        ui.separator();
        ui.label(txt("gui.settings.alpha", "Window transparency"));
        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
        ui.separator();
        if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
            self.apply_settings();
        }
        if let Some(msg) = &self.settings_status {
            ui.label(msg);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.text(key, default);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Materials Testing Hub"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| self.ui_settings(ui));
        self.show_settings_modal = open;

        let mut open = self.show_help_modal;
        egui::Window::new(txt("gui.about.title", "Help / About"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(txt(
                    "gui.about.app",
                    "Decision support for textile/materials test selection",
                ));
                ui.label(txt(
                    "gui.about.usage",
                    "Pick temperature, humidity and exercise level for each set to compare property importance (0-5).",
                ));
                ui.label(txt(
                    "gui.about.default",
                    "Until all three options of a set are chosen, its chart shows the default importance of 3 for every property.",
                ));
                ui.label(txt(
                    "gui.about.documents",
                    "Standard PDFs are read from the documents folder set in Settings.",
                ));
            });
        self.show_help_modal = open;

        let mut open = self.show_table_modal;
        egui::Window::new(txt("gui.table.title", "Importance lookup table"))
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| self.ui_table(ui));
        self.show_table_modal = open;

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::ChartsAndFeatures => self.ui_charts_tab(ui),
                    Tab::OtherFeatures => self.ui_other_tab(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materials_testing_hub::condition::{ExerciseLevel::*, HumidityBand::*, TemperatureBand::*};
    use materials_testing_hub::importance::ImportanceRecord;

    fn app_with_docs(dir: &str) -> GuiApp {
        GuiApp::new(config::Config {
            documents_dir: dir.into(),
            ..config::Config::default()
        })
    }

    #[test]
    fn new_app_starts_with_placeholders() {
        let app = app_with_docs("standards");
        for id in SetId::ALL {
            assert!(app.comparison.resolve(id).record.is_default());
        }
        assert!(app.shown_methods.is_empty());
    }

    #[test]
    fn editing_one_set_leaves_the_other_alone() {
        let mut app = app_with_docs("standards");
        *app.comparison.set_mut(SetId::First) =
            materials_testing_hub::comparison::ConditionSet::new(Below10C, Above60Rh, High);
        assert_eq!(
            app.comparison.resolve(SetId::First).record,
            ImportanceRecord::new(4.0, 5.0, 5.0, 2.5, 3.0)
        );
        assert!(app.comparison.resolve(SetId::Second).record.is_default());
    }

    #[test]
    fn toggle_method_flips_visibility() {
        let mut app = app_with_docs("standards");
        let (_, method) = library::find_method("Fabric Weight").unwrap();
        app.toggle_method(method);
        assert!(app.shown_methods.contains("Fabric Weight"));
        app.toggle_method(method);
        assert!(app.shown_methods.is_empty());
    }

    #[test]
    fn missing_document_fails_only_its_offering() {
        let mut app = app_with_docs("/nonexistent/materials-hub-docs");
        let (_, insulation) = library::find_method("Thermal Insulation (Resistance)").unwrap();
        assert!(app.load_offering(insulation).is_none());
        assert!(matches!(
            app.offerings.get(insulation.name),
            Some(OfferingStatus::Failed(_))
        ));
        // 같은 문서를 쓰는 다른 항목은 아직 건드리지 않았다
        assert!(app.offerings.get("Evaporative Resistance").is_none());
        assert_eq!(app.offerings.len(), 1);
    }

    #[test]
    fn successful_load_clears_stale_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app_with_docs(&dir.path().display().to_string());
        let (_, weight) = library::find_method("Fabric Weight").unwrap();
        assert!(app.load_offering(weight).is_none());
        assert!(matches!(
            app.offerings.get(weight.name),
            Some(OfferingStatus::Failed(_))
        ));

        fs::write(dir.path().join(library::ASTM_D3776.file_name), b"%PDF-1.4 gsm").unwrap();
        let document = app.load_offering(weight).expect("document now present");
        assert_eq!(document.bytes, b"%PDF-1.4 gsm");
        assert!(app.offerings.get(weight.name).is_none());
    }

    #[test]
    fn method_without_document_has_no_offering() {
        let mut app = app_with_docs("standards");
        let (_, wicking) = library::find_method("Horizontal Wicking").unwrap();
        assert!(app.load_offering(wicking).is_none());
        assert!(app.offerings.is_empty());
    }
}
