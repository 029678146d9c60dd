//! 목표 환경 조건(온도 구간, 습도 구간, 운동 강도) 입력 타입.
//!
//! 드롭다운 하나가 "Choose an option" 자리표시자를 포함한 선택값 하나를 만든다.
//! 문자열 라벨은 공백/대시 표기 차이를 무시하고 해석한다.

use std::fmt;

use thiserror::Error;

/// 아직 선택하지 않았음을 나타내는 드롭다운 라벨.
pub const UNSELECTED_LABEL: &str = "Choose an option";

/// 조건 세 가지 중 어느 입력인지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionField {
    Temperature,
    Humidity,
    Exercise,
}

impl ConditionField {
    pub fn name(&self) -> &'static str {
        match self {
            ConditionField::Temperature => "temperature",
            ConditionField::Humidity => "humidity",
            ConditionField::Exercise => "exercise level",
        }
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 목표 온도 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    /// 25°C 초과
    Above25C,
    /// 10°C ~ 25°C
    From10To25C,
    /// 10°C 미만
    Below10C,
}

/// 목표 상대습도 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidityBand {
    /// 60% RH 초과
    Above60Rh,
    /// 40% RH 미만
    Below40Rh,
}

/// 착용자의 운동 강도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseLevel {
    High,
    LowToRest,
}

/// 드롭다운 하나에 대응하는 열거형 공통 동작.
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    const FIELD: ConditionField;
    /// 표시 순서대로 나열한 모든 값.
    const ALL: &'static [Self];

    /// 화면에 보이는 표준 라벨.
    fn label(&self) -> &'static str;

    /// 언어팩 조회 키.
    fn i18n_key(&self) -> &'static str;

    /// 라벨을 관대하게 해석한다. 알 수 없는 라벨이면 None.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize_label(label);
        Self::ALL
            .iter()
            .copied()
            .find(|c| normalize_label(c.label()) == wanted)
    }
}

impl Category for TemperatureBand {
    const FIELD: ConditionField = ConditionField::Temperature;
    const ALL: &'static [Self] = &[
        TemperatureBand::Above25C,
        TemperatureBand::From10To25C,
        TemperatureBand::Below10C,
    ];

    fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Above25C => "> 25°C",
            TemperatureBand::From10To25C => "10°C - 25°C",
            TemperatureBand::Below10C => "< 10°C",
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            TemperatureBand::Above25C => "condition.temperature.above_25",
            TemperatureBand::From10To25C => "condition.temperature.from_10_to_25",
            TemperatureBand::Below10C => "condition.temperature.below_10",
        }
    }
}

impl Category for HumidityBand {
    const FIELD: ConditionField = ConditionField::Humidity;
    const ALL: &'static [Self] = &[HumidityBand::Above60Rh, HumidityBand::Below40Rh];

    fn label(&self) -> &'static str {
        match self {
            HumidityBand::Above60Rh => "> 60% RH",
            HumidityBand::Below40Rh => "< 40% RH",
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            HumidityBand::Above60Rh => "condition.humidity.above_60",
            HumidityBand::Below40Rh => "condition.humidity.below_40",
        }
    }
}

impl Category for ExerciseLevel {
    const FIELD: ConditionField = ConditionField::Exercise;
    const ALL: &'static [Self] = &[ExerciseLevel::High, ExerciseLevel::LowToRest];

    fn label(&self) -> &'static str {
        match self {
            ExerciseLevel::High => "High",
            ExerciseLevel::LowToRest => "Low to Rest",
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            ExerciseLevel::High => "condition.exercise.high",
            ExerciseLevel::LowToRest => "condition.exercise.low_to_rest",
        }
    }
}

/// 라벨 비교용 정규화: 공백 제거, 각종 대시를 '-'로, ASCII 소문자화.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// 라벨이 "선택 안 함" 자리표시자인지 확인한다. 빈 문자열도 미선택으로 본다.
pub fn is_unselected_label(label: &str) -> bool {
    let norm = normalize_label(label);
    norm.is_empty() || norm == normalize_label(UNSELECTED_LABEL)
}

/// 열거값에 없는 라벨.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option: {label:?}")]
pub struct UnknownLabel {
    pub field: ConditionField,
    pub label: String,
}

/// 드롭다운 선택 상태. 초기값은 `Unselected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    Unselected,
    Chosen(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Unselected
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Chosen(value)
    }
}

impl<T: Copy> Selection<T> {
    pub fn chosen(&self) -> Option<T> {
        match self {
            Selection::Unselected => None,
            Selection::Chosen(v) => Some(*v),
        }
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, Selection::Unselected)
    }
}

impl<T: Category> Selection<T> {
    /// 라벨 문자열을 선택값으로 해석한다.
    pub fn parse(label: &str) -> Result<Self, UnknownLabel> {
        if is_unselected_label(label) {
            return Ok(Selection::Unselected);
        }
        T::from_label(label)
            .map(Selection::Chosen)
            .ok_or_else(|| UnknownLabel {
                field: T::FIELD,
                label: label.to_string(),
            })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selection::Unselected => UNSELECTED_LABEL,
            Selection::Chosen(v) => v.label(),
        }
    }

    /// 드롭다운 항목 목록(자리표시자 먼저).
    pub fn options() -> Vec<Selection<T>> {
        std::iter::once(Selection::Unselected)
            .chain(T::ALL.iter().copied().map(Selection::Chosen))
            .collect()
    }
}

/// 중요도 테이블의 복합 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionKey {
    pub temperature: TemperatureBand,
    pub humidity: HumidityBand,
    pub exercise: ExerciseLevel,
}

impl ConditionKey {
    pub const fn new(
        temperature: TemperatureBand,
        humidity: HumidityBand,
        exercise: ExerciseLevel,
    ) -> Self {
        Self {
            temperature,
            humidity,
            exercise,
        }
    }

    /// 가능한 모든 조합(3 x 2 x 2).
    pub fn all() -> impl Iterator<Item = ConditionKey> {
        TemperatureBand::ALL.iter().flat_map(|&t| {
            HumidityBand::ALL.iter().flat_map(move |&h| {
                ExerciseLevel::ALL
                    .iter()
                    .map(move |&e| ConditionKey::new(t, h, e))
            })
        })
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.temperature.label(),
            self.humidity.label(),
            self.exercise.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_ignoring_spacing_and_dash_style() {
        assert_eq!(
            TemperatureBand::from_label(">25°C"),
            Some(TemperatureBand::Above25C)
        );
        assert_eq!(
            TemperatureBand::from_label(" <10°C"),
            Some(TemperatureBand::Below10C)
        );
        assert_eq!(
            TemperatureBand::from_label("10°C\u{2013}25°C"),
            Some(TemperatureBand::From10To25C)
        );
        assert_eq!(
            HumidityBand::from_label("<40% rh"),
            Some(HumidityBand::Below40Rh)
        );
        assert_eq!(
            ExerciseLevel::from_label("low to rest"),
            Some(ExerciseLevel::LowToRest)
        );
        assert_eq!(ExerciseLevel::from_label("Moderate"), None);
    }

    #[test]
    fn placeholder_and_empty_parse_as_unselected() {
        assert_eq!(
            Selection::<HumidityBand>::parse("Choose an option"),
            Ok(Selection::Unselected)
        );
        assert_eq!(Selection::<HumidityBand>::parse("  "), Ok(Selection::Unselected));
    }

    #[test]
    fn unknown_label_reports_field() {
        let err = Selection::<TemperatureBand>::parse("30°C").unwrap_err();
        assert_eq!(err.field, ConditionField::Temperature);
        assert_eq!(err.label, "30°C");
    }

    #[test]
    fn options_start_with_placeholder() {
        let opts = Selection::<TemperatureBand>::options();
        assert_eq!(opts.len(), 4);
        assert_eq!(opts[0], Selection::Unselected);
        assert_eq!(opts[0].label(), UNSELECTED_LABEL);
        assert_eq!(opts[3], Selection::Chosen(TemperatureBand::Below10C));
    }

    #[test]
    fn all_keys_cover_cross_product() {
        let keys: Vec<_> = ConditionKey::all().collect();
        assert_eq!(keys.len(), 12);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 12);
    }
}
