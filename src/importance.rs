//! 환경 조건 → 소재 물성 중요도(0~5) 조회.
//!
//! 12개 조합(온도 3 x 습도 2 x 운동 2)을 모두 채운 고정 테이블을 사용한다.
//! 미선택 입력이 있거나 테이블에 없는 조합이면 모든 항목이 3인 기본 레코드로
//! 조용히 대체하며, 호출자에게 오류를 돌려주지 않는다.

use std::fmt;

use thiserror::Error;

use crate::condition::{
    Category, ConditionField, ConditionKey, ExerciseLevel, HumidityBand, Selection,
    TemperatureBand, UnknownLabel,
};
use crate::condition::ExerciseLevel::*;
use crate::condition::HumidityBand::*;
use crate::condition::TemperatureBand::*;

/// 중요도 척도의 최소/최대값.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 5.0;
/// 조회 실패 시 모든 항목에 쓰는 값.
pub const DEFAULT_SCORE: f64 = 3.0;

/// 평가 대상 소재 물성. 선언 순서가 레이더 차트 축 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Insulation,
    Breathability,
    MoistureManagement,
    ThermalHand,
    Density,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Insulation,
        Property::Breathability,
        Property::MoistureManagement,
        Property::ThermalHand,
        Property::Density,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Property::Insulation => "Insulation",
            Property::Breathability => "Breathability",
            Property::MoistureManagement => "Moisture Management",
            Property::ThermalHand => "Thermal Hand",
            Property::Density => "Density",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Property::Insulation => "property.insulation",
            Property::Breathability => "property.breathability",
            Property::MoistureManagement => "property.moisture_management",
            Property::ThermalHand => "property.thermal_hand",
            Property::Density => "property.density",
        }
    }

    /// 이름으로 찾는다(대소문자/공백 무시).
    pub fn from_name(name: &str) -> Option<Property> {
        let wanted = crate::condition::normalize_label(name);
        Property::ALL
            .into_iter()
            .find(|p| crate::condition::normalize_label(p.name()) == wanted)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 물성 다섯 개의 중요도 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceRecord {
    scores: [f64; 5],
}

impl ImportanceRecord {
    /// 모든 항목이 3인 기본 레코드.
    pub const DEFAULT: ImportanceRecord = ImportanceRecord::uniform(DEFAULT_SCORE);

    /// 축 순서(Insulation, Breathability, Moisture Management, Thermal Hand, Density)로 생성한다.
    pub const fn new(
        insulation: f64,
        breathability: f64,
        moisture_management: f64,
        thermal_hand: f64,
        density: f64,
    ) -> Self {
        Self {
            scores: [
                insulation,
                breathability,
                moisture_management,
                thermal_hand,
                density,
            ],
        }
    }

    pub const fn uniform(score: f64) -> Self {
        Self { scores: [score; 5] }
    }

    pub fn get(&self, property: Property) -> f64 {
        self.scores[property.index()]
    }

    /// 축 순서대로 (물성, 점수)를 돌려준다.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        Property::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for ImportanceRecord {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ImportanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        f.write_str("{")?;
        for (p, v) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {}", p.name(), v)?;
        }
        f.write_str("}")
    }
}

/// 기본 레코드로 대체된 이유. 호출자에게는 오류로 노출하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedCondition {
    #[error("{field} not selected yet")]
    Unselected { field: ConditionField },
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),
    #[error("no importance entry for {0}")]
    NotInTable(ConditionKey),
}

const fn entry(
    t: TemperatureBand,
    h: HumidityBand,
    e: ExerciseLevel,
    record: ImportanceRecord,
) -> (ConditionKey, ImportanceRecord) {
    (ConditionKey::new(t, h, e), record)
}

const fn rec(ins: f64, brth: f64, mm: f64, th: f64, dens: f64) -> ImportanceRecord {
    ImportanceRecord::new(ins, brth, mm, th, dens)
}

const IMPORTANCE_TABLE: &[(ConditionKey, ImportanceRecord)] = &[
    // 고온
    entry(Above25C, Above60Rh, High, rec(1.0, 5.0, 5.0, 3.0, 2.0)),
    entry(Above25C, Above60Rh, LowToRest, rec(1.0, 4.0, 2.0, 3.0, 2.0)),
    entry(Above25C, Below40Rh, High, rec(1.0, 5.0, 4.0, 3.0, 2.0)),
    entry(Above25C, Below40Rh, LowToRest, rec(1.0, 3.0, 2.0, 3.0, 2.0)),
    // 중온
    entry(From10To25C, Above60Rh, High, rec(2.5, 5.0, 4.0, 3.0, 2.0)),
    entry(From10To25C, Above60Rh, LowToRest, rec(2.5, 3.0, 2.5, 3.0, 2.0)),
    entry(From10To25C, Below40Rh, High, rec(2.5, 4.0, 5.0, 3.0, 2.5)),
    entry(From10To25C, Below40Rh, LowToRest, rec(2.5, 2.5, 2.0, 3.0, 2.5)),
    // 저온
    entry(Below10C, Above60Rh, High, rec(4.0, 5.0, 5.0, 2.5, 3.0)),
    entry(Below10C, Above60Rh, LowToRest, rec(4.0, 2.5, 2.0, 4.0, 3.0)),
    entry(Below10C, Below40Rh, High, rec(4.0, 4.0, 5.0, 2.5, 3.0)),
    entry(Below10C, Below40Rh, LowToRest, rec(4.0, 2.5, 2.0, 2.0, 2.0)),
];

/// 조회 테이블 전체(읽기 전용).
pub fn table() -> &'static [(ConditionKey, ImportanceRecord)] {
    IMPORTANCE_TABLE
}

/// 완전한 키로 테이블을 조회한다.
pub fn find(key: ConditionKey) -> Option<ImportanceRecord> {
    IMPORTANCE_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, r)| *r)
}

/// 선택값 세 개로 조회하되, 기본값이 적용될 경우 그 이유를 돌려준다.
///
/// 미선택 검사가 테이블 조회보다 우선한다.
pub fn lookup(
    temperature: Selection<TemperatureBand>,
    humidity: Selection<HumidityBand>,
    exercise: Selection<ExerciseLevel>,
) -> Result<ImportanceRecord, UnresolvedCondition> {
    let t = chosen_or_unselected(temperature)?;
    let h = chosen_or_unselected(humidity)?;
    let e = chosen_or_unselected(exercise)?;
    let key = ConditionKey::new(t, h, e);
    find(key).ok_or(UnresolvedCondition::NotInTable(key))
}

/// 선택값 세 개를 중요도 레코드로 바꾼다. 모든 입력에 대해 정의된다.
pub fn resolve(
    temperature: Selection<TemperatureBand>,
    humidity: Selection<HumidityBand>,
    exercise: Selection<ExerciseLevel>,
) -> ImportanceRecord {
    lookup(temperature, humidity, exercise).unwrap_or(ImportanceRecord::DEFAULT)
}

/// 라벨 문자열로 조회한다. 미선택 라벨이 알 수 없는 라벨보다 우선한다.
pub fn lookup_labels(
    temperature: &str,
    humidity: &str,
    exercise: &str,
) -> Result<ImportanceRecord, UnresolvedCondition> {
    let parsed = (
        Selection::<TemperatureBand>::parse(temperature),
        Selection::<HumidityBand>::parse(humidity),
        Selection::<ExerciseLevel>::parse(exercise),
    );
    let unselected = [
        (matches!(parsed.0, Ok(Selection::Unselected)), ConditionField::Temperature),
        (matches!(parsed.1, Ok(Selection::Unselected)), ConditionField::Humidity),
        (matches!(parsed.2, Ok(Selection::Unselected)), ConditionField::Exercise),
    ];
    if let Some((_, field)) = unselected.iter().find(|(hit, _)| *hit) {
        return Err(UnresolvedCondition::Unselected { field: *field });
    }
    lookup(parsed.0?, parsed.1?, parsed.2?)
}

/// 라벨 문자열 버전의 `resolve`.
pub fn resolve_labels(temperature: &str, humidity: &str, exercise: &str) -> ImportanceRecord {
    lookup_labels(temperature, humidity, exercise).unwrap_or(ImportanceRecord::DEFAULT)
}

fn chosen_or_unselected<T: Category>(sel: Selection<T>) -> Result<T, UnresolvedCondition> {
    sel.chosen()
        .ok_or(UnresolvedCondition::Unselected { field: T::FIELD })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_full_cross_product() {
        assert_eq!(table().len(), 12);
        for key in ConditionKey::all() {
            assert!(find(key).is_some(), "missing entry for {key}");
        }
    }

    #[test]
    fn scores_stay_within_scale() {
        for (key, record) in table() {
            for (p, v) in record.iter() {
                assert!(
                    (SCORE_MIN..=SCORE_MAX).contains(&v),
                    "{key} {p} out of range: {v}"
                );
            }
        }
    }

    #[test]
    fn unselected_takes_priority_over_valid_fields() {
        let err = lookup(
            Above25C.into(),
            Selection::Unselected,
            High.into(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            UnresolvedCondition::Unselected {
                field: ConditionField::Humidity
            }
        );
    }

    #[test]
    fn unselected_label_reported_before_unknown_label() {
        let err = lookup_labels("hot", "Choose an option", "High").unwrap_err();
        assert_eq!(
            err,
            UnresolvedCondition::Unselected {
                field: ConditionField::Humidity
            }
        );
        let err = lookup_labels("hot", "> 60% RH", "High").unwrap_err();
        assert!(matches!(err, UnresolvedCondition::UnknownLabel(_)));
    }

    #[test]
    fn record_accessors_follow_axis_order() {
        let r = rec(1.0, 2.0, 3.0, 4.0, 5.0);
        let names: Vec<_> = r.iter().map(|(p, _)| p.name()).collect();
        assert_eq!(
            names,
            [
                "Insulation",
                "Breathability",
                "Moisture Management",
                "Thermal Hand",
                "Density"
            ]
        );
        assert_eq!(r.get(Property::ThermalHand), 4.0);
        assert_eq!(
            r.to_string(),
            "{Insulation: 1, Breathability: 2, Moisture Management: 3, Thermal Hand: 4, Density: 5}"
        );
    }

    #[test]
    fn property_from_name_is_lenient() {
        assert_eq!(
            Property::from_name("moisture management"),
            Some(Property::MoistureManagement)
        );
        assert_eq!(Property::from_name("Stretch"), None);
    }
}
