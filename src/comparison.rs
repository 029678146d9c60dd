//! 조건 세트 두 개(Set 1 / Set 2)를 독립적으로 비교한다.

use crate::condition::{ExerciseLevel, HumidityBand, Selection, TemperatureBand};
use crate::importance::{self, ImportanceRecord, UnresolvedCondition};

/// 비교 대상 세트 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetId {
    First,
    Second,
}

impl SetId {
    pub const ALL: [SetId; 2] = [SetId::First, SetId::Second];

    /// 화면 라벨 접두어("Set 1: ").
    pub fn prefix(&self) -> &'static str {
        match self {
            SetId::First => "Set 1: ",
            SetId::Second => "Set 2: ",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            SetId::First => "Radar Chart 1",
            SetId::Second => "Radar Chart 2",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            SetId::First => 1,
            SetId::Second => 2,
        }
    }
}

/// 드롭다운 세 개로 구성된 조건 세트 하나.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionSet {
    pub temperature: Selection<TemperatureBand>,
    pub humidity: Selection<HumidityBand>,
    pub exercise: Selection<ExerciseLevel>,
}

/// 조회 결과와, 기본값이 쓰였다면 그 이유.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub record: ImportanceRecord,
    pub fallback: Option<UnresolvedCondition>,
}

impl Resolution {
    /// 조회 결과를 기본값 대체 규칙에 따라 정리한다.
    pub fn from_lookup(result: Result<ImportanceRecord, UnresolvedCondition>) -> Self {
        match result {
            Ok(record) => Resolution {
                record,
                fallback: None,
            },
            Err(reason) => Resolution {
                record: ImportanceRecord::DEFAULT,
                fallback: Some(reason),
            },
        }
    }

    /// 라벨 문자열 세 개로 조회한다(CLI 입력).
    pub fn from_labels(temperature: &str, humidity: &str, exercise: &str) -> Self {
        Self::from_lookup(importance::lookup_labels(temperature, humidity, exercise))
    }
}

impl ConditionSet {
    pub fn new(
        temperature: impl Into<Selection<TemperatureBand>>,
        humidity: impl Into<Selection<HumidityBand>>,
        exercise: impl Into<Selection<ExerciseLevel>>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            exercise: exercise.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !(self.temperature.is_unselected()
            || self.humidity.is_unselected()
            || self.exercise.is_unselected())
    }

    pub fn resolve(&self) -> Resolution {
        Resolution::from_lookup(importance::lookup(
            self.temperature,
            self.humidity,
            self.exercise,
        ))
    }

    pub fn clear(&mut self) {
        *self = ConditionSet::default();
    }
}

/// 두 세트를 나란히 보관한다. 한쪽 변경은 다른 쪽 결과에 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparison {
    first: ConditionSet,
    second: ConditionSet,
}

impl Comparison {
    pub fn set(&self, id: SetId) -> &ConditionSet {
        match id {
            SetId::First => &self.first,
            SetId::Second => &self.second,
        }
    }

    pub fn set_mut(&mut self, id: SetId) -> &mut ConditionSet {
        match id {
            SetId::First => &mut self.first,
            SetId::Second => &mut self.second,
        }
    }

    pub fn resolve(&self, id: SetId) -> Resolution {
        self.set(id).resolve()
    }

    /// 두 세트를 각각 조회한다.
    pub fn resolve_all(&self) -> [(SetId, Resolution); 2] {
        SetId::ALL.map(|id| (id, self.resolve(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ExerciseLevel::*;
    use crate::condition::HumidityBand::*;
    use crate::condition::TemperatureBand::*;

    #[test]
    fn default_set_falls_back_with_reason() {
        let res = ConditionSet::default().resolve();
        assert!(res.record.is_default());
        assert!(res.fallback.is_some());
    }

    #[test]
    fn complete_set_resolves_from_table() {
        let set = ConditionSet::new(Above25C, Above60Rh, High);
        assert!(set.is_complete());
        let res = set.resolve();
        assert_eq!(res.fallback, None);
        assert_eq!(res.record, ImportanceRecord::new(1.0, 5.0, 5.0, 3.0, 2.0));
    }

    #[test]
    fn clear_restores_placeholders() {
        let mut set = ConditionSet::new(Below10C, Below40Rh, LowToRest);
        set.clear();
        assert_eq!(set, ConditionSet::default());
    }

    #[test]
    fn set_ids_map_to_titles() {
        assert_eq!(SetId::First.prefix(), "Set 1: ");
        assert_eq!(SetId::Second.chart_title(), "Radar Chart 2");
    }
}
