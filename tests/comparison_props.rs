use materials_testing_hub::{
    comparison::{Comparison, ConditionSet, SetId},
    condition::{Category, ExerciseLevel, HumidityBand, Selection, TemperatureBand},
    importance::{self, ImportanceRecord},
    radar::RadarSeries,
};
use proptest::prelude::*;

fn selection<T: Category>() -> impl Strategy<Value = Selection<T>> {
    proptest::sample::select(Selection::<T>::options())
}

fn condition_set() -> impl Strategy<Value = ConditionSet> {
    (
        selection::<TemperatureBand>(),
        selection::<HumidityBand>(),
        selection::<ExerciseLevel>(),
    )
        .prop_map(|(t, h, e)| ConditionSet::new(t, h, e))
}

proptest! {
    #[test]
    fn resolution_is_idempotent(set in condition_set()) {
        prop_assert_eq!(set.resolve(), set.resolve());
    }

    #[test]
    fn incomplete_sets_always_use_defaults(set in condition_set()) {
        let res = set.resolve();
        if set.is_complete() {
            prop_assert!(res.fallback.is_none());
        } else {
            prop_assert_eq!(res.record, ImportanceRecord::DEFAULT);
            prop_assert!(res.fallback.is_some());
        }
    }

    #[test]
    fn editing_one_set_never_changes_the_other(
        first in condition_set(),
        second in condition_set(),
        replacement in condition_set()
    ) {
        let mut comparison = Comparison::default();
        *comparison.set_mut(SetId::First) = first;
        *comparison.set_mut(SetId::Second) = second;
        let before = comparison.resolve(SetId::Second);
        *comparison.set_mut(SetId::First) = replacement;
        prop_assert_eq!(comparison.resolve(SetId::Second), before);
        prop_assert_eq!(comparison.resolve(SetId::First), replacement.resolve());
    }

    #[test]
    fn label_and_selection_paths_agree(set in condition_set()) {
        let by_labels = importance::resolve_labels(
            set.temperature.label(),
            set.humidity.label(),
            set.exercise.label(),
        );
        prop_assert_eq!(by_labels, set.resolve().record);
    }

    #[test]
    fn radar_series_is_closed_in_axis_order(set in condition_set()) {
        let record = set.resolve().record;
        let series = RadarSeries::from_record("chart", &record);
        prop_assert!(series.is_closed());
        prop_assert_eq!(series.labels.len(), 6);
        prop_assert_eq!(series.values.len(), 6);
        for (i, (p, v)) in record.iter().enumerate() {
            prop_assert_eq!(series.labels[i].as_str(), p.name());
            prop_assert_eq!(series.values[i], v);
        }
    }
}

#[test]
fn both_sets_start_unselected() {
    let comparison = Comparison::default();
    for (id, res) in comparison.resolve_all() {
        assert!(res.record.is_default(), "{}", id.chart_title());
        assert!(!comparison.set(id).is_complete());
    }
}
