use materials_testing_hub::{
    condition::{ConditionField, ConditionKey, Selection, UNSELECTED_LABEL},
    condition::{ExerciseLevel::*, HumidityBand::*, TemperatureBand::*},
    importance::{self, ImportanceRecord, Property, UnresolvedCondition},
};

#[test]
fn literal_entries_match_reference_values() {
    let expected = [
        (">25°C", ">60% RH", "High", [1.0, 5.0, 5.0, 3.0, 2.0]),
        (">25°C", ">60% RH", "Low to Rest", [1.0, 4.0, 2.0, 3.0, 2.0]),
        (">25°C", "<40% RH", "High", [1.0, 5.0, 4.0, 3.0, 2.0]),
        (">25°C", "<40% RH", "Low to Rest", [1.0, 3.0, 2.0, 3.0, 2.0]),
        ("10°C-25°C", ">60% RH", "High", [2.5, 5.0, 4.0, 3.0, 2.0]),
        ("10°C-25°C", ">60% RH", "Low to Rest", [2.5, 3.0, 2.5, 3.0, 2.0]),
        ("10°C-25°C", "<40% RH", "High", [2.5, 4.0, 5.0, 3.0, 2.5]),
        ("10°C-25°C", "<40% RH", "Low to Rest", [2.5, 2.5, 2.0, 3.0, 2.5]),
        ("<10°C", ">60% RH", "High", [4.0, 5.0, 5.0, 2.5, 3.0]),
        ("<10°C", ">60% RH", "Low to Rest", [4.0, 2.5, 2.0, 4.0, 3.0]),
        ("<10°C", "<40% RH", "High", [4.0, 4.0, 5.0, 2.5, 3.0]),
        ("<10°C", "<40% RH", "Low to Rest", [4.0, 2.5, 2.0, 2.0, 2.0]),
    ];
    for (t, h, e, [ins, brth, mm, th, dens]) in expected {
        let record = importance::lookup_labels(t, h, e)
            .unwrap_or_else(|err| panic!("{t} / {h} / {e}: {err}"));
        assert_eq!(
            record,
            ImportanceRecord::new(ins, brth, mm, th, dens),
            "{t} / {h} / {e}"
        );
    }
}

#[test]
fn cold_dry_resting_scenario() {
    let record = importance::resolve_labels(" <10°C", "<40% RH", "Low to Rest");
    assert_eq!(record.get(Property::Insulation), 4.0);
    assert_eq!(record.get(Property::Breathability), 2.5);
    assert_eq!(record.get(Property::MoistureManagement), 2.0);
    assert_eq!(record.get(Property::ThermalHand), 2.0);
    assert_eq!(record.get(Property::Density), 2.0);
}

#[test]
fn hot_humid_high_scenario_from_selections() {
    let record = importance::resolve(Above25C.into(), Above60Rh.into(), High.into());
    assert_eq!(record, ImportanceRecord::new(1.0, 5.0, 5.0, 3.0, 2.0));
}

#[test]
fn any_unselected_field_gives_default_record() {
    let cases = [
        (UNSELECTED_LABEL, "> 60% RH", "High"),
        ("> 25°C", UNSELECTED_LABEL, "High"),
        ("> 25°C", "> 60% RH", UNSELECTED_LABEL),
        (UNSELECTED_LABEL, UNSELECTED_LABEL, UNSELECTED_LABEL),
        ("", "> 60% RH", "High"),
    ];
    for (t, h, e) in cases {
        let record = importance::resolve_labels(t, h, e);
        assert!(record.is_default(), "{t:?} / {h:?} / {e:?} -> {record}");
        assert!(record.iter().all(|(_, v)| v == 3.0));
    }
}

#[test]
fn first_unselected_field_is_reported() {
    let err = importance::lookup(Selection::Unselected, Selection::Unselected, High.into())
        .expect_err("temperature missing");
    assert_eq!(
        err,
        UnresolvedCondition::Unselected {
            field: ConditionField::Temperature
        }
    );
}

#[test]
fn unknown_labels_give_default_record() {
    assert!(importance::resolve_labels("35°C", "> 60% RH", "High").is_default());
    assert!(importance::resolve_labels("> 25°C", "50% RH", "High").is_default());
    assert!(importance::resolve_labels("> 25°C", "> 60% RH", "Moderate").is_default());
    let err = importance::lookup_labels("> 25°C", "> 60% RH", "Moderate").unwrap_err();
    assert!(matches!(err, UnresolvedCondition::UnknownLabel(ref u) if u.field == ConditionField::Exercise));
}

#[test]
fn every_key_resolves_without_fallback() {
    for key in ConditionKey::all() {
        let record = importance::lookup(
            key.temperature.into(),
            key.humidity.into(),
            key.exercise.into(),
        )
        .unwrap_or_else(|err| panic!("{key}: {err}"));
        assert_eq!(importance::find(key), Some(record));
    }
}
