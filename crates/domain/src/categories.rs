//! Static category tables shared by expenses, reminders and competitions.

use crate::EntityType;
use std::collections::BTreeMap;

/// Days until the next occurrence of a recurring category when the owning
/// entity has no override for it. Only these categories generate automatic
/// reminders.
pub const DEFAULT_REMINDER_INTERVALS: [(&str, i64); 11] = [
    ("herrador", 45),
    ("veterinario", 365),
    ("dentista", 365),
    ("vacunas", 180),
    ("desparasitacion", 90),
    ("fisioterapia", 30),
    ("licencias", 365),
    ("seguros", 365),
    ("equipamiento", 365),
    ("pasaporte", 365),
    ("itv_remolque", 365),
];

/// Interval used for categories missing from the default table
pub const FALLBACK_INTERVAL_DAYS: i64 = 30;

/// Longest interval an entity override or a reminder may carry
pub const MAX_INTERVAL_DAYS: i64 = 3650;

/// Categories touching health or legal compliance
pub const IMPORTANT_CATEGORIES: [&str; 4] = ["veterinario", "vacunas", "licencias", "seguros"];

pub const HORSE_EXPENSE_CATEGORIES: [(&str, &str); 13] = [
    ("pupilaje", "Pupilaje"),
    ("herrador", "Herrador"),
    ("veterinario", "Veterinario"),
    ("dentista", "Dentista"),
    ("vacunas", "Vacunas"),
    ("desparasitacion", "Desparasitación"),
    ("fisioterapia", "Fisioterapia"),
    ("proveedores", "Proveedores"),
    ("otros_propietarios", "Otros Propietarios"),
    ("alimentacion", "Alimentación"),
    ("equipo", "Equipo"),
    ("transporte", "Transporte"),
    ("otros", "Otros"),
];

pub const RIDER_EXPENSE_CATEGORIES: [(&str, &str); 9] = [
    ("equipamiento", "Equipamiento"),
    ("formacion", "Formación"),
    ("competiciones", "Competiciones"),
    ("licencias", "Licencias"),
    ("seguros", "Seguros"),
    ("transporte", "Transporte"),
    ("alimentacion", "Alimentación"),
    ("fisioterapia", "Fisioterapia"),
    ("otros", "Otros"),
];

pub const COMPETITION_DISCIPLINES: [(&str, &str); 11] = [
    ("salto", "Salto"),
    ("doma_clasica", "Doma Clásica"),
    ("doma_vaquera", "Doma Vaquera"),
    ("concurso_completo", "Concurso Completo"),
    ("raid", "Raid"),
    ("enganche", "Enganche"),
    ("reining", "Reining"),
    ("volteo", "Volteo"),
    ("horseball", "Horseball"),
    ("polo", "Polo"),
    ("otros", "Otros"),
];

pub const SECURITY_QUESTIONS: [&str; 8] = [
    "¿Cuál es el nombre de tu primera mascota?",
    "¿En qué ciudad naciste?",
    "¿Cuál es el nombre de tu madre?",
    "¿Cuál fue tu primer colegio?",
    "¿Cuál es tu comida favorita?",
    "¿Cuál es el nombre de tu mejor amigo de la infancia?",
    "¿Cuál es tu película favorita?",
    "¿Cuál es el segundo nombre de tu padre?",
];

/// Per entity overrides of `DEFAULT_REMINDER_INTERVALS`
pub type ReminderIntervals = BTreeMap<String, i64>;

pub fn default_interval(category: &str) -> Option<i64> {
    DEFAULT_REMINDER_INTERVALS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, days)| *days)
}

pub fn is_automatic_category(category: &str) -> bool {
    default_interval(category).is_some()
}

pub fn is_important_category(category: &str) -> bool {
    IMPORTANT_CATEGORIES.contains(&category)
}

/// Resolves the reminder interval for a category: the entity override
/// first, then the default table and finally `FALLBACK_INTERVAL_DAYS`.
pub fn compute_interval(overrides: Option<&ReminderIntervals>, category: &str) -> i64 {
    overrides
        .and_then(|intervals| intervals.get(category).copied())
        .or_else(|| default_interval(category))
        .unwrap_or(FALLBACK_INTERVAL_DAYS)
}

pub fn is_valid_interval(days: i64) -> bool {
    (1..=MAX_INTERVAL_DAYS).contains(&days)
}

/// Every override has to be between 1 and `MAX_INTERVAL_DAYS` days
pub fn validate_intervals(intervals: &ReminderIntervals) -> Result<(), String> {
    match intervals.iter().find(|(_, days)| !is_valid_interval(**days)) {
        Some((category, days)) => Err(format!(
            "Interval for {} must be between 1 and {} days, got: {}",
            category, MAX_INTERVAL_DAYS, days
        )),
        None => Ok(()),
    }
}

pub fn expense_categories(entity_type: EntityType) -> &'static [(&'static str, &'static str)] {
    match entity_type {
        EntityType::Rider => &RIDER_EXPENSE_CATEGORIES,
        _ => &HORSE_EXPENSE_CATEGORIES,
    }
}

pub fn is_valid_expense_category(entity_type: EntityType, category: &str) -> bool {
    expense_categories(entity_type)
        .iter()
        .any(|(c, _)| *c == category)
}

/// Human readable name of a category, the key itself when unknown
pub fn category_name(entity_type: EntityType, category: &str) -> String {
    expense_categories(entity_type)
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| category.to_string())
}

pub fn is_valid_discipline(discipline: &str) -> bool {
    COMPETITION_DISCIPLINES.iter().any(|(d, _)| *d == discipline)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interval_prefers_entity_override() {
        let mut overrides = ReminderIntervals::new();
        overrides.insert("herrador".into(), 60);

        assert_eq!(compute_interval(Some(&overrides), "herrador"), 60);
        assert_eq!(compute_interval(Some(&overrides), "vacunas"), 180);
        assert_eq!(compute_interval(None, "herrador"), 45);
    }

    #[test]
    fn interval_falls_back_for_unknown_categories() {
        assert_eq!(compute_interval(None, "pupilaje"), FALLBACK_INTERVAL_DAYS);
        assert_eq!(compute_interval(Some(&Default::default()), "otros"), 30);
    }

    #[test]
    fn rejects_non_positive_intervals() {
        let mut intervals = ReminderIntervals::new();
        intervals.insert("herrador".into(), 40);
        assert!(validate_intervals(&intervals).is_ok());
        intervals.insert("vacunas".into(), 0);
        assert!(validate_intervals(&intervals).is_err());
    }

    #[test]
    fn rejects_intervals_beyond_ten_years() {
        let mut intervals = ReminderIntervals::new();
        intervals.insert("herrador".into(), MAX_INTERVAL_DAYS);
        assert!(validate_intervals(&intervals).is_ok());
        intervals.insert("herrador".into(), 9_000_000_000_000);
        assert!(validate_intervals(&intervals).is_err());
    }

    #[test]
    fn automatic_categories_are_exactly_the_default_table() {
        for (category, _) in DEFAULT_REMINDER_INTERVALS.iter() {
            assert!(is_automatic_category(category));
        }
        assert!(!is_automatic_category("pupilaje"));
        assert!(!is_automatic_category("alimentacion"));
    }

    #[test]
    fn category_names_depend_on_entity_type() {
        assert_eq!(category_name(EntityType::Horse, "desparasitacion"), "Desparasitación");
        assert_eq!(category_name(EntityType::Rider, "formacion"), "Formación");
        assert_eq!(category_name(EntityType::Horse, "pasaporte"), "pasaporte");
        assert!(is_valid_expense_category(EntityType::Rider, "licencias"));
        assert!(!is_valid_expense_category(EntityType::Horse, "licencias"));
    }
}
