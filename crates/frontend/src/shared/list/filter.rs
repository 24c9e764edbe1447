//! Клиентский поиск по всем полям записи
//!
//! Запись подходит, если любое скалярное поле содержит запрос как подстроку
//! (без учёта регистра). Поля-объекты просматриваются ровно на один уровень
//! вглубь; массивы и `null` в поиске не участвуют.

use contracts::shared::Record;
use serde_json::Value;

/// Отфильтровать коллекцию по поисковому запросу.
///
/// Пустой запрос (или из одних пробелов) возвращает коллекцию без изменений.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_record(record, &needle))
        .cloned()
        .collect()
}

fn matches_record(record: &Record, needle: &str) -> bool {
    record.fields().any(|(_, value)| match value {
        Value::Object(nested) => nested.values().any(|v| matches_scalar(v, needle)),
        other => matches_scalar(other, needle),
    })
}

fn matches_scalar(value: &Value, needle: &str) -> bool {
    scalar_text(value).is_some_and(|text| text.to_lowercase().contains(needle))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().filter_map(Record::from_value).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let data = records(vec![
            json!({"name": "Milk Bag"}),
            json!({"name": "Egg Tray"}),
        ]);
        let found = filter(&data, "milk");
        assert_eq!(found, vec![data[0].clone()]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let data = records(vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(filter(&data, ""), data);
        assert_eq!(filter(&data, "   "), data);
    }

    #[test]
    fn test_matches_numbers_and_booleans() {
        let data = records(vec![
            json!({"id": 1, "price": 125}),
            json!({"id": 2, "price": 90, "featured": true}),
        ]);
        assert_eq!(filter(&data, "12").len(), 1);
        assert_eq!(filter(&data, "TRUE").len(), 1);
    }

    #[test]
    fn test_one_level_of_nesting_only() {
        let data = records(vec![
            json!({"id": 1, "store": {"name": "Central Market"}}),
            json!({"id": 2, "store": {"address": {"city": "Central City"}}}),
        ]);
        let found = filter(&data, "central");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_arrays_and_nulls_are_ignored() {
        let data = records(vec![
            json!({"id": 1, "tags": ["organic"], "note": null}),
        ]);
        assert!(filter(&data, "organic").is_empty());
        assert!(filter(&data, "null").is_empty());
    }

    #[test]
    fn test_chained_filters_differ_from_base_filter() {
        let data = records(vec![
            json!({"id": 1, "name": "Milk Bag"}),
            json!({"id": 2, "name": "Egg Tray"}),
        ]);
        let chained = filter(&filter(&data, "milk"), "egg");
        let from_base = filter(&data, "egg");
        assert!(chained.is_empty());
        assert_eq!(from_base.len(), 1);
        assert_ne!(chained, from_base);
    }
}
