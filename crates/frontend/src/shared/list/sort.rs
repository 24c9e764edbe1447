//! Сортировка коллекции по колонке (в том числе по вложенному пути `a.b.c`)
//!
//! Строки сравниваются без учёта регистра, числа как числа. Пара «число и
//! не число» сравнивается как строки. Такое сравнение не транзитивно, поэтому
//! используется собственная сортировка слиянием, которая на нём не падает.

use contracts::shared::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

/// Текущая сортировка списка: ключ (путь через точку) и направление
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Состояние после клика по колонке `key`.
    ///
    /// Повторный клик по той же колонке: asc → desc → asc.
    /// Клик по другой колонке всегда начинает с asc.
    pub fn next(&self, key: &str) -> SortState {
        let direction = match (self.key == key, self.direction) {
            (true, SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        SortState {
            key: key.to_string(),
            direction,
        }
    }

    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::None && !self.key.is_empty()
    }
}

/// Клик по колонке: возвращает отсортированную копию и новое состояние
pub fn sort(records: &[Record], key_path: &str, current: &SortState) -> (Vec<Record>, SortState) {
    let next = current.next(key_path);
    let sorted = apply_sort(records, &next);
    (sorted, next)
}

/// Применить уже выбранную сортировку без переключения направления.
///
/// Сортировка стабильная: записи с равными ключами сохраняют исходный порядок.
pub fn apply_sort(records: &[Record], state: &SortState) -> Vec<Record> {
    if !state.is_active() {
        return records.to_vec();
    }

    let keyed: Vec<(SortKey, &Record)> = records
        .iter()
        .map(|r| (SortKey::of(r.lookup(&state.key)), r))
        .collect();

    let descending = state.direction == SortDirection::Desc;
    let sorted = merge_sort(keyed, &|(a, _), (b, _)| {
        let cmp = a.compare(b);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });
    sorted.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Стабильная сортировка слиянием.
///
/// Сравнение пар «число/строка» не транзитивно, и `sort_by` вправе на нём
/// паниковать; слияние только выбирает меньший из двух голов и всегда
/// завершается.
fn merge_sort<T>(mut items: Vec<T>, cmp: &impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

/// Ключ сортировки одной записи
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Num(f64, String),
    Text(String),
}

impl SortKey {
    /// Отсутствующий ключ на любом уровне пути даёт пустую строку
    fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Text(String::new()),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(Value::Number(n)) => Self::Num(n.as_f64().unwrap_or(0.0), n.to_string()),
            Some(Value::Bool(b)) => Self::Text(b.to_string()),
            Some(other) => Self::Text(other.to_string()),
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Num(_, text) | Self::Text(text) => text,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Num(a, _), Self::Num(b, _)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => locale_cmp(self.text(), other.text()),
        }
    }
}

/// Сравнение строк «как для людей»: сначала без учёта регистра,
/// при равенстве по исходному написанию
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().filter_map(Record::from_value).collect()
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.id().map(|id| id.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_click_cycle_asc_desc_asc() {
        let data = records(vec![
            json!({"id": 1, "name": "banana"}),
            json!({"id": 2, "name": "Apple"}),
            json!({"id": 3, "name": "cherry"}),
        ]);

        let (first, state) = sort(&data, "name", &SortState::default());
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(ids(&first), vec!["2", "1", "3"]);

        let (second, state) = sort(&first, "name", &state);
        assert_eq!(state.direction, SortDirection::Desc);
        let mut reversed = ids(&first);
        reversed.reverse();
        assert_eq!(ids(&second), reversed);

        let (third, state) = sort(&second, "name", &state);
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(ids(&third), ids(&first));
    }

    #[test]
    fn test_new_key_resets_to_asc() {
        let state = SortState {
            key: "name".to_string(),
            direction: SortDirection::Desc,
        };
        let next = state.next("price");
        assert_eq!(next.key, "price");
        assert_eq!(next.direction, SortDirection::Asc);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let data = records(vec![
            json!({"id": 1, "price": 100}),
            json!({"id": 2, "price": 9.5}),
            json!({"id": 3, "price": 20}),
        ]);
        let (sorted, _) = sort(&data, "price", &SortState::default());
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_nested_key_path() {
        let data = records(vec![
            json!({"id": 1, "store": {"name": "Zeta"}}),
            json!({"id": 2, "store": {"name": "Alpha"}}),
            json!({"id": 3, "store": {"name": "Mid"}}),
        ]);
        let (sorted, _) = sort(&data, "store.name", &SortState::default());
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_missing_intermediate_key_sorts_as_empty_string() {
        let data = records(vec![
            json!({"id": 1, "store": {"name": "Beta"}}),
            json!({"id": 2}),
            json!({"id": 3, "store": null}),
        ]);
        let (sorted, _) = sort(&data, "store.name", &SortState::default());
        // пустые значения уходят в начало, «Beta» в конец
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_mixed_types_do_not_panic() {
        let data = records(vec![
            json!({"id": 1, "code": "B7"}),
            json!({"id": 2, "code": 15}),
            json!({"id": 3, "code": true}),
            json!({"id": 4, "code": null}),
        ]);
        let (sorted, _) = sort(&data, "code", &SortState::default());
        assert_eq!(sorted.len(), 4);
        // null приводится к пустой строке и идёт первым
        assert_eq!(ids(&sorted)[0], "4");
    }

    #[test]
    fn test_numbers_stay_numeric_next_to_text() {
        let data = records(vec![
            json!({"id": 1, "code": 10}),
            json!({"id": 2, "code": 9}),
            json!({"id": 3, "code": "abc"}),
        ]);
        let (sorted, state) = sort(&data, "code", &SortState::default());
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
        let (desc, _) = sort(&sorted, "code", &state);
        assert_eq!(ids(&desc), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (2, 'e')];
        let sorted = merge_sort(items, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        let order: String = sorted.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, "bdace");
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let data = records(vec![
            json!({"id": 1, "status": 1}),
            json!({"id": 2, "status": 0}),
            json!({"id": 3, "status": 1}),
            json!({"id": 4, "status": 0}),
        ]);
        let (asc, state) = sort(&data, "status", &SortState::default());
        assert_eq!(ids(&asc), vec!["2", "4", "1", "3"]);
        let (desc, _) = sort(&asc, "status", &state);
        assert_eq!(ids(&desc), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_empty_input() {
        let (sorted, state) = sort(&[], "name", &SortState::default());
        assert!(sorted.is_empty());
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_inactive_state_keeps_order() {
        let data = records(vec![json!({"id": 2}), json!({"id": 1})]);
        let kept = apply_sort(&data, &SortState::default());
        assert_eq!(ids(&kept), vec!["2", "1"]);
    }
}
