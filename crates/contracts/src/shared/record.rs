//! Запись коллекции и её идентификатор
//!
//! Backend отдаёт строки списков как произвольные JSON-объекты. Для списочного
//! фреймворка важны только две вещи: стабильный `id` и возможность точечно
//! поменять одно поле после успешной мутации.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Поля, в которых backend может прислать идентификатор (по приоритету)
const ID_FIELDS: [&str; 2] = ["id", "_id"];

/// Идентификатор записи: целое число или строка, как его прислал backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    /// Извлечь идентификатор из JSON-значения.
    ///
    /// Пустые строки, дробные числа и прочие типы идентификатором не считаются.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) if !s.trim().is_empty() => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Одна строка списка: непрозрачное отображение «поле → значение»
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Построить запись из JSON-значения; не-объекты отбрасываются
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Идентификатор записи (`id`, иначе `_id`)
    pub fn id(&self) -> Option<RecordId> {
        ID_FIELDS
            .iter()
            .find_map(|field| self.0.get(*field).and_then(RecordId::from_value))
    }

    pub fn has_id(&self, id: &RecordId) -> bool {
        self.id().as_ref() == Some(id)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Заменить (или добавить) значение поля
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Найти значение по пути через точку, например `store.name`.
    ///
    /// Возвращает `None`, если любой промежуточный ключ отсутствует
    /// или промежуточное значение не является объектом.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
