//! Запрет переключения статуса до начала показа (рекламные баннеры)
//!
//! Проверка выполняется до обращения к диспетчеру мутаций: если время начала
//! записи ещё не наступило, сетевой запрос не отправляется вообще.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use contracts::shared::Record;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleRefusal {
    #[error("Показ начнётся {starts_at}; до этого статус менять нельзя")]
    NotStarted { starts_at: String },
}

/// Разрешено ли переключение записи с временем начала в поле `start_field`.
///
/// Отсутствующее или нераспознанное время начала ограничением не считается.
pub fn check_schedule(
    record: &Record,
    start_field: &str,
    now: DateTime<Utc>,
) -> Result<(), ScheduleRefusal> {
    let Some(starts_at) = record.lookup(start_field).and_then(parse_instant) else {
        return Ok(());
    };
    if starts_at > now {
        return Err(ScheduleRefusal::NotStarted {
            starts_at: starts_at.format("%d.%m.%Y %H:%M").to_string(),
        });
    }
    Ok(())
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` или миллисекунды Unix
fn parse_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(naive.and_utc());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn banner(start: Value) -> Record {
        Record::from_value(json!({"id": 1, "status": 0, "start_date": start})).unwrap()
    }

    #[test]
    fn test_future_start_is_refused() {
        let r = banner(json!("2025-03-16T09:00:00Z"));
        let err = check_schedule(&r, "start_date", now()).unwrap_err();
        assert_eq!(
            err,
            ScheduleRefusal::NotStarted {
                starts_at: "16.03.2025 09:00".to_string()
            }
        );
    }

    #[test]
    fn test_past_start_is_allowed() {
        assert!(check_schedule(&banner(json!("2025-03-01")), "start_date", now()).is_ok());
        assert!(check_schedule(&banner(json!("2025-03-15 11:59:59")), "start_date", now()).is_ok());
    }

    #[test]
    fn test_epoch_millis() {
        let future = now().timestamp_millis() + 60_000;
        assert!(check_schedule(&banner(json!(future)), "start_date", now()).is_err());
    }

    #[test]
    fn test_missing_or_garbage_start_is_allowed() {
        let r = Record::from_value(json!({"id": 1, "status": 0})).unwrap();
        assert!(check_schedule(&r, "start_date", now()).is_ok());
        assert!(check_schedule(&banner(json!("soon")), "start_date", now()).is_ok());
    }
}
