use crate::errors::AppError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub employee: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

/// 新增或更新 shift 的 request body, id 由 server 指定
#[derive(Deserialize)]
pub struct ShiftPayload {
    pub employee: String,
    pub start_time: String,
    pub end_time: String,
}

impl ShiftPayload {
    // 時間欄位只收 RFC3339, 其他格式一律拒絕
    pub fn parse_start_time(&self) -> Result<DateTime<FixedOffset>, AppError> {
        DateTime::parse_from_rfc3339(&self.start_time).map_err(|_| AppError::InvalidStartTime)
    }

    pub fn parse_end_time(&self) -> Result<DateTime<FixedOffset>, AppError> {
        DateTime::parse_from_rfc3339(&self.end_time).map_err(|_| AppError::InvalidEndTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_serializes_to_wire_shape() {
        let shift = Shift {
            id: 1,
            employee: "Alice".to_string(),
            start_time: DateTime::parse_from_rfc3339("2024-01-01T09:00:00+08:00").unwrap(),
            end_time: DateTime::parse_from_rfc3339("2024-01-01T17:00:00+08:00").unwrap(),
        };

        let value = serde_json::to_value(&shift).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["employee"], "Alice");
        assert_eq!(value["start_time"], "2024-01-01T09:00:00+08:00");
        assert_eq!(value["end_time"], "2024-01-01T17:00:00+08:00");
    }

    #[test]
    fn test_payload_accepts_rfc3339_and_keeps_offset() {
        let payload = ShiftPayload {
            employee: "Alice".to_string(),
            start_time: "2024-01-01T09:00:00Z".to_string(),
            end_time: "2024-01-01T17:00:00+02:00".to_string(),
        };

        let start = payload.parse_start_time().unwrap();
        let end = payload.parse_end_time().unwrap();
        assert_eq!(start.offset().local_minus_utc(), 0);
        assert_eq!(end.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_payload_rejects_non_rfc3339_times() {
        let payload = ShiftPayload {
            employee: "Bob".to_string(),
            start_time: "not-a-date".to_string(),
            end_time: "2024/01/01 17:00".to_string(),
        };

        assert!(matches!(
            payload.parse_start_time(),
            Err(AppError::InvalidStartTime)
        ));
        assert!(matches!(
            payload.parse_end_time(),
            Err(AppError::InvalidEndTime)
        ));
    }
}
