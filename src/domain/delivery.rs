// ==========================================
// ERP 데모 엔진 - 납품 도메인 모델
// ==========================================
// 용도: 완료된 생산 실적에서 파생되는 납품 실적 (생성 후 불변)
// 파생 규칙: on_time_delivery == (delivery_date <= scheduled_date)
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DeliveryRecord - 납품 실적
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: String,                       // 납품 ID (예: DEL-000001)
    pub customer_code: String,            // 고객사 코드
    pub product_code: String,             // 제품 코드
    pub quantity: i64,                    // 납품 수량
    pub delivery_date: NaiveDate,         // 실제 납품일
    pub scheduled_date: NaiveDate,        // 약정 납기일 (생산 완료 시점에 확정)
    pub on_time_delivery: bool,           // 납기 준수 여부 (파생 필드)
    pub production_record_ids: Vec<String>, // 원천 생산 실적 ID 목록
}

impl DeliveryRecord {
    /// 검증 생성자: 납기 준수 여부는 날짜 비교로만 파생
    pub fn new(
        id: String,
        customer_code: String,
        product_code: String,
        quantity: i64,
        delivery_date: NaiveDate,
        scheduled_date: NaiveDate,
        production_record_ids: Vec<String>,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::FieldValueError {
                field: "quantity".to_string(),
                message: format!("납품 수량은 양수여야 함: {}", quantity),
            });
        }
        if production_record_ids.is_empty() {
            return Err(DomainError::FieldValueError {
                field: "production_record_ids".to_string(),
                message: "납품은 최소 1건의 생산 실적을 참조해야 함".to_string(),
            });
        }

        Ok(Self {
            id,
            customer_code,
            product_code,
            quantity,
            on_time_delivery: delivery_date <= scheduled_date,
            delivery_date,
            scheduled_date,
            production_record_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_on_time_derivation() {
        let on_time = DeliveryRecord::new(
            "DEL-000001".to_string(),
            "CUST-001".to_string(),
            "EV9-SR-001".to_string(),
            80,
            d(10),
            d(12),
            vec!["PRO-000001".to_string()],
        )
        .unwrap();
        assert!(on_time.on_time_delivery);

        let late = DeliveryRecord::new(
            "DEL-000002".to_string(),
            "CUST-001".to_string(),
            "EV9-SR-001".to_string(),
            80,
            d(15),
            d(12),
            vec!["PRO-000002".to_string()],
        )
        .unwrap();
        assert!(!late.on_time_delivery);
    }

    #[test]
    fn test_requires_source_production() {
        let result = DeliveryRecord::new(
            "DEL-000003".to_string(),
            "CUST-001".to_string(),
            "EV9-SR-001".to_string(),
            80,
            d(10),
            d(12),
            vec![],
        );
        assert!(result.is_err());
    }
}
