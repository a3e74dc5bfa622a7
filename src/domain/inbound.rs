// ==========================================
// ERP 데모 엔진 - 자재 입고 도메인 모델
// ==========================================
// 용도: 이벤트 생성기가 발행하는 입고 실적 (생성 후 불변)
// 불변식: total_amount == quantity * unit_price
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::types::QualityStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// InboundRecord - 자재 입고 실적
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRecord {
    pub id: String,                    // 입고 ID (예: IN-000001)
    pub material_code: String,         // 자재 코드
    pub supplier_code: String,         // 공급업체 코드
    pub quantity: i64,                 // 입고 수량
    pub unit_price: i64,               // 입고 단가 (KRW)
    pub total_amount: i64,             // 입고 금액 (수량 × 단가)
    pub date: NaiveDate,               // 입고일
    pub lot_number: String,            // 발번된 로트 번호
    pub quality_status: QualityStatus, // 입고 검사 판정
    pub purchase_order_id: String,     // 구매발주 번호
}

impl InboundRecord {
    /// 검증 생성자: 금액 불변식을 강제
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        material_code: String,
        supplier_code: String,
        quantity: i64,
        unit_price: i64,
        date: NaiveDate,
        lot_number: String,
        quality_status: QualityStatus,
        purchase_order_id: String,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::FieldValueError {
                field: "quantity".to_string(),
                message: format!("입고 수량은 양수여야 함: {}", quantity),
            });
        }
        if unit_price < 0 {
            return Err(DomainError::FieldValueError {
                field: "unit_price".to_string(),
                message: format!("단가는 음수일 수 없음: {}", unit_price),
            });
        }

        Ok(Self {
            id,
            material_code,
            supplier_code,
            total_amount: quantity * unit_price,
            quantity,
            unit_price,
            date,
            lot_number,
            quality_status,
            purchase_order_id,
        })
    }
}
