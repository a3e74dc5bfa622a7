// ==========================================
// ERP 데모 엔진 - 생산 실적 도메인 모델
// ==========================================
// 용도: 이벤트 생성기가 발행하는 생산 실적 (생성 후 불변)
// 불변식: 0 <= defect_quantity <= actual_quantity <= planned_quantity
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::lot::MaterialUsage;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 생산 실적
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: String,                       // 생산 ID (예: PRO-000001)
    pub work_order_id: String,            // 작업지시 번호 (예: WO-000001)
    pub product_code: String,             // 제품 코드
    pub planned_quantity: i64,            // 계획 수량
    pub actual_quantity: i64,             // 실적 수량
    pub defect_quantity: i64,             // 불량 수량
    pub start_time: NaiveDateTime,        // 작업 시작 시각
    pub end_time: NaiveDateTime,          // 작업 종료 시각
    pub worker_id: String,                // 작업자 사번
    pub materials_used: Vec<MaterialUsage>, // 로트별 자재 소모 내역
}

impl ProductionRecord {
    /// 검증 생성자: 수량/시각 불변식을 강제
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        work_order_id: String,
        product_code: String,
        planned_quantity: i64,
        actual_quantity: i64,
        defect_quantity: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        worker_id: String,
        materials_used: Vec<MaterialUsage>,
    ) -> DomainResult<Self> {
        if planned_quantity <= 0 {
            return Err(DomainError::FieldValueError {
                field: "planned_quantity".to_string(),
                message: format!("계획 수량은 양수여야 함: {}", planned_quantity),
            });
        }
        if defect_quantity < 0
            || defect_quantity > actual_quantity
            || actual_quantity > planned_quantity
        {
            return Err(DomainError::DefectBoundViolation {
                defect: defect_quantity,
                actual: actual_quantity,
                planned: planned_quantity,
            });
        }
        if start_time > end_time {
            return Err(DomainError::TimeOrderViolation {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        Ok(Self {
            id,
            work_order_id,
            product_code,
            planned_quantity,
            actual_quantity,
            defect_quantity,
            start_time,
            end_time,
            worker_id,
            materials_used,
        })
    }

    /// 양품 수량 (실적 - 불량). 납품 가능 상한
    pub fn good_quantity(&self) -> i64 {
        self.actual_quantity - self.defect_quantity
    }
}
