// ==========================================
// ERP 데모 엔진 - 기준정보 도메인 모델
// ==========================================
// 용도: 참조 카탈로그가 보관하는 고정 조회 테이블 항목
// 생명주기: 카탈로그 적재 시 1회 생성, 이후 읽기 전용
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Material - 자재 마스터
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub code: String,          // 자재 코드 (예: MAT-001)
    pub name: String,          // 자재명
    pub unit_price: i64,       // 단가 (KRW)
    pub supplier_code: String, // 주 공급업체 코드
    pub category: String,      // 자재 분류 (금속/플라스틱/전자부품 등)
}

// ==========================================
// Product - 제품 마스터
// ==========================================
// 자재 소요는 형식적 BOM 없이 생성기에서 느슨하게 참조
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub code: String,        // 제품 코드 (예: EV9-SR-001)
    pub name: String,        // 제품명
    pub sales_price: i64,    // 판매 단가 (KRW)
    pub standard_cost: i64,  // 표준원가 (KRW)
}

// ==========================================
// Customer - 고객사 마스터
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub code: String,            // 거래처 코드 (예: CUST-001)
    pub name: String,            // 거래처명
    pub industry: String,        // 업종
    pub payment_terms_days: i32, // 결제 조건 (일)
}

// ==========================================
// Supplier - 공급업체 마스터
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub code: String,        // 거래처 코드 (예: SUP-001)
    pub name: String,        // 거래처명
    pub lead_time_days: i32, // 조달 리드타임 (일)
}

// ==========================================
// Employee - 인사 마스터
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub code: String,       // 사번 (예: EMP-001)
    pub name: String,       // 성명
    pub department: String, // 부서 (생산부/품질부/구매부/영업부)
    pub position: String,   // 직급
    pub base_salary: i64,   // 월 기본급 (KRW)
}

impl Employee {
    /// 월 기준 시급 (기본급 / 209시간)
    ///
    /// # 인자
    /// - monthly_standard_hours: 월 소정 근로시간 (기본 209)
    pub fn hourly_rate(&self, monthly_standard_hours: f64) -> f64 {
        self.base_salary as f64 / monthly_standard_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate() {
        let emp = Employee {
            code: "EMP-001".to_string(),
            name: "김철수".to_string(),
            department: "생산부".to_string(),
            position: "생산팀장".to_string(),
            base_salary: 3_000_000,
        };
        let rate = emp.hourly_rate(209.0);
        assert!((rate - 3_000_000.0 / 209.0).abs() < 1e-9);
    }
}
