// ==========================================
// ERP 데모 엔진 - 생성 설정
// ==========================================
// 책임: 달력 구간·발생 확률·수량 범위·급여 정책·난수 시드 관리
// 원칙: 기본값으로 즉시 사용 가능, 테스트에서 시드/구간 고정 가능
// ==========================================

use crate::ledger::payroll::PayrollPolicy;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// 설정 오류 타입
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("잘못된 설정값 (field={field}): {message}")]
    InvalidValue { field: String, message: String },
}

/// Result 타입 별칭
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// GeneratorConfig - 생성 설정
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    // ===== 달력 구간 =====
    pub months: u32,          // 생성 구간 (개월, 기본 6)
    pub end_date: NaiveDate,  // 구간 종료일 (기본: 오늘)

    // ===== 입고 이벤트 =====
    pub inbound_probability: f64,   // 자재별·일별 입고 발생 확률
    pub inbound_quantity_min: i64,  // 입고 수량 하한
    pub inbound_quantity_max: i64,  // 입고 수량 상한

    // ===== 생산 이벤트 (평일 한정) =====
    pub productions_per_day_min: u32, // 일별 생산 실적 건수 하한
    pub productions_per_day_max: u32, // 일별 생산 실적 건수 상한
    pub production_quantity_min: i64, // 계획 수량 하한
    pub production_quantity_max: i64, // 계획 수량 상한
    pub materials_per_production_min: u32, // 생산당 투입 자재 종수 하한
    pub materials_per_production_max: u32, // 생산당 투입 자재 종수 상한
    pub actual_ratio_min: f64,        // 실적/계획 비율 하한 (0.85)
    pub defect_ratio_max: f64,        // 불량/실적 비율 상한 (0.05)

    // ===== 납품 이벤트 =====
    pub delivery_probability: f64,  // 완료 생산당 납품 발생 확률
    pub delivery_lead_days_min: i64, // 생산 완료 → 납품 소요일 하한
    pub delivery_lead_days_max: i64, // 생산 완료 → 납품 소요일 상한
    pub schedule_commit_days_min: i64, // 생산 완료 → 약정 납기 하한
    pub schedule_commit_days_max: i64, // 생산 완료 → 약정 납기 상한

    // ===== 근태 이벤트 (평일 한정) =====
    pub attendance_probability: f64, // 직원별·일별 출근 확률 (미출근 = 결근 레코드)

    // ===== 급여 정책 =====
    pub payroll: PayrollPolicy,

    // ===== 난수 시드 =====
    pub seed: Option<u64>, // None: 엔트로피 시드 (운영), Some: 고정 시드 (재현)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            months: 6,
            end_date: Local::now().date_naive(),
            inbound_probability: 0.3,
            inbound_quantity_min: 200,
            inbound_quantity_max: 1_000,
            productions_per_day_min: 1,
            productions_per_day_max: 3,
            production_quantity_min: 50,
            production_quantity_max: 200,
            materials_per_production_min: 2,
            materials_per_production_max: 4,
            actual_ratio_min: 0.85,
            defect_ratio_max: 0.05,
            delivery_probability: 0.7,
            delivery_lead_days_min: 1,
            delivery_lead_days_max: 7,
            schedule_commit_days_min: 1,
            schedule_commit_days_max: 5,
            attendance_probability: 0.95,
            payroll: PayrollPolicy::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// 설정값 검증
    ///
    /// # 검증 항목
    /// - 구간: months >= 1
    /// - 확률: [0, 1]
    /// - 범위 쌍: min <= max, 하한 양수
    pub fn validate(&self) -> ConfigResult<()> {
        if self.months == 0 {
            return Err(ConfigError::InvalidValue {
                field: "months".to_string(),
                message: "생성 구간은 1개월 이상이어야 함".to_string(),
            });
        }

        for (field, value) in [
            ("inbound_probability", self.inbound_probability),
            ("delivery_probability", self.delivery_probability),
            ("attendance_probability", self.attendance_probability),
            ("defect_ratio_max", self.defect_ratio_max),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("확률/비율은 [0, 1] 범위여야 함: {}", value),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.actual_ratio_min) {
            return Err(ConfigError::InvalidValue {
                field: "actual_ratio_min".to_string(),
                message: format!("실적 비율 하한은 [0, 1] 범위여야 함: {}", self.actual_ratio_min),
            });
        }

        let ranges: [(&str, i64, i64); 4] = [
            (
                "inbound_quantity",
                self.inbound_quantity_min,
                self.inbound_quantity_max,
            ),
            (
                "production_quantity",
                self.production_quantity_min,
                self.production_quantity_max,
            ),
            (
                "delivery_lead_days",
                self.delivery_lead_days_min,
                self.delivery_lead_days_max,
            ),
            (
                "schedule_commit_days",
                self.schedule_commit_days_min,
                self.schedule_commit_days_max,
            ),
        ];
        for (field, min, max) in ranges {
            if min <= 0 || min > max {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("범위 오류: min={}, max={}", min, max),
                });
            }
        }

        if self.productions_per_day_min > self.productions_per_day_max
            || self.materials_per_production_min > self.materials_per_production_max
            || self.materials_per_production_min == 0
        {
            return Err(ConfigError::InvalidValue {
                field: "per_day_counts".to_string(),
                message: "건수 범위 오류".to_string(),
            });
        }

        Ok(())
    }

    /// 구간 시작일 (종료 다음 날 기준 months개월 전)
    ///
    /// 예: end=2024-06-30, months=6 → 2024-01-01
    pub fn start_date(&self) -> NaiveDate {
        (self.end_date + chrono::Duration::days(1)) - chrono::Months::new(self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_months() {
        let config = GeneratorConfig {
            months: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let config = GeneratorConfig {
            inbound_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_date_window() {
        let config = GeneratorConfig {
            months: 6,
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            ..Default::default()
        };
        assert_eq!(
            config.start_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
