// ==========================================
// ERP 데모 엔진 - 근태/급여 도메인 모델
// ==========================================
// 용도: 근태 실적(일 단위) 및 월 급여 집계 결과
// 집계 규칙: (사번, 월) 쌍당 급여 레코드 정확히 1건
// ==========================================

use crate::domain::types::AttendanceStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// AttendanceRecord - 근태 실적
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,                       // 근태 ID (예: ATT-000001)
    pub employee_code: String,            // 사번
    pub date: NaiveDate,                  // 근무일
    pub check_in: Option<NaiveDateTime>,  // 출근 시각 (결근 시 None)
    pub check_out: Option<NaiveDateTime>, // 퇴근 시각 (결근 시 None)
    pub work_hours: f64,                  // 정규 근무시간 (최대 8h)
    pub overtime_hours: f64,              // 잔업 시간
    pub status: AttendanceStatus,         // 근태 상태
}

impl AttendanceRecord {
    /// 결근 레코드 (시각 없음, 0시간)
    pub fn absent(id: String, employee_code: String, date: NaiveDate) -> Self {
        Self {
            id,
            employee_code,
            date,
            check_in: None,
            check_out: None,
            work_hours: 0.0,
            overtime_hours: 0.0,
            status: AttendanceStatus::Absent,
        }
    }

    /// 총 근무시간 (정규 + 잔업)
    pub fn total_hours(&self) -> f64 {
        self.work_hours + self.overtime_hours
    }
}

// ==========================================
// PayrollRecord - 월 급여 레코드
// ==========================================
// 산식:
// - hourly_rate = base_salary / 월 소정 근로시간
// - overtime_pay = overtime_hours × hourly_rate × 잔업 배율
// - 야간조 수당: 월 잔업 시간이 기준 초과 시 정액 지급
// - deductions = gross_pay × 공제율
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: String,                // 급여 ID (예: PAY-EMP-001-202401)
    pub employee_code: String,     // 사번
    pub department: String,        // 부서 (인건비 집계용)
    pub month: String,             // 귀속 월 (YYYY-MM)
    pub base_salary: i64,          // 기본급 (KRW)
    pub overtime_pay: f64,         // 잔업 수당 (KRW)
    pub allowances: f64,           // 제수당 (KRW)
    pub gross_pay: f64,            // 지급 총액 (KRW)
    pub deductions: f64,           // 공제액 (KRW)
    pub net_pay: f64,              // 실지급액 (KRW)
    pub total_work_hours: f64,     // 월 정규 근무시간 합계
    pub total_overtime_hours: f64, // 월 잔업 시간 합계
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_record_has_zero_hours() {
        let rec = AttendanceRecord::absent(
            "ATT-000001".to_string(),
            "EMP-001".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        );
        assert_eq!(rec.status, AttendanceStatus::Absent);
        assert_eq!(rec.total_hours(), 0.0);
        assert!(rec.check_in.is_none());
    }
}
