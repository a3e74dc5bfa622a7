// ==========================================
// ERP 데모 엔진 - 급여 원장
// ==========================================
// 책임: 근태 실적을 (사번, 월) 단위로 집계하여 급여 레코드 산출
// 산식:
// - hourly_rate = base_salary / monthly_standard_hours
// - overtime_pay = overtime_hours × hourly_rate × overtime_multiplier
// - 야간조 수당: 월 잔업 시간 > 기준 시 정액
// - deductions = gross × deduction_rate
// ==========================================

use crate::domain::attendance::{AttendanceRecord, PayrollRecord};
use crate::domain::master::Employee;
use serde::{Deserialize, Serialize};

// ==========================================
// PayrollPolicy - 급여 정책 상수
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPolicy {
    pub monthly_standard_hours: f64,        // 월 소정 근로시간
    pub overtime_multiplier: f64,           // 잔업 배율
    pub night_shift_allowance: f64,         // 야간조 수당 정액 (KRW)
    pub night_shift_overtime_threshold: f64, // 야간조 수당 지급 기준 잔업 시간
    pub deduction_rate: f64,                // 공제율 (지급 총액 대비)
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            monthly_standard_hours: 209.0,
            overtime_multiplier: 1.5,
            night_shift_allowance: 50_000.0,
            night_shift_overtime_threshold: 20.0,
            deduction_rate: 0.095,
        }
    }
}

/// 월 급여 집계
///
/// 해당 직원·귀속 월의 근태만 합산한다. 근태가 전혀 없는 월도
/// 기본급 기준의 레코드 1건을 산출한다 (호출자가 (사번, 월) 전 조합을 순회).
///
/// # 인자
/// - attendance: 근태 실적 (타 직원/타 월 레코드가 섞여 있어도 됨)
/// - employee: 인사 마스터 항목
/// - month: 귀속 월 (YYYY-MM)
pub fn build_payroll(
    attendance: &[AttendanceRecord],
    employee: &Employee,
    month: &str,
    policy: &PayrollPolicy,
) -> PayrollRecord {
    let mut total_work_hours = 0.0;
    let mut total_overtime_hours = 0.0;

    for record in attendance {
        if record.employee_code != employee.code {
            continue;
        }
        if record.date.format("%Y-%m").to_string() != month {
            continue;
        }
        total_work_hours += record.work_hours;
        total_overtime_hours += record.overtime_hours;
    }

    let hourly_rate = employee.hourly_rate(policy.monthly_standard_hours);
    let overtime_pay = total_overtime_hours * hourly_rate * policy.overtime_multiplier;
    let allowances = if total_overtime_hours > policy.night_shift_overtime_threshold {
        policy.night_shift_allowance
    } else {
        0.0
    };

    let gross_pay = employee.base_salary as f64 + overtime_pay + allowances;
    let deductions = gross_pay * policy.deduction_rate;

    PayrollRecord {
        id: format!("PAY-{}-{}", employee.code, month.replace('-', "")),
        employee_code: employee.code.clone(),
        department: employee.department.clone(),
        month: month.to_string(),
        base_salary: employee.base_salary,
        overtime_pay,
        allowances,
        gross_pay,
        deductions,
        net_pay: gross_pay - deductions,
        total_work_hours,
        total_overtime_hours,
    }
}
