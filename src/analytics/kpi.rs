// ==========================================
// ERP 데모 엔진 - 집계 KPI 조회
// ==========================================
// 책임: 생성 데이터셋 위 성과 지표 집계 (읽기 전용, 부수효과 없음)
// 원칙: 빈 입력은 0 요약으로 정상 처리 - 0 나눗셈 금지, 예외 없음
// 비율 필드는 소수 둘째 자리 반올림
// ==========================================

use crate::engine::dataset::GeneratedDataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// ==========================================
// DateRange - 조회 구간 필터
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ==========================================
// 보고 구조체
// ==========================================

/// 납기 준수율 보고
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnTimeDeliveryReport {
    pub total: usize,    // 총 납품 건수
    pub on_time: usize,  // 정시 납품 건수
    pub late: usize,     // 지연 납품 건수
    pub rate_pct: f64,   // 준수율 (%) - 0건이면 0
}

/// 생산 효율 보고
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionEfficiencyReport {
    pub planned_total: i64,      // 계획 수량 합계
    pub actual_total: i64,       // 실적 수량 합계
    pub defect_total: i64,       // 불량 수량 합계
    pub efficiency_pct: f64,     // 달성률 (%) = 실적/계획
    pub defect_rate_pct: f64,    // 불량률 (%) = 불량/실적
    pub production_count: usize, // 집계 대상 생산 건수
}

/// 재고 회전 보고
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryTurnoverReport {
    pub total_inbound: i64,     // 총 입고 수량
    pub total_outbound: i64,    // 총 소모 수량 (생산 투입)
    pub turnover_rate_pct: f64, // 회전율 (%) = 소모/입고
    pub remaining_stock: i64,   // 잔여 재고 (입고 - 소모)
}

/// 인건비 보고
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaborCostReport {
    pub employee_count: usize,      // 직원 수 (중복 제거)
    pub total_base_salary: i64,     // 기본급 합계
    pub total_overtime_pay: f64,    // 잔업 수당 합계
    pub total_gross_pay: f64,       // 지급 총액 합계
    pub total_work_hours: f64,      // 정규 근무시간 합계
    pub total_overtime_hours: f64,  // 잔업 시간 합계
    pub average_hourly_rate: f64,   // 평균 시급 (총액/총시간) - 0시간이면 0
}

/// 레코드 유형별 건수
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordCounts {
    pub lots: usize,
    pub inbounds: usize,
    pub productions: usize,
    pub deliveries: usize,
    pub attendance: usize,
    pub payrolls: usize,
    pub accounting_entries: usize,
}

impl RecordCounts {
    pub fn total(&self) -> usize {
        self.inbounds
            + self.productions
            + self.deliveries
            + self.attendance
            + self.payrolls
            + self.accounting_entries
    }
}

/// 데이터셋 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: Uuid,
    pub period: String,        // 구간 표기 (예: 2024-01-01 ~ 2024-06-30)
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub counts: RecordCounts,
}

// ==========================================
// 집계 함수
// ==========================================

/// 납기 준수율
///
/// # 인자
/// - customer_code: 고객사 필터 (None: 전체)
/// - range: 납품일 구간 필터 (None: 전체)
pub fn on_time_delivery_rate(
    dataset: &GeneratedDataset,
    customer_code: Option<&str>,
    range: Option<DateRange>,
) -> OnTimeDeliveryReport {
    let mut total = 0;
    let mut on_time = 0;

    for delivery in &dataset.deliveries {
        if let Some(code) = customer_code {
            if delivery.customer_code != code {
                continue;
            }
        }
        if let Some(range) = range {
            if !range.contains(delivery.delivery_date) {
                continue;
            }
        }
        total += 1;
        if delivery.on_time_delivery {
            on_time += 1;
        }
    }

    OnTimeDeliveryReport {
        total,
        on_time,
        late: total - on_time,
        rate_pct: ratio_pct(on_time as f64, total as f64),
    }
}

/// 생산 효율 (달성률/불량률)
pub fn production_efficiency(
    dataset: &GeneratedDataset,
    range: Option<DateRange>,
) -> ProductionEfficiencyReport {
    let mut report = ProductionEfficiencyReport::default();

    for production in &dataset.productions {
        if let Some(range) = range {
            if !range.contains(production.start_time.date()) {
                continue;
            }
        }
        report.planned_total += production.planned_quantity;
        report.actual_total += production.actual_quantity;
        report.defect_total += production.defect_quantity;
        report.production_count += 1;
    }

    report.efficiency_pct = ratio_pct(report.actual_total as f64, report.planned_total as f64);
    report.defect_rate_pct = ratio_pct(report.defect_total as f64, report.actual_total as f64);
    report
}

/// 재고 회전율 (입고 대비 생산 소모)
pub fn inventory_turnover(
    dataset: &GeneratedDataset,
    material_code: Option<&str>,
) -> InventoryTurnoverReport {
    let total_inbound: i64 = dataset
        .inbounds
        .iter()
        .filter(|i| material_code.map_or(true, |code| i.material_code == code))
        .map(|i| i.quantity)
        .sum();

    let total_outbound: i64 = dataset
        .productions
        .iter()
        .flat_map(|p| p.materials_used.iter())
        .filter(|u| material_code.map_or(true, |code| u.material_code == code))
        .map(|u| u.quantity)
        .sum();

    InventoryTurnoverReport {
        total_inbound,
        total_outbound,
        turnover_rate_pct: ratio_pct(total_outbound as f64, total_inbound as f64),
        remaining_stock: total_inbound - total_outbound,
    }
}

/// 인건비 집계
///
/// # 인자
/// - department: 부서 필터 (None: 전체)
/// - month: 귀속 월 필터 (YYYY-MM, None: 전체)
///
/// employee_count는 급여 레코드 건수가 아니라 중복 제거한 직원 수
pub fn labor_cost(
    dataset: &GeneratedDataset,
    department: Option<&str>,
    month: Option<&str>,
) -> LaborCostReport {
    let mut report = LaborCostReport::default();
    let mut distinct_employees: HashSet<&str> = HashSet::new();

    for payroll in &dataset.payrolls {
        if let Some(dept) = department {
            if payroll.department != dept {
                continue;
            }
        }
        if let Some(month) = month {
            if payroll.month != month {
                continue;
            }
        }
        distinct_employees.insert(payroll.employee_code.as_str());
        report.total_base_salary += payroll.base_salary;
        report.total_overtime_pay += payroll.overtime_pay;
        report.total_gross_pay += payroll.gross_pay;
        report.total_work_hours += payroll.total_work_hours;
        report.total_overtime_hours += payroll.total_overtime_hours;
    }

    report.employee_count = distinct_employees.len();
    let total_hours = report.total_work_hours + report.total_overtime_hours;
    report.average_hourly_rate = if total_hours > 0.0 {
        round2(report.total_gross_pay / total_hours)
    } else {
        0.0
    };
    report
}

/// 데이터셋 요약 (유형별 건수)
pub fn summary(dataset: &GeneratedDataset) -> DatasetSummary {
    DatasetSummary {
        dataset_id: dataset.dataset_id,
        period: dataset.period_label(),
        start_date: dataset.start_date,
        end_date: dataset.end_date,
        counts: RecordCounts {
            lots: dataset.lots.len(),
            inbounds: dataset.inbounds.len(),
            productions: dataset.productions.len(),
            deliveries: dataset.deliveries.len(),
            attendance: dataset.attendance.len(),
            payrolls: dataset.payrolls.len(),
            accounting_entries: dataset.accounting_entries.len(),
        },
    }
}

// ==========================================
// 수치 보조 함수
// ==========================================

/// 백분율 (분모 0이면 0)
fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    round2(numerator / denominator * 100.0)
}

/// 소수 둘째 자리 반올림
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_pct_zero_denominator() {
        assert_eq!(ratio_pct(10.0, 0.0), 0.0);
        assert_eq!(ratio_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio_pct_rounding() {
        assert_eq!(ratio_pct(1.0, 3.0), 33.33);
        assert_eq!(ratio_pct(2.0, 3.0), 66.67);
        assert_eq!(ratio_pct(3.0, 3.0), 100.0);
    }

    #[test]
    fn test_date_range_contains() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }
}
