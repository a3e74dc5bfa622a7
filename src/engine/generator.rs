// ==========================================
// ERP 데모 엔진 - 이벤트 생성기 (시계열 워커)
// ==========================================
// 책임: 고정 달력 구간을 일 단위로 순회하며 1차 이벤트 스트림 발행
//   - 입고: 자재별·일별 확률 발생 → 로트 발번
//   - 생산: 평일 1~3건, 적격 로트에서 선입선출 차출
//   - 납품: 완료 생산당 확률 발생, 약정 납기는 생산 완료 시점에 독립 확정
//   - 근태: 평일 직원별 출근/지각/조퇴/결근
// 부수효과: 로트 원장 갱신(발번/소모)만 허용, 그 외 상태 변경 없음
// 조회 실패(기준정보 부재)는 해당 레코드 건너뜀 - 치명 오류 아님
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::config::{ConfigResult, GeneratorConfig};
use crate::domain::lot::MaterialUsage;
use crate::domain::master::{Customer, Employee, Material, Product};
use crate::domain::types::QualityStatus;
use crate::domain::{
    AttendanceRecord, AttendanceStatus, DeliveryRecord, InboundRecord, PayrollRecord,
    ProductionRecord,
};
use crate::engine::dataset::GeneratedDataset;
use crate::engine::lot_selection::{FifoLotSelection, LotSelection};
use crate::engine::rng::Prng;
use crate::ledger::accounting::AccountingLedger;
use crate::ledger::lot_ledger::LotLedger;
use crate::ledger::payroll::build_payroll;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use tracing::{info, warn};
use uuid::Uuid;

// ==========================================
// EventGenerator - 시계열 이벤트 생성기
// ==========================================
pub struct EventGenerator {
    catalog: ReferenceCatalog,
    config: GeneratorConfig,
    rng: Prng,
    lot_selection: Box<dyn LotSelection>,

    // 레코드 발번 순번
    inbound_seq: u32,
    production_seq: u32,
    delivery_seq: u32,
    attendance_seq: u32,
    purchase_order_seq: u32,
}

impl EventGenerator {
    /// 생성기 구성 (설정 검증 포함)
    pub fn new(catalog: ReferenceCatalog, config: GeneratorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let rng = Prng::from_seed_option(config.seed);
        Ok(Self {
            catalog,
            config,
            rng,
            lot_selection: Box::new(FifoLotSelection::new()),
            inbound_seq: 0,
            production_seq: 0,
            delivery_seq: 0,
            attendance_seq: 0,
            purchase_order_seq: 0,
        })
    }

    /// 로트 선정 전략 교체 (기본: 선입선출)
    pub fn with_lot_selection(mut self, strategy: Box<dyn LotSelection>) -> Self {
        self.lot_selection = strategy;
        self
    }

    /// 구간 전체 생성 실행
    ///
    /// 일 순회 → 파생 원장(급여/회계) 집계 → 데이터셋 조립
    pub fn generate(mut self) -> GeneratedDataset {
        let start = self.config.start_date();
        let end = self.config.end_date;

        info!(start = %start, end = %end, "합성 ERP 데이터 생성 시작");

        // 달력 순회 중 기준정보는 고정 (스냅샷)
        let materials = self.catalog.materials().to_vec();
        let products = self.catalog.products().to_vec();
        let customers = self.catalog.customers().to_vec();
        let employees = self.catalog.employees().to_vec();
        let workers: Vec<Employee> = {
            let production = self.catalog.employees_by_department("생산부");
            if production.is_empty() {
                employees.clone()
            } else {
                production.into_iter().cloned().collect()
            }
        };

        let mut lot_ledger = LotLedger::new();
        let mut inbounds = Vec::new();
        let mut productions = Vec::new();
        let mut deliveries = Vec::new();
        let mut attendance = Vec::new();

        let mut day = start;
        while day <= end {
            self.emit_inbounds(day, &materials, &mut lot_ledger, &mut inbounds);

            if is_weekday(day) {
                self.emit_productions(
                    day,
                    &products,
                    &customers,
                    &workers,
                    &mut lot_ledger,
                    &mut productions,
                    &mut deliveries,
                );
                self.emit_attendance(day, &employees, &mut attendance);
            }

            day += Duration::days(1);
        }

        info!(count = inbounds.len(), "자재 입고 생성 완료");
        info!(count = productions.len(), "생산 실적 생성 완료");
        info!(count = deliveries.len(), "납품 실적 생성 완료");
        info!(count = attendance.len(), "근태 기록 생성 완료");

        // 파생 원장: 급여 ((사번, 월) 쌍당 정확히 1건)
        let payrolls = self.build_payrolls(start, end, &employees, &attendance);
        info!(count = payrolls.len(), "급여 집계 완료");

        // 파생 원장: 회계 분개 (입고/납품/급여 전건 전기)
        let accounting = self.post_accounting(&inbounds, &deliveries, &payrolls);
        info!(count = accounting.entries().len(), "회계 분개 전기 완료");

        GeneratedDataset {
            dataset_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            catalog: self.catalog,
            lots: lot_ledger.into_lots(),
            inbounds,
            productions,
            deliveries,
            attendance,
            payrolls,
            accounting_entries: accounting.into_entries(),
        }
    }

    // ==========================================
    // 1차 이벤트: 자재 입고
    // ==========================================
    fn emit_inbounds(
        &mut self,
        day: NaiveDate,
        materials: &[Material],
        lot_ledger: &mut LotLedger,
        out: &mut Vec<InboundRecord>,
    ) {
        for material in materials {
            if !self.rng.chance(self.config.inbound_probability) {
                continue;
            }

            let quantity = self
                .rng
                .range_i64(self.config.inbound_quantity_min, self.config.inbound_quantity_max);
            let quality_status = self.roll_quality();
            let lot_number =
                lot_ledger.create_lot_with_quality(&material.code, day, quantity, quality_status);

            self.inbound_seq += 1;
            self.purchase_order_seq += 1;
            match InboundRecord::new(
                format!("IN-{:06}", self.inbound_seq),
                material.code.clone(),
                material.supplier_code.clone(),
                quantity,
                material.unit_price,
                day,
                lot_number,
                quality_status,
                format!("PO-{:06}", self.purchase_order_seq),
            ) {
                Ok(record) => out.push(record),
                Err(e) => warn!(material = %material.code, error = %e, "입고 레코드 생성 실패, 건너뜀"),
            }
        }
    }

    /// 입고 검사 판정 추첨 (합격 95% / 대기 4% / 불합격 1%)
    fn roll_quality(&mut self) -> QualityStatus {
        let r = self.rng.range_f64(0.0, 1.0);
        if r < 0.95 {
            QualityStatus::Passed
        } else if r < 0.99 {
            QualityStatus::Pending
        } else {
            QualityStatus::Failed
        }
    }

    // ==========================================
    // 1차 이벤트: 생산 실적 (+ 파생 납품)
    // ==========================================
    #[allow(clippy::too_many_arguments)]
    fn emit_productions(
        &mut self,
        day: NaiveDate,
        products: &[Product],
        customers: &[Customer],
        workers: &[Employee],
        lot_ledger: &mut LotLedger,
        out_productions: &mut Vec<ProductionRecord>,
        out_deliveries: &mut Vec<DeliveryRecord>,
    ) {
        let count = self.rng.range_u32(
            self.config.productions_per_day_min,
            self.config.productions_per_day_max,
        );

        for _ in 0..count {
            let Some(product) = self.rng.pick(products).cloned() else {
                return;
            };
            let Some(worker) = self.rng.pick(workers).cloned() else {
                return;
            };

            let planned = self.rng.range_i64(
                self.config.production_quantity_min,
                self.config.production_quantity_max,
            );
            // 실적: 계획의 85~100%
            let actual_ratio = self.rng.range_f64(self.config.actual_ratio_min, 1.0);
            let actual = ((planned as f64 * actual_ratio).round() as i64).clamp(0, planned);
            // 불량: 실적의 0~5%
            let defect_ratio = self.rng.range_f64(0.0, self.config.defect_ratio_max);
            let defect = ((actual as f64 * defect_ratio).floor() as i64).clamp(0, actual);

            let materials_used = self.draw_materials(day, actual, lot_ledger);

            self.production_seq += 1;
            let production = match ProductionRecord::new(
                format!("PRO-{:06}", self.production_seq),
                format!("WO-{:06}", self.production_seq),
                product.code.clone(),
                planned,
                actual,
                defect,
                at_hour(day, 8),
                at_hour(day, 16),
                worker.code.clone(),
                materials_used,
            ) {
                Ok(record) => record,
                Err(e) => {
                    warn!(product = %product.code, error = %e, "생산 레코드 생성 실패, 건너뜀");
                    continue;
                }
            };

            self.maybe_emit_delivery(day, &production, customers, out_deliveries);
            out_productions.push(production);
        }
    }

    /// 생산 1건의 자재 차출: 투입 자재 2~4종, 종별 소요 = 실적 × 원단위
    fn draw_materials(
        &mut self,
        day: NaiveDate,
        actual_quantity: i64,
        lot_ledger: &mut LotLedger,
    ) -> Vec<MaterialUsage> {
        let material_codes: Vec<String> = self
            .catalog
            .materials()
            .iter()
            .map(|m| m.code.clone())
            .collect();
        if material_codes.is_empty() || actual_quantity <= 0 {
            return Vec::new();
        }

        let kinds = self
            .rng
            .range_u32(
                self.config.materials_per_production_min,
                self.config.materials_per_production_max,
            )
            .min(material_codes.len() as u32) as usize;

        // 중복 없는 자재 선택
        let mut pool = material_codes;
        let mut usages = Vec::new();
        for _ in 0..kinds {
            let index = self.rng.range_i64(0, pool.len() as i64 - 1) as usize;
            let material_code = pool.swap_remove(index);

            // 원단위 1~2 (형식적 BOM 없음)
            let per_unit = self.rng.range_i64(1, 2);
            let required = actual_quantity * per_unit;

            for draw in self
                .lot_selection
                .select(lot_ledger, &material_code, day, required)
            {
                match lot_ledger.consume(&draw.lot_number, draw.quantity) {
                    Ok(()) => usages.push(MaterialUsage {
                        material_code: material_code.clone(),
                        lot_number: draw.lot_number,
                        quantity: draw.quantity,
                    }),
                    // 차출 계획이 잔량을 초과할 수 없으므로 도달 불가 - 방어적 건너뜀
                    Err(e) => warn!(error = %e, "로트 소모 실패, 해당 차출 건너뜀"),
                }
            }

            if pool.is_empty() {
                break;
            }
        }

        usages
    }

    /// 완료 생산에서 확률적으로 납품 파생
    ///
    /// 약정 납기는 생산 완료 시점에 독립적으로 확정하고, 실제 납품일과
    /// 비교만 한다 (정시/지연이 자연 발생)
    fn maybe_emit_delivery(
        &mut self,
        production_end: NaiveDate,
        production: &ProductionRecord,
        customers: &[Customer],
        out: &mut Vec<DeliveryRecord>,
    ) {
        if !self.rng.chance(self.config.delivery_probability) {
            return;
        }
        let good = production.good_quantity();
        if good <= 0 {
            return;
        }
        let Some(customer) = self.rng.pick(customers) else {
            return;
        };

        let scheduled_date = production_end
            + Duration::days(self.rng.range_i64(
                self.config.schedule_commit_days_min,
                self.config.schedule_commit_days_max,
            ));
        let delivery_date = production_end
            + Duration::days(self.rng.range_i64(
                self.config.delivery_lead_days_min,
                self.config.delivery_lead_days_max,
            ));

        self.delivery_seq += 1;
        match DeliveryRecord::new(
            format!("DEL-{:06}", self.delivery_seq),
            customer.code.clone(),
            production.product_code.clone(),
            good,
            delivery_date,
            scheduled_date,
            vec![production.id.clone()],
        ) {
            Ok(record) => out.push(record),
            Err(e) => warn!(production = %production.id, error = %e, "납품 레코드 생성 실패, 건너뜀"),
        }
    }

    // ==========================================
    // 1차 이벤트: 근태
    // ==========================================
    fn emit_attendance(
        &mut self,
        day: NaiveDate,
        employees: &[Employee],
        out: &mut Vec<AttendanceRecord>,
    ) {
        for employee in employees {
            self.attendance_seq += 1;
            let id = format!("ATT-{:06}", self.attendance_seq);

            if !self.rng.chance(self.config.attendance_probability) {
                out.push(AttendanceRecord::absent(id, employee.code.clone(), day));
                continue;
            }

            // 출근: 08:00 ~ 09:30
            let check_in_minutes = self.rng.range_i64(8 * 60, 9 * 60 + 30);
            // 근무: 7.5 ~ 10.0시간 (0.1시간 단위)
            let total_hours = round1(self.rng.range_f64(7.5, 10.0));
            let work_hours = total_hours.min(8.0);
            let overtime_hours = round1((total_hours - 8.0).max(0.0));

            let check_in = at_minute(day, check_in_minutes);
            // 퇴근 = 출근 + 근무시간 + 휴게 1시간
            let check_out = check_in + Duration::minutes((total_hours * 60.0) as i64 + 60);

            let status = if check_in_minutes > 9 * 60 {
                AttendanceStatus::Late
            } else if total_hours < 8.0 {
                AttendanceStatus::EarlyLeave
            } else {
                AttendanceStatus::Present
            };

            out.push(AttendanceRecord {
                id,
                employee_code: employee.code.clone(),
                date: day,
                check_in: Some(check_in),
                check_out: Some(check_out),
                work_hours,
                overtime_hours,
                status,
            });
        }
    }

    // ==========================================
    // 파생 원장: 급여
    // ==========================================
    fn build_payrolls(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employees: &[Employee],
        attendance: &[AttendanceRecord],
    ) -> Vec<PayrollRecord> {
        let mut payrolls = Vec::new();
        for month in months_between(start, end) {
            for employee in employees {
                payrolls.push(build_payroll(
                    attendance,
                    employee,
                    &month,
                    &self.config.payroll,
                ));
            }
        }
        payrolls
    }

    // ==========================================
    // 파생 원장: 회계 분개
    // ==========================================
    fn post_accounting(
        &self,
        inbounds: &[InboundRecord],
        deliveries: &[DeliveryRecord],
        payrolls: &[PayrollRecord],
    ) -> AccountingLedger {
        let mut ledger = AccountingLedger::new();

        for inbound in inbounds {
            ledger.post_purchase(inbound);
        }
        for delivery in deliveries {
            // 기준정보 부재 시 해당 납품 전기 생략
            match self.catalog.find_product(&delivery.product_code) {
                Some(product) => ledger.post_sale(delivery, product),
                None => warn!(product = %delivery.product_code, "제품 마스터 부재, 매출 전기 생략"),
            }
        }
        for payroll in payrolls {
            ledger.post_payroll(payroll);
        }

        ledger
    }
}

// ==========================================
// 달력 보조 함수
// ==========================================

/// 평일 여부 (월~금)
fn is_weekday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 구간에 걸친 귀속 월 목록 (YYYY-MM, 오름차순)
fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut months = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        months.push(cursor.format("%Y-%m").to_string());
        cursor = next_month_start(cursor);
    }
    months
}

/// 다음 달 1일
fn next_month_start(day: NaiveDate) -> NaiveDate {
    let first = day.with_day(1).unwrap_or(day);
    first + chrono::Months::new(1)
}

/// 일자 + 정시 시각
fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    at_minute(day, (hour as i64) * 60)
}

/// 일자 + 자정 기준 분 오프셋
fn at_minute(day: NaiveDate, minutes: i64) -> NaiveDateTime {
    day.and_time(chrono::NaiveTime::MIN) + Duration::minutes(minutes)
}

/// 소수 첫째 자리 반올림
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_is_weekday() {
        assert!(is_weekday(d(2024, 1, 8))); // 월
        assert!(is_weekday(d(2024, 1, 12))); // 금
        assert!(!is_weekday(d(2024, 1, 13))); // 토
        assert!(!is_weekday(d(2024, 1, 14))); // 일
    }

    #[test]
    fn test_months_between() {
        let months = months_between(d(2023, 11, 15), d(2024, 2, 10));
        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_at_minute() {
        let dt = at_minute(d(2024, 1, 8), 9 * 60 + 15);
        assert_eq!(dt.to_string(), "2024-01-08 09:15:00");
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let config = GeneratorConfig {
            months: 1,
            end_date: d(2024, 1, 31),
            seed: Some(1234),
            ..Default::default()
        };

        let a = EventGenerator::new(ReferenceCatalog::builtin(), config.clone())
            .unwrap()
            .generate();
        let b = EventGenerator::new(ReferenceCatalog::builtin(), config)
            .unwrap()
            .generate();

        assert_eq!(a.inbounds.len(), b.inbounds.len());
        assert_eq!(a.productions.len(), b.productions.len());
        assert_eq!(a.deliveries.len(), b.deliveries.len());
        assert_eq!(a.attendance.len(), b.attendance.len());
        // 레코드 내용까지 동일 (직렬화 비교, 회차 식별자 제외)
        let a_json = serde_json::to_value(&a.productions).unwrap();
        let b_json = serde_json::to_value(&b.productions).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            months: 0,
            ..Default::default()
        };
        assert!(EventGenerator::new(ReferenceCatalog::builtin(), config).is_err());
    }
}
