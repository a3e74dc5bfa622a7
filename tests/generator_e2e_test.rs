// ==========================================
// 이벤트 생성기 E2E 테스트
// ==========================================
// 검증: 생성 전체 구간에 대한 구조 불변식
//   - 로트 보존 (used + remaining == quantity, remaining >= 0)
//   - 불량 수량 경계 (0 <= defect <= actual <= planned)
//   - 납품 수량 <= 원천 생산 양품 수량
//   - (사번, 월) 급여 레코드 유일성
//   - 평일 한정 이벤트
// ==========================================

mod helpers;

use chrono::Datelike;
use chrono::Weekday;
use helpers::test_data_builder::{build_dataset, six_month_config};
use std::collections::{HashMap, HashSet};

#[test]
fn test_lot_conservation_over_full_horizon() {
    let dataset = build_dataset(six_month_config(100));

    assert!(!dataset.lots.is_empty());
    for lot in &dataset.lots {
        assert!(
            lot.is_conserved(),
            "로트 보존 불변식 위반: {} (quantity={}, used={}, remaining={})",
            lot.lot_number,
            lot.quantity,
            lot.used_quantity,
            lot.remaining_quantity
        );
    }
}

#[test]
fn test_lot_usage_matches_production_consumption() {
    let dataset = build_dataset(six_month_config(101));

    // 생산 소모 합계 == 로트 누적 소모
    let mut consumed_by_lot: HashMap<&str, i64> = HashMap::new();
    for production in &dataset.productions {
        for usage in &production.materials_used {
            assert!(usage.quantity > 0, "소모 수량은 항상 양수");
            *consumed_by_lot.entry(usage.lot_number.as_str()).or_default() += usage.quantity;
        }
    }

    for lot in &dataset.lots {
        let consumed = consumed_by_lot
            .get(lot.lot_number.as_str())
            .copied()
            .unwrap_or(0);
        assert_eq!(
            lot.used_quantity, consumed,
            "로트 {} 누적 소모 불일치",
            lot.lot_number
        );
    }
}

#[test]
fn test_defect_bound_for_every_production() {
    let dataset = build_dataset(six_month_config(102));

    assert!(!dataset.productions.is_empty());
    for production in &dataset.productions {
        assert!(production.defect_quantity >= 0);
        assert!(production.defect_quantity <= production.actual_quantity);
        assert!(production.actual_quantity <= production.planned_quantity);
        assert!(production.start_time <= production.end_time);
    }
}

#[test]
fn test_delivery_quantity_within_good_quantity() {
    let dataset = build_dataset(six_month_config(103));

    assert!(!dataset.deliveries.is_empty());
    for delivery in &dataset.deliveries {
        let good: i64 = delivery
            .production_record_ids
            .iter()
            .filter_map(|id| dataset.find_production(id))
            .map(|p| p.good_quantity())
            .sum();
        assert!(
            delivery.quantity <= good,
            "납품 {} 수량이 원천 생산 양품을 초과",
            delivery.id
        );
        // 납기 준수 파생 필드 일치
        assert_eq!(
            delivery.on_time_delivery,
            delivery.delivery_date <= delivery.scheduled_date
        );
    }
}

#[test]
fn test_scheduled_dates_not_derived_from_delivery_dates() {
    let dataset = build_dataset(six_month_config(104));

    // 약정 납기가 실제 납품일과 독립이면 정시/지연이 모두 발생한다
    let on_time = dataset.deliveries.iter().filter(|d| d.on_time_delivery).count();
    let late = dataset.deliveries.len() - on_time;
    assert!(on_time > 0, "정시 납품이 전혀 없음");
    assert!(late > 0, "지연 납품이 전혀 없음 (납기 산정 편향 의심)");
}

#[test]
fn test_exactly_one_payroll_per_employee_month() {
    let dataset = build_dataset(six_month_config(105));

    let employee_count = dataset.catalog.employees().len();
    // 6개월 × 직원 수
    assert_eq!(dataset.payrolls.len(), employee_count * 6);

    let mut seen: HashSet<(String, String)> = HashSet::new();
    for payroll in &dataset.payrolls {
        let key = (payroll.employee_code.clone(), payroll.month.clone());
        assert!(seen.insert(key), "중복 급여 레코드: {}", payroll.id);
    }
}

#[test]
fn test_productions_and_attendance_on_weekdays_only() {
    let dataset = build_dataset(six_month_config(106));

    for production in &dataset.productions {
        let weekday = production.start_time.date().weekday();
        assert!(!matches!(weekday, Weekday::Sat | Weekday::Sun));
    }
    for record in &dataset.attendance {
        assert!(!matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun));
    }
}

#[test]
fn test_material_usage_lots_are_passed_quality_and_prior_inbound() {
    let dataset = build_dataset(six_month_config(107));

    for production in &dataset.productions {
        let production_date = production.start_time.date();
        for usage in &production.materials_used {
            let lot = dataset
                .find_lot(&usage.lot_number)
                .expect("소모 로트는 원장에 존재해야 함");
            assert_eq!(lot.material_code, usage.material_code);
            assert_eq!(
                lot.quality_status,
                erp_demo_engine::QualityStatus::Passed,
                "불합격/대기 로트가 생산에 투입됨: {}",
                lot.lot_number
            );
            assert!(
                lot.inbound_date <= production_date,
                "입고 전 로트가 생산에 투입됨: {}",
                lot.lot_number
            );
        }
    }
}

#[test]
fn test_every_inbound_creates_exactly_one_lot() {
    let dataset = build_dataset(six_month_config(108));

    assert_eq!(dataset.inbounds.len(), dataset.lots.len());
    let mut lot_numbers: HashSet<&str> = HashSet::new();
    for inbound in &dataset.inbounds {
        assert!(
            lot_numbers.insert(inbound.lot_number.as_str()),
            "로트 번호 중복 발번: {}",
            inbound.lot_number
        );
        let lot = dataset.find_lot(&inbound.lot_number).expect("로트 존재");
        assert_eq!(lot.quantity, inbound.quantity);
        assert_eq!(lot.inbound_date, inbound.date);
        assert_eq!(lot.quality_status, inbound.quality_status);
    }
}
