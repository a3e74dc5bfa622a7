// ==========================================
// 회계 분개 균형 테스트
// ==========================================
// 검증: 복식부기 핵심 계약
//   - reference_id별 Σ차변 == Σ대변 (전 거래, 항상)
//   - 원천 거래당 정확히 2행 (차변 전용 + 대변 전용, 동일 금액)
// ==========================================

mod helpers;

use chrono::NaiveDate;
use erp_demo_engine::ledger::AccountingLedger;
use erp_demo_engine::{InboundRecord, QualityStatus, ReferenceType};
use helpers::test_data_builder::{build_dataset, six_month_config};
use std::collections::HashMap;

#[test]
fn test_every_reference_id_balances_in_generated_dataset() {
    let dataset = build_dataset(six_month_config(200));

    assert!(!dataset.accounting_entries.is_empty());

    let mut by_reference: HashMap<&str, (f64, f64, usize)> = HashMap::new();
    for entry in &dataset.accounting_entries {
        // 행 단위: 차변 전용 또는 대변 전용
        assert!(
            entry.is_debit() ^ entry.is_credit(),
            "차/대변 혼재 또는 0금액 행: {}",
            entry.id
        );
        let slot = by_reference.entry(entry.reference_id.as_str()).or_default();
        slot.0 += entry.debit_amount;
        slot.1 += entry.credit_amount;
        slot.2 += 1;
    }

    for (reference_id, (debit, credit, rows)) in &by_reference {
        assert_eq!(
            debit, credit,
            "복식부기 불균형: reference_id={}",
            reference_id
        );
        assert!(*debit > 0.0, "0금액 전기: reference_id={}", reference_id);
        assert_eq!(*rows, 2, "원천 거래당 분개 행 수 오류: {}", reference_id);
    }
}

#[test]
fn test_purchase_posting_pair_for_one_million() {
    // 1,000,000원 입고 1건 → 차변 1,000,000 / 대변 1,000,000 분개 쌍
    let inbound = InboundRecord::new(
        "IN-000001".to_string(),
        "MAT-001".to_string(),
        "SUP-001".to_string(),
        100,
        10_000,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        "MAT-001-20240115-001".to_string(),
        QualityStatus::Passed,
        "PO-000001".to_string(),
    )
    .unwrap();
    assert_eq!(inbound.total_amount, 1_000_000);

    let mut ledger = AccountingLedger::new();
    ledger.post_purchase(&inbound);

    let entries = ledger.entries();
    assert_eq!(entries.len(), 2);

    let debit = &entries[0];
    let credit = &entries[1];
    assert_eq!(debit.debit_amount, 1_000_000.0);
    assert_eq!(debit.credit_amount, 0.0);
    assert_eq!(credit.debit_amount, 0.0);
    assert_eq!(credit.credit_amount, 1_000_000.0);
    assert_eq!(debit.reference_id, "IN-000001");
    assert_eq!(credit.reference_id, "IN-000001");
    assert_eq!(debit.reference_type, ReferenceType::Purchase);
}

#[test]
fn test_posting_references_point_to_source_records() {
    let dataset = build_dataset(six_month_config(201));

    for entry in &dataset.accounting_entries {
        match entry.reference_type {
            ReferenceType::Purchase => assert!(
                dataset.inbounds.iter().any(|i| i.id == entry.reference_id),
                "매입 분개의 원천 입고 부재: {}",
                entry.reference_id
            ),
            ReferenceType::Sales => assert!(
                dataset.deliveries.iter().any(|d| d.id == entry.reference_id),
                "매출 분개의 원천 납품 부재: {}",
                entry.reference_id
            ),
            ReferenceType::Payroll => assert!(
                dataset.payrolls.iter().any(|p| p.id == entry.reference_id),
                "급여 분개의 원천 급여 부재: {}",
                entry.reference_id
            ),
        }
    }
}

#[test]
fn test_sales_posting_amount_matches_delivery() {
    let dataset = build_dataset(six_month_config(202));

    for entry in dataset
        .accounting_entries
        .iter()
        .filter(|e| e.reference_type == ReferenceType::Sales && e.is_debit())
    {
        let delivery = dataset
            .find_delivery(&entry.reference_id)
            .expect("원천 납품 존재");
        let product = dataset
            .catalog
            .find_product(&delivery.product_code)
            .expect("제품 마스터 존재");
        let expected = (delivery.quantity * product.sales_price) as f64;
        assert_eq!(entry.debit_amount, expected, "매출 금액 불일치: {}", entry.id);
    }
}
