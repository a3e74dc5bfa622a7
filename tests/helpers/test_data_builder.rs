// ==========================================
// 통합 테스트 - 데이터셋 빌더
// ==========================================
// 용도: 고정 시드·소구간 설정으로 재현 가능한 데이터셋 구성
// ==========================================
#![allow(dead_code)]

use chrono::NaiveDate;
use erp_demo_engine::{
    Customer, Employee, EventGenerator, GeneratedDataset, GeneratorConfig, Material, Product,
    ReferenceCatalog, Supplier,
};

/// 2024-01 한 달 구간 + 고정 시드 설정
pub fn one_month_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        months: 1,
        end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        seed: Some(seed),
        ..Default::default()
    }
}

/// 2024-01 ~ 2024-06 반년 구간 + 고정 시드 설정
pub fn six_month_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        months: 6,
        end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        seed: Some(seed),
        ..Default::default()
    }
}

/// 내장 기준정보로 데이터셋 생성
pub fn build_dataset(config: GeneratorConfig) -> GeneratedDataset {
    EventGenerator::new(ReferenceCatalog::builtin(), config)
        .expect("유효한 테스트 설정")
        .generate()
}

/// 자재 1종·제품 1종 최소 기준정보
pub fn single_material_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(
        vec![Material {
            code: "MAT-001".to_string(),
            name: "스틸 레일 원재료".to_string(),
            unit_price: 15_000,
            supplier_code: "SUP-001".to_string(),
            category: "금속".to_string(),
        }],
        vec![Product {
            code: "EV9-SR-001".to_string(),
            name: "EV9 전기차용 시트 레일".to_string(),
            sales_price: 55_000,
            standard_cost: 45_000,
        }],
        vec![Customer {
            code: "CUST-001".to_string(),
            name: "ABC 제조업체".to_string(),
            industry: "제조업".to_string(),
            payment_terms_days: 60,
        }],
        vec![Supplier {
            code: "SUP-001".to_string(),
            name: "대창공업".to_string(),
            lead_time_days: 3,
        }],
        vec![
            make_employee("EMP-001", "김철수", "생산부", 4_500_000),
            make_employee("EMP-002", "이영희", "생산부", 3_200_000),
        ],
    )
}

/// 기준정보가 전혀 없는 카탈로그 (빈 데이터셋 생성용)
pub fn empty_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(vec![], vec![], vec![], vec![], vec![])
}

/// 인사 마스터 항목 구성
pub fn make_employee(code: &str, name: &str, department: &str, base_salary: i64) -> Employee {
    Employee {
        code: code.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        position: "사원".to_string(),
        base_salary,
    }
}
