// ==========================================
// ERP 데모 엔진 - 내장 기준정보 데이터셋
// ==========================================
// 용도: 데모 기동 시 사용하는 고정 마스터 (자동차 시트부품 제조사 시나리오)
// 구성: 고객사 5 / 공급업체 5 / 자재 10 / 제품 5 / 직원 8
// ==========================================

use crate::domain::master::{Customer, Employee, Material, Product, Supplier};

/// 고객사 마스터
pub fn customers() -> Vec<Customer> {
    let rows = [
        ("CUST-001", "ABC 제조업체", "제조업", 60),
        ("CUST-002", "XYZ 솔루션", "IT솔루션", 45),
        ("CUST-003", "DEF 엔지니어링", "엔지니어링", 30),
        ("CUST-004", "GHI 테크놀로지", "기술서비스", 45),
        ("CUST-005", "JKL 시스템즈", "시스템개발", 30),
    ];
    rows.iter()
        .map(|(code, name, industry, terms)| Customer {
            code: code.to_string(),
            name: name.to_string(),
            industry: industry.to_string(),
            payment_terms_days: *terms,
        })
        .collect()
}

/// 공급업체 마스터
pub fn suppliers() -> Vec<Supplier> {
    let rows = [
        ("SUP-001", "대창공업", 3),
        ("SUP-002", "한국정밀", 5),
        ("SUP-003", "동양금속", 7),
        ("SUP-004", "모터텍", 10),
        ("SUP-005", "플라스틱코리아", 5),
    ];
    rows.iter()
        .map(|(code, name, lead)| Supplier {
            code: code.to_string(),
            name: name.to_string(),
            lead_time_days: *lead,
        })
        .collect()
}

/// 자재 마스터
pub fn materials() -> Vec<Material> {
    let rows = [
        ("MAT-001", "스틸 레일 원재료", 15_000, "SUP-001", "금속"),
        ("MAT-002", "알루미늄 프레임 소재", 25_000, "SUP-002", "금속"),
        ("MAT-003", "플라스틱 커버 소재", 8_000, "SUP-005", "플라스틱"),
        ("MAT-004", "볼트 및 너트 세트", 500, "SUP-001", "체결재"),
        ("MAT-005", "전동 모터 어셈블리", 85_000, "SUP-004", "전자부품"),
        ("MAT-006", "베어링 세트", 8_500, "SUP-002", "기계부품"),
        ("MAT-007", "스프링 세트", 3_500, "SUP-001", "기계부품"),
        ("MAT-008", "전선 하네스", 12_000, "SUP-004", "전자부품"),
        ("MAT-009", "고무 패킹", 2_500, "SUP-005", "고무"),
        ("MAT-010", "윤활유", 15_000, "SUP-003", "화학"),
    ];
    rows.iter()
        .map(|(code, name, price, supplier, category)| Material {
            code: code.to_string(),
            name: name.to_string(),
            unit_price: *price,
            supplier_code: supplier.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// 제품 마스터
pub fn products() -> Vec<Product> {
    let rows = [
        ("EV9-SR-001", "EV9 전기차용 시트 레일", 55_000, 45_000),
        ("GV70-SF-002", "GV70 SUV 시트 프레임", 85_000, 63_750),
        ("IONIQ6-DH-003", "아이오닉6 도어 힌지", 32_000, 24_000),
        ("PREM-SA-004", "프리미엄 시트 어셈블리", 180_000, 155_000),
        ("ELEC-SM-005", "전동 시트 모터", 150_000, 125_000),
    ];
    rows.iter()
        .map(|(code, name, price, cost)| Product {
            code: code.to_string(),
            name: name.to_string(),
            sales_price: *price,
            standard_cost: *cost,
        })
        .collect()
}

/// 인사 마스터
pub fn employees() -> Vec<Employee> {
    let rows = [
        ("EMP-001", "김철수", "생산부", "생산팀장", 4_500_000_i64),
        ("EMP-002", "이영희", "생산부", "생산작업자", 3_200_000),
        ("EMP-003", "박민수", "품질부", "품질검사원", 3_500_000),
        ("EMP-004", "정수진", "생산부", "생산작업자", 3_200_000),
        ("EMP-005", "최영호", "생산부", "생산반장", 3_800_000),
        ("EMP-006", "김영수", "구매부", "구매담당자", 3_600_000),
        ("EMP-007", "이미경", "영업부", "영업대표", 4_200_000),
        ("EMP-008", "송현우", "품질부", "품질관리자", 3_800_000),
    ];
    rows.iter()
        .map(|(code, name, dept, position, salary)| Employee {
            code: code.to_string(),
            name: name.to_string(),
            department: dept.to_string(),
            position: position.to_string(),
            base_salary: *salary,
        })
        .collect()
}
