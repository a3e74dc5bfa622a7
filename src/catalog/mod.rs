// ==========================================
// ERP 데모 엔진 - 참조 카탈로그
// ==========================================
// 책임: 자재/제품/고객사/공급업체/직원 고정 조회 테이블 제공
// 원칙: 조회 실패는 None (오류 아님) - 호출자는 해당 레코드를 건너뜀
// 적재: 내장 데모 데이터 또는 호출자 제공 마스터
// ==========================================

mod builtin;

use crate::domain::master::{Customer, Employee, Material, Product, Supplier};
use serde::{Deserialize, Serialize};

// ==========================================
// ReferenceCatalog - 기준정보 카탈로그
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    materials: Vec<Material>,
    products: Vec<Product>,
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    employees: Vec<Employee>,
}

impl ReferenceCatalog {
    /// 호출자 제공 마스터로 카탈로그 구성 (테스트 주입 지점)
    pub fn new(
        materials: Vec<Material>,
        products: Vec<Product>,
        customers: Vec<Customer>,
        suppliers: Vec<Supplier>,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            materials,
            products,
            customers,
            suppliers,
            employees,
        }
    }

    /// 내장 데모 마스터로 카탈로그 구성
    pub fn builtin() -> Self {
        Self::new(
            builtin::materials(),
            builtin::products(),
            builtin::customers(),
            builtin::suppliers(),
            builtin::employees(),
        )
    }

    // ==========================================
    // 단건 조회 (부재 = None)
    // ==========================================

    pub fn find_material(&self, code: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.code == code)
    }

    pub fn find_product(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    pub fn find_customer(&self, code: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.code == code)
    }

    pub fn find_supplier(&self, code: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.code == code)
    }

    pub fn find_employee(&self, code: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.code == code)
    }

    // ==========================================
    // 목록 조회
    // ==========================================

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// 부서 소속 직원 목록 (부재 부서는 빈 목록)
    pub fn employees_by_department(&self, department: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.department == department)
            .collect()
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
