// ==========================================
// ERP 데모 엔진 - 결과 캐시
// ==========================================
// 책임: 프로세스 수명 동안 생성 데이터셋 1회 계산·공유
// 원칙: 최초 접근 시 지연 생성, 이후 동일 Arc 공유 (compute-once, read-many)
//       동시 접근 시에도 생성은 정확히 1회 (once_cell 보장)
// 주입: 전역 기본 인스턴스 외에 테스트별 독립 인스턴스 구성 가능
// 무효화: 없음 - 프로세스 재시작으로만 갱신
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::config::{ConfigResult, GeneratorConfig};
use crate::engine::{EventGenerator, GeneratedDataset};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;
use tracing::info;

// ==========================================
// DatasetCache - 생성 결과 캐시
// ==========================================
#[derive(Debug)]
pub struct DatasetCache {
    catalog: ReferenceCatalog,
    config: GeneratorConfig,
    cell: OnceCell<Arc<GeneratedDataset>>,
}

impl DatasetCache {
    /// 기본 설정 + 내장 기준정보 캐시
    pub fn new() -> Self {
        Self {
            catalog: ReferenceCatalog::builtin(),
            config: GeneratorConfig::default(),
            cell: OnceCell::new(),
        }
    }

    /// 설정 지정 캐시 (설정 검증 선행)
    pub fn with_config(config: GeneratorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog: ReferenceCatalog::builtin(),
            config,
            cell: OnceCell::new(),
        })
    }

    /// 기준정보 + 설정 지정 캐시
    pub fn with_catalog(catalog: ReferenceCatalog, config: GeneratorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            cell: OnceCell::new(),
        })
    }

    /// 단일 진입점: 최초 호출 시 생성, 이후 공유 Arc 반환
    pub fn get_or_create(&self) -> Arc<GeneratedDataset> {
        self.cell
            .get_or_init(|| {
                info!("결과 캐시 미적재 - 데이터셋 생성 수행");
                // 설정은 구성 시점에 검증 완료
                let generator =
                    EventGenerator::new(self.catalog.clone(), self.config.clone())
                        .expect("검증된 설정");
                Arc::new(generator.generate())
            })
            .clone()
    }

    /// 적재 여부 확인 (생성 유발 없음)
    pub fn get(&self) -> Option<Arc<GeneratedDataset>> {
        self.cell.get().cloned()
    }

    /// 적재 여부
    pub fn is_populated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 프로세스 전역 기본 캐시
    pub fn shared() -> &'static DatasetCache {
        static SHARED: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);
        &SHARED
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}
