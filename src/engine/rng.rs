// ==========================================
// ERP 데모 엔진 - 난수 소스
// ==========================================
// 책임: 생성기 전용 의사난수 래퍼 (시드 주입 가능)
// 운영: 엔트로피 시드 / 테스트: 고정 시드로 재현
// ==========================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==========================================
// Prng - 시드 가능 난수 소스
// ==========================================
#[derive(Debug)]
pub struct Prng {
    inner: StdRng,
}

impl Prng {
    /// 시드 설정에서 생성 (None: 엔트로피, Some: 고정)
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { inner }
    }

    /// 확률 p로 true
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// [min, max] 구간 정수
    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }

    /// [min, max] 구간 정수 (u32)
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }

    /// [min, max) 구간 실수
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..max)
    }

    /// 슬라이스 임의 선택 (빈 슬라이스는 None)
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.inner.gen_range(0..items.len());
        Some(&items[index])
    }
}
