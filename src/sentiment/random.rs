//! 중립 판정 점수용 난수 공급원
//!
//! 중립(NEUTRAL) 결과의 점수는 무작위로 정해지므로, 테스트에서 결과를 고정할 수 있도록
//! 난수 공급원을 주입 가능한 트레이트로 분리합니다.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// [0, 1) 구간의 균등 분포 값을 공급
///
/// 분류기는 여러 스레드에서 공유되므로 `&self`로 호출 가능해야 합니다.
pub trait UnitSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// 스레드 로컬 RNG (기본값)
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl UnitSource for ThreadRngSource {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// 시드 고정 RNG - 호출 순서가 같으면 같은 수열을 재현
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl UnitSource for SeededSource {
    fn next_unit(&self) -> f64 {
        // 다른 스레드가 패닉해도 RNG 상태 자체는 유효함
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random::<f64>()
    }
}

/// 항상 같은 값을 돌려주는 고정 공급원 (테스트용)
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl UnitSource for FixedSource {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

impl<T: UnitSource + ?Sized> UnitSource for Box<T> {
    fn next_unit(&self) -> f64 {
        (**self).next_unit()
    }
}

/// 가장 큰 [0, 1) 값
const UNIT_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// 공급원 값을 [0, 1)로 정규화 (NaN은 0)
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, UNIT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_range() {
        let source = ThreadRngSource;
        for _ in 0..1000 {
            let u = source.next_unit();
            assert!((0.0..1.0).contains(&u), "{}", u);
        }
    }

    #[test]
    fn test_seeded_reproducible() {
        let a = SeededSource::new(42);
        let b = SeededSource::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedSource(0.25);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.25);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-1.0), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert!(clamp_unit(1.0) < 1.0);
        assert!(clamp_unit(f64::INFINITY) < 1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
    }
}
