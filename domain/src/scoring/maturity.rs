//! Maturity classification on the 1–5 average scale

use serde::{Deserialize, Serialize};

/// One of five ordered organizational maturity tiers
///
/// Ordering follows the rank, so `Absent < Initial < ... < Optimized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    /// Level 1: need is recognized but strategy and execution are missing
    Absent,
    /// Level 2: sporadic pilots exploring AI adoption
    Initial,
    /// Level 3: vision and roadmap defined, preparing company-wide execution
    Defined,
    /// Level 4: the whole organization shares the vision, resources aligned
    Aligned,
    /// Level 5: AI fully integrated into strategy, continuous innovation
    Optimized,
}

impl MaturityLevel {
    /// All levels in ascending order
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::Absent,
        MaturityLevel::Initial,
        MaturityLevel::Defined,
        MaturityLevel::Aligned,
        MaturityLevel::Optimized,
    ];

    /// Rank from 1 (Absent) to 5 (Optimized)
    pub fn rank(&self) -> u8 {
        match self {
            MaturityLevel::Absent => 1,
            MaturityLevel::Initial => 2,
            MaturityLevel::Defined => 3,
            MaturityLevel::Aligned => 4,
            MaturityLevel::Optimized => 5,
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            MaturityLevel::Absent => "부재",
            MaturityLevel::Initial => "초기",
            MaturityLevel::Defined => "정의",
            MaturityLevel::Aligned => "정렬",
            MaturityLevel::Optimized => "최적화",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            MaturityLevel::Absent => "Absent",
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Aligned => "Aligned",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// Full display label, e.g. "Level 4: 정렬 (Aligned)"
    pub fn label(&self) -> String {
        format!(
            "Level {}: {} ({})",
            self.rank(),
            self.label_ko(),
            self.label_en()
        )
    }

    /// Color hint for renderers
    pub fn color_hint(&self) -> &'static str {
        match self {
            MaturityLevel::Absent => "red",
            MaturityLevel::Initial => "orange",
            MaturityLevel::Defined => "yellow",
            MaturityLevel::Aligned => "green",
            MaturityLevel::Optimized => "blue",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MaturityLevel::Absent => {
                "AI 도입 필요성은 인식하지만 전략 및 실행이 부재한 상태입니다."
            }
            MaturityLevel::Initial => {
                "산발적인 파일럿 프로젝트를 진행하며 AI 도입을 탐색하는 단계입니다."
            }
            MaturityLevel::Defined => {
                "AI 전환을 위한 비전과 로드맵이 수립되고, 전사적 실행을 준비하는 단계입니다."
            }
            MaturityLevel::Aligned => {
                "조직 전체가 AI 비전을 공유하고, 자원과 노력이 정렬된 상태입니다."
            }
            MaturityLevel::Optimized => {
                "AI가 경영 전략과 완전히 통합되어 지속적인 혁신을 창출하는 단계입니다."
            }
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a raw average on the 1–5 scale (not the 0–100 score)
///
/// Intervals are half-open at the lower bound: `[0,2)` Absent, `[2,3)`
/// Initial, `[3,4)` Defined, `[4,5)` Aligned, `[5,∞)` Optimized. Input is
/// clamped to `[0,5]` and NaN is treated as 0.
///
/// # Example
///
/// ```
/// use maturity_domain::scoring::{classify_maturity, MaturityLevel};
///
/// assert_eq!(classify_maturity(1.99), MaturityLevel::Absent);
/// assert_eq!(classify_maturity(2.0), MaturityLevel::Initial);
/// assert_eq!(classify_maturity(5.0), MaturityLevel::Optimized);
/// ```
pub fn classify_maturity(average: f64) -> MaturityLevel {
    let average = if average.is_nan() {
        0.0
    } else {
        average.clamp(0.0, 5.0)
    };

    if average < 2.0 {
        MaturityLevel::Absent
    } else if average < 3.0 {
        MaturityLevel::Initial
    } else if average < 4.0 {
        MaturityLevel::Defined
    } else if average < 5.0 {
        MaturityLevel::Aligned
    } else {
        MaturityLevel::Optimized
    }
}
