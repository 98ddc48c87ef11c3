//! Built-in AI-native organization assessment (v1)
//!
//! Five categories with 5/7/7/8/8 questions. Text is Korean, as presented
//! to respondents.

use super::entities::{Catalog, Category, CategoryGuidance};
use super::question::Question;
use crate::answers::AnswerStore;

/// Version tag of the built-in catalog content
pub const BUILTIN_CATALOG_VERSION: &str = "2025.1";

fn questions(items: &[(&str, &str)]) -> Vec<Question> {
    items
        .iter()
        .map(|(id, text)| Question::new(*id, *text))
        .collect()
}

fn guidance(analysis: &str, recommendations: &[&str]) -> CategoryGuidance {
    CategoryGuidance::new(
        analysis,
        recommendations.iter().map(|r| r.to_string()).collect(),
    )
}

impl Catalog {
    /// The built-in assessment catalog
    pub fn builtin() -> Self {
        Catalog::from_trusted(builtin_categories())
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "vision_strategy",
            "비전·전략 정합성",
            "비전·전략",
            questions(&[
                ("q_vision_1", "우리 조직은 AI 도입의 목적과 기대 효과를 문서로 명확히 정의했는가?"),
                ("q_vision_2", "AI 전략이 사업 전략 및 비전과 직접적으로 연계되어 있는가?"),
                ("q_vision_3", "경영진이 AI 문화 전환의 필요성을 지속적으로 강조하고 있는가?"),
                ("q_vision_4", "구성원 다수가 조직의 AI 네이티브 조직 전환 목표를 이해·공감하고 있는가?"),
                ("q_vision_5", "AI 투자 우선순위가 명확히 정해져 있으며, 자원이 전략적으로 배분되는가?"),
            ]),
        )
        .with_guidance(guidance(
            "조직의 AI 비전과 사업 전략이 매우 높은 수준으로 정렬되어 있습니다. 경영진의 강력한 의지와 구성원들의 공감대 형성이 잘 이루어져 있어, AI 네이티브 전환을 위한 견고한 기반을 갖추고 있습니다.",
            &[
                "현재의 전략적 방향성을 분기별로 재검토하고 시장 변화에 민첩하게 대응하세요.",
                "AI 성공 사례를 전사적으로 공유하여, 비전 내재화를 더욱 가속화하세요.",
                "AI 윤리 및 책임 있는 AI 활용 원칙을 수립하여 장기적인 신뢰를 확보하세요.",
            ],
        )),
        Category::new(
            "org_structure",
            "조직 구조·인력 운영",
            "조직·인력",
            questions(&[
                ("q_org_1", "조직 내 AI 파일럿 전담팀(정예팀)이 운영되고 있는가?"),
                ("q_org_2", "파일럿 팀의 성과와 교훈이 다른 부서로 공유·확산되는가?"),
                ("q_org_3", "AI 네이티브 조직 전환 관련 심리적 불안(일자리·역할 불명확성)을 해소하는 프로그램이 있는가?"),
                ("q_org_4", "기존 업무 프로세스 중 AI 자동화 가능한 영역이 체계적으로 식별·정리되었는가?"),
                ("q_org_5", "AI 도입 이후 직무·역할 정의가 재설계되었는가?"),
                ("q_org_6", "인재 선발·평가·보상 기준에 AI 활용 역량이 반영되는가?"),
                ("q_org_7", "재교육·Reskilling 프로그램이 체계적 커리큘럼으로 제공되는가?"),
            ]),
        )
        .with_guidance(guidance(
            "AI 전담팀을 중심으로 초기 성과가 나타나고 있으나, 전사적 확산과 제도적 뒷받침이 필요한 단계입니다. 직무 재설계나 성과 보상 체계와 같은 구조적 변화가 AI 전환 속도를 따라가지 못하고 있습니다.",
            &[
                "파일럿 팀의 성공 경험을 타 부서에 전파할 수 있는 CoE(Center of Excellence) 조직 구성을 검토하세요.",
                "AI 도입에 따른 직무 변화 로드맵을 구체화하고, 구성원 대상의 명확한 커뮤니케이션을 진행하세요.",
                "성과 평가(KPI)에 AI 활용도 및 기여도를 반영하는 인센티브 시스템을 도입하세요.",
            ],
        )),
        Category::new(
            "leadership_culture",
            "리더십·문화",
            "리더십·문화",
            questions(&[
                ("q_culture_1", "리더십은 명령·통제형에서 학습·실험형으로 변화하고 있는가?"),
                ("q_culture_2", "리더가 직접 AI 도구를 활용하여 성과를 체험하고 공유하는가?"),
                ("q_culture_3", "실패와 오류를 학습 기회로 인정하는 문화가 있는가?"),
                ("q_culture_4", "팀원들이 자유롭게 아이디어·실험을 제안할 수 있는 분위기인가?"),
                ("q_culture_5", "조직 내 심리적 안전감이 확보되어 있는가? (비난·처벌 두려움 없이 시도 가능)"),
                ("q_culture_6", "의사결정·업무 진행 상황이 투명하게 공유되는가?"),
                ("q_culture_7", "AI 활용 성공 사례뿐 아니라 실패 사례도 공유되는가?"),
            ]),
        )
        .with_guidance(guidance(
            "실험과 학습을 장려하는 리더십과 심리적 안정감이 확보된 문화는 조직의 큰 자산입니다. 리더들이 AI 활용에 솔선수범하고 있으며, 실패를 용인하는 분위기가 혁신을 촉진하고 있습니다.",
            &[
                "리더들의 AI 코칭 역량을 강화하여, 팀원들의 성장을 지원하는 문화를 만드세요.",
                "부서 간 협업을 촉진하는 'AI 아이디어톤'이나 '혁신 챌린지'를 정기적으로 개최하세요.",
                "성공/실패 사례 공유를 정례화하여 조직의 집단 학습 속도를 높이세요.",
            ],
        )),
        Category::new(
            "tools_data",
            "AI 도구·데이터 활용",
            "도구·데이터",
            questions(&[
                ("q_tools_1", "조직은 AI를 보조 도구가 아닌 핵심 실행 엔진으로 활용하는가?"),
                ("q_tools_2", "개발 코드의 70~80% 이상이 AI를 통해 작성되는가?"),
                ("q_tools_3", "CEO·임원·PM 등 전 직군이 AI 활용에 적극 참여하는가?"),
                ("q_tools_4", "AI 활용률을 높이기 위한 최신 도구·모델 구독/투자를 하고 있는가?"),
                ("q_tools_5", "데이터가 통합·정제·관리되어 AI 학습·활용에 적합한 상태인가?"),
                ("q_tools_6", "데이터 보안·프라이버시·윤리 정책이 체계적으로 마련되어 있는가?"),
                ("q_tools_7", "AI 활용 경험이 문서화·공유되어 조직의 학습 속도가 빨라지고 있는가?"),
                ("q_tools_8", "조직은 외부 파트너·생태계(오픈소스, 클라우드, 스타트업)와 협력하는가?"),
            ]),
        )
        .with_guidance(guidance(
            "AI 도구 도입과 데이터 활용 측면에서 개선이 시급합니다. 데이터가 분산되어 있고 품질이 낮아 AI 모델의 성능을 저해할 수 있으며, 최신 AI 도구 활용에 대한 투자가 부족한 것으로 보입니다. 이는 AI 전환의 병목 현상을 야기할 수 있습니다.",
            &[
                "전사 데이터 거버넌스 정책을 수립하고, 데이터 통합 및 품질 관리(Data Cleansing)에 우선적으로 투자하세요.",
                "생성형 AI, AutoML 등 최신 AI 개발/활용 도구를 적극적으로 탐색하고 도입하여 생산성을 향상시키세요.",
                "구성원들이 쉽게 데이터를 검색하고 활용할 수 있는 '데이터 카탈로그'를 구축하세요.",
            ],
        )),
        Category::new(
            "innovation",
            "지속적 개선·혁신 체계",
            "개선·혁신",
            questions(&[
                ("q_innov_1", "조직은 AI 도입 효과를 측정할 KPI 체계(효율·비용·품질 등)를 보유하고 있는가?"),
                ("q_innov_2", "KPI 성과가 정기적으로 모니터링·리뷰되고 있는가?"),
                ("q_innov_3", "AI 모델과 툴은 정기적으로 점검·업데이트되는가?"),
                ("q_innov_4", "변화·혁신 아이디어를 누구나 제안할 수 있는 제도가 있는가?"),
                ("q_innov_5", "실패를 허용·장려하는 실험 문화가 정착되어 있는가?"),
                ("q_innov_6", "변화관리 프레임워크(예: ADKAR)가 적용되어 있는가?"),
                ("q_innov_7", "AI 교육·Reskilling 프로그램이 지속적이고 정례적으로 운영되는가?"),
                ("q_innov_8", "조직은 장기적 학습과 혁신 내재화를 위한 예산·자원을 보장하는가?"),
            ]),
        )
        .with_guidance(guidance(
            "AI 도입 효과를 측정하려는 노력은 있으나, 지속적인 개선과 혁신을 위한 체계가 아직 완전히 자리 잡지 않았습니다. KPI 모니터링은 이루어지고 있지만, 그 결과가 신속한 피드백과 프로세스 개선으로 이어지는 데에는 한계가 있습니다.",
            &[
                "AI 프로젝트의 성과(ROI)를 명확히 측정하고, 이를 기반으로 투자 우선순위를 동적으로 조정하세요.",
                "Agile, DevOps 등 빠른 실험과 반복을 지원하는 개발 및 운영 방법론을 도입하세요.",
                "전 직군 대상의 체계적인 AI 리터러시 교육 및 Reskilling 프로그램을 상시 운영하여 조직의 전반적인 역량을 강화하세요.",
            ],
        )),
    ]
}

const SAMPLE_RATINGS: &[(&str, u8)] = &[
    ("q_vision_1", 4),
    ("q_vision_2", 5),
    ("q_vision_3", 4),
    ("q_vision_4", 3),
    ("q_vision_5", 4),
    ("q_org_1", 3),
    ("q_org_2", 2),
    ("q_org_3", 3),
    ("q_org_4", 4),
    ("q_org_5", 2),
    ("q_org_6", 3),
    ("q_org_7", 4),
    ("q_culture_1", 5),
    ("q_culture_2", 4),
    ("q_culture_3", 4),
    ("q_culture_4", 5),
    ("q_culture_5", 3),
    ("q_culture_6", 4),
    ("q_culture_7", 3),
    ("q_tools_1", 2),
    ("q_tools_2", 1),
    ("q_tools_3", 3),
    ("q_tools_4", 4),
    ("q_tools_5", 3),
    ("q_tools_6", 4),
    ("q_tools_7", 3),
    ("q_tools_8", 2),
    ("q_innov_1", 4),
    ("q_innov_2", 3),
    ("q_innov_3", 3),
    ("q_innov_4", 4),
    ("q_innov_5", 3),
    ("q_innov_6", 2),
    ("q_innov_7", 4),
    ("q_innov_8", 3),
];

/// A complete demonstration answer set for the built-in catalog
pub fn sample_answers() -> AnswerStore {
    let mut answers = AnswerStore::new();
    for (id, rating) in SAMPLE_RATINGS {
        answers.insert_trusted(*id, *rating);
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::new(builtin_categories()).is_ok());
    }

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        let sizes: Vec<usize> = catalog
            .categories()
            .iter()
            .map(|c| c.question_count())
            .collect();
        assert_eq!(sizes, vec![5, 7, 7, 8, 8]);
        assert_eq!(catalog.total_questions(), 35);
        assert!(catalog.categories().iter().all(|c| c.guidance.is_some()));
    }

    #[test]
    fn test_sample_answers_cover_catalog() {
        let catalog = Catalog::builtin();
        let answers = sample_answers();
        assert_eq!(answers.len(), catalog.total_questions());
        assert!(catalog.questions().all(|q| answers.get(q.id()) > 0));
    }
}
