//! Static page copy. Arrays are in display order; the scroll choreography
//! staggers entries by index, so order is significant.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub age: u32,
    pub job: &'static str,
    pub avatar_initial: &'static str,
    pub quote: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📖",
        title: "Cursor와 친해지기",
        description: "복잡해 보이던 코드 작성도 이제 두렵지 않아요! Cursor의 기본 사용법을 익히며, AI와 함께 빠르게 적응할 수 있어요.",
    },
    Feature {
        icon: "💻",
        title: "효율적인 작업 흐름 만들기",
        description: "제작과 디버깅을 분리해서 시간을 절약하고, 더 깔끔하게 프로젝트를 진행하는 법을 배워요.",
    },
    Feature {
        icon: "🧠",
        title: "AI에게 똑똑하게 질문하기",
        description: "AI를 제대로 활용하려면 명령을 잘 작성하는 법도 중요죠. Cursor에서 AI에게 효과적으로 질문하고 원하는 답을 얻는 방법을 익혀요.",
    },
    Feature {
        icon: "⚡",
        title: "오류 없는 프로젝트 관리",
        description: "Requirements.md 기법을 통해 프로젝트의 일관성을 유지하고, 체계적인 관리 방법을 터득해요.",
    },
];

pub const STEPS: [&str; 5] = [
    "아이디어 구상",
    "Cursor로 코드 작성",
    "AI와 협업",
    "디버깅 및 최적화",
    "완성된 프로젝트",
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Lucy",
        age: 28,
        job: "외국계 기업 사무직",
        avatar_initial: "L",
        quote: "코딩과 전혀 관련 없는 업무를 하고 평생 코딩의 '코' 자도 몰랐는데, 커서 바이블을 읽고 프로젝트를 만들어보니 정말 쉽고 간편하게 웹사이트를 만들 수 있었어요! 개발에 대한 두려움이 사라졌습니다.",
    },
    Testimonial {
        name: "David",
        age: 32,
        job: "백엔드 개발자",
        avatar_initial: "D",
        quote: "백엔드 개발자라서 프론트엔드 작업에는 늘 어려움이 있었는데, 커서 바이블 덕분에 제가 상상하는 디자인을 구현할 수 있게 됐어요. 이제는 AI를 통해 UI/UX 개발도 더 자 있게 할 수 있습니다.",
    },
    Testimonial {
        name: "Sophia",
        age: 25,
        job: "프리랜서 디자이너",
        avatar_initial: "S",
        quote: "디자인 작업을 주로 하다 보니 발 쪽은 손도 못 대고 있었어요. 하지만 커서 바이블을 통해 AI 코드 에디터를 활용하는 방법을 배우면서, 제 디자인을 바로 코드로 전환할 수 있게 되었고, 직접 웹페이지를 만들 수 있어 큰 도움이 됐습니다!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_counts_match_rendered_grids() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STEPS.len(), 5);
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn display_order_is_source_order() {
        assert_eq!(FEATURES[0].title, "Cursor와 친해지기");
        assert_eq!(FEATURES[3].title, "오류 없는 프로젝트 관리");
        assert_eq!(STEPS[0], "아이디어 구상");
        assert_eq!(STEPS[4], "완성된 프로젝트");
        let names: Vec<&str> = TESTIMONIALS.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Lucy", "David", "Sophia"]);
    }
}
