// Prompt constants for experience-tag inference.
// The line format demanded here is what `parser` enforces on the way back.

/// Tag inference prompt template.
/// Replace: {profile}, {context}, {tags}
pub const TAG_INFERENCE_PROMPT_TEMPLATE: &str = r#"당신은 고도로 숙련된 HR 전문가이자 정교한 경력 분석가입니다.
당신의 목표는 제공된 인재 프로필과 참고 자료를 종합적으로 분석하여, 사전에 정의된 '경험 태그 목록'에 해당하는 모든 경험을 빠짐없이 식별하고, 각 경험에 대한 명확하고 타당한 근거를 제시하는 것입니다.

--- 인재 프로필 시작 ---
{profile}
--- 인재 프로필 끝 ---

{context}

지시사항:
1. '경험 태그 목록'의 각 태그에 대해 개별적으로 해당 여부를 판단하고, 해당하는 경우 목록에 있는 정확한 태그명만 사용하십시오. 절대로 여러 태그를 하나로 합치지 마십시오(예: 'IPO, M&A 경험'처럼 쉼표로 연결 금지). 태그명을 변형하거나 목록에 없는 태그를 만들지 마십시오.
2. 선택한 각 경험에 대해 판단의 근거(회사명, 프로젝트명, 성과, 기술 스택, 학교명, 근무 기간, 이벤트 발생 시점 등)를 인재 프로필이나 참고 자료에서 찾아 괄호 안에 간략히 명시하십시오.
3. "IPO", "M&A 경험", "신규 투자 유치 경험" 태그는 인재의 재직 기간과 이벤트 발생 시점이 일치하거나 밀접하게 연관되어야 하며, 그 시간적 연관성을 근거에 명시하십시오.
4. 결과는 "- 경험 태그명 (근거)" 형식으로 한 줄에 하나씩 나열하십시오. 각 줄은 '-'로 시작하고 정확히 하나의 태그명만 포함해야 하며, 태그명은 목록의 항목과 완전히 동일해야 합니다.
5. 근거는 간결하게, 가장 대표적인 내용만 적으십시오.
6. 명확한 근거는 없지만 강하게 추정되는 경우 "(추정 근거: 구체적인 이유)" 형식으로 추정 이유를 명시하십시오. 단순히 "(추정)"만 적는 것은 허용되지 않습니다.
7. "상위권 대학교" 태그 규칙 (가장 먼저 판단하십시오):
   a. 학력 사항의 각 학교명을 확인합니다.
   b. '---참고 자료 시작---'과 '---참고 자료 끝---' 사이에서 해당 학교의 대학 순위 정보를 찾습니다. 참고 자료의 순위 정보가 가장 중요한 근거입니다.
   c. 참고 자료에서 상위권(국내 평가 1위~20위 이내)으로 확인되면 "- 상위권 대학교 (학교명, 참고 자료의 순위 및 출처)" 형식으로 작성하십시오.
   d. 참고 자료에 정보가 없더라도 국내에서 일반적으로 최상위 명문 대학(서울대학교, 연세대학교, 고려대학교, KAIST, POSTECH 등)으로 널리 알려져 있다면 "- 상위권 대학교 (학교명, 일반적인 사회적 인지도 기반)" 형식으로 작성하십시오.
   e. 해외 대학은 세계적으로 인정받는 최상위권 대학(MIT, Stanford, Harvard 등)이거나 참고 자료에 명확한 근거가 있을 때만 태그를 생성하십시오.
   f. 'OO대'와 'OO대학교'는 동일하게 취급하십시오.

경험 태그 목록: {tags}

출력 예시 (형식과 태그명 사용 방식만 참고하십시오):
- 상위권 대학교 (서울대학교, 중앙일보 2024년 평가 1위)
- 대규모 회사 경험 (네이버 재직 중, 직원 수 5,000명 이상)
- 리더십 (엘박스 CTO, 개발팀 20명 총괄)
- IPO (밀리의서재 CFO 재직 중, 2023년 코스닥 상장)
- 신규 투자 유치 경험 (스타트업X 시리즈 A 투자 유치 IR 발표, 2022년)

추론된 경험 목록:
"#;
