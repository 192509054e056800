//! Few-shot prompt template and output sanitizer

/// Prompt text preceding the term.
///
/// The indentation and blank lines are part of the few-shot anchor and must
/// stay byte-for-byte identical.
const PROMPT_PREAMBLE: &str = concat!(
    "\n",
    "        당신은 기술 용어의 핵심을 '간결한 정의'와 '직관적인 비유'로 결합하는 'Vibe Coding' 전문가입니다.\n",
    "        아래 기술 용어를 반드시 [핵심 정의] + [핵심 비유] 형식으로, 50자 내외의 짧은 구절로 답해주세요.\n",
    "        설명하거나 긴 문장을 만들지 마세요.\n",
    "\n",
    "        ---\n",
    "        예시 1:\n",
    "        - 입력: API\n",
    "        - 출력: 프로그램 간의 통신 규칙. 식당의 정해진 메뉴판.\n",
    "\n",
    "        예시 2:\n",
    "        - 입력: 오픈소스 (Open Source)\n",
    "        - 출력: 모두에게 공개된 소스코드. 누구나 볼 수 있는 맛집의 레시피.\n",
    "        \n",
    "        예시 3:\n",
    "        - 입력: Git\n",
    "        - 출력: 코드 버전 관리 도구. 되돌리기가 가능한 게임 세이브 파일.\n",
    "        ---\n",
    "\n",
    "        기술 용어: ",
);

/// Prompt text following the term
const PROMPT_TRAILER: &str = "\n        ";

/// Markdown emphasis marker stripped from model output
const EMPHASIS: char = '*';

/// Build the generation prompt for a term
pub fn build_prompt(term: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREAMBLE.len() + term.len() + PROMPT_TRAILER.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(term);
    prompt.push_str(PROMPT_TRAILER);
    prompt
}

/// Clean raw model output: trim, then drop every `*`.
///
/// Removing a marker can expose whitespace at the edges (`"* a"`), so the
/// result is trimmed again.
pub fn sanitize_translation(raw: &str) -> String {
    let stripped: String = raw.trim().chars().filter(|c| *c != EMPHASIS).collect();
    stripped.trim().to_string()
}
