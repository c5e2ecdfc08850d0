/*!
 * Static demo tables.
 *
 * Everything the demo treats as "external" data lives here as plain constant
 * tables: the simulated live subtitle stream, the TOPIK lexicon, the quiz bank,
 * the idol corpus and the interface strings. The typed views over these tables
 * (`Lexicon`, `QuizQuestion`, ...) are built once, lazily, by their modules.
 */

/// Placeholder URL shown in the load prompt
pub const DEMO_LIVE_URL: &str = "https://weverse.example/live/...";

/// Simulated live subtitle stream: (start ms, end ms, original, translated)
pub const DEMO_SUBTITLES: &[(u64, u64, &str, &str)] = &[
    (0, 3500, "안녕하세요 여러분, 오늘은 신곡 리허설이 있어요.", "大家好，今天有新歌排练。"),
    (4000, 7500, "이 노래는 가사에 어려운 표현이 많아요.", "这首歌的歌词有很多难懂的表达。"),
    (8000, 11500, "하지만 연습하면 금방 익힐 수 있습니다.", "但是练习的话很快就能掌握。"),
    (12000, 15500, "발음에 신경 써주세요 — 특히 받침 발음.", "请注意发音，尤其是尾音。"),
    (16000, 19500, "자, 우리 다시 한 번 해볼까요?", "来，我们再试一次吧？"),
];

/// TOPIK-tagged words: (surface, lemma, TOPIK level, note)
pub const LEXICON_ENTRIES: &[(&str, &str, u8, &str)] = &[
    ("안녕하세요", "안녕하다", 1, "常用问候语。"),
    ("신곡", "신곡", 3, "新发布的歌曲。"),
    ("리허설", "리허설(연습)", 4, "排练，彩排。"),
    ("가사", "가사", 3, "歌词。"),
    ("발음", "발음", 2, "发音。"),
    ("받침", "받침", 5, "韩语音节末的收尾辅音。"),
    ("연습", "연습하다", 2, "练习。"),
];

/// Proficiency quiz: (prompt, options as (label, text), correct label)
pub const QUIZ_BANK: &[(&str, [(char, &str); 4], char)] = &[
    (
        "다음 중 '발음'의 뜻으로 가장 적절한 것은?",
        [('A', "歌曲"), ('B', "发音"), ('C', "练习"), ('D', "收尾")],
        'B',
    ),
    (
        "다음 문장의 빈칸에 들어갈 표현으로 자연스러운 것은? '나는 매일 ( ) 연습한다.'",
        [('A', "가사"), ('B', "리허설"), ('C', "발음"), ('D', "신곡")],
        'C',
    ),
    (
        "다음 문장 해석으로 옳은 것은? '이 노래는 가사에 어려운 표현이 많아요.'",
        [('A', "这首歌没有歌词。"), ('B', "歌词有很多简单表达。"), ('C', "歌词有很多难懂的表达。"), ('D', "歌词很短。")],
        'C',
    ),
    (
        "다음 중 '받침'에 대한 설명으로 맞는 것은?",
        [('A', "단어의 첫소리"), ('B', "음절 끝의 자음"), ('C', "문장의 끝"), ('D', "동사의 어근")],
        'B',
    ),
    (
        "다음 빈칸에 들어갈 가장 어울리는 표현: '자, 우리 다시 한 번 ( ).'",
        [('A', "가사"), ('B', "해볼까요"), ('C', "받침"), ('D', "리허설")],
        'B',
    ),
];

/// Idol speech corpus used by the insight page
pub const IDOL_CORPUS: &[&str] = &[
    "안녕하세요 여러분 오늘은 신곡 리허설이 있어요",
    "이 노래는 가사에 어려운 표현이 많아요",
    "연습하면 금방 익힐 수 있습니다",
    "발음에 신경 써주세요 특히 받침 발음",
    "우리 다시 한 번 해볼까요",
];

/// Sample adverb usage counts
pub const ADVERB_COUNTS: &[(&str, u32)] = &[("특히", 5), ("금방", 3), ("다시", 4)];

/// Sample speech register counts
pub const REGISTER_COUNTS: &[(&str, u32)] = &[("Informal", 12), ("Formal", 3), ("Casual", 8)];

pub const ZH_STRINGS: &[(&str, &str)] = &[
    ("title", "K-pop 沉浸式韩语学习助手"),
    ("weverse_input", "粘贴 Weverse 直播链接（示例模式）"),
    ("load_demo", "加载示例直播"),
    ("loaded_demo", "已加载示例直播与字幕（演示模式）。"),
    ("start_sim", "开始模拟播放"),
    ("stop_sim", "停止"),
    ("vocab_book", "我的生词本"),
    ("add_vocab", "添加到生词本"),
    ("added_vocab", "已加入生词本"),
    ("test", "能力测试"),
    ("insight", "爱豆语言画像 (Idol Insight)"),
    ("export_subs", "导出字幕 (SRT / TXT)"),
    ("select_lang", "界面语言 / Interface Language"),
    ("subtitle_area", "字幕区（点击高亮词查看详情）"),
    ("explain", "词语解释"),
    ("orig", "原文"),
    ("trans", "译文"),
    ("difficulty", "TOPIK 等级估计"),
    ("score", "得分"),
    ("level", "预计 TOPIK 等级"),
    ("no_vocab", "你还没有收藏单词。"),
    ("remove", "从生词本移除"),
    ("review", "复习模式 (简单)"),
    ("review_prompt", "请翻译或解释"),
    ("top_words", "高频词 Top10"),
    ("adverbs", "常用副词统计 (示例)"),
    ("registers", "语态分析 (示例)"),
    ("band_upper", "TOPIK 3-4 (中上)"),
    ("band_early", "TOPIK 2 (中级初期)"),
    ("band_beginner", "TOPIK 1 (初学)"),
];

pub const KO_STRINGS: &[(&str, &str)] = &[
    ("title", "K-pop 몰입형 한국어 학습 도우미"),
    ("weverse_input", "Weverse 라이브 링크 붙여넣기 (데모 모드)"),
    ("load_demo", "데모 라이브 불러오기"),
    ("loaded_demo", "데모 라이브와 자막을 불러왔습니다 (데모 모드)."),
    ("start_sim", "시뮬레이션 재생"),
    ("stop_sim", "중지"),
    ("vocab_book", "내 단어장"),
    ("add_vocab", "단어장에 추가"),
    ("added_vocab", "단어장에 추가됨"),
    ("test", "실력 테스트"),
    ("insight", "아이돌 언어 인사이트"),
    ("export_subs", "자막 내보내기 (SRT / TXT)"),
    ("select_lang", "인터페이스 언어 / Interface Language"),
    ("subtitle_area", "자막 영역 (하이라이트 단어 클릭)"),
    ("explain", "단어 설명"),
    ("orig", "원문"),
    ("trans", "번역"),
    ("difficulty", "TOPIK 레벨 추정"),
    ("score", "점수"),
    ("level", "예상 TOPIK 레벨"),
    ("no_vocab", "아직 저장된 단어가 없습니다."),
    ("remove", "단어장 삭제"),
    ("review", "복습 모드 (간단)"),
    ("review_prompt", "번역하거나 설명하세요"),
    ("top_words", "자주 쓰는 단어 Top10"),
    ("adverbs", "부사 사용 통계 (예시)"),
    ("registers", "말투 분석 (예시)"),
    ("band_upper", "TOPIK 3-4 (중상급)"),
    ("band_early", "TOPIK 2 (중급 초기)"),
    ("band_beginner", "TOPIK 1 (초급)"),
];

pub const EN_STRINGS: &[(&str, &str)] = &[
    ("title", "K-pop Immersive Korean Study Assistant"),
    ("weverse_input", "Paste Weverse live URL (demo mode)"),
    ("load_demo", "Load demo live"),
    ("loaded_demo", "Demo live and subtitles loaded (demo mode)."),
    ("start_sim", "Start simulation"),
    ("stop_sim", "Stop"),
    ("vocab_book", "My Vocab Book"),
    ("add_vocab", "Add to Vocab"),
    ("added_vocab", "Added to vocab"),
    ("test", "Proficiency Test"),
    ("insight", "Idol Language Insight"),
    ("export_subs", "Export subtitles (SRT / TXT)"),
    ("select_lang", "Interface Language / 界面语言"),
    ("subtitle_area", "Subtitles area (click highlighted words)"),
    ("explain", "Word Explanation"),
    ("orig", "Original"),
    ("trans", "Translation"),
    ("difficulty", "TOPIK level estimate"),
    ("score", "Score"),
    ("level", "Estimated TOPIK level"),
    ("no_vocab", "You have no saved vocab yet."),
    ("remove", "Remove from vocab"),
    ("review", "Review mode (simple)"),
    ("review_prompt", "Translate or explain"),
    ("top_words", "Top 10 words"),
    ("adverbs", "Common adverbs (sample)"),
    ("registers", "Speech register (sample)"),
    ("band_upper", "TOPIK 3-4 (upper intermediate)"),
    ("band_early", "TOPIK 2 (early intermediate)"),
    ("band_beginner", "TOPIK 1 (beginner)"),
];
