//! The fixed marker vocabulary of the Korean client's per-player action log.

/// `* 시작 : [StageNo:..] [Credit:..원] [SB:..원] [BB:..원] [MBI:..원] [CBIR:..]`
pub const START: &str = "시작 :";
/// `* NICKNAME:[name]`
pub const IDENTITY: &str = "NICKNAME:[";
/// `* 앤티: -2,000원(262,846원)`
pub const ANTE: &str = "앤티:";
/// `* 홀 카드딜: ♥A(26) ♣8(46) [A 탑]`
pub const HOLE_CARDS: &str = "홀 카드딜:";
/// `* 커뮤니티 카드 딜: H(♥A♣8) C (♥6◆3♥4) (◆9)`
pub const COMMUNITY_CARDS: &str = "커뮤니티 카드 딜:";
/// `* 베팅: ...`
pub const BETTING: &str = "베팅:";
/// `* 반환: 4,000원`, an uncalled bet reported on its own line.
pub const UNCALLED_RETURN: &str = "반환:";
/// `* 결과: 패배 [족보:A 탑] [카드:♥A ◆9 ♣8 ♥7 ♥6] - 기권`
pub const RESULT: &str = "결과:";
/// `* 종료: WinMoney[0원] Credit[260,846원]`
pub const END: &str = "종료:";

pub const SMALL_BLIND: &str = "블라인드:SMALL";
pub const BIG_BLIND: &str = "블라인드:BIG";
pub const ENTRY_FEE: &str = "[참가비]";

pub const CHECK: &str = "체크";
pub const CALL: &str = "콜";
pub const FOLD: &str = "다이";
/// Left the room before acting, treated as a fold.
pub const LEFT_ROOM: &str = "방나감";
/// Timed out, treated as a fold.
pub const TIMEOUT: &str = "타임아웃";

/// Bets made with the slider.
pub const GENERIC_BET: &str = "[베팅]";
pub const QUARTER_POT: &str = "[쿼터]";
pub const HALF_POT: &str = "[하프]";
pub const FULL_POT: &str = "[풀]";
pub const RAISE: &str = "[레이즈]";
pub const ALL_IN: &str = "[올인]";

pub const WIN: &str = "승리";
pub const LOSS: &str = "패배";
