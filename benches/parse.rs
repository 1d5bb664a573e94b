use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kr_hand_history::parse::{parse_action_log, parse_betting_action};

const FOLDED_PREFLOP: &str = "\
* 시작 : [StageNo:27891125] [Credit:100,000원] [SB:1,000원] [BB:1,000원] [MBI:200,000원] [CBIR:100]
* NICKNAME:[folder]
* 앤티: -1,000원(99,000원)
* 베팅: [블라인드:BIG] [금액:1,000원] [Creadit:98,000원]
* 홀 카드딜: ♣2(1) ♥7(2) [7 탑]
* 베팅: 다이 [0](98,000원) - 베팅순서: [0][1] [3085ms]
* 종료: WinMoney[0원] Credit[98,000원]
* 결과: 패배 [족보:7 탑] [카드:♣2 ♥7] - 기권";

const TO_THE_RIVER: &str = "\
* 시작 : [StageNo:27891125] [Credit:256,674원] [SB:1,000원] [BB:2,000원] [MBI:200,000원] [CBIR:100]
* NICKNAME:[caller]
* 앤티: -1,000원(255,674원)
* 홀 카드딜: ♠A(1) ◆10(2) [A 탑]
* 베팅: 콜 -1,000원(254,674원) - 베팅순서: [0][3] [2531ms]
* 커뮤니티 카드 딜: H(♠A◆10) C (♥K♣9♦2)
* 베팅: 체크 -0원(254,674원) - 베팅순서: [1][1] [1200ms]
* 커뮤니티 카드 딜: H(♠A◆10) C (♥K♣9♦2) (♠10)
* 베팅: [베팅] (5,000원) Credit(249,674원) - 베팅순서: [2][0] [900ms]
* 커뮤니티 카드 딜: H(♠A◆10) C (♥K♣9♦2) (♠10) (♥3)
* 베팅: [레이즈] (20,000원) Credit(229,674원) - 베팅순서: [3][1] [4100ms]
* 반환: 10,000원
* 종료: WinMoney[30,000원] Credit[264,674원]
* 결과: 승리 [족보:투 페어] [카드:♠A ◆10 ♥K ♣9 ♠10]";

fn bench_parse_action_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_action_log");
    for (name, log) in [("folded_preflop", FOLDED_PREFLOP), ("to_the_river", TO_THE_RIVER)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), log, |b, log| {
            b.iter(|| parse_action_log(std::hint::black_box(log)))
        });
    }
    group.finish();
}

fn bench_parse_betting_action(c: &mut Criterion) {
    let line = "* 베팅: 콜 -1,000원(254,674원) - 베팅순서: [0][3] [2531ms]";
    c.bench_function("parse_betting_action", |b| {
        b.iter(|| parse_betting_action(std::hint::black_box(line)))
    });
}

criterion_group!(benches, bench_parse_action_log, bench_parse_betting_action);
criterion_main!(benches);
