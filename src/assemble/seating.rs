use crate::hand::{Hand, PlayerRecord};
use crate::parse::{BlindKind, Street};

fn is_blind(player: &PlayerRecord, kind: BlindKind) -> bool {
    player.blind().is_some_and(|b| b.kind == kind)
}

/// Seating order for the hand, which is also the preflop acting order.
///
/// Heads up this is always small blind then big blind. Otherwise players
/// who acted preflop are sorted by their first acting position, blinds that
/// never acted follow them small blind first, and anyone who did neither is
/// put in front.
pub fn preflop_order(hand: &Hand) -> Vec<&PlayerRecord> {
    if hand.is_heads_up() {
        if let (Some(sb), Some(bb)) = (
            hand.blind_poster(BlindKind::Small),
            hand.blind_poster(BlindKind::Big),
        ) {
            if sb.nickname != bb.nickname {
                return vec![sb, bb];
            }
        }
    }

    let mut acted: Vec<&PlayerRecord> = hand
        .players
        .iter()
        .filter(|p| p.acted_on(Street::Preflop))
        .collect();
    acted.sort_by_key(|p| p.first_position(Street::Preflop));

    let idle: Vec<&PlayerRecord> = hand
        .players
        .iter()
        .filter(|p| !p.acted_on(Street::Preflop))
        .collect();

    let mut order: Vec<&PlayerRecord> = idle
        .iter()
        .copied()
        .filter(|p| p.blind().is_none())
        .collect();
    order.extend(acted);
    for kind in [BlindKind::Small, BlindKind::Big] {
        order.extend(idle.iter().copied().filter(|p| is_blind(p, kind)));
    }
    order
}

/// Acting order on a post-flop street. Only players with an action on the
/// street take part.
pub fn street_order<'a>(seats: &[&'a PlayerRecord], street: Street) -> Vec<&'a PlayerRecord> {
    let mut order: Vec<&PlayerRecord> = seats
        .iter()
        .copied()
        .filter(|p| p.acted_on(street))
        .collect();
    order.sort_by_key(|p| p.first_position(street));
    order
}

/// Index into `seats` of the button.
///
/// Heads up the small blind has the button. Otherwise the blinds act last
/// preflop, so the button is third from the end.
pub fn dealer_index(seats: &[&PlayerRecord]) -> usize {
    if seats.len() == 2 {
        if let Some(idx) = seats.iter().position(|p| is_blind(p, BlindKind::Small)) {
            return idx;
        }
    }
    seats.len().saturating_sub(3)
}
