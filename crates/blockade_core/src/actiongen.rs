use crate::{adjacency::AdjacencyTable, bitboard::Bitboard, state::GameState, types::*};

/// Cells `player` may move its pawn to.
#[inline]
pub fn legal_destinations(state: &GameState, adj: &AdjacencyTable, player: Player) -> Bitboard {
    adj.mask(state.pawn(player)) & state.free_cells()
}

/// Mobility: number of legal move destinations for `player`.
#[inline]
pub fn count_legal_moves(state: &GameState, adj: &AdjacencyTable, player: Player) -> u32 {
    legal_destinations(state, adj, player).popcount()
}

/// Generate the search's actions, returning a freshly allocated vector.
pub fn generate_actions(state: &GameState, adj: &AdjacencyTable, player: Player) -> Vec<Action> {
    let mut out = Vec::with_capacity(64);
    generate_actions_into(state, adj, player, &mut out);
    out
}

/// Generate the search's actions into the provided buffer.
///
/// Removals are restricted to free cells next to the opponent, which is almost
/// never worse than removing elsewhere. When none of those is free after the
/// move, every free cell on the board is offered instead, so the result is
/// empty only when `player` cannot move at all.
pub fn generate_actions_into(
    state: &GameState,
    adj: &AdjacencyTable,
    player: Player,
    out: &mut Vec<Action>,
) {
    out.clear();
    let opponent = state.pawn(player.other());

    for dest in legal_destinations(state, adj, player) {
        let after = state.with_pawn_at(player, dest);
        let free = after.free_cells();

        let mut removals = adj.mask(opponent) & free;
        if removals.is_empty() {
            removals = free;
        }
        for remove in removals {
            out.push(Action::new(dest, remove));
        }
    }
}

/// Every legal action, with no removal heuristic.
pub fn all_legal_actions(state: &GameState, adj: &AdjacencyTable, player: Player) -> Vec<Action> {
    let mut out = Vec::new();
    for dest in legal_destinations(state, adj, player) {
        let after = state.with_pawn_at(player, dest);
        for remove in after.free_cells() {
            out.push(Action::new(dest, remove));
        }
    }
    out
}

/// Check a single action against the rules.
pub fn is_legal_action(
    state: &GameState,
    adj: &AdjacencyTable,
    player: Player,
    action: Action,
) -> bool {
    if (action.move_to as usize) >= CELL_COUNT || (action.remove as usize) >= CELL_COUNT {
        return false;
    }
    if !legal_destinations(state, adj, player).contains(action.move_to) {
        return false;
    }
    let after = state.with_pawn_at(player, action.move_to);
    after.free_cells().contains(action.remove)
}

#[cfg(test)]
#[path = "actiongen_tests.rs"]
mod actiongen_tests;
