use crate::{
    actiongen::generate_actions_into, adjacency::AdjacencyTable, state::GameState, types::*,
};

/// Leaf count of the search's action tree, `depth` plies deep, starting with
/// `player` to move. A position where the side to move is stuck adds no leaves.
pub fn perft(state: &GameState, adj: &AdjacencyTable, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(
        state: &GameState,
        adj: &AdjacencyTable,
        player: Player,
        depth: u8,
        layers: &mut [Vec<Action>],
    ) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        generate_actions_into(state, adj, player, buf);

        let mut nodes = 0u64;
        for action in buf.iter().copied() {
            let child = state.apply(player, action);
            nodes += inner(&child, adj, player.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, adj, player, depth, &mut layers[..])
}
