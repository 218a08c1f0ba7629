/// How a list cursor behaves at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Wrap,
    Clamp,
}

/// Move a cursor over `len` rows by `delta`. An index left past the end
/// (after rows were removed) counts from the last row.
pub fn step_index(index: usize, len: usize, delta: isize, edge: Edge) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    let current = index.min(last);

    match edge {
        Edge::Clamp => current.saturating_add_signed(delta).min(last),
        Edge::Wrap => {
            let len = len as isize;
            (current as isize + delta).rem_euclid(len) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_moves_around_both_ends() {
        assert_eq!(step_index(0, 3, -1, Edge::Wrap), 2);
        assert_eq!(step_index(2, 3, 1, Edge::Wrap), 0);
        assert_eq!(step_index(1, 3, 1, Edge::Wrap), 2);
    }

    #[test]
    fn clamping_stops_at_the_ends() {
        assert_eq!(step_index(2, 17, -5, Edge::Clamp), 0);
        assert_eq!(step_index(14, 17, 5, Edge::Clamp), 16);
    }

    #[test]
    fn empty_lists_and_stale_indices() {
        assert_eq!(step_index(4, 0, 1, Edge::Wrap), 0);
        assert_eq!(step_index(9, 3, 0, Edge::Clamp), 2);
        assert_eq!(step_index(9, 3, -1, Edge::Wrap), 1);
    }
}
