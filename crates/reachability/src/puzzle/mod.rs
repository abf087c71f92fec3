//! Reference puzzle models built on the public [`StateSpace`] contract.

pub mod crossing;
pub mod frogs;

use std::fmt::{self, Display};
use std::hash::Hash;

use crate::space::StateSpace;

/// A trace shown one state per line, prefixed with the step index.
pub struct TraceListing<'a, S>(pub &'a [S]);

impl<S: Display> Display for TraceListing<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, state) in self.0.iter().enumerate() {
            writeln!(f, "{}: {}", step, state)?;
        }
        Ok(())
    }
}

pub fn render_trace<S: Display>(trace: &[S]) -> String {
    TraceListing(trace).to_string()
}

/// The tree of valid successors below the initial state, down to
/// `max_depth` transitions, indented two spaces per level.
///
/// Uses an explicit stack, so deep spaces cannot overflow the call stack.
/// States are not deduplicated: the same state appears once per path.
pub struct SuccessorTree<'a, S, C = ()> {
    pub space: &'a StateSpace<S, C>,
    pub max_depth: usize,
}

impl<S, C> Display for SuccessorTree<'_, S, C>
where
    S: Clone + Eq + Hash + Display + 'static,
    C: Ord + Clone + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.space.initial_state().clone(), 0usize)];

        while let Some((state, depth)) = stack.pop() {
            let successors = self.space.successors(&state);
            write!(
                f,
                "{}state {} has {} transitions",
                "  ".repeat(depth),
                state,
                successors.len()
            )?;
            if successors.is_empty() || depth == self.max_depth {
                writeln!(f)?;
                continue;
            }
            writeln!(f, ", leading to:")?;
            // reversed so the first successor is printed first
            for successor in successors.into_iter().rev() {
                stack.push((successor, depth + 1));
            }
        }
        Ok(())
    }
}

pub fn explain_successors<S, C>(space: &StateSpace<S, C>, max_depth: usize) -> String
where
    S: Clone + Eq + Hash + Display + 'static,
    C: Ord + Clone + 'static,
{
    SuccessorTree { space, max_depth }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::frogs::{state_space, Stones};
    use crate::space::{transition, Transition};

    #[test]
    fn test_render_trace_numbers_steps() {
        assert_eq!(render_trace(&["a", "b"]), "0: a\n1: b\n");
        assert_eq!(render_trace::<u8>(&[]), "");
    }

    #[test]
    fn test_explain_lists_successors_depth_first() {
        let space = state_space("G_B".parse::<Stones>().unwrap());

        let expected = concat!(
            "state G_B has 2 transitions, leading to:\n",
            "  state _GB has 1 transitions, leading to:\n",
            "    state BG_ has 1 transitions, leading to:\n",
            "      state B_G has 0 transitions\n",
            "  state GB_ has 1 transitions, leading to:\n",
            "    state _BG has 1 transitions, leading to:\n",
            "      state B_G has 0 transitions\n",
        );
        assert_eq!(explain_successors(&space, 5), expected);
    }

    #[test]
    fn test_explain_stops_at_depth() {
        let space = state_space("G_B".parse::<Stones>().unwrap());

        let expected = concat!(
            "state G_B has 2 transitions, leading to:\n",
            "  state _GB has 1 transitions\n",
            "  state GB_ has 1 transitions\n",
        );
        assert_eq!(explain_successors(&space, 1), expected);
        assert_eq!(
            explain_successors(&space, 0),
            "state G_B has 2 transitions\n"
        );
    }

    #[test]
    fn test_explain_counts_only_valid_successors() {
        let space = StateSpace::new(0u8, |state: &u8| -> Vec<Transition<u8>> {
            if *state == 0 {
                vec![
                    transition(|s: &mut u8| *s = 1),
                    transition(|s: &mut u8| *s = 2),
                ]
            } else {
                Vec::new()
            }
        })
        .with_invariant(|s| *s != 1);

        let expected = concat!(
            "state 0 has 1 transitions, leading to:\n",
            "  state 2 has 0 transitions\n",
        );
        assert_eq!(explain_successors(&space, 3), expected);
    }
}
