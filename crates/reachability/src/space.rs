//! State space configuration.
//!
//! A [`StateSpace`] bundles the initial state with the collaborators the
//! search needs: a transition generator, an invariant over states and,
//! optionally, a cost function. Building one never runs a search; see
//! `solver.rs` for `check` and friends.

use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

/// A single atomic move, applied in place to a copy of the current state.
pub type Transition<S> = Box<dyn Fn(&mut S)>;

/// Transitions available from one state. Most states only have a handful.
pub type Transitions<S> = SmallVec<[Transition<S>; 4]>;

type Generator<S> = Box<dyn Fn(&S) -> Transitions<S>>;
type Invariant<S> = Box<dyn Fn(&S) -> bool>;
type CostFn<S, C> = Box<dyn Fn(&S, &C) -> C>;

/// Box a closure as a [`Transition`].
pub fn transition<S>(apply: impl Fn(&mut S) + 'static) -> Transition<S> {
    Box::new(apply)
}

struct Costing<S, C> {
    initial_cost: C,
    cost_fn: CostFn<S, C>,
}

/// Immutable description of an implicit graph of states.
///
/// `C` is the cost type of the uniform-cost mode; uninformed spaces use `()`.
pub struct StateSpace<S, C = ()> {
    initial_state: S,
    generator: Generator<S>,
    invariant: Invariant<S>,
    costing: Option<Costing<S, C>>,
}

fn boxed_generator<S, G, I>(successors: G) -> Generator<S>
where
    S: 'static,
    G: Fn(&S) -> I + 'static,
    I: IntoIterator<Item = Transition<S>> + 'static,
{
    Box::new(move |state| successors(state).into_iter().collect())
}

impl<S> StateSpace<S, ()>
where
    S: Clone + Eq + Hash + 'static,
{
    /// Uninformed space searched breadth-first or depth-first.
    /// Every state is valid until [`StateSpace::with_invariant`] says otherwise.
    pub fn new<G, I>(initial_state: S, successors: G) -> Self
    where
        G: Fn(&S) -> I + 'static,
        I: IntoIterator<Item = Transition<S>> + 'static,
    {
        Self {
            initial_state,
            generator: boxed_generator(successors),
            invariant: Box::new(|_| true),
            costing: None,
        }
    }
}

impl<S, C> StateSpace<S, C>
where
    S: Clone + Eq + Hash + 'static,
    C: Ord + Clone + 'static,
{
    /// Space searched least-cost-first.
    ///
    /// A successor's cost is `cost_fn(successor, parent_cost)`. The returned
    /// trace is only guaranteed cheapest when costs never decrease along a
    /// path, i.e. `cost_fn(s, c) >= c` for every state and cost.
    pub fn with_cost<G, I, F>(initial_state: S, initial_cost: C, successors: G, cost_fn: F) -> Self
    where
        G: Fn(&S) -> I + 'static,
        I: IntoIterator<Item = Transition<S>> + 'static,
        F: Fn(&S, &C) -> C + 'static,
    {
        Self {
            initial_state,
            generator: boxed_generator(successors),
            invariant: Box::new(|_| true),
            costing: Some(Costing {
                initial_cost,
                cost_fn: Box::new(cost_fn),
            }),
        }
    }

    /// Replace the invariant. States it rejects, the initial state included,
    /// never enter the frontier.
    pub fn with_invariant(mut self, invariant: impl Fn(&S) -> bool + 'static) -> Self {
        self.invariant = Box::new(invariant);
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn initial_cost(&self) -> Option<&C> {
        self.costing.as_ref().map(|costing| &costing.initial_cost)
    }

    pub fn is_cost_enabled(&self) -> bool {
        self.costing.is_some()
    }

    pub fn transitions(&self, state: &S) -> Transitions<S> {
        (self.generator)(state)
    }

    pub fn is_valid(&self, state: &S) -> bool {
        (self.invariant)(state)
    }

    /// Cost of reaching `successor` from a parent of cost `parent_cost`.
    /// `None` in uninformed spaces.
    pub fn cost_of(&self, successor: &S, parent_cost: Option<&C>) -> Option<C> {
        let costing = self.costing.as_ref()?;
        let parent_cost = parent_cost.unwrap_or(&costing.initial_cost);
        Some((costing.cost_fn)(successor, parent_cost))
    }

    /// Valid successors of `state`, in generator order.
    pub fn successors(&self, state: &S) -> Vec<S> {
        self.transitions(state)
            .iter()
            .map(|apply| {
                let mut successor = state.clone();
                apply(&mut successor);
                successor
            })
            .filter(|successor| self.is_valid(successor))
            .collect()
    }
}

impl<S: fmt::Debug, C: fmt::Debug> fmt::Debug for StateSpace<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSpace")
            .field("initial_state", &self.initial_state)
            .field(
                "initial_cost",
                &self.costing.as_ref().map(|costing| &costing.initial_cost),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_moves(value: &i32) -> Vec<Transition<i32>> {
        if *value >= 3 {
            return Vec::new();
        }
        vec![
            transition(|v: &mut i32| *v += 1),
            transition(|v: &mut i32| *v += 2),
        ]
    }

    #[test]
    fn test_construction_stores_configuration_only() {
        let space = StateSpace::new(0, counter_moves);

        assert_eq!(*space.initial_state(), 0);
        assert!(!space.is_cost_enabled());
        assert_eq!(space.initial_cost(), None);
        assert_eq!(space.cost_of(&1, None), None);
    }

    #[test]
    fn test_successors_apply_transitions_in_order() {
        let space = StateSpace::new(0, counter_moves);

        assert_eq!(space.successors(&0), vec![1, 2]);
        assert_eq!(space.successors(&2), vec![3, 4]);
        assert!(space.successors(&3).is_empty());
    }

    #[test]
    fn test_invariant_filters_successors() {
        let space = StateSpace::new(0, counter_moves).with_invariant(|v| v % 2 == 0);

        assert_eq!(space.successors(&0), vec![2]);
        assert!(space.is_valid(&4));
        assert!(!space.is_valid(&3));
    }

    #[test]
    fn test_cost_function_receives_parent_cost() {
        let space = StateSpace::with_cost(0, 10u32, counter_moves, |state, cost| {
            cost + *state as u32
        });

        assert!(space.is_cost_enabled());
        assert_eq!(space.initial_cost(), Some(&10));
        assert_eq!(space.cost_of(&2, None), Some(12));
        assert_eq!(space.cost_of(&2, Some(&5)), Some(7));
    }
}
