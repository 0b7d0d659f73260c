use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when either of its two parts triggers. Both parts
/// are queried at every node so budgets keep counting.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        let t1 = self.t1.should_stop();
        let t2 = self.t2.should_stop();
        t1 || t2
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Combinator;
    use crate::engine::termination::Indefinite;
    use crate::engine::termination::NodeBudget;
    use crate::engine::termination::TerminationCondition;
    use crate::engine::termination::TimeBudget;

    #[test]
    fn node_budget_allows_exactly_the_budgeted_nodes() {
        let mut budget = NodeBudget::new(2);

        assert!(!budget.should_stop());
        assert!(!budget.should_stop());
        assert!(budget.should_stop());
        assert!(budget.should_stop());
    }

    #[test]
    fn absent_condition_never_triggers() {
        let mut condition: Option<NodeBudget> = None;

        assert!(!condition.should_stop());
    }

    #[test]
    fn combinator_triggers_when_either_part_triggers() {
        let mut condition = Combinator::new(Indefinite, Some(NodeBudget::new(1)));

        assert!(!condition.should_stop());
        assert!(condition.should_stop());
    }

    #[test]
    fn zero_time_budget_triggers_immediately() {
        let mut condition = Combinator::new(
            TimeBudget::starting_now(Duration::ZERO),
            Indefinite,
        );

        assert!(condition.should_stop());
    }
}
