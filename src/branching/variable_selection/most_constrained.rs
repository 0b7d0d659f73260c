use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] over groups of variables of which exactly one is to be set to 1. It
/// selects the group which is still undecided (no variable at 1) and has the fewest unassigned
/// variables, and returns the first unassigned variable of that group. Ties between groups are
/// broken by the order in which the groups were provided.
///
/// This is the first-fail principle applied to exactly-one groups: the group with the fewest
/// options left is the most likely to fail, so it is decided first.
#[derive(Debug)]
pub struct MostConstrained {
    groups: Vec<Box<[VariableId]>>,
}

impl MostConstrained {
    pub fn new(groups: Vec<Box<[VariableId]>>) -> Self {
        if groups.is_empty() {
            warn!("The MostConstrained variable selector was not provided with any groups");
        }
        MostConstrained { groups }
    }

    /// The number of unassigned variables of an undecided group, or `None` if the group is
    /// decided or has no variable left.
    fn num_candidates(group: &[VariableId], context: &SelectionContext) -> Option<usize> {
        let mut num_unassigned = 0;
        for &variable in group {
            match context.value(variable) {
                Some(true) => return None,
                Some(false) => {}
                None => num_unassigned += 1,
            }
        }

        (num_unassigned > 0).then_some(num_unassigned)
    }
}

impl VariableSelector for MostConstrained {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        self.groups
            .iter()
            .filter_map(|group| {
                Self::num_candidates(group, context).map(|num_candidates| (num_candidates, group))
            })
            .min_by_key(|(num_candidates, _)| *num_candidates)
            .and_then(|(_, group)| {
                group
                    .iter()
                    .find(|variable| !context.is_fixed(**variable))
                    .copied()
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::branching::MostConstrained;
    use crate::branching::SelectionContext;
    use crate::branching::VariableSelector;
    use crate::engine::variables::Literal;
    use crate::engine::variables::VariableId;

    fn groups(sizes: &[usize]) -> Vec<Box<[VariableId]>> {
        let mut next = 0;
        sizes
            .iter()
            .map(|&size| {
                let group = (next..next + size as u32).map(VariableId::new).collect();
                next += size as u32;
                group
            })
            .collect()
    }

    #[test]
    fn group_with_fewest_candidates_is_selected() {
        let assignments = SelectionContext::create_for_testing(6);
        let mut strategy = MostConstrained::new(groups(&[3, 2, 1]));

        let selected = strategy.select_variable(&SelectionContext::new(&assignments));

        assert_eq!(selected, Some(VariableId::new(5)));
    }

    #[test]
    fn ties_go_to_the_first_group() {
        let mut assignments = SelectionContext::create_for_testing(6);
        let mut strategy = MostConstrained::new(groups(&[3, 3]));
        let _ = assignments.assign(Literal::new(VariableId::new(3), false), true);
        let _ = assignments.assign(Literal::new(VariableId::new(0), false), true);

        let selected = strategy.select_variable(&SelectionContext::new(&assignments));

        assert_eq!(selected, Some(VariableId::new(1)));
    }

    #[test]
    fn decided_groups_are_skipped() {
        let mut assignments = SelectionContext::create_for_testing(5);
        let mut strategy = MostConstrained::new(groups(&[2, 3]));
        let _ = assignments.assign(Literal::new(VariableId::new(1), true), true);

        let selected = strategy.select_variable(&SelectionContext::new(&assignments));

        assert_eq!(selected, Some(VariableId::new(2)));
    }

    #[test]
    fn nothing_is_selected_once_every_group_is_decided() {
        let mut assignments = SelectionContext::create_for_testing(4);
        let mut strategy = MostConstrained::new(groups(&[2, 2]));
        let _ = assignments.assign(Literal::new(VariableId::new(0), true), true);
        let _ = assignments.assign(Literal::new(VariableId::new(3), true), true);

        let selected = strategy.select_variable(&SelectionContext::new(&assignments));

        assert!(selected.is_none());
    }
}
