use crate::engine::variables::VariableId;

/// Disjoint groups of variables of which exactly one is 1 in every solution, plus the variables
/// not covered by any group.
#[derive(Clone, Debug, Default)]
pub(crate) struct ExclusivePartition {
    groups: Vec<Box<[VariableId]>>,
    uncovered: Vec<VariableId>,
}

impl ExclusivePartition {
    /// Greedily takes the candidate groups in order, skipping any group which shares a variable
    /// with an earlier group or repeats a variable.
    pub(crate) fn new<'a>(
        num_variables: usize,
        candidates: impl IntoIterator<Item = &'a [VariableId]>,
    ) -> ExclusivePartition {
        let mut covered = vec![false; num_variables];
        let mut groups = vec![];

        for candidate in candidates {
            let mut seen = candidate.to_vec();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != candidate.len() || seen.iter().any(|v| covered[v.index()]) {
                continue;
            }

            for variable in candidate {
                covered[variable.index()] = true;
            }
            groups.push(candidate.into());
        }

        let uncovered = covered
            .iter()
            .enumerate()
            .filter(|(_, &is_covered)| !is_covered)
            .map(|(index, _)| VariableId::new(index as u32))
            .collect();

        ExclusivePartition { groups, uncovered }
    }

    pub(crate) fn groups(&self) -> &[Box<[VariableId]>] {
        &self.groups
    }

    pub(crate) fn uncovered(&self) -> &[VariableId] {
        &self.uncovered
    }
}

#[cfg(test)]
mod tests {
    use super::ExclusivePartition;
    use crate::engine::variables::VariableId;

    #[test]
    fn overlapping_groups_are_skipped() {
        let v = (0..5).map(VariableId::new).collect::<Vec<_>>();

        let partition = ExclusivePartition::new(5, [&v[0..2], &v[1..3], &v[3..4]]);

        assert_eq!(partition.groups().len(), 2);
        assert_eq!(partition.uncovered(), &[v[2], v[4]]);
    }
}
