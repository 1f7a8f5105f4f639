use smallvec::SmallVec;

use super::value::Value;

type WorkStack<'v> = SmallVec<[(&'v Value, usize); 32]>;

/// Shape summary of a value tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub nulls: usize,
    pub bools: usize,
    pub numbers: usize,
    pub strings: usize,
    pub arrays: usize,
    pub objects: usize,
    pub members: usize,
    pub string_bytes: usize,
    /// Deepest container nesting; scalars at the root count as zero.
    pub max_depth: usize,
}

impl Stats {
    /// Walks the tree without recursion, so arbitrarily deep trees are fine.
    pub fn collect(root: &Value) -> Self {
        let mut stats = Stats::default();
        let mut pending: WorkStack<'_> = SmallVec::new();
        pending.push((root, 0));
        while let Some((value, depth)) = pending.pop() {
            match value {
                Value::Null => stats.nulls += 1,
                Value::Bool(_) => stats.bools += 1,
                Value::Number(_) => stats.numbers += 1,
                Value::String(bytes) => {
                    stats.strings += 1;
                    stats.string_bytes += bytes.len();
                }
                Value::Array(items) => {
                    stats.arrays += 1;
                    stats.max_depth = stats.max_depth.max(depth + 1);
                    pending.extend(items.iter().rev().map(|item| (item, depth + 1)));
                }
                Value::Object(members) => {
                    stats.objects += 1;
                    stats.members += members.len();
                    stats.max_depth = stats.max_depth.max(depth + 1);
                    pending.extend(
                        members
                            .iter()
                            .rev()
                            .map(|member| (&member.value, depth + 1)),
                    );
                }
            }
        }
        stats
    }

    pub fn values(&self) -> usize {
        self.nulls + self.bools + self.numbers + self.strings + self.arrays + self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Member;

    #[rstest::rstest]
    fn test_scalar_root() {
        let stats = Stats::collect(&Value::Number(1.0));
        assert_eq!(stats.numbers, 1);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.values(), 1);
    }

    #[rstest::rstest]
    fn test_mixed_tree() {
        let value = Value::from(vec![
            Member::new(*b"a", Value::from(vec![Value::Null, Value::from(false)])),
            Member::new(*b"b", Value::from("xyz")),
            Member::new(*b"b", Value::from(Vec::<Member>::new())),
        ]);
        let stats = Stats::collect(&value);
        assert_eq!(stats.objects, 2);
        assert_eq!(stats.arrays, 1);
        assert_eq!(stats.members, 3);
        assert_eq!(stats.nulls, 1);
        assert_eq!(stats.bools, 1);
        assert_eq!(stats.strings, 1);
        assert_eq!(stats.string_bytes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.values(), 6);
    }

    #[rstest::rstest]
    fn test_deep_nesting() {
        let mut value = Value::Null;
        for _ in 0..100_000 {
            value = Value::from(vec![value]);
        }
        let stats = Stats::collect(&value);
        assert_eq!(stats.max_depth, 100_000);
        assert_eq!(stats.arrays, 100_000);
        assert_eq!(stats.nulls, 1);
    }
}
