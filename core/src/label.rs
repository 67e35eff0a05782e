use crate::Families;

/// Column of a monomer that belongs to no family.
pub const ORPHAN: i64 = -1;

/// Assign one column label per family, in order of each family's representative.
/// * Every member of a family shares its column.
/// * Monomers in no family are [`ORPHAN`]s.
/// * If the last column is smaller than the first, the last is given the next unused column.
///
/// ```
/// use rs_grm_hor::{assign_labels, join_families};
///
/// let families = join_families(&[vec![0, 2], vec![1, 4], vec![2], vec![3], vec![]]);
/// assert_eq!(assign_labels(&families), [0, 1, 0, 2, 1]);
/// ```
pub fn assign_labels(families: &Families) -> Vec<i64> {
    let mut columns = vec![ORPHAN; families.len()];
    let mut column = 0;
    for (_, family) in families.iter() {
        for member in family {
            columns[*member] = column;
        }
        column += 1;
    }
    if let (Some(first), Some(last)) = (columns.first().copied(), columns.last_mut()) {
        if *last < first {
            *last = column;
        }
    }
    columns
}
