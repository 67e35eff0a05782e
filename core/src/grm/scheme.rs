use std::collections::HashMap;

use crate::{Families, GrmConfig, Monomer};

/// One monomer placed in a HOR scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeCell {
    pub column: i64,
    pub row: usize,
    /// Whether another monomer shares this column.
    pub repeated: bool,
}

/// Layout of monomers into rows of columns, one row per HOR copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorScheme {
    /// Cell of each monomer, in monomer order.
    pub cells: Vec<SchemeCell>,
    /// Position of the first monomer of each row.
    pub row_starts: Vec<usize>,
    /// `(column, row)` of the first monomer of each new multi-member family.
    pub mer_marks: Vec<(i64, usize)>,
    /// Index of each monomer preceded by a gap.
    pub block_marks: Vec<usize>,
}

impl HorScheme {
    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.row_starts.len()
    }
}

/// Lay out labelled [`Monomer`]s as a HOR scheme.
/// * A new row starts whenever a column doesn't increase.
///
/// ```
/// use rs_grm_hor::{hor_scheme, join_families, assign_labels, GrmConfig, Monomer};
///
/// let monomers: Vec<Monomer> = (0..6)
///     .map(|i| Monomer::from_fragment(i * 171, b"ACGT"))
///     .collect();
/// let families = join_families(&[vec![0, 3], vec![1, 4], vec![2, 5], vec![], vec![], vec![]]);
/// let columns = assign_labels(&families);
///
/// let scheme = hor_scheme(&monomers, &families, &columns, &GrmConfig::default());
/// assert_eq!(scheme.n_rows(), 2);
/// assert_eq!(scheme.row_starts, [0, 513]);
/// ```
pub fn hor_scheme(
    monomers: &[Monomer],
    families: &Families,
    columns: &[i64],
    config: &GrmConfig,
) -> HorScheme {
    let mut column_counts: HashMap<i64, usize> = HashMap::new();
    for column in columns {
        *column_counts.entry(*column).or_default() += 1;
    }

    let mut scheme = HorScheme {
        row_starts: monomers.first().map(|mon| mon.pos).into_iter().collect(),
        ..Default::default()
    };
    let mut row = 0;
    let mut last_column = -1;
    let mut max_marked_column = -1;
    for (i, (mon, column)) in monomers.iter().zip(columns.iter().copied()).enumerate() {
        if column <= last_column {
            row += 1;
            scheme.row_starts.push(mon.pos);
        }
        if column > max_marked_column && families.family(i).len() > 1 {
            max_marked_column = column;
            scheme.mer_marks.push((column, row));
        }
        if mon.dst > config.min_gap {
            scheme.block_marks.push(i);
        }
        last_column = column;
        scheme.cells.push(SchemeCell {
            column,
            row,
            repeated: column_counts.get(&column).is_some_and(|count| *count > 1),
        });
    }
    scheme
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::hor_scheme;
    use crate::{assign_labels, join_families, GrmConfig, Monomer};

    fn mons(positions: &[usize]) -> Vec<Monomer> {
        let mut mons = positions
            .iter()
            .map(|pos| Monomer::from_fragment(*pos, b"ACGT"))
            .collect_vec();
        crate::set_distances(&mut mons);
        mons
    }

    #[test]
    fn test_scheme_rows() {
        // 3-mer HOR with a 2-monomer partial copy after a gap.
        let monomers = mons(&[0, 171, 342, 513, 684, 855, 5000, 5171]);
        let families = join_families(&[
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
        ]);
        let columns = assign_labels(&families);
        assert_eq!(columns, [0, 1, 2, 0, 1, 2, 0, 1]);

        let scheme = hor_scheme(&monomers, &families, &columns, &GrmConfig::default());
        assert_eq!(
            scheme.cells.iter().map(|c| c.row).collect_vec(),
            [0, 0, 0, 1, 1, 1, 2, 2]
        );
        assert_eq!(scheme.row_starts, [0, 513, 5000]);
        assert_eq!(scheme.mer_marks, [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(scheme.block_marks, [6]);
        assert!(scheme.cells.iter().all(|c| c.repeated));
    }

    #[test]
    fn test_scheme_singletons_not_repeated() {
        let monomers = mons(&[0, 171, 342, 513]);
        let families = join_families(&[vec![0, 2], vec![1], vec![], vec![]]);
        let columns = assign_labels(&families);
        // Last orphan is moved past the first column.
        assert_eq!(columns, [0, 1, 0, 2]);

        let scheme = hor_scheme(&monomers, &families, &columns, &GrmConfig::default());
        assert_eq!(
            scheme
                .cells
                .iter()
                .map(|c| (c.column, c.row, c.repeated))
                .collect_vec(),
            [(0, 0, true), (1, 0, false), (0, 1, true), (2, 1, false)]
        );
        // Single member family isn't marked.
        assert_eq!(scheme.mer_marks, [(0, 0)]);
    }

    #[test]
    fn test_scheme_leading_orphan() {
        let monomers = mons(&[0, 171, 342]);
        let families = join_families(&[vec![], vec![1, 2], vec![]]);
        let columns = assign_labels(&families);
        let scheme = hor_scheme(&monomers, &families, &columns, &GrmConfig::default());
        // A leading orphan opens a second row immediately.
        assert_eq!(scheme.row_starts, [0, 0, 342]);
        assert_eq!(
            scheme.cells.iter().map(|c| c.row).collect_vec(),
            [1, 1, 2]
        );
    }

    #[test]
    fn test_scheme_empty() {
        let scheme = hor_scheme(&[], &join_families(&[]), &[], &GrmConfig::default());
        assert_eq!(scheme.n_rows(), 0);
        assert!(scheme.cells.is_empty());
    }
}
