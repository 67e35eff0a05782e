/// Disjoint sets over `0..n` with path compression.
/// * The root of every set is its smallest element.
#[derive(Debug, Clone)]
pub struct FindUnion {
    parents: Vec<usize>,
}

impl FindUnion {
    pub fn new(n: usize) -> Self {
        FindUnion {
            parents: (0..n).collect(),
        }
    }

    /// Get the root of `x`'s set.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        // Point every node on the path directly at the root.
        let mut node = x;
        while self.parents[node] != root {
            let next = self.parents[node];
            self.parents[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`. Returns the root of the merged set.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let (root_x, root_y) = (self.find(x), self.find(y));
        let (root, child) = if root_x <= root_y {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parents[child] = root;
        root
    }
}
