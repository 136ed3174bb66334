//! Union-Find over host vertices

/// Disjoint-set forest tracking connected components during clustering
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<usize>,

    /// Size of each set, valid at roots (for union by size)
    size: Vec<usize>,

    /// Number of disjoint sets
    components: usize,
}

impl DisjointSets {
    /// Create `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Find the root of the set containing x, halving the path on the way
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Union the sets containing x and y.
    ///
    /// Returns `false` when they were already connected, in which case nothing
    /// changes.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Attach smaller tree under root of larger tree
        let (big, small) = if self.size[root_x] >= self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;

        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets remaining
    pub fn component_count(&self) -> usize {
        self.components
    }
}
