use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Ordered, duplicate-free set of discovered clues, kept in an unbalanced
/// binary search tree keyed by byte-wise string comparison.
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clue` to the index. Returns `false` when nothing changed: the
    /// clue was empty or already present.
    pub fn insert(&mut self, clue: &str) -> bool {
        if clue.is_empty() {
            return false;
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(ClueNode::new(clue)));
        self.len += 1;
        tracing::debug!(clue, total = self.len, "clue indexed");
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match clue.cmp(n.clue.as_str()) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sorted walk over the clues. Restartable: every call starts over.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    pub fn traverse_in_order(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}
