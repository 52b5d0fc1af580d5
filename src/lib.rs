use std::fmt::Formatter;
use std::fmt;
use std::cell::RefCell;
use std::collections::HashSet;
use std::iter::FromIterator;
use std::rc::{Rc, Weak};

#[macro_use]
mod macros;

/// A doubly linked list of i64 values that keeps itself in ascending
/// order. Built on Rc<RefCell> links: every next link is a strong Rc
/// (the list owns its nodes through the forward chain) and every prev
/// link is a weak one, so there are no reference cycles to break.

// All next links in the nodes are strong Rcs
// All prev links in the nodes are weak Rcs
type Link = Rc<RefCell<Node>>;
type WeakLink = Weak<RefCell<Node>>;

/// A ListError is returned whenever an argument fails validation. The
/// check always runs before any re-linking, so a returned error means
/// the list was left untouched.
#[derive(Debug)]
pub enum ListError {
    InvalidArgument(String),
}

impl std::error::Error for ListError {}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidArgument(reason) => {
                write!(f, "invalid argument: {}", reason)
            }
        }
    }
}

////////////////////////////////////////////////
//  Node
////////////////////////////////////////////////

/// A node holds one value and links to at most one neighbor on each
/// side. It knows nothing about the list beyond those two links.
struct Node {
    value: i64,
    next: Option<Link>,
    prev: Option<WeakLink>,
}

impl Node {
    fn new(value: i64) -> Link {
        Rc::new(RefCell::new(Node {
            value,
            next: None,
            prev: None,
        }))
    }
}

// returns a cloned strong Rc from a Weak one
// every weak link in a live list must upgrade; a dangling one means the
// forward chain and the prev links have gone out of sync
fn upgrade_or_panic(link: &WeakLink) -> Link {
    link.upgrade()
        .expect("The weak reference points to a node that is no longer there")
}

/////////////////////////////////////////////////
//  SortedList
/////////////////////////////////////////////////

/// The list owns its nodes through the strong head -> next chain; tail
/// is a weak shortcut to the last node for O(1) appends.
pub struct SortedList {
    head: Option<Link>,
    tail: Option<WeakLink>,
    size: usize,
}

impl SortedList {
    pub fn new() -> Self {
        SortedList {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// number of values in the list
    pub fn len(&self) -> usize {
        self.size
    }

    /// is the list empty?
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate head to tail over the next links. Values are yielded by
    /// copy; RefCell does not allow handing out long-lived references
    /// into the nodes.
    pub fn iter(&self) -> Iter {
        Iter {
            cursor: self.head.clone(),
        }
    }

    /// Iterate tail to head over the prev links.
    pub fn iter_rev(&self) -> IterRev {
        IterRev {
            cursor: self.tail.as_ref().map(upgrade_or_panic),
        }
    }

    /// snapshot of the values in ascending order
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Return the value at the zero-based position `index` without
    /// removing the node. Walks forward from the head, so O(index).
    pub fn get_value(&self, index: usize) -> Result<i64, ListError> {
        if index >= self.size {
            return Err(ListError::InvalidArgument(format!(
                "index {} is out of range for a list of {} values",
                index, self.size
            )));
        }

        Ok(self
            .iter()
            .nth(index)
            .expect("size is out of sync with the node chain"))
    }

    /// Return the index of the first occurrence of `val`, scanning head
    /// to tail, or None if the value is not in the list.
    pub fn search_value(&self, val: i64) -> Option<usize> {
        self.iter().position(|v| v == val)
    }

    /// Add a new node containing `val` at the position that keeps the
    /// list in ascending order.
    pub fn insert(&mut self, val: i64) {
        let new_node = Node::new(val);

        if self.size == 0 {
            self.tail = Some(Rc::downgrade(&new_node));
            self.head = Some(new_node);
            self.size += 1;
            return;
        }

        let tail = upgrade_or_panic(
            self.tail
                .as_ref()
                .expect("a non-empty list is missing its tail"),
        );

        if tail.borrow().value < val {
            // past the tail, append in O(1)
            new_node.borrow_mut().prev = Some(Rc::downgrade(&tail));
            self.tail = Some(Rc::downgrade(&new_node));
            tail.borrow_mut().next = Some(new_node);
        } else {
            // scan for the first node whose value is not less than val;
            // the tail already failed that comparison so one must exist
            let mut spot = Rc::clone(
                self.head
                    .as_ref()
                    .expect("a non-empty list is missing its head"),
            );
            loop {
                if val <= spot.borrow().value {
                    break;
                }
                // clone the next link out before reassigning; the borrow
                // on spot has to end first
                let next = Rc::clone(
                    spot.borrow()
                        .next
                        .as_ref()
                        .expect("ran past the tail while looking for the splice point"),
                );
                spot = next;
            }

            // splice the new node in right before spot:
            //  new->prev = spot->prev
            //  new->next = spot
            //  spot->prev->next = new node (or it becomes the head)
            //  spot->prev = new node
            let prev = spot.borrow().prev.clone();
            {
                let mut new_ref = new_node.borrow_mut();
                new_ref.prev = prev.clone();
                new_ref.next = Some(Rc::clone(&spot));
            }
            spot.borrow_mut().prev = Some(Rc::downgrade(&new_node));

            match prev {
                Some(weak) => upgrade_or_panic(&weak).borrow_mut().next = Some(new_node),
                // spot was the head, the new node takes its place
                None => self.head = Some(new_node),
            }
        }

        self.size += 1;
    }

    /// Remove the first occurrence of `val`. Returns whether a node was
    /// removed.
    pub fn remove_first(&mut self, val: i64) -> bool {
        let mut found = None;

        visit_each_node!(self.head, node, {
            if node.borrow().value == val {
                found = Some(node);
                break;
            }
        });

        match found {
            Some(node) => {
                self.unlink(&node);
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `val` in one pass. Returns whether
    /// any node was removed.
    pub fn remove_all(&mut self, val: i64) -> bool {
        let mut removed = false;

        visit_each_node!(self.head, node, {
            if node.borrow().value == val {
                self.unlink(&node);
                removed = true;
            }
        });

        removed
    }

    /// Remove every node whose value has already been seen earlier in
    /// the list, keeping the first occurrence of each distinct value.
    /// The list being sorted would make duplicates adjacent, but the
    /// seen-set scan does not depend on that.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();

        visit_each_node!(self.head, node, {
            let value = node.borrow().value;
            if !seen.insert(value) {
                self.unlink(&node);
            }
        });
    }

    /// Filter the list down to its `n` highest values by dropping the
    /// leading nodes, which hold the smallest values.
    pub fn filter_n_max(&mut self, n: usize) -> Result<(), ListError> {
        if n == 0 || n > self.size {
            return Err(ListError::InvalidArgument(format!(
                "'n' should be in the range of 1 to {}",
                self.size
            )));
        }

        while self.size > n {
            let head = Rc::clone(
                self.head
                    .as_ref()
                    .expect("size is out of sync with the node chain"),
            );
            self.unlink(&head);
        }

        Ok(())
    }

    /// Filter the list to only contain odd values.
    pub fn filter_odd(&mut self) {
        visit_each_node!(self.head, node, {
            if node.borrow().value % 2 == 0 {
                self.unlink(&node);
            }
        });
    }

    /// Filter the list to only contain even values.
    pub fn filter_even(&mut self) {
        visit_each_node!(self.head, node, {
            if node.borrow().value % 2 != 0 {
                self.unlink(&node);
            }
        });
    }

    /// Splice a node out of the chain. Handles all four shapes: head,
    /// tail, middle, and the only remaining node.
    fn unlink(&mut self, node: &Link) {
        // take both links out while holding the one mutable borrow, then
        // release it before touching the neighbors
        let (prev, next) = {
            let mut node_ref = node.borrow_mut();
            (node_ref.prev.take(), node_ref.next.take())
        };

        // prev->next = node->next, or node was the head
        match &prev {
            Some(weak) => {
                let prev_strong = upgrade_or_panic(weak);
                prev_strong.borrow_mut().next = next.clone();
            }
            None => self.head = next.clone(),
        }

        // node->next->prev = node->prev, or node was the tail
        match next {
            Some(next_strong) => next_strong.borrow_mut().prev = prev,
            None => self.tail = prev,
        }

        self.size -= 1;
    }
}

impl Default for SortedList {
    fn default() -> Self {
        SortedList::new()
    }
}

impl FromIterator<i64> for SortedList {
    fn from_iter<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut list = SortedList::new();
        list.extend(values);
        list
    }
}

impl Extend<i64> for SortedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        for val in values {
            self.insert(val);
        }
    }
}

/// Renders the values head to tail as `[1, 2, 2, 5]`.
impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "]")
    }
}

/// The strong next links would drop the chain recursively, one stack
/// frame per node. Sever them iteratively instead so a long list cannot
/// overflow the stack on teardown.
impl Drop for SortedList {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            cursor = node.borrow_mut().next.take();
        }
        self.tail = None;
    }
}

/////////////////////////////////////////////////
//  Iterators
/////////////////////////////////////////////////

pub struct Iter {
    cursor: Option<Link>,
}

impl Iterator for Iter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.cursor.take()?;
        let node_ref = node.borrow();
        self.cursor = node_ref.next.clone();
        Some(node_ref.value)
    }
}

pub struct IterRev {
    cursor: Option<Link>,
}

impl Iterator for IterRev {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.cursor.take()?;
        let node_ref = node.borrow();
        self.cursor = node_ref.prev.as_ref().map(upgrade_or_panic);
        Some(node_ref.value)
    }
}
