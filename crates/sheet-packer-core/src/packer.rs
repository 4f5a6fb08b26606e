use std::cmp::Ordering;

use crate::config::PackerConfig;
use crate::model::Rect;

/// Handle to a node in a packer's region tree.
///
/// Ids are issued by [`BspPacker::pack`] and stay valid until the next call
/// to `pack` on the same packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One region of the sheet. Leaves are free space; occupied nodes carry up to
/// two leftover children (`right`, `bottom`) plus an optional `extension`
/// chaining to the strip appended by a canvas growth.
#[derive(Debug, Clone)]
struct Node {
    rect: Rect,
    occupied: bool,
    right: Option<NodeId>,
    bottom: Option<NodeId>,
    extension: Option<NodeId>,
}

impl Node {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            occupied: false,
            right: None,
            bottom: None,
            extension: None,
        }
    }
}

/// One packing request: a key plus the requested content size.
///
/// `pack` records the assigned region on the item itself; query it through
/// [`Item::fit`] or resolve the content rectangle with [`BspPacker::placement`].
#[derive(Debug, Clone)]
pub struct Item<K> {
    pub key: K,
    pub w: u32,
    pub h: u32,
    fit: Option<NodeId>,
}

impl<K> Item<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self {
            key,
            w,
            h,
            fit: None,
        }
    }

    /// The region this item was assigned to, if any.
    #[inline]
    pub fn fit(&self) -> Option<NodeId> {
        self.fit
    }
}

/// Descending by longest side, then shortest side, then height, then width,
/// with the key as the final tie-break so a given multiset of requests always
/// packs the same way regardless of input order.
fn compare_requests<K: Ord>(a: &Item<K>, b: &Item<K>) -> Ordering {
    let a_max = a.w.max(a.h);
    let b_max = b.w.max(b.h);
    b_max
        .cmp(&a_max)
        .then_with(|| b.w.min(b.h).cmp(&a.w.min(a.h)))
        .then_with(|| b.h.cmp(&a.h))
        .then_with(|| b.w.cmp(&a.w))
        .then_with(|| a.key.cmp(&b.key))
}

/// Grow-to-fit binary tree packer.
///
/// The canvas starts at the size of the largest item and is extended to the
/// right or downward whenever an item does not fit into the existing free
/// regions. Placing an item marks a region occupied and splits its leftover
/// space into a `right` child (beside the item, same height band) and a
/// `bottom` child (below the item, full region width). Growth appends a
/// full-height or full-width strip to the extension chain hanging off the
/// root.
///
/// All nodes live in one arena (`Vec<Node>`) and refer to each other through
/// [`NodeId`] indices; traversal is iterative with an explicit stack.
pub struct BspPacker {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    width: u32,
    height: u32,
    padding: u32,
    aligned: bool,
}

impl BspPacker {
    pub fn new(cfg: &PackerConfig) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            width: 0,
            height: 0,
            padding: cfg.padding,
            aligned: cfg.aligned,
        }
    }

    /// Reported canvas width. Rounded up to a power of two when aligned.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Reported canvas height. Rounded up to a power of two when aligned.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn padding(&self) -> u32 {
        self.padding
    }

    #[inline]
    pub fn aligned(&self) -> bool {
        self.aligned
    }

    /// Packs `items`, sorting them in place and recording each item's
    /// assigned region. Items whose growth directions are both infeasible
    /// (cannot happen for sorted input, see `grow`) are left without a fit.
    ///
    /// Calling `pack` again on the same packer starts from a fresh canvas.
    pub fn pack<K: Ord>(&mut self, items: &mut [Item<K>]) {
        items.sort_by(compare_requests);

        self.nodes.clear();
        self.root = None;
        self.width = 0;
        self.height = 0;

        // Seed the canvas from the largest item so the root region can hold
        // it exactly; an empty input leaves a 0x0 sheet.
        let Some(first) = items.first() else {
            return;
        };
        let seed_w = self.effective(first.w);
        let seed_h = self.effective(first.h);
        let root = self.alloc(Rect::new(0, 0, seed_w, seed_h));
        self.root = Some(root);
        self.width = seed_w;
        self.height = seed_h;

        for item in items.iter_mut() {
            let w = self.effective(item.w);
            let h = self.effective(item.h);
            item.fit = match self.find_node(w, h) {
                Some(id) => Some(self.split_node(id, w, h)),
                None => self.grow(w, h),
            };
        }

        if self.aligned {
            self.width = ceil_pow2(self.width);
            self.height = ceil_pow2(self.height);
        }
    }

    /// Content rectangle for a packed item: the slot origin offset by the
    /// padding, at the item's requested size. `None` if the item was not
    /// placed by this packer.
    pub fn placement<K>(&self, item: &Item<K>) -> Option<Rect> {
        let id = item.fit?;
        let slot = self.nodes.get(id.0)?.rect;
        Some(Rect::new(
            slot.x + self.padding,
            slot.y + self.padding,
            item.w,
            item.h,
        ))
    }

    /// Requested size plus padding on both sides of the axis.
    #[inline]
    fn effective(&self, size: u32) -> u32 {
        size.saturating_add(self.padding.saturating_mul(2))
    }

    fn alloc(&mut self, rect: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(rect));
        id
    }

    /// Depth-first search for a free region that can hold `w` x `h`.
    ///
    /// Visit order matches a recursive descent: the occupied node's `right`
    /// subtree first, then `bottom`, then the `extension` chain. Regions too
    /// small for the box are not descended into; only their extension link is
    /// followed, since a later strip may still fit.
    fn find_node(&self, w: u32, h: u32) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = Vec::new();
        stack.extend(self.root);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.rect.fits(w, h) {
                if !node.occupied {
                    return Some(id);
                }
                // LIFO: pushed last is visited first
                stack.extend(node.extension);
                stack.extend(node.bottom);
                stack.extend(node.right);
            } else {
                stack.extend(node.extension);
            }
        }
        None
    }

    /// Marks `id` occupied by a `w` x `h` box anchored at its top-left and
    /// carves the leftover space: the remainder of the item's height band to
    /// the right, the full-width remainder below. Exact fits on an axis
    /// produce no child for that axis.
    fn split_node(&mut self, id: NodeId, w: u32, h: u32) -> NodeId {
        let rect = self.nodes[id.0].rect;
        self.nodes[id.0].occupied = true;
        if w < rect.w {
            let right = self.alloc(Rect::new(rect.x + w, rect.y, rect.w - w, h));
            self.nodes[id.0].right = Some(right);
        }
        if h < rect.h {
            let bottom = self.alloc(Rect::new(rect.x, rect.y + h, rect.w, rect.h - h));
            self.nodes[id.0].bottom = Some(bottom);
        }
        id
    }

    /// Extends the canvas so a `w` x `h` box fits, then places the box in the
    /// new strip. Growing right requires `h <= height` and growing down
    /// requires `w <= width`, so the canvas stays rectangular.
    ///
    /// Direction choice keeps the canvas close to square; under `aligned`,
    /// the direction with the smaller power-of-two canvas area wins first.
    /// For sorted input at least one direction is always feasible: no later
    /// item is taller or wider than the seed.
    fn grow(&mut self, w: u32, h: u32) -> Option<NodeId> {
        let can_grow_right = h <= self.height;
        let can_grow_bottom = w <= self.width;

        if self.aligned && can_grow_right && can_grow_bottom {
            let grown_right = ceil_pow2(self.width.saturating_add(w)) as u64
                * ceil_pow2(self.height) as u64;
            let grown_bottom = ceil_pow2(self.width) as u64
                * ceil_pow2(self.height.saturating_add(h)) as u64;
            if grown_right < grown_bottom {
                return self.grow_right(w, h);
            }
            if grown_bottom < grown_right {
                return self.grow_bottom(w, h);
            }
            // equal rounded areas: fall through to the squareness rules
        }

        let should_grow_right =
            can_grow_right && self.width as u64 + w as u64 <= self.height as u64;
        let should_grow_bottom =
            can_grow_bottom && self.height as u64 + h as u64 <= self.width as u64;

        if should_grow_right {
            self.grow_right(w, h)
        } else if should_grow_bottom {
            self.grow_bottom(w, h)
        } else if can_grow_right {
            self.grow_right(w, h)
        } else if can_grow_bottom {
            self.grow_bottom(w, h)
        } else {
            None
        }
    }

    fn grow_right(&mut self, w: u32, h: u32) -> Option<NodeId> {
        let strip = self.alloc(Rect::new(self.width, 0, w, self.height));
        self.append_extension(strip);
        self.width = self.width.saturating_add(w);
        let id = self.find_node(w, h)?;
        Some(self.split_node(id, w, h))
    }

    fn grow_bottom(&mut self, w: u32, h: u32) -> Option<NodeId> {
        let strip = self.alloc(Rect::new(0, self.height, self.width, h));
        self.append_extension(strip);
        self.height = self.height.saturating_add(h);
        let id = self.find_node(w, h)?;
        Some(self.split_node(id, w, h))
    }

    /// Walks the extension chain from the root and hangs `strip` off its tail.
    fn append_extension(&mut self, strip: NodeId) {
        let Some(mut cur) = self.root else {
            return;
        };
        while let Some(next) = self.nodes[cur.0].extension {
            cur = next;
        }
        self.nodes[cur.0].extension = Some(strip);
    }
}

/// Smallest power of two >= `v`. Zero stays zero: an empty canvas has
/// nothing to align.
fn ceil_pow2(mut v: u32) -> u32 {
    if v == 0 {
        return 0;
    }
    v -= 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}
