use crate::node::Color;
use crate::tree::Tree;




/**
 * Post-insertion fixup. Starting from a freshly inserted red node, the
 * fixup walks the ancestor chain until the red-black invariants are
 * restored:
 *
 *  - at the root: recolor it black and stop;
 *  - directly under the root: nothing can be violated, stop;
 *  - red node under a red parent, red uncle: recolor the grandparent red
 *    and the uncle and parent black, then repeat the check at the
 *    grandparent, since the new red may conflict one level up;
 *  - red node under a red parent, black uncle: at most two rotations. A
 *    triangle configuration is first converted into a line by rotating
 *    the parent, then the line is resolved by rotating the grandparent
 *    and recoloring. This is terminal.
 *
 * The walk climbs two levels per recoloring step, so an insertion costs
 * O(log n) and performs at most one rotation-producing step.
 */
// ============================================================================
impl<T: Ord + Copy> Tree<T> {

    pub(crate) fn fixup(&mut self, mut n: usize) {
        loop {
            if self.is_root(n) {
                // The root is always black.
                self.nodes[n].color = Color::Black;
                return;
            }
            let p = match self.parent(n) {
                Some(p) => p,
                None => return,
            };
            if self.is_root(p) {
                // A red node under the black root violates nothing.
                return;
            }
            if self.is_black(n) || self.is_black(p) {
                return;
            }

            let u = match self.uncle(n) {
                Some(u) => u,
                None => {
                    debug_assert!(false, "uncle lookup on a node whose parent is the root");
                    return;
                }
            };

            if self.is_red(u) {
                // Red uncle: absorb the violation by recoloring, possibly
                // introducing a new red-red conflict at the grandparent.
                let g = match self.parent(p) {
                    Some(g) => g,
                    None => return,
                };
                self.nodes[g].color = Color::Red;
                self.nodes[u].color = Color::Black;
                self.nodes[p].color = Color::Black;
                n = g;
                continue;
            }

            // Black uncle: a triangle is first rotated into a line. The
            // parent index keeps its position, and the node to correct is
            // the one demoted underneath it.
            let n = if self.is_left_child(n) && self.is_right_child(p) {
                self.rotate_right(p);
                self.children(p).1
            } else if self.is_right_child(n) && self.is_left_child(p) {
                self.rotate_left(p);
                self.children(p).0
            } else {
                n
            };
            self.fix_line(n);
            return;
        }
    }

    /**
     * Black-uncle line configuration: rotate the grandparent and recolor.
     * The value that rises into the grandparent's position becomes black
     * and the synthesized node demoted under it becomes red, which settles
     * both the red-red conflict and the black-height of this subtree.
     */
    fn fix_line(&mut self, n: usize) {
        let p = match self.parent(n) {
            Some(p) => p,
            None => return,
        };
        let g = match self.parent(p) {
            Some(g) => g,
            None => return,
        };
        if self.is_left_child(n) && self.is_left_child(p) {
            self.rotate_right(g);
            self.nodes[g].color = Color::Black;
            let demoted = self.children(g).1;
            self.nodes[demoted].color = Color::Red;
        }
        if self.is_right_child(n) && self.is_right_child(p) {
            self.rotate_left(g);
            self.nodes[g].color = Color::Black;
            let demoted = self.children(g).0;
            self.nodes[demoted].color = Color::Red;
        }
    }
}
