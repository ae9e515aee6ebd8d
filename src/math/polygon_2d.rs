/// Index pairs `(i, (i + 1) % len)` traversing a vertex sequence as a closed
/// ring, wrap-around edge included.
///
/// Edge validation and segment export both define polygon edges through this
/// helper, so the closing edge of a loop means the same thing in both places.
pub fn ring_pairs(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).map(move |i| (i, (i + 1) % len))
}
