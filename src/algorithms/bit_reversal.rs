//! Bit-reversal permutation
//!
//! Moves the element at index `i` to the index whose `log2(N)`-bit representation is `i`
//! reversed. The DIT butterflies expect their input in this order.

/// In-place bit-reversal permutation of `buf`.
///
/// Walks a mirror index `j` alongside `i` instead of reversing the bits of every index: adding
/// one to `i` corresponds to a reversed-carry increment of `j`, which clears the leading ones of
/// `j` from the top and then sets the first zero. Each pair is swapped once, when `i < j`.
///
/// `buf.len()` must be a power of two. A single element is left as is.
pub fn bit_reverse_permutation<E>(buf: &mut [E]) {
    let n = buf.len();
    let mut j = 0;

    for i in 0..n.saturating_sub(1) {
        if i < j {
            buf.swap(i, j);
        }

        let mut k = n >> 1;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
}
