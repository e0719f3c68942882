/*!
 * Checked Raw Memory Operations
 *
 * Byte-level copy, move and fill restricted at compile time to `Pod` types:
 * no padding, no invalid bit patterns, no pointers. Byte counts are checked
 * at runtime.
 *
 * Implement `Pod` for your own structs with the bytemuck derives; layouts
 * with padding are rejected by the derive:
 *
 * ```compile_fail
 * use bubbles::core::raw::{Pod, Zeroable};
 *
 * #[derive(Clone, Copy, Pod, Zeroable)]
 * #[repr(C)]
 * struct Header {
 *     tag: u8,
 *     len: u32,
 * }
 * ```
 */

use super::errors::{UtilError, UtilResult};

pub use bytemuck::{Pod, Zeroable};

/// Copy the first `count` bytes of `src` over the first `count` bytes of `dest`
///
/// Source and destination types may differ:
///
/// ```
/// use bubbles::core::raw::copy_bytes;
///
/// let src = [0x11u8, 0x22, 0x33, 0x44];
/// let mut dest = [0u32; 1];
/// copy_bytes(&mut dest, &src, 4).unwrap();
/// assert_eq!(dest[0], u32::from_ne_bytes(src));
/// ```
///
/// Types that are not [`Pod`] are rejected by the compiler:
///
/// ```compile_fail
/// use bubbles::core::raw::copy_bytes;
///
/// let src = [String::new()];
/// let mut dest = [0u8; 24];
/// copy_bytes(&mut dest, &src, 24).unwrap();
/// ```
pub fn copy_bytes<T: Pod, S: Pod>(dest: &mut [T], src: &[S], count: usize) -> UtilResult<()> {
    let src: &[u8] = bytemuck::cast_slice(src);
    let dest: &mut [u8] = bytemuck::cast_slice_mut(dest);
    let available = src.len().min(dest.len());
    if count > available {
        return Err(UtilError::ByteCountOutOfBounds {
            requested: count,
            available,
        });
    }

    dest[..count].copy_from_slice(&src[..count]);
    Ok(())
}

/// Move `count` bytes inside `buf` from `src_offset` to `dest_offset`
///
/// Offsets are in bytes and the two spans may overlap.
pub fn move_bytes<T: Pod>(
    buf: &mut [T],
    src_offset: usize,
    dest_offset: usize,
    count: usize,
) -> UtilResult<()> {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
    let len = bytes.len();
    for offset in [src_offset, dest_offset] {
        if offset.checked_add(count).map_or(true, |end| end > len) {
            return Err(UtilError::OffsetOutOfBounds { offset, count, len });
        }
    }

    bytes.copy_within(src_offset..src_offset + count, dest_offset);
    Ok(())
}

/// Set the first `count` bytes of `dest` to `byte`
pub fn fill_bytes<T: Pod>(dest: &mut [T], byte: u8, count: usize) -> UtilResult<()> {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(dest);
    if count > bytes.len() {
        return Err(UtilError::ByteCountOutOfBounds {
            requested: count,
            available: bytes.len(),
        });
    }

    bytes[..count].fill(byte);
    Ok(())
}

/// Reinterpret the bytes of `source` as a `T`
///
/// The size check happens at compile time:
///
/// ```compile_fail
/// let _: u32 = bubbles::core::raw::reinterpret_copy(7u16);
/// ```
#[inline]
pub fn reinterpret_copy<T: Pod, S: Pod>(source: S) -> T {
    bytemuck::must_cast(source)
}
