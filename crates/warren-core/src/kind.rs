//! Payload kind extraction.

/// Extracts a discriminator ("kind") from a pool payload.
///
/// This is the customisation point behind
/// [`for_kind`](../warren_pool/struct.Pool.html#method.for_kind): the pool
/// stays generic over payload layout and asks the payload type how to read
/// its own discriminator. A typical implementation returns a tag byte or a
/// small enum stored in the payload's first field.
///
/// Implementations must be cheap and allocation-free; the extractor runs
/// once per alive slot per dispatch.
pub trait Kinded {
    /// The discriminator type. A `u8` tag or a fieldless enum in practice.
    type Kind: Copy + PartialEq;

    /// Read this payload's discriminator.
    fn kind(&self) -> Self::Kind;
}
