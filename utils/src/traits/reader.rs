/// parse `Self` from a bit-level reader positioned at the first bit of the structure
pub trait BitwiseReadFrom<R>: Sized {
    type Error;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error>;
}
