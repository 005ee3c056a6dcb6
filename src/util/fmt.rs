use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim in place of a quoted Debug representation.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a cloneable iterator as a Debug list without collecting it.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
