//! Extract the element at a compile-time position.

use crate::arity::each_arity;

/// Sequences with an element at position `I`.
///
/// An `I` at or past the end of the sequence is rejected at compile time
/// because no impl exists for it.
pub trait Argument<const I: usize>: Sized {
  /// Type of the element at position `I`.
  type Arg;
  /// Move the element at `I` out of the sequence. The other elements are
  /// dropped.
  fn argument(self) -> Self::Arg;
  /// Borrow the element at `I`.
  fn argument_ref(&self) -> &Self::Arg;
  /// Mutably borrow the element at `I`.
  fn argument_mut(&mut self) -> &mut Self::Arg;
}

/// Move the element at position `I` out of a sequence.
pub fn argument<const I: usize, P: Argument<I>>(pack: P) -> P::Arg {
  pack.argument()
}

/// Borrow the element at position `I` of a sequence.
pub fn argument_ref<const I: usize, P: Argument<I>>(pack: &P) -> &P::Arg {
  pack.argument_ref()
}

/// Mutably borrow the element at position `I` of a sequence.
pub fn argument_mut<const I: usize, P: Argument<I>>(pack: &mut P) -> &mut P::Arg {
  pack.argument_mut()
}

macro_rules! argument_impls {
  // Peel one position off the queue per impl, keeping the full list around
  ($len:literal, $(($idx:tt $T:ident))+) => {
    argument_impls!(@imp ($(($idx $T))+) $(($idx $T))+);
  };
  (@imp ($(($idx:tt $T:ident))+)) => {};
  (@imp ($(($idx:tt $T:ident))+) ($i:tt $A:ident) $($tail:tt)*) => {
    impl<$($T),+> Argument<$i> for ($($T,)+) {
      type Arg = $A;
      fn argument(self) -> $A { self.$i }
      fn argument_ref(&self) -> &$A { &self.$i }
      fn argument_mut(&mut self) -> &mut $A { &mut self.$i }
    }
    argument_impls!(@imp ($(($idx $T))+) $($tail)*);
  };
}
each_arity!(argument_impls);
