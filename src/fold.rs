//! Reduce a tuple to a single value with a left fold.

use paste::paste;
use trait_set::trait_set;

use crate::arity::each_arity;
use crate::visit::Uniform;

/// One step of a left fold, combining the accumulator with one element.
///
/// The accumulator type `R` is fixed for the whole fold, so a combinator
/// for a heterogeneous sequence implements this once per element type while
/// always returning `R`.
pub trait Fold<R, T> {
  /// Combine the accumulator so far with one element.
  fn fold(&mut self, acc: R, value: T) -> R;
}

trait_set! {
  /// Bound of combinators that can fold in `T` through a shared borrow of
  /// any lifetime.
  pub trait FoldRef<R, T> = for<'a> Fold<R, &'a T>;
}

impl<F: FnMut(R, T) -> R, R, T> Fold<R, T> for Uniform<F> {
  fn fold(&mut self, acc: R, value: T) -> R { (self.0)(acc, value) }
}

/// Sequences that can be folded into an `R` by borrowing every element.
pub trait Accumulate<R, F> {
  /// Fold every element into `init`, first to last. An empty sequence
  /// returns `init` untouched and never calls `f`.
  fn accumulate(&self, f: &mut F, init: R) -> R;
}

/// Sequences that can be folded into an `R` by consuming every element.
/// Unlike [Accumulate], this requires at least one element.
pub trait AccumulateArg<R, F>: Sized {
  /// Consume the sequence, folding every element into `init`, first to
  /// last.
  fn accumulate_arg(self, f: &mut F, init: R) -> R;
}

impl<R, F> Accumulate<R, F> for () {
  fn accumulate(&self, _: &mut F, init: R) -> R { init }
}

macro_rules! accumulate_impls {
  ($len:literal, $(($idx:tt $T:ident))+) => {
    impl<R, F: $(FoldRef<R, $T> +)+, $($T),+> Accumulate<R, F> for ($($T,)+) {
      fn accumulate(&self, f: &mut F, init: R) -> R {
        let acc = init;
        $( let acc = <F as Fold<R, &$T>>::fold(f, acc, &self.$idx); )+
        acc
      }
    }
    paste! {
      impl<R, F: $(Fold<R, $T> +)+, $($T),+> AccumulateArg<R, F>
        for ($($T,)+)
      {
        fn accumulate_arg(self, f: &mut F, init: R) -> R {
          let ($([<arg $idx>],)+) = self;
          let acc = init;
          $( let acc = <F as Fold<R, $T>>::fold(f, acc, [<arg $idx>]); )+
          acc
        }
      }
    }
  };
}
each_arity!(accumulate_impls);
