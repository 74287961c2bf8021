//! Route a runtime index to the matching element of a tuple.

use std::error::Error;
use std::fmt;

use crate::argument::Argument;
use crate::arity::each_arity;
use crate::visit::Visit;

/// Returned by [Apply::try_apply] when the index has no matching element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
  /// The requested position
  pub index: usize,
  /// Number of elements in the sequence
  pub len: usize,
}
impl fmt::Display for OutOfRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Self { index, len } = self;
    write!(f, "Index {index} is out of range for a sequence of {len} elements")
  }
}
impl Error for OutOfRange {}

/// Sequences that can route a runtime index to the element at that
/// position and visit it with `F`.
///
/// Every element must produce the same output type `R`, since the position
/// is only known at runtime. The visitor runs for exactly one element.
pub trait Apply<F, R>: Sized {
  /// Number of elements in the sequence
  const LEN: usize;
  /// Visit the element at `index`, consuming the sequence. Fails if
  /// `index` is not below [Apply::LEN]; the sequence is consumed either
  /// way.
  fn try_apply(self, index: usize, f: &mut F) -> Result<R, OutOfRange>;
  /// Like [Apply::try_apply], but panics on an out of range index.
  fn apply(self, index: usize, f: &mut F) -> R {
    match self.try_apply(index, f) {
      Ok(out) => out,
      Err(err) => panic!("{err}"),
    }
  }
}

macro_rules! apply_impls {
  ($len:literal, $(($idx:tt $T:ident))+) => {
    impl<R, F: $(Visit<$T, Out = R> +)+, $($T),+> Apply<F, R> for ($($T,)+) {
      const LEN: usize = $len;
      fn try_apply(self, index: usize, f: &mut F) -> Result<R, OutOfRange> {
        // One monomorphized thunk per position, so picking one is an
        // indexed load rather than a comparison chain
        let thunks: [fn(&mut F, Self) -> R; $len] = [$(
          |f, pack| <F as Visit<$T>>::visit(f, <Self as Argument<$idx>>::argument(pack))
        ),+];
        match thunks.get(index) {
          Some(thunk) => Ok(thunk(f, self)),
          None => Err(OutOfRange { index, len: $len }),
        }
      }
    }
  };
}
each_arity!(apply_impls);

#[cfg(test)]
mod test {
  use std::fmt::Display;

  use itertools::Itertools;

  use super::*;

  /// Renders whichever element it is pointed at
  struct Stringify;
  impl<T: Display> Visit<T> for Stringify {
    type Out = String;
    fn visit(&mut self, value: T) -> String { value.to_string() }
  }

  #[test]
  fn routes_the_index_to_the_matching_element() {
    assert_eq!((10, "x", 2.5).apply(0, &mut Stringify), "10");
    assert_eq!((10, "x", 2.5).apply(1, &mut Stringify), "x");
    assert_eq!((10, "x", 2.5).apply(2, &mut Stringify), "2.5");
  }

  fn digits<P: Apply<Stringify, String> + Clone>(pack: P) -> Vec<String> {
    (0..P::LEN).map(|i| pack.clone().try_apply(i, &mut Stringify).unwrap()).collect_vec()
  }

  #[test]
  fn every_position_of_every_width_is_reachable() {
    assert_eq!(digits((1,)), ["1"]);
    assert_eq!(digits((1, 2u8)), ["1", "2"]);
    assert_eq!(digits((1, 2u8, 3i64)), ["1", "2", "3"]);
    assert_eq!(digits((1, 2u8, 3i64, '4')), ["1", "2", "3", "4"]);
    assert_eq!(digits((1, 2u8, 3i64, '4', "5")), ["1", "2", "3", "4", "5"]);
    assert_eq!(digits((1, 2u8, 3i64, '4', "5", 6.0)), ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(digits((1, 2u8, 3i64, '4', "5", 6.0, 7u16)), [
      "1", "2", "3", "4", "5", "6", "7"
    ]);
    assert_eq!(digits((1, 2u8, 3i64, '4', "5", 6.0, 7u16, 8.5f32)), [
      "1", "2", "3", "4", "5", "6", "7", "8.5"
    ]);
  }

  #[test]
  fn supports_the_widest_sequence() {
    let seq = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
    let expected = (0..16).map(|i| i.to_string()).collect_vec();
    assert_eq!(digits(seq), expected);
  }

  #[test]
  fn visited_element_is_moved_in() {
    struct TakeLen;
    impl Visit<String> for TakeLen {
      type Out = usize;
      fn visit(&mut self, value: String) -> usize { value.len() }
    }
    impl Visit<u8> for TakeLen {
      type Out = usize;
      fn visit(&mut self, value: u8) -> usize { value as usize }
    }
    let seq = ("owned".to_string(), 9u8);
    assert_eq!(seq.apply(0, &mut TakeLen), 5);
  }

  #[test]
  fn reports_an_index_past_the_end() {
    let err = (1, 2).try_apply(9, &mut Stringify).unwrap_err();
    assert_eq!(err, OutOfRange { index: 9, len: 2 });
    assert_eq!(err.to_string(), "Index 9 is out of range for a sequence of 2 elements");
  }

  #[test]
  #[should_panic(expected = "out of range")]
  fn infallible_form_panics_past_the_end() {
    (1, 2).apply(9, &mut Stringify);
  }

  #[test]
  fn width_is_exposed_on_the_trait() {
    assert_eq!(<(u8,) as Apply<Stringify, String>>::LEN, 1);
    assert_eq!(<(u8, u8, u8) as Apply<Stringify, String>>::LEN, 3);
  }
}
