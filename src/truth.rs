//! Boolean facts resolved entirely at compile time.

use std::marker::PhantomData;

use crate::arity::each_arity;

/// A compile-time boolean fact.
///
/// Facts are carried by marker types, so conditions over sets of type
/// parameters can be assembled from other facts and read back as a plain
/// `bool` in any const context.
pub trait Truth {
  /// The boolean this fact resolves to.
  const VALUE: bool;
}

/// The fact that always holds.
pub struct True;
impl Truth for True {
  const VALUE: bool = true;
}

/// The fact that never holds.
pub struct False;
impl Truth for False {
  const VALUE: bool = false;
}

/// Disjunction over a non-empty sequence of facts.
///
/// Resolves to the first fact or-ed with the disjunction of the rest, so
/// `Or<(A, B, C)>` reads as `A || (B || C)`. Since [Or] is itself a fact,
/// disjunctions nest freely.
pub struct Or<L>(PhantomData<L>);

macro_rules! or_impls {
  (1, ($i0:tt $T0:ident)) => {
    impl<$T0: Truth> Truth for Or<($T0,)> {
      const VALUE: bool = $T0::VALUE;
    }
  };
  ($len:literal, ($i0:tt $T0:ident) $(($idx:tt $T:ident))+) => {
    impl<$T0: Truth, $($T: Truth),+> Truth for Or<($T0, $($T),+)> {
      const VALUE: bool = $T0::VALUE || <Or<($($T,)+)> as Truth>::VALUE;
    }
  };
}
each_arity!(or_impls);

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn any_true_fact_decides_the_disjunction() {
    assert!(Or::<(True,)>::VALUE);
    assert!(!Or::<(False,)>::VALUE);
    assert!(Or::<(False, True)>::VALUE);
    assert!(Or::<(False, False, True)>::VALUE);
    assert!(!Or::<(False, False, False, False)>::VALUE);
  }

  #[test]
  fn disjunctions_nest() {
    assert!(Or::<(Or<(False, False)>, True)>::VALUE);
    assert!(!Or::<(Or<(False, False)>, Or<(False,)>)>::VALUE);
  }

  #[test]
  fn resolves_in_const_context() {
    const ANY: bool = Or::<(False, True, False)>::VALUE;
    assert!(ANY);
  }

  fn gate<T: Truth>() -> bool { T::VALUE }

  #[test]
  fn usable_as_a_generic_bound() {
    assert!(gate::<Or<(False, True)>>());
    assert!(!gate::<False>());
  }
}
