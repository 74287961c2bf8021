//! Visit every element of a tuple in declaration order.

use paste::paste;
use trait_set::trait_set;

use crate::arity::each_arity;

/// One step of a traversal, acting on a single element of type `T`.
///
/// A visitor for a heterogeneous sequence implements this once per element
/// type, typically through one bounded generic impl such as
/// `impl<T: Display> Visit<T> for Printer`. Closures over a single element
/// type can be adapted with [Uniform] instead.
pub trait Visit<T> {
  /// What the visitor produces for this element. Traversals run for their
  /// side effects and discard it; [crate::Apply] requires it to be the same
  /// for every element.
  type Out;
  /// Act on one element.
  fn visit(&mut self, value: T) -> Self::Out;
}

trait_set! {
  /// Bound of visitors that can visit `T` through a mutable borrow of any
  /// lifetime.
  pub trait VisitMut<T> = for<'a> Visit<&'a mut T>;
}

/// Adapter that turns any compatible callable into a visitor.
///
/// The wrapper exists so that downstream crates can write their own
/// element-type-driven [Visit] impls without colliding with a blanket impl
/// for closures.
///
/// ```ignore
/// (1, 2, 3).for_each(&mut Uniform(|x: &mut i32| *x += 1));
/// ```
pub struct Uniform<F>(pub F);

impl<F: FnMut(T) -> O, T, O> Visit<T> for Uniform<F> {
  type Out = O;
  fn visit(&mut self, value: T) -> O { (self.0)(value) }
}

/// Sequences whose elements can each be visited in place by `F`.
pub trait ForEach<F> {
  /// Visit a mutable borrow of every element, first to last.
  fn for_each(&mut self, f: &mut F);
}

/// Sequences whose elements can each be moved into `F`.
pub trait ForEachArg<F>: Sized {
  /// Consume the sequence, feeding every element to `f`, first to last.
  fn for_each_arg(self, f: &mut F);
}

impl<F> ForEach<F> for () {
  fn for_each(&mut self, _: &mut F) {}
}
impl<F> ForEachArg<F> for () {
  fn for_each_arg(self, _: &mut F) {}
}

macro_rules! for_each_impls {
  ($len:literal, $(($idx:tt $T:ident))+) => {
    impl<F: $(VisitMut<$T> +)+, $($T),+> ForEach<F> for ($($T,)+) {
      fn for_each(&mut self, f: &mut F) {
        $( <F as Visit<&mut $T>>::visit(f, &mut self.$idx); )+
      }
    }
    paste! {
      impl<F: $(Visit<$T> +)+, $($T),+> ForEachArg<F> for ($($T,)+) {
        fn for_each_arg(self, f: &mut F) {
          let ($([<arg $idx>],)+) = self;
          $( <F as Visit<$T>>::visit(f, [<arg $idx>]); )+
        }
      }
    }
  };
}
each_arity!(for_each_impls);
