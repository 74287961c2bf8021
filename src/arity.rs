//! Single source of truth for the arities this crate supports. Every
//! component derives its tuple impls by handing a worker macro to
//! [each_arity], which calls it once per arity with the element count and
//! one `(index TypeParam)` pair per position. Impls for the empty tuple are
//! written by hand in the components whose contract admits it.

/// Call `$mac` once for every supported arity, enumerating the positions.
macro_rules! each_arity {
  ($mac:ident) => {
    $mac!(1, (0 T0));
    $mac!(2, (0 T0) (1 T1));
    $mac!(3, (0 T0) (1 T1) (2 T2));
    $mac!(4, (0 T0) (1 T1) (2 T2) (3 T3)); // 4
    $mac!(5, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4));
    $mac!(6, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5));
    $mac!(7, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6));
    $mac!(8, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7)); // 8
    $mac!(9, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8));
    $mac!(10, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9));
    $mac!(11, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10));
    $mac!(12, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10) (11 T11)); // 12
    $mac!(13, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10) (11 T11) (12 T12));
    $mac!(14, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10) (11 T11) (12 T12) (13 T13));
    $mac!(15, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10) (11 T11) (12 T12) (13 T13) (14 T14));
    $mac!(16, (0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8)
      (9 T9) (10 T10) (11 T11) (12 T12) (13 T13) (14 T14) (15 T15)); // 16
  };
}
pub(crate) use each_arity;
