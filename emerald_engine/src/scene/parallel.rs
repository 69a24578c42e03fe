//! Per-entity map + sum over a registry's mutable values.
//!
//! Each closure call owns exactly one entity; results are combined with an
//! associative `Add`, so sequential and rayon execution give the same totals.

use std::ops::Add;

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_sum<'a, E, I, R, F>(entities: I, f: F) -> R
where
    E: Send + 'a,
    I: Iterator<Item = &'a mut E>,
    R: Default + Add<Output = R> + Send,
    F: Fn(&mut E) -> R + Sync + Send,
{
    entities.map(|entity| f(entity)).fold(R::default(), |acc, r| acc + r)
}

#[cfg(feature = "parallel")]
pub(crate) fn map_sum<'a, E, I, R, F>(entities: I, f: F) -> R
where
    E: Send + 'a,
    I: Iterator<Item = &'a mut E>,
    R: Default + Add<Output = R> + Send,
    F: Fn(&mut E) -> R + Sync + Send,
{
    use rayon::prelude::*;

    let entities: Vec<&'a mut E> = entities.collect();
    entities
        .into_par_iter()
        .map(|entity| f(entity))
        .reduce(R::default, |a, b| a + b)
}
